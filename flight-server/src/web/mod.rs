//! Web layer for the flight search server.
//!
//! Provides HTTP endpoints for searching flights, expanding offer
//! details, and looking up airports.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
