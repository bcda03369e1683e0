//! Application state for the web layer.

use std::sync::Arc;

use crate::service::FlightService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The flight search core
    pub flights: Arc<FlightService>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(flights: FlightService) -> Self {
        Self {
            flights: Arc::new(flights),
        }
    }
}
