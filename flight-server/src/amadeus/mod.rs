//! Amadeus provider client.
//!
//! The provider exposes exactly two calls this core needs: a bulk
//! flight-offer search and a bulk location lookup, both behind an OAuth2
//! client-credentials token exchange. There is **no** single-offer detail
//! endpoint; detail requests are served from the offer cache instead.

mod client;
mod error;
mod gateway;
mod types;

pub use client::{AmadeusClient, AmadeusConfig};
pub use error::AmadeusError;
pub use gateway::ProviderGateway;
pub use types::{OfferBatch, RawOffer, SearchQuery};
