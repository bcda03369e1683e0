//! The provider gateway seam.
//!
//! Orchestration code talks to the provider through this trait so that the
//! name resolver and the search/detail flows can be exercised against a
//! scripted gateway in tests.

use async_trait::async_trait;
use serde_json::Value;

use super::client::AmadeusClient;
use super::error::AmadeusError;
use super::types::{OfferBatch, SearchQuery};

/// The two provider operations this core consumes.
#[async_trait]
pub trait ProviderGateway: Send + Sync {
    /// Bulk flight-offer search.
    async fn search_offers(&self, query: &SearchQuery) -> Result<OfferBatch, AmadeusError>;

    /// Bulk location lookup by free-text keyword.
    async fn lookup_location(&self, keyword: &str) -> Result<Value, AmadeusError>;
}

#[async_trait]
impl ProviderGateway for AmadeusClient {
    async fn search_offers(&self, query: &SearchQuery) -> Result<OfferBatch, AmadeusError> {
        AmadeusClient::search_offers(self, query).await
    }

    async fn lookup_location(&self, keyword: &str) -> Result<Value, AmadeusError> {
        AmadeusClient::lookup_location(self, keyword).await
    }
}
