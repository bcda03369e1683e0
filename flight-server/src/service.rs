//! Flight search orchestration.
//!
//! Ties the provider gateway, the offer cache, the name resolver, and the
//! normalizers together. One search call fans out as: provider search,
//! cache every returned offer by id, resolve all referenced airport names
//! concurrently, then flatten the batch into per-itinerary results. A
//! detail call is served entirely from the cache plus a fresh name
//! resolution pass.

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

use crate::airports::resolve_names;
use crate::amadeus::{AmadeusError, ProviderGateway, SearchQuery};
use crate::cache::OfferCache;
use crate::offers::{DetailedResult, SearchResult, normalize_details, normalize_search};
use crate::reference::ReferenceData;

/// Errors surfaced by the orchestration layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The requested offer is not in the cache. Offers only live as long
    /// as the process, so the remedy is a fresh search.
    #[error("flight offer {offer_id} not found; please perform a new search")]
    OfferNotFound { offer_id: String },

    #[error(transparent)]
    Provider(#[from] AmadeusError),
}

/// The application core behind the HTTP handlers.
pub struct FlightService {
    gateway: Arc<dyn ProviderGateway>,
    cache: OfferCache,
    reference: ReferenceData,
}

impl FlightService {
    pub fn new(gateway: Arc<dyn ProviderGateway>, cache: OfferCache, reference: ReferenceData) -> Self {
        Self {
            gateway,
            cache,
            reference,
        }
    }

    /// Run a flight-offer search end to end.
    ///
    /// Every raw offer in the response is cached by its provider id before
    /// normalization, so any result the client sees can be expanded by a
    /// later detail request.
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchResult>, ServiceError> {
        let batch = self.gateway.search_offers(query).await?;

        for offer in &batch.offers {
            if let Some(id) = offer.offer_id() {
                self.cache.put(id, offer.clone()).await;
            }
        }

        let codes = batch.location_codes();
        let names = resolve_names(self.gateway.as_ref(), &codes).await;

        let results = normalize_search(&batch, &names);
        tracing::info!(
            origin = %query.origin,
            destination = %query.destination,
            offers = batch.offers.len(),
            results = results.len(),
            cached = self.cache.entry_count(),
            "search complete"
        );
        Ok(results)
    }

    /// Expand one previously searched offer into its detail view.
    pub async fn offer_details(&self, offer_id: &str) -> Result<DetailedResult, ServiceError> {
        let offer = self
            .cache
            .get(offer_id)
            .await
            .ok_or_else(|| ServiceError::OfferNotFound {
                offer_id: offer_id.to_string(),
            })?;

        let names = resolve_names(self.gateway.as_ref(), &offer.location_codes()).await;

        Ok(normalize_details(offer_id, &offer, &names, &self.reference))
    }

    /// Keyword airport search, passed through to the provider unmodified.
    pub async fn airport_search(&self, keyword: &str) -> Result<Value, ServiceError> {
        Ok(self.gateway.lookup_location(keyword).await?)
    }
}
