//! Offer cache.
//!
//! The provider has no single-offer detail endpoint, so every offer
//! returned by a search is cached by its provider id; a later detail
//! request is served entirely from this cache. A miss is a normal,
//! user-facing condition (restarted process, forged id), not a fault.
//!
//! Entries are write-once in practice (provider ids are unique per batch);
//! a duplicate id overwrites, last writer wins. By default nothing is ever
//! evicted: capacity and TTL knobs exist but are disabled so an offer
//! cached by a search is always still present for its detail request.

use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::amadeus::RawOffer;

/// Configuration for the offer cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached offers. `None` disables time-based eviction.
    pub ttl: Option<Duration>,

    /// Maximum number of cached offers.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: None,
            max_capacity: u64::MAX,
        }
    }
}

/// Process-lifetime store of raw offers, keyed by provider offer id.
pub struct OfferCache {
    offers: MokaCache<String, RawOffer>,
}

impl OfferCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let mut builder = MokaCache::builder().max_capacity(config.max_capacity);
        if let Some(ttl) = config.ttl {
            builder = builder.time_to_live(ttl);
        }

        Self {
            offers: builder.build(),
        }
    }

    /// Store one raw offer under its provider id. Idempotent overwrite.
    pub async fn put(&self, offer_id: &str, offer: RawOffer) {
        self.offers.insert(offer_id.to_string(), offer).await;
    }

    /// Look up a raw offer by provider id.
    pub async fn get(&self, offer_id: &str) -> Option<RawOffer> {
        self.offers.get(offer_id).await
    }

    /// Number of cached offers (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.offers.entry_count()
    }
}

impl Default for OfferCache {
    fn default() -> Self {
        Self::new(&CacheConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn put_then_get_roundtrip() {
        let cache = OfferCache::default();
        let offer = RawOffer::new(json!({"id": "42", "price": {"grandTotal": "100.00"}}));

        cache.put("42", offer.clone()).await;

        let fetched = cache.get("42").await.expect("offer should be cached");
        assert_eq!(fetched.as_value(), offer.as_value());
    }

    #[tokio::test]
    async fn get_unknown_id_is_none() {
        let cache = OfferCache::default();
        assert!(cache.get("nope").await.is_none());
    }

    #[tokio::test]
    async fn duplicate_put_overwrites() {
        let cache = OfferCache::default();
        cache.put("1", RawOffer::new(json!({"id": "1", "v": "old"}))).await;
        cache.put("1", RawOffer::new(json!({"id": "1", "v": "new"}))).await;

        let fetched = cache.get("1").await.unwrap();
        assert_eq!(fetched.as_value()["v"], "new");
    }

    #[tokio::test]
    async fn concurrent_writers_and_readers() {
        let cache = std::sync::Arc::new(OfferCache::default());

        let mut handles = Vec::new();
        for i in 0..32 {
            let cache = cache.clone();
            handles.push(tokio::spawn(async move {
                let id = format!("offer-{i}");
                cache.put(&id, RawOffer::new(json!({"id": id}))).await;
                cache.get(&id).await.is_some()
            }));
        }

        for handle in handles {
            assert!(handle.await.unwrap());
        }
    }

    #[test]
    fn default_config_never_evicts() {
        let config = CacheConfig::default();
        assert!(config.ttl.is_none());
        assert_eq!(config.max_capacity, u64::MAX);
    }
}
