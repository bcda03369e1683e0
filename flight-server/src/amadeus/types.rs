//! Provider request and response types.
//!
//! Flight offers are kept as raw JSON rather than deserialized into rigid
//! structs: the provider omits and reshapes nested fields freely, and the
//! detail flow needs the *complete* original offer back out of the cache,
//! including fields the search flow never looks at.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use serde_json::Value;

use crate::domain::IataCode;
use crate::json;

/// Parameters for a flight-offer search.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    /// Origin location code.
    pub origin: IataCode,

    /// Destination location code.
    pub destination: IataCode,

    /// Departure date, `YYYY-MM-DD`.
    pub departure_date: String,

    /// Return date for round trips, `YYYY-MM-DD`.
    pub return_date: Option<String>,

    /// Number of adult travelers.
    pub adults: u32,

    /// Currency code for pricing (e.g. "USD").
    pub currency: String,

    /// Restrict results to non-stop itineraries.
    pub non_stop: bool,
}

/// One raw flight offer as issued by the provider.
///
/// Opaque to everything except the offer normalizer; identified by the
/// provider's `id` field, unique within one search batch.
#[derive(Debug, Clone)]
pub struct RawOffer(Arc<Value>);

impl RawOffer {
    pub fn new(value: Value) -> Self {
        Self(Arc::new(value))
    }

    /// The provider-issued offer identifier, if present.
    pub fn offer_id(&self) -> Option<&str> {
        json::text_at(&self.0, &["id"])
    }

    /// The underlying JSON tree.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// The offer's itineraries, empty when absent.
    pub fn itineraries(&self) -> &[Value] {
        json::array_at(&self.0, &["itineraries"]).unwrap_or(&[])
    }

    /// Per-traveler pricing entries, if the provider sent any.
    pub fn traveler_pricings(&self) -> Option<&[Value]> {
        json::array_at(&self.0, &["travelerPricings"])
    }

    /// Collect every location code referenced by this offer's segments.
    ///
    /// Set semantics: duplicates collapse, and codes that do not parse as
    /// IATA codes are dropped.
    pub fn location_codes(&self) -> BTreeSet<IataCode> {
        let mut codes = BTreeSet::new();
        for itinerary in self.itineraries() {
            for segment in json::array_at(itinerary, &["segments"]).unwrap_or(&[]) {
                for endpoint in ["departure", "arrival"] {
                    if let Some(code) = json::text_at(segment, &[endpoint, "iataCode"])
                        && let Ok(code) = IataCode::parse(code)
                    {
                        codes.insert(code);
                    }
                }
            }
        }
        codes
    }
}

/// One search response: the offers plus the batch-scoped carrier dictionary.
#[derive(Debug, Clone)]
pub struct OfferBatch {
    /// Offers in provider order.
    pub offers: Vec<RawOffer>,

    /// Carrier code → display name, from `dictionaries.carriers`.
    /// Empty when the provider sent no dictionary.
    pub carriers: HashMap<String, String>,
}

impl OfferBatch {
    /// Build a batch from the raw search response body.
    pub fn from_response(response: &Value) -> Self {
        let offers = json::array_at(response, &["data"])
            .unwrap_or(&[])
            .iter()
            .map(|offer| RawOffer::new(offer.clone()))
            .collect();

        let mut carriers = HashMap::new();
        if let Some(dict) = response
            .get("dictionaries")
            .and_then(|d| d.get("carriers"))
            .and_then(Value::as_object)
        {
            for (code, name) in dict {
                if let Some(name) = name.as_str() {
                    carriers.insert(code.clone(), name.to_string());
                }
            }
        }

        Self { offers, carriers }
    }

    /// Collect the unique location codes referenced by every offer.
    pub fn location_codes(&self) -> BTreeSet<IataCode> {
        self.offers
            .iter()
            .flat_map(|offer| offer.location_codes())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_offer() -> Value {
        json!({
            "id": "1",
            "itineraries": [
                {
                    "segments": [
                        {
                            "departure": {"iataCode": "MEX", "at": "2025-07-15T08:00:00"},
                            "arrival": {"iataCode": "LAX", "at": "2025-07-15T12:00:00"}
                        },
                        {
                            "departure": {"iataCode": "LAX", "at": "2025-07-15T14:00:00"},
                            "arrival": {"iataCode": "SFO", "at": "2025-07-15T15:30:00"}
                        }
                    ]
                }
            ]
        })
    }

    #[test]
    fn offer_id_and_itineraries() {
        let offer = RawOffer::new(sample_offer());
        assert_eq!(offer.offer_id(), Some("1"));
        assert_eq!(offer.itineraries().len(), 1);
    }

    #[test]
    fn location_codes_are_deduplicated() {
        let offer = RawOffer::new(sample_offer());
        let codes = offer.location_codes();
        // MEX, LAX, SFO; LAX appears twice but collapses
        assert_eq!(codes.len(), 3);
        assert!(codes.contains(&IataCode::parse("LAX").unwrap()));
    }

    #[test]
    fn location_codes_skip_unparseable() {
        let offer = RawOffer::new(json!({
            "id": "2",
            "itineraries": [{"segments": [
                {"departure": {"iataCode": "bad-code"}, "arrival": {"iataCode": "JFK"}}
            ]}]
        }));
        let codes = offer.location_codes();
        assert_eq!(codes.len(), 1);
        assert!(codes.contains(&IataCode::parse("JFK").unwrap()));
    }

    #[test]
    fn batch_from_response_with_dictionary() {
        let response = json!({
            "data": [sample_offer()],
            "dictionaries": {"carriers": {"AM": "AEROMEXICO", "UA": "UNITED AIRLINES"}}
        });
        let batch = OfferBatch::from_response(&response);
        assert_eq!(batch.offers.len(), 1);
        assert_eq!(batch.carriers.get("AM").map(String::as_str), Some("AEROMEXICO"));
    }

    #[test]
    fn batch_from_response_without_data() {
        let batch = OfferBatch::from_response(&json!({}));
        assert!(batch.offers.is_empty());
        assert!(batch.carriers.is_empty());
    }
}
