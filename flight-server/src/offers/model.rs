//! Normalized offer output model.
//!
//! These are the shapes handed to the web layer and serialized to clients.
//! `Option` fields mirror the provider's sparseness: a missing provider
//! field stays absent instead of being fabricated.

use serde::Serialize;

use crate::airports::NameMap;

/// Price breakdown shared by search and detail results.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    /// Currency code (e.g. "USD").
    pub currency: Option<String>,

    /// Grand total for the whole offer.
    pub total: Option<String>,

    /// Base fare.
    pub base: Option<String>,

    /// Derived fee: `total - base`, or summed explicit fee items.
    /// Absent (not zero) when underivable.
    pub fees: Option<String>,

    /// First traveler's total, falling back to the grand total.
    pub price_per_adult: Option<String>,
}

/// An airport with its resolved display name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Airport {
    pub code: String,
    pub name: String,
}

impl Airport {
    /// Build an airport from a code, resolving the display name through
    /// the request's name map.
    pub fn resolve(code: &str, names: &NameMap) -> Self {
        Self {
            code: code.to_string(),
            name: names.resolve(code),
        }
    }
}

/// An airline with its display name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Airline {
    pub code: String,
    pub name: String,
}

/// One non-stop flight leg, as listed in search results.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub departure_iata_code: Option<String>,
    pub departure_date_time: Option<String>,
    pub arrival_iata_code: Option<String>,
    pub arrival_date_time: Option<String>,
    pub carrier_code: Option<String>,
    pub number: Option<String>,
    pub duration: Option<String>,
    /// Only set when distinct information exists; see the normalizers for
    /// the mode-specific rules.
    pub operating_carrier_code: Option<String>,
}

/// A derived stop between two consecutive segments.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stop {
    pub airport_code: String,
    pub airport_name: String,
    /// ISO 8601 duration of the layover (e.g. "PT2H30M").
    pub layover_duration: String,
}

/// One search result: a single itinerary of an offer.
///
/// A round-trip offer yields one result per itinerary; the legs share a
/// `parent_offer_id` and quote the whole round trip's price.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// `offerId-itineraryIndex`.
    pub id: String,

    /// The provider offer id for round trips; null for one-way offers.
    pub parent_offer_id: Option<String>,

    pub departure_date_time: Option<String>,
    pub arrival_date_time: Option<String>,
    pub departure_airport: Option<Airport>,
    pub arrival_airport: Option<Airport>,

    /// Primary (marketing) airline, from the first segment.
    pub airline: Option<Airline>,

    /// Operating airline when distinct from the marketing one.
    pub operating_airline: Option<Airline>,

    /// Overall itinerary duration as supplied by the provider.
    pub duration: Option<String>,

    pub segments: Vec<Segment>,
    pub stops: Vec<Stop>,

    pub price: Option<Price>,
    pub number_of_adults: u32,
}

/// Direction label for a detail-mode itinerary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    Outbound,
    Inbound,
}

/// A named amenity attached to a fare, flagged chargeable or included.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Amenity {
    pub description: Option<String>,
    pub chargeable: bool,
    pub amenity_type: Option<String>,
}

/// Per-traveler, per-segment fare information.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FareDetail {
    pub cabin: Option<String>,
    pub fare_basis: Option<String>,
    pub branded_fare: Option<String>,
    pub class_code: Option<String>,
    pub amenities: Vec<Amenity>,
}

/// One segment of a detailed itinerary, with carrier/aircraft names and
/// per-traveler fare details attached.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedSegment {
    pub departure_iata_code: Option<String>,
    pub arrival_iata_code: Option<String>,
    pub departure_date_time: Option<String>,
    pub arrival_date_time: Option<String>,
    pub carrier_code: Option<String>,
    pub number: Option<String>,
    pub duration: Option<String>,
    pub operating_carrier_code: Option<String>,
    pub aircraft_code: Option<String>,

    pub airline_name: Option<String>,
    /// Omitted entirely when no operating carrier is present; never
    /// defaulted to the marketing carrier.
    pub operating_airline_name: Option<String>,
    pub aircraft_type_name: Option<String>,

    /// One entry per traveler whose fare record references this segment.
    pub traveler_fare_details: Vec<FareDetail>,
}

/// One itinerary of a detailed offer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryDetail {
    /// `offerId-itineraryIndex`.
    pub id: String,

    pub direction: Direction,
    pub duration: Option<String>,
    pub departure_date_time: Option<String>,
    pub arrival_date_time: Option<String>,
    pub departure_airport: Option<Airport>,
    pub arrival_airport: Option<Airport>,
    pub stops: Vec<Stop>,
    pub segments: Vec<DetailedSegment>,
}

/// The full detail view of one cached offer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedResult {
    /// The original provider offer id.
    pub offer_id: String,

    pub total_price: Option<Price>,
    pub number_of_adults: u32,
    pub itineraries: Vec<ItineraryDetail>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_serializes_screaming() {
        assert_eq!(serde_json::to_string(&Direction::Outbound).unwrap(), "\"OUTBOUND\"");
        assert_eq!(serde_json::to_string(&Direction::Inbound).unwrap(), "\"INBOUND\"");
    }

    #[test]
    fn airport_resolves_through_name_map() {
        let names: NameMap = [("MEX", "Mexico City Intl")].into_iter().collect();
        let airport = Airport::resolve("MEX", &names);
        assert_eq!(airport.name, "Mexico City Intl");

        let unknown = Airport::resolve("ORD", &names);
        assert_eq!(unknown.name, "ORD");
    }

    #[test]
    fn search_result_serializes_camel_case() {
        let result = SearchResult {
            id: "1-0".into(),
            parent_offer_id: None,
            departure_date_time: Some("2025-07-15T08:00:00".into()),
            arrival_date_time: None,
            departure_airport: None,
            arrival_airport: None,
            airline: None,
            operating_airline: None,
            duration: None,
            segments: vec![],
            stops: vec![],
            price: None,
            number_of_adults: 1,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["parentOfferId"], serde_json::Value::Null);
        assert_eq!(json["departureDateTime"], "2025-07-15T08:00:00");
        assert_eq!(json["numberOfAdults"], 1);
    }
}
