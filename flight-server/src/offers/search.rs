//! Offer normalization, search mode.
//!
//! Turns one raw search response plus a resolved name map into the flat
//! result list the search endpoint returns: one entry per *itinerary*, so
//! a round-trip offer contributes two results sharing a parent offer id
//! and the whole trip's price.
//!
//! Sparse provider data degrades field-by-field; one bad segment never
//! discards an entire offer.

use std::collections::HashMap;

use serde_json::Value;

use super::model::{Airline, Airport, SearchResult, Segment, Stop};
use super::price::{derive_price, traveler_count};
use super::time::{format_iso_duration, layover_between};
use crate::airports::NameMap;
use crate::amadeus::{OfferBatch, RawOffer};
use crate::json;

/// Normalize a whole search batch into an ordered result list.
pub fn normalize_search(batch: &OfferBatch, names: &NameMap) -> Vec<SearchResult> {
    let mut results = Vec::new();

    for offer in &batch.offers {
        normalize_offer(offer, &batch.carriers, names, &mut results);
    }

    results
}

/// Normalize one offer into zero or more results, one per itinerary.
fn normalize_offer(
    offer: &RawOffer,
    carriers: &HashMap<String, String>,
    names: &NameMap,
    results: &mut Vec<SearchResult>,
) {
    let Some(offer_id) = offer.offer_id() else {
        tracing::warn!("offer without id in search response, skipping");
        return;
    };

    let itineraries = offer.itineraries();
    if itineraries.is_empty() {
        // Data-quality condition, not an error
        tracing::warn!(offer_id, "offer has no itineraries, contributing no results");
        return;
    }

    let number_of_adults = traveler_count(offer, 1);
    // Computed once per offer; round-trip legs share the whole trip's price
    let price = derive_price(offer);
    let is_round_trip = itineraries.len() >= 2;

    for (index, itinerary) in itineraries.iter().enumerate() {
        let mut result = SearchResult {
            id: format!("{offer_id}-{index}"),
            parent_offer_id: is_round_trip.then(|| offer_id.to_string()),
            departure_date_time: None,
            arrival_date_time: None,
            departure_airport: None,
            arrival_airport: None,
            airline: None,
            operating_airline: None,
            duration: json::text_at(itinerary, &["duration"]).map(str::to_string),
            segments: Vec::new(),
            stops: Vec::new(),
            price: price.clone(),
            number_of_adults,
        };

        fill_itinerary(&mut result, itinerary, carriers, names);
        results.push(result);
    }
}

/// Walk one itinerary's segments: endpoints from the first/last segment,
/// a stop for every strictly positive gap between adjacent segments.
fn fill_itinerary(
    result: &mut SearchResult,
    itinerary: &Value,
    carriers: &HashMap<String, String>,
    names: &NameMap,
) {
    let segments = json::array_at(itinerary, &["segments"]).unwrap_or(&[]);
    if segments.is_empty() {
        tracing::warn!(result_id = %result.id, "itinerary has no segments");
        return;
    }

    for (i, segment) in segments.iter().enumerate() {
        let carrier_code = json::text_at(segment, &["carrierCode"]);
        let operating_code = json::text_at(segment, &["operating", "carrierCode"]);
        let departure_code = json::text_at(segment, &["departure", "iataCode"]);
        let arrival_code = json::text_at(segment, &["arrival", "iataCode"]);

        result.segments.push(Segment {
            departure_iata_code: departure_code.map(str::to_string),
            departure_date_time: json::text_at(segment, &["departure", "at"]).map(str::to_string),
            arrival_iata_code: arrival_code.map(str::to_string),
            arrival_date_time: json::text_at(segment, &["arrival", "at"]).map(str::to_string),
            carrier_code: carrier_code.map(str::to_string),
            number: json::text_at(segment, &["number"]).map(str::to_string),
            duration: json::text_at(segment, &["duration"]).map(str::to_string),
            operating_carrier_code: operating_code
                .filter(|op| Some(*op) != carrier_code)
                .map(str::to_string),
        });

        if i == 0 {
            result.departure_date_time = json::text_at(segment, &["departure", "at"]).map(str::to_string);
            result.departure_airport = departure_code.map(|code| Airport::resolve(code, names));
            result.airline = carrier_code.map(|code| airline(code, carriers));
            result.operating_airline = operating_code
                .filter(|op| Some(*op) != carrier_code)
                .map(|code| airline(code, carriers));
        }
        if i == segments.len() - 1 {
            result.arrival_date_time = json::text_at(segment, &["arrival", "at"]).map(str::to_string);
            result.arrival_airport = arrival_code.map(|code| Airport::resolve(code, names));
        }
    }

    result.stops = derive_stops(segments, names);
}

/// Stops between adjacent segments: emitted only for a strictly positive
/// gap with a known intervening airport.
pub(super) fn derive_stops(segments: &[Value], names: &NameMap) -> Vec<Stop> {
    let mut stops = Vec::new();

    for pair in segments.windows(2) {
        let Some(stop_code) = json::text_at(&pair[0], &["arrival", "iataCode"]) else {
            continue;
        };
        let (Some(arrival_at), Some(departure_at)) = (
            json::text_at(&pair[0], &["arrival", "at"]),
            json::text_at(&pair[1], &["departure", "at"]),
        ) else {
            continue;
        };

        if let Some(gap) = layover_between(arrival_at, departure_at) {
            stops.push(Stop {
                airport_code: stop_code.to_string(),
                airport_name: names.resolve(stop_code),
                layover_duration: format_iso_duration(gap),
            });
        }
    }

    stops
}

/// Carrier display name from the batch dictionary, code fallback.
fn airline(code: &str, carriers: &HashMap<String, String>) -> Airline {
    Airline {
        code: code.to_string(),
        name: carriers.get(code).cloned().unwrap_or_else(|| code.to_string()),
    }
}
