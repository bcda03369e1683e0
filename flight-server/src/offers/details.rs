//! Offer normalization, detail mode.
//!
//! Builds the full view of one cached offer: per-itinerary direction
//! labels, per-segment carrier and aircraft names from the bundled
//! reference tables, and per-traveler fare details matched to segments by
//! the provider's segment id.

use serde_json::Value;

use super::model::{
    Airport, Amenity, DetailedResult, DetailedSegment, Direction, FareDetail, ItineraryDetail,
};
use super::price::{derive_price, traveler_count};
use super::search::derive_stops;
use crate::airports::NameMap;
use crate::amadeus::RawOffer;
use crate::json;
use crate::reference::ReferenceData;

/// Normalize one cached offer into its detail view.
pub fn normalize_details(
    offer_id: &str,
    offer: &RawOffer,
    names: &NameMap,
    reference: &ReferenceData,
) -> DetailedResult {
    let itineraries = offer.itineraries();
    if itineraries.len() > 2 {
        // Direction labels assume at most two itineraries; extras are
        // all labelled inbound.
        tracing::warn!(
            offer_id,
            count = itineraries.len(),
            "offer has more than two itineraries"
        );
    }

    let detailed = itineraries
        .iter()
        .enumerate()
        .map(|(index, itinerary)| {
            normalize_itinerary(offer_id, index, itinerary, offer, names, reference)
        })
        .collect();

    DetailedResult {
        offer_id: offer_id.to_string(),
        total_price: derive_price(offer),
        number_of_adults: traveler_count(offer, 0),
        itineraries: detailed,
    }
}

fn normalize_itinerary(
    offer_id: &str,
    index: usize,
    itinerary: &Value,
    offer: &RawOffer,
    names: &NameMap,
    reference: &ReferenceData,
) -> ItineraryDetail {
    let segments = json::array_at(itinerary, &["segments"]).unwrap_or(&[]);

    let direction = if index == 0 {
        Direction::Outbound
    } else {
        Direction::Inbound
    };

    let first = segments.first();
    let last = segments.last();

    ItineraryDetail {
        id: format!("{offer_id}-{index}"),
        direction,
        duration: json::text_at(itinerary, &["duration"]).map(str::to_string),
        departure_date_time: first
            .and_then(|s| json::text_at(s, &["departure", "at"]))
            .map(str::to_string),
        arrival_date_time: last
            .and_then(|s| json::text_at(s, &["arrival", "at"]))
            .map(str::to_string),
        departure_airport: first
            .and_then(|s| json::text_at(s, &["departure", "iataCode"]))
            .map(|code| Airport::resolve(code, names)),
        arrival_airport: last
            .and_then(|s| json::text_at(s, &["arrival", "iataCode"]))
            .map(|code| Airport::resolve(code, names)),
        stops: derive_stops(segments, names),
        segments: segments
            .iter()
            .map(|segment| normalize_segment(segment, offer, reference))
            .collect(),
    }
}

fn normalize_segment(
    segment: &Value,
    offer: &RawOffer,
    reference: &ReferenceData,
) -> DetailedSegment {
    let carrier_code = json::text_at(segment, &["carrierCode"]);
    let operating_code = json::text_at(segment, &["operating", "carrierCode"]);
    let aircraft_code = json::text_at(segment, &["aircraft", "code"]);

    DetailedSegment {
        departure_iata_code: json::text_at(segment, &["departure", "iataCode"]).map(str::to_string),
        arrival_iata_code: json::text_at(segment, &["arrival", "iataCode"]).map(str::to_string),
        departure_date_time: json::text_at(segment, &["departure", "at"]).map(str::to_string),
        arrival_date_time: json::text_at(segment, &["arrival", "at"]).map(str::to_string),
        carrier_code: carrier_code.map(str::to_string),
        number: json::text_at(segment, &["number"]).map(str::to_string),
        duration: json::text_at(segment, &["duration"]).map(str::to_string),
        operating_carrier_code: operating_code.map(str::to_string),
        aircraft_code: aircraft_code.map(str::to_string),
        airline_name: carrier_code.map(|code| reference.airline_name(code)),
        operating_airline_name: operating_code.map(|code| reference.airline_name(code)),
        aircraft_type_name: aircraft_code.map(|code| reference.aircraft_name(code)),
        traveler_fare_details: fare_details_for_segment(segment, offer),
    }
}

/// Collect fare details across travelers whose fare records reference this
/// segment's id exactly. One entry per matching traveler, in traveler
/// order; segments without an id match nothing.
fn fare_details_for_segment(segment: &Value, offer: &RawOffer) -> Vec<FareDetail> {
    let Some(segment_id) = json::text_at(segment, &["id"]) else {
        return Vec::new();
    };

    let mut details = Vec::new();
    for traveler in offer.traveler_pricings().unwrap_or(&[]) {
        let fares = json::array_at(traveler, &["fareDetailsBySegment"]).unwrap_or(&[]);
        for fare in fares {
            if json::text_at(fare, &["segmentId"]) == Some(segment_id) {
                details.push(fare_detail(fare));
            }
        }
    }
    details
}

fn fare_detail(fare: &Value) -> FareDetail {
    let amenities = json::array_at(fare, &["amenities"])
        .unwrap_or(&[])
        .iter()
        .map(|amenity| Amenity {
            description: json::text_at(amenity, &["description"]).map(str::to_string),
            // Absent or non-boolean means not chargeable
            chargeable: json::bool_or(amenity, "isChargeable", false),
            amenity_type: json::text_at(amenity, &["amenityType"]).map(str::to_string),
        })
        .collect();

    FareDetail {
        cabin: json::text_at(fare, &["cabin"]).map(str::to_string),
        fare_basis: json::text_at(fare, &["fareBasis"]).map(str::to_string),
        branded_fare: json::text_at(fare, &["brandedFare"]).map(str::to_string),
        class_code: json::text_at(fare, &["class"]).map(str::to_string),
        amenities,
    }
}
