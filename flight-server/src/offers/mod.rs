//! Flight-offer normalization.
//!
//! Two modes over the same raw offers: `search` flattens a batch into one
//! result per itinerary for listing, `details` expands a single cached
//! offer into its full per-segment view. Both derive stops from segment
//! timing and resolve airport names through a request-scoped [`NameMap`].
//!
//! [`NameMap`]: crate::airports::NameMap

mod details;
mod model;
mod price;
mod search;
mod time;

pub use details::normalize_details;
pub use model::{
    Airline, Airport, Amenity, DetailedResult, DetailedSegment, Direction, FareDetail,
    ItineraryDetail, Price, SearchResult, Segment, Stop,
};
pub use price::{derive_price, traveler_count};
pub use search::normalize_search;
pub use time::{format_iso_duration, layover_between, parse_timestamp};
