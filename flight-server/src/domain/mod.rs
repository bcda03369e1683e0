//! Domain types for the flight search core.
//!
//! Validated value types shared across the provider client, the offer
//! normalizer, and the web layer. Invariants are enforced at construction
//! time, so downstream code can trust any value it receives.

mod location;

pub use location::{IataCode, InvalidIataCode};
