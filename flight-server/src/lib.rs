//! Flight search server.
//!
//! A web application that searches flight offers through the Amadeus
//! self-service API, caches every returned offer, and serves full offer
//! details from that cache.

pub mod airports;
pub mod amadeus;
pub mod cache;
pub mod domain;
pub mod json;
pub mod offers;
pub mod reference;
pub mod service;
pub mod web;
