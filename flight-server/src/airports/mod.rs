//! Airport name resolution.
//!
//! Turns a set of location codes into best-effort display names via the
//! provider's location lookup, one concurrent call per unique code.
//! Enrichment is cosmetic: every failure degrades silently to the code
//! itself, and no single slow lookup can fail a search.

mod resolver;

pub use resolver::{NameMap, resolve_names};
