//! Timestamp parsing and layover derivation.
//!
//! Provider timestamps are local ISO 8601 date-times without a zone
//! (`2025-07-15T08:00:00`). A stop exists between two segments only when
//! the gap between the first's arrival and the next's departure is
//! strictly positive; zero, negative, and unparseable gaps are not stops.

use chrono::{Duration, NaiveDateTime};

/// Parse a provider timestamp, if well-formed.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    s.parse().ok()
}

/// Compute the layover between one segment's arrival and the next
/// segment's departure.
///
/// Returns `Some` only for a strictly positive gap. Unparseable
/// timestamps yield `None`: a malformed connection is not a real stop.
pub fn layover_between(arrival: &str, next_departure: &str) -> Option<Duration> {
    let arrival = parse_timestamp(arrival)?;
    let departure = parse_timestamp(next_departure)?;

    let gap = departure - arrival;
    if gap > Duration::zero() { Some(gap) } else { None }
}

/// Format a duration as an ISO 8601 duration string, `PT{h}H{m}M`.
pub fn format_iso_duration(duration: Duration) -> String {
    let hours = duration.num_hours();
    let minutes = duration.num_minutes() - hours * 60;
    format!("PT{hours}H{minutes}M")
}
