//! Concurrent airport-name resolution.

use std::collections::{BTreeSet, HashMap};

use futures::future::join_all;
use serde_json::Value;

use crate::amadeus::ProviderGateway;
use crate::domain::IataCode;
use crate::json;

/// Location code → display name, built once per request.
///
/// Total over codes: a code absent from the map resolves to itself, so a
/// lookup never yields a missing name.
#[derive(Debug, Clone, Default)]
pub struct NameMap {
    names: HashMap<String, String>,
}

impl NameMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a resolved name.
    pub fn insert(&mut self, code: impl Into<String>, name: impl Into<String>) {
        self.names.insert(code.into(), name.into());
    }

    /// The display name for a code, falling back to the code itself.
    pub fn resolve(&self, code: &str) -> String {
        self.names
            .get(code)
            .cloned()
            .unwrap_or_else(|| code.to_string())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for NameMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            names: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Resolve every code in the set to a display name, concurrently.
///
/// Issues one lookup per unique code and waits for all of them; an empty
/// set returns immediately without touching the gateway. Individual
/// failures never propagate: a failed or empty lookup resolves to the
/// code itself.
pub async fn resolve_names<G: ProviderGateway + ?Sized>(
    gateway: &G,
    codes: &BTreeSet<IataCode>,
) -> NameMap {
    if codes.is_empty() {
        return NameMap::new();
    }

    let lookups = codes.iter().map(|code| async move {
        let name = match gateway.lookup_location(code.as_str()).await {
            Ok(response) => pick_display_name(&response),
            Err(e) => {
                tracing::warn!(code = %code, error = %e, "airport lookup failed, using code as name");
                None
            }
        };
        (code.as_str().to_string(), name)
    });

    // Synchronization barrier: every lookup completes before any name is used
    let resolved = join_all(lookups).await;

    let mut map = NameMap::new();
    for (code, name) in resolved {
        match name {
            Some(name) => map.insert(code, name),
            None => {
                let fallback = code.clone();
                map.insert(code, fallback);
            }
        }
    }
    map
}

/// Pick a display name out of one location-lookup response.
///
/// Selection order over the first `data` entry: the `name` field, then
/// `address.cityName`, then the text after the first colon of
/// `detailedName` (trimmed), then the raw `detailedName`.
fn pick_display_name(response: &Value) -> Option<String> {
    let first = json::array_at(response, &["data"])?.first()?;

    if let Some(name) = json::text_at(first, &["name"])
        && !name.is_empty()
    {
        return Some(name.to_string());
    }

    if let Some(city) = json::text_at(first, &["address", "cityName"])
        && !city.is_empty()
    {
        return Some(city.to_string());
    }

    let detailed = json::text_at(first, &["detailedName"])?;
    match detailed.split_once(':') {
        Some((_, rest)) => Some(rest.trim().to_string()),
        None => Some(detailed.to_string()),
    }
}
