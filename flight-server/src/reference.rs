//! Bundled reference data: airline and aircraft display names.
//!
//! The provider's detail payloads carry only codes for carriers and
//! aircraft; display names come from these tables. Loaded once at startup
//! and injected into the detail normalizer as an immutable value.

use std::collections::HashMap;

/// Immutable code → display-name tables.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    airlines: HashMap<&'static str, &'static str>,
    aircraft: HashMap<&'static str, &'static str>,
}

impl ReferenceData {
    /// The bundled tables.
    pub fn bundled() -> Self {
        let airlines = HashMap::from([
            ("AA", "AMERICAN AIRLINES"),
            ("AC", "AIR CANADA"),
            ("DL", "DELTA AIR LINES"),
            ("UA", "UNITED AIRLINES"),
            ("SW", "SOUTHWEST AIRLINES"),
            ("F9", "FRONTIER AIRLINES"),
            ("NK", "SPIRIT AIRLINES"),
            ("KE", "KOREAN AIR"),
            ("AF", "AIR FRANCE"),
            ("LH", "LUFTHANSA"),
            ("BA", "BRITISH AIRWAYS"),
        ]);

        let aircraft = HashMap::from([
            ("74H", "BOEING 747-8"),
            ("7M8", "BOEING 737 MAX 8"),
            ("32A", "AIRBUS A320"),
            ("320", "AIRBUS A320"),
            ("321", "AIRBUS A321"),
            ("319", "AIRBUS A319"),
            ("223", "AIRBUS A220-300"),
            ("32Q", "AIRBUS A320neo"),
            ("738", "BOEING 737-800"),
            ("77L", "BOEING 777-200LR"),
            ("789", "BOEING 787-9 Dreamliner"),
        ]);

        Self { airlines, aircraft }
    }

    /// Airline display name for an IATA carrier code, falling back to the
    /// code itself when unknown.
    pub fn airline_name(&self, carrier_code: &str) -> String {
        self.airlines
            .get(carrier_code)
            .map(|name| name.to_string())
            .unwrap_or_else(|| carrier_code.to_string())
    }

    /// Aircraft type name for a provider aircraft code, falling back to
    /// the code itself when unknown.
    pub fn aircraft_name(&self, aircraft_code: &str) -> String {
        self.aircraft
            .get(aircraft_code)
            .map(|name| name.to_string())
            .unwrap_or_else(|| aircraft_code.to_string())
    }
}
