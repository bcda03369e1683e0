//! Data transfer objects for web requests and responses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::amadeus::SearchQuery;
use crate::domain::IataCode;

/// Query parameters for a flight search.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightSearchRequest {
    /// Origin airport IATA code
    pub origin: String,

    /// Destination airport IATA code
    pub destination: String,

    /// Departure date, YYYY-MM-DD
    pub departure_date: String,

    /// Optional return date for round trips, YYYY-MM-DD
    pub return_date: Option<String>,

    /// Number of adult travelers (defaults to 1)
    pub adults: Option<u32>,

    /// Pricing currency code (defaults to USD)
    pub currency: Option<String>,

    /// Restrict to non-stop itineraries (defaults to false)
    pub non_stop: Option<bool>,
}

impl FlightSearchRequest {
    /// Validate the request against `today` and build a provider query.
    ///
    /// Rules: both codes must be IATA codes, the departure date must not
    /// be in the past, and a return date must be strictly after departure.
    pub fn into_query(self, today: NaiveDate) -> Result<SearchQuery, String> {
        let origin = IataCode::parse_normalized(&self.origin)
            .map_err(|_| format!("Invalid origin airport code: {}", self.origin))?;
        let destination = IataCode::parse_normalized(&self.destination)
            .map_err(|_| format!("Invalid destination airport code: {}", self.destination))?;

        let departure = NaiveDate::parse_from_str(&self.departure_date, "%Y-%m-%d")
            .map_err(|_| format!("Invalid departure date: {}", self.departure_date))?;
        if departure < today {
            return Err("Departure date cannot be in the past".to_string());
        }

        if let Some(ref return_date) = self.return_date {
            let ret = NaiveDate::parse_from_str(return_date, "%Y-%m-%d")
                .map_err(|_| format!("Invalid return date: {return_date}"))?;
            if ret <= departure {
                return Err("Return date must be after the departure date".to_string());
            }
        }

        let adults = self.adults.unwrap_or(1);
        if adults == 0 {
            return Err("At least one adult traveler is required".to_string());
        }

        Ok(SearchQuery {
            origin,
            destination,
            departure_date: self.departure_date,
            return_date: self.return_date,
            adults,
            currency: self.currency.unwrap_or_else(|| "USD".to_string()),
            non_stop: self.non_stop.unwrap_or(false),
        })
    }
}

/// Query parameters for an airport keyword search.
#[derive(Debug, Deserialize)]
pub struct AirportSearchRequest {
    /// Free-text keyword, at least two characters after trimming
    pub keyword: String,
}

impl AirportSearchRequest {
    /// The trimmed keyword, rejected when shorter than two characters.
    pub fn keyword(&self) -> Result<&str, String> {
        let trimmed = self.keyword.trim();
        if trimmed.chars().count() < 2 {
            return Err("Keyword must be at least 2 characters".to_string());
        }
        Ok(trimmed)
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()
    }

    fn request() -> FlightSearchRequest {
        FlightSearchRequest {
            origin: "mex".to_string(),
            destination: "LAX".to_string(),
            departure_date: "2025-07-15".to_string(),
            return_date: None,
            adults: None,
            currency: None,
            non_stop: None,
        }
    }

    #[test]
    fn valid_request_with_defaults() {
        let query = request().into_query(today()).unwrap();

        assert_eq!(query.origin.as_str(), "MEX");
        assert_eq!(query.destination.as_str(), "LAX");
        assert_eq!(query.adults, 1);
        assert_eq!(query.currency, "USD");
        assert!(!query.non_stop);
    }

    #[test]
    fn departure_today_is_allowed() {
        let mut req = request();
        req.departure_date = "2025-07-01".to_string();
        assert!(req.into_query(today()).is_ok());
    }

    #[test]
    fn past_departure_rejected() {
        let mut req = request();
        req.departure_date = "2025-06-30".to_string();
        let err = req.into_query(today()).unwrap_err();
        assert!(err.contains("past"));
    }

    #[test]
    fn malformed_departure_date_rejected() {
        let mut req = request();
        req.departure_date = "15-07-2025".to_string();
        assert!(req.into_query(today()).is_err());
    }

    #[test]
    fn invalid_origin_rejected() {
        let mut req = request();
        req.origin = "MEXICO".to_string();
        let err = req.into_query(today()).unwrap_err();
        assert!(err.contains("origin"));
    }

    #[test]
    fn return_date_must_be_strictly_after_departure() {
        let mut req = request();
        req.return_date = Some("2025-07-15".to_string());
        assert!(req.into_query(today()).is_err());

        let mut req = request();
        req.return_date = Some("2025-07-16".to_string());
        let query = req.into_query(today()).unwrap();
        assert_eq!(query.return_date.as_deref(), Some("2025-07-16"));
    }

    #[test]
    fn zero_adults_rejected() {
        let mut req = request();
        req.adults = Some(0);
        assert!(req.into_query(today()).is_err());
    }

    #[test]
    fn keyword_is_trimmed_and_length_checked() {
        let req = AirportSearchRequest {
            keyword: "  los angeles  ".to_string(),
        };
        assert_eq!(req.keyword().unwrap(), "los angeles");

        let req = AirportSearchRequest {
            keyword: " a ".to_string(),
        };
        assert!(req.keyword().is_err());
    }
}
