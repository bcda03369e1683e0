//! Amadeus HTTP client.
//!
//! Provides async methods for the two provider calls this core consumes:
//! the bulk flight-offer search and the bulk location lookup. Both are
//! authenticated with a bearer token obtained through the OAuth2
//! client-credentials exchange; a fresh token is fetched per operation,
//! exactly as the provider contract tolerates.

use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use tokio::sync::Semaphore;

use super::error::AmadeusError;
use super::types::{OfferBatch, SearchQuery};

/// Default base URL for the Amadeus self-service API (test environment).
const DEFAULT_BASE_URL: &str = "https://test.api.amadeus.com";

/// Default maximum concurrent requests.
///
/// Bounds the name-resolution fan-out as well as concurrent searches, so a
/// batch with many distinct airports cannot stampede the provider.
const DEFAULT_MAX_CONCURRENT: usize = 8;

/// Fixed result cap for offer searches.
const SEARCH_RESULT_CAP: u32 = 5;

/// Result cap for location lookups.
const LOCATION_RESULT_CAP: u32 = 5;

/// Configuration for the Amadeus client.
#[derive(Debug, Clone)]
pub struct AmadeusConfig {
    /// OAuth2 client id (API key)
    pub api_key: String,
    /// OAuth2 client secret
    pub api_secret: String,
    /// Base URL for the API (defaults to the test environment)
    pub base_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds; also bounds each name lookup
    pub timeout_secs: u64,
}

impl AmadeusConfig {
    /// Create a new config with the given credentials.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Amadeus API client.
///
/// Uses a semaphore to limit concurrent requests and avoid provider-side
/// rate limiting.
#[derive(Debug, Clone)]
pub struct AmadeusClient {
    http: reqwest::Client,
    base_url: String,
    basic_credentials: String,
    semaphore: Arc<Semaphore>,
}

impl AmadeusClient {
    /// Create a new client with the given configuration.
    pub fn new(config: AmadeusConfig) -> Result<Self, AmadeusError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        let basic_credentials =
            BASE64.encode(format!("{}:{}", config.api_key, config.api_secret));

        Ok(Self {
            http,
            base_url: config.base_url,
            basic_credentials,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// Exchange credentials for a bearer token.
    ///
    /// Called at the start of every provider operation; the token is not
    /// cached across calls.
    async fn fetch_token(&self) -> Result<String, AmadeusError> {
        let url = format!("{}/v1/security/oauth2/token", self.base_url);

        let response = self
            .http
            .post(&url)
            .header(AUTHORIZATION, format!("Basic {}", self.basic_credentials))
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body("grant_type=client_credentials")
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(AmadeusError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AmadeusError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body: Value = response.json().await?;

        body.get("access_token")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| AmadeusError::Token {
                message: "response contained no access_token".to_string(),
            })
    }

    /// Search flight offers.
    ///
    /// Issues the token exchange followed by the bulk search call, and
    /// parses the response into an [`OfferBatch`]. Results are capped at
    /// the provider level.
    pub async fn search_offers(&self, query: &SearchQuery) -> Result<OfferBatch, AmadeusError> {
        let _permit = self.acquire_permit().await?;
        let token = self.fetch_token().await?;

        tracing::info!(
            origin = %query.origin,
            destination = %query.destination,
            departure_date = %query.departure_date,
            adults = query.adults,
            "searching flight offers"
        );

        let url = format!("{}/v2/shopping/flight-offers", self.base_url);

        let mut request = self
            .http
            .get(&url)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .query(&[
                ("originLocationCode", query.origin.as_str().to_string()),
                ("destinationLocationCode", query.destination.as_str().to_string()),
                ("departureDate", query.departure_date.clone()),
                ("adults", query.adults.to_string()),
                ("currencyCode", query.currency.clone()),
                ("nonStop", query.non_stop.to_string()),
                ("max", SEARCH_RESULT_CAP.to_string()),
            ]);

        if let Some(return_date) = &query.return_date {
            request = request.query(&[("returnDate", return_date.clone())]);
        }

        let body = self.read_json(request).await?;

        Ok(OfferBatch::from_response(&body))
    }

    /// Look up locations by free-text keyword.
    ///
    /// Returns the raw provider response: the name resolver and the
    /// airport-search passthrough extract different parts of it.
    pub async fn lookup_location(&self, keyword: &str) -> Result<Value, AmadeusError> {
        let _permit = self.acquire_permit().await?;
        let token = self.fetch_token().await?;

        tracing::debug!(keyword, "looking up location");

        let url = format!("{}/v1/reference-data/locations", self.base_url);

        let request = self
            .http
            .get(&url)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .query(&[
                ("subType", "AIRPORT".to_string()),
                ("keyword", keyword.to_string()),
                ("page[limit]", LOCATION_RESULT_CAP.to_string()),
            ]);

        self.read_json(request).await
    }

    async fn acquire_permit(&self) -> Result<tokio::sync::SemaphorePermit<'_>, AmadeusError> {
        self.semaphore
            .acquire()
            .await
            .map_err(|_| AmadeusError::Api {
                status: 0,
                message: "Semaphore closed".to_string(),
            })
    }

    /// Send a request and parse the body as JSON, mapping provider error
    /// statuses onto the error taxonomy.
    async fn read_json(&self, request: reqwest::RequestBuilder) -> Result<Value, AmadeusError> {
        let response = request.send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(AmadeusError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AmadeusError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AmadeusError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| AmadeusError::Json {
            message: format!("{e} (body: {})", body.chars().take(500).collect::<String>()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder() {
        let config = AmadeusConfig::new("key", "secret")
            .with_base_url("http://localhost:8080")
            .with_max_concurrent(2)
            .with_timeout(60);

        assert_eq!(config.api_key, "key");
        assert_eq!(config.api_secret, "secret");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.max_concurrent, 2);
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn config_defaults() {
        let config = AmadeusConfig::new("key", "secret");

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.max_concurrent, DEFAULT_MAX_CONCURRENT);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn client_creation() {
        let config = AmadeusConfig::new("key", "secret");
        assert!(AmadeusClient::new(config).is_ok());
    }

    // Integration tests against the real API require credentials and
    // network access; they would be marked #[ignore] and run separately.
}
