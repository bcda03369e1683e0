//! Provider client error types.

/// Errors from the Amadeus HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum AmadeusError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Token exchange succeeded at the HTTP level but returned no usable token
    #[error("token exchange failed: {message}")]
    Token { message: String },

    /// Authentication failed
    #[error("unauthorized: check AMADEUS_API_KEY and AMADEUS_API_SECRET")]
    Unauthorized,

    /// Rate limited by the provider
    #[error("rate limited by Amadeus API")]
    RateLimited,

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = AmadeusError::Api {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");

        let err = AmadeusError::Token {
            message: "missing access_token".into(),
        };
        assert!(err.to_string().contains("token exchange failed"));

        let err = AmadeusError::RateLimited;
        assert_eq!(err.to_string(), "rate limited by Amadeus API");
    }
}
