//! IATA location code type.

use std::fmt;

use serde::Serialize;

/// Error returned when parsing an invalid IATA code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid IATA code: {reason}")]
pub struct InvalidIataCode {
    reason: &'static str,
}

/// A valid 3-letter IATA location code.
///
/// IATA airport/city codes are always 3 uppercase ASCII letters. This type
/// guarantees that any `IataCode` value is valid by construction.
///
/// # Examples
///
/// ```
/// use flight_server::domain::IataCode;
///
/// let lax = IataCode::parse("LAX").unwrap();
/// assert_eq!(lax.as_str(), "LAX");
///
/// // Lowercase is rejected by the strict parser
/// assert!(IataCode::parse("lax").is_err());
///
/// // Wrong length is rejected
/// assert!(IataCode::parse("LA").is_err());
/// assert!(IataCode::parse("LAXX").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IataCode([u8; 3]);

impl IataCode {
    /// Parse an IATA code from a string.
    ///
    /// The input must be exactly 3 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidIataCode> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidIataCode {
                reason: "must be exactly 3 characters",
            });
        }

        for &b in bytes {
            if !b.is_ascii_uppercase() {
                return Err(InvalidIataCode {
                    reason: "must be uppercase ASCII letters A-Z",
                });
            }
        }

        Ok(IataCode([bytes[0], bytes[1], bytes[2]]))
    }

    /// Parse an IATA code, accepting lowercase input from user-facing
    /// query parameters.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidIataCode> {
        Self::parse(&s.trim().to_ascii_uppercase())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only valid ASCII uppercase letters are ever stored
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for IataCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IataCode({})", self.as_str())
    }
}

impl fmt::Display for IataCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for IataCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn valid_code_string() -> impl Strategy<Value = String> {
        proptest::string::string_regex("[A-Z]{3}").unwrap()
    }

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in valid_code_string()) {
            let code = IataCode::parse(&s).unwrap();
            prop_assert_eq!(code.as_str(), s.as_str());
        }

        /// Any valid code can be parsed
        #[test]
        fn valid_always_parses(s in valid_code_string()) {
            prop_assert!(IataCode::parse(&s).is_ok());
        }

        /// Lowercase letters are always rejected by the strict parser
        /// but accepted by the normalizing one
        #[test]
        fn lowercase_normalized(s in "[a-z]{3}") {
            prop_assert!(IataCode::parse(&s).is_err());
            prop_assert!(IataCode::parse_normalized(&s).is_ok());
        }

        /// Wrong-length strings are always rejected
        #[test]
        fn wrong_length_rejected(s in "[A-Z]{0,2}|[A-Z]{4,10}") {
            prop_assert!(IataCode::parse(&s).is_err());
        }
    }
}
