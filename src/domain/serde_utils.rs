//! Serde utilities for upstream records.

use serde::Deserializer;
use serde::de::{self, Visitor};
use std::fmt;

/// Deserializes illustration ids that arrive either as JSON numbers or as
/// numeric strings.
pub mod string_or_u64 {
    use super::{Deserializer, Visitor, de, fmt};

    /// Deserializes a u64 from a string or number.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a non-negative integer or a string
    /// holding one.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct StringOrIntVisitor;

        impl Visitor<'_> for StringOrIntVisitor {
            type Value = u64;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or integer representing an illustration id")
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(value)
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                u64::try_from(value).map_err(de::Error::custom)
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                value.trim().parse::<u64>().map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_any(StringOrIntVisitor)
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(with = "super::string_or_u64")]
        id: u64,
    }

    #[test]
    fn test_accepts_number() {
        let holder: Holder = serde_json::from_str(r#"{"id": 12345}"#).unwrap();
        assert_eq!(holder.id, 12345);
    }

    #[test]
    fn test_accepts_string() {
        let holder: Holder = serde_json::from_str(r#"{"id": "98765"}"#).unwrap();
        assert_eq!(holder.id, 98765);
    }

    #[test]
    fn test_rejects_negative() {
        assert!(serde_json::from_str::<Holder>(r#"{"id": -1}"#).is_err());
        assert!(serde_json::from_str::<Holder>(r#"{"id": "abc"}"#).is_err());
    }
}
