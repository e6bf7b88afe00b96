//! Part identity: prefixed ULIDs assigned by the store

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use ulid::Ulid;

/// Literal prefix carried by every part id
pub const PART_PREFIX: &str = "PART";

/// A unique part identifier: the `PART` prefix plus a ULID.
///
/// Ids are store-assigned at insert time and never reused; ULIDs
/// sort by creation time at millisecond resolution, which gives the
/// store its stable iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PartId(Ulid);

impl PartId {
    /// Generate a fresh id
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    /// Parse a PartId from a string
    pub fn parse(s: &str) -> Result<Self, IdParseError> {
        s.parse()
    }

    /// Get the ULID component
    pub fn ulid(&self) -> Ulid {
        self.0
    }
}

impl Default for PartId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", PART_PREFIX, self.0)
    }
}

impl FromStr for PartId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (prefix, ulid_str) = s
            .split_once('-')
            .ok_or_else(|| IdParseError::MissingDelimiter(s.to_string()))?;

        if prefix != PART_PREFIX {
            return Err(IdParseError::InvalidPrefix(prefix.to_string()));
        }

        let ulid = Ulid::from_string(ulid_str)
            .map_err(|e| IdParseError::InvalidUlid(ulid_str.to_string(), e.to_string()))?;

        Ok(Self(ulid))
    }
}

impl Serialize for PartId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for PartId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Errors that can occur when parsing part ids
#[derive(Debug, Error)]
pub enum IdParseError {
    #[error("invalid id prefix: '{0}' (expected PART)")]
    InvalidPrefix(String),

    #[error("missing '-' delimiter in part id: '{0}'")]
    MissingDelimiter(String),

    #[error("invalid ULID '{0}': {1}")]
    InvalidUlid(String, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_generation() {
        let id = PartId::new();
        assert!(id.to_string().starts_with("PART-"));
        assert_eq!(id.to_string().len(), 31); // PART- (5) + ULID (26)
    }

    #[test]
    fn test_id_roundtrip() {
        let original = PartId::new();
        let parsed = PartId::parse(&original.to_string()).unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_id_invalid_prefix() {
        let err = PartId::parse("XXX-01HQ3K4N5M6P7R8S9T0UVWXY").unwrap_err();
        assert!(matches!(err, IdParseError::InvalidPrefix(_)));
    }

    #[test]
    fn test_id_missing_delimiter() {
        let err = PartId::parse("PART01HQ3K4N5M6P7R8S9T0UVWXY").unwrap_err();
        assert!(matches!(err, IdParseError::MissingDelimiter(_)));
    }

    #[test]
    fn test_id_invalid_ulid() {
        let err = PartId::parse("PART-notaulid").unwrap_err();
        assert!(matches!(err, IdParseError::InvalidUlid(_, _)));
    }

    #[test]
    fn test_ids_sort_by_creation() {
        let a = PartId::new();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let b = PartId::new();
        assert!(a < b);
    }
}
