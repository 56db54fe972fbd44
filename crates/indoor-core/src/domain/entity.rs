//! Domain Layer - Core Entity Trait
//!
//! Every record mirrored from the API carries a `RecordId`. The API is not
//! consistent about id types (Mongo-style strings on some collections,
//! integers on others), so ids are kept as opaque strings.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Prefix of ids assigned locally to records not yet confirmed by the API
pub const TEMP_ID_PREFIX: &str = "tmp-";

/// Opaque record identifier
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Local placeholder id for an optimistic insert
    pub fn temporary(seq: u64) -> Self {
        Self(format!("{TEMP_ID_PREFIX}{seq}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_temporary(&self) -> bool {
        self.0.starts_with(TEMP_ID_PREFIX)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<u32> for RecordId {
    fn from(value: u32) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Int(i64),
            Float(f64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(text) => RecordId(text),
            Raw::Int(n) => RecordId(n.to_string()),
            Raw::Float(n) => RecordId(n.to_string()),
        })
    }
}

/// Core trait for all domain entities
pub trait Entity: Sized + Send + Sync + Clone + 'static {
    /// Returns the entity's identifier
    fn id(&self) -> &RecordId;

    /// Replaces the identifier (used when a temporary id is swapped for the server's)
    fn set_id(&mut self, id: RecordId);
}

/// Implements `Entity` for a record with a public `id: RecordId` field
macro_rules! impl_entity {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::domain::Entity for $ty {
                fn id(&self) -> &$crate::domain::RecordId {
                    &self.id
                }

                fn set_id(&mut self, id: $crate::domain::RecordId) {
                    self.id = id;
                }
            }
        )+
    };
}

pub(crate) use impl_entity;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_from_string_or_number() {
        let from_text: RecordId = serde_json::from_str("\"65f0a1\"").unwrap();
        let from_int: RecordId = serde_json::from_str("7").unwrap();
        assert_eq!(from_text.as_str(), "65f0a1");
        assert_eq!(from_int, RecordId::from(7u32));
    }

    #[test]
    fn test_id_serializes_as_string() {
        let json = serde_json::to_string(&RecordId::from(3u32)).unwrap();
        assert_eq!(json, "\"3\"");
    }

    #[test]
    fn test_temporary_ids() {
        let id = RecordId::temporary(4);
        assert_eq!(id.as_str(), "tmp-4");
        assert!(id.is_temporary());
        assert!(!RecordId::from("4").is_temporary());
    }
}
