use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Identifier types used by aggregates and in REST paths
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Render the id the way it appears in URLs
    fn as_string(&self) -> String;

    /// Parse an id taken from a URL or a form
    fn from_string(s: &str) -> Result<Self, String>;
}

impl AggregateId for uuid::Uuid {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s.trim()).map_err(|e| format!("UUID inválido: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_from_string_trims_input() {
        let id = uuid::Uuid::new_v4();
        let parsed = <uuid::Uuid as AggregateId>::from_string(&format!("  {}  ", id)).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_uuid_from_string_rejects_garbage() {
        let err = <uuid::Uuid as AggregateId>::from_string("not-a-uuid").unwrap_err();
        assert!(err.starts_with("UUID inválido"));
    }
}
