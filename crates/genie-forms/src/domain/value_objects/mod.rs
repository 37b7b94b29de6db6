//! Value Objects module
//!
//! Immutable, validated domain primitives for the field schema model.

pub mod field;
pub mod field_type;
pub mod option;
pub mod service;

pub use field::FieldDefinition;
pub use field_type::FieldType;
pub use option::{option_value_from_label, FieldOption};
pub use service::{service_name, ServiceOption, SERVICE_CATALOG};

/// Identifier value object for entities
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct EntityId(String);

impl EntityId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for EntityId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Lowercase `value` and replace every run of whitespace with `sep`.
///
/// Shared by the two slug derivations in this module: field keys use `_`,
/// option values use `-`. Leading and trailing runs are kept as a single
/// separator so stored keys never silently change shape.
pub(crate) fn collapse_whitespace(value: &str, sep: char) -> String {
    let lower = value.to_lowercase();
    let mut out = String::with_capacity(lower.len());
    let mut in_run = false;
    for ch in lower.chars() {
        if ch.is_whitespace() {
            if !in_run {
                out.push(sep);
                in_run = true;
            }
        } else {
            out.push(ch);
            in_run = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_id_round_trip() {
        let id = EntityId::new();
        let copy = EntityId::from_string(id.as_str());
        assert_eq!(id, copy);
    }

    #[test]
    fn test_collapse_whitespace_runs() {
        assert_eq!(collapse_whitespace("Your  Full\tName", '_'), "your_full_name");
        assert_eq!(collapse_whitespace("Deep Clean", '-'), "deep-clean");
    }

    #[test]
    fn test_collapse_whitespace_keeps_edges() {
        assert_eq!(collapse_whitespace(" Padded ", '_'), "_padded_");
    }
}
