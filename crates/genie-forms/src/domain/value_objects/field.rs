//! Field Definition
//!
//! One entry of a calculator's schema. The serialized shape (`type`,
//! `selectedOptions`) is the stored format and the builder wire format.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{collapse_whitespace, FieldOption, FieldType};

/// A single typed field of a calculator schema
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<FieldOption>,
    #[serde(
        default,
        rename = "selectedOptions",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub selected_services: BTreeMap<String, bool>,
}

impl FieldDefinition {
    /// A freshly added builder field: "New <type name>", optional,
    /// with one starter option for choice fields.
    pub fn new(field_type: FieldType) -> Self {
        let options = if field_type.has_options() {
            vec![FieldOption::numbered(1)]
        } else {
            Vec::new()
        };
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            field_type,
            label: format!("New {}", field_type.display_name()),
            placeholder: None,
            required: false,
            options,
            selected_services: BTreeMap::new(),
        }
    }

    /// The key this field's value is stored under in submission data.
    ///
    /// The explicit field id when present, otherwise the label lowercased
    /// with whitespace runs replaced by underscores. Every layer that
    /// touches submission data resolves keys through here.
    pub fn key(&self) -> String {
        if !self.id.is_empty() {
            self.id.clone()
        } else {
            collapse_whitespace(&self.label, '_')
        }
    }

    /// Catalog services enabled on this field, in catalog order
    pub fn enabled_services(&self) -> Vec<&str> {
        super::SERVICE_CATALOG
            .iter()
            .filter(|s| self.selected_services.get(s.id).copied().unwrap_or(false))
            .map(|s| s.id)
            .collect()
    }
}
