//! Field Type Catalog
//!
//! The fixed set of control types a calculator field can take. Wire ids
//! and display names are part of the stored schema format and must stay
//! stable.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A field's control type
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    #[serde(rename = "text")]
    Text,
    #[serde(rename = "textarea")]
    TextArea,
    #[serde(rename = "number")]
    Number,
    #[serde(rename = "select")]
    Select,
    #[serde(rename = "radio")]
    Radio,
    #[serde(rename = "checkbox")]
    Checkbox,
    #[serde(rename = "date")]
    Date,
    #[serde(rename = "switch")]
    Switch,
    #[serde(rename = "additional-cleaning-services")]
    AdditionalServices,
}

impl FieldType {
    /// All field types, in the order the builder palette offers them
    pub const ALL: [FieldType; 9] = [
        FieldType::Text,
        FieldType::TextArea,
        FieldType::Number,
        FieldType::Select,
        FieldType::Radio,
        FieldType::Checkbox,
        FieldType::Date,
        FieldType::Switch,
        FieldType::AdditionalServices,
    ];

    /// Stable wire id, as stored in calculator schemas
    pub fn id(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::TextArea => "textarea",
            Self::Number => "number",
            Self::Select => "select",
            Self::Radio => "radio",
            Self::Checkbox => "checkbox",
            Self::Date => "date",
            Self::Switch => "switch",
            Self::AdditionalServices => "additional-cleaning-services",
        }
    }

    /// Human-readable name shown in the builder palette
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Text => "Text Input",
            Self::TextArea => "Text Area",
            Self::Number => "Number Input",
            Self::Select => "Dropdown Select",
            Self::Radio => "Radio Buttons",
            Self::Checkbox => "Checkbox",
            Self::Date => "Date Picker",
            Self::Switch => "Switch Toggle",
            Self::AdditionalServices => "Additional Cleaning Services",
        }
    }

    /// Look up a field type by its wire id
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.id() == id)
    }

    /// Choice fields carry a user-editable option list
    pub fn has_options(&self) -> bool {
        matches!(self, Self::Select | Self::Radio)
    }

    /// Boolean fields submit true/false and start unchecked
    pub fn is_boolean(&self) -> bool {
        matches!(self, Self::Checkbox | Self::Switch)
    }

    /// Free-entry fields accept a placeholder in the builder
    pub fn has_placeholder(&self) -> bool {
        matches!(self, Self::Text | Self::TextArea | Self::Number)
    }

    /// The multi-select cleaning services field
    pub fn is_multi_service(&self) -> bool {
        matches!(self, Self::AdditionalServices)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}
