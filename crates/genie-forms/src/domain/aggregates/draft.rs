//! Calculator Draft
//!
//! The builder's working copy of a calculator. A draft lives purely in
//! memory: nothing is persisted until `build` turns it into a
//! [`Calculator`]. Every mutation goes through a named operation so the
//! builder surface is the whole story of what can change.

use crate::domain::value_objects::{service_name, EntityId, FieldDefinition, FieldOption, FieldType};

use super::calculator::{Calculator, CalculatorError};

/// An unsaved calculator being assembled in the builder
#[derive(Clone, Debug, Default)]
pub struct CalculatorDraft {
    name: String,
    fields: Vec<FieldDefinition>,
}

impl CalculatorDraft {
    /// Start an empty draft
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    // =========================================================================
    // Builder Operations
    // =========================================================================

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Append a new field of the given type with builder defaults
    pub fn add_field(&mut self, field_type: FieldType) -> FieldDefinition {
        let field = FieldDefinition::new(field_type);
        self.fields.push(field.clone());
        field
    }

    /// Patch a field's label, placeholder or required flag.
    ///
    /// An empty placeholder clears it. The field id and type never
    /// change after creation, so stored keys stay stable.
    pub fn update_field(
        &mut self,
        field_id: &str,
        label: Option<String>,
        placeholder: Option<String>,
        required: Option<bool>,
    ) -> Result<(), DraftError> {
        let field = self.field_mut(field_id)?;
        if let Some(label) = label {
            field.label = label;
        }
        if let Some(placeholder) = placeholder {
            field.placeholder = if placeholder.is_empty() {
                None
            } else {
                Some(placeholder)
            };
        }
        if let Some(required) = required {
            field.required = required;
        }
        Ok(())
    }

    pub fn remove_field(&mut self, field_id: &str) -> Result<(), DraftError> {
        let before = self.fields.len();
        self.fields.retain(|f| f.id != field_id);
        if self.fields.len() == before {
            return Err(DraftError::FieldNotFound(field_id.into()));
        }
        Ok(())
    }

    /// Append the next numbered option ("Option 2", "Option 3", ...)
    pub fn add_option(&mut self, field_id: &str) -> Result<FieldOption, DraftError> {
        let field = self.choice_field_mut(field_id)?;
        let option = FieldOption::numbered(field.options.len() + 1);
        field.options.push(option.clone());
        Ok(option)
    }

    /// Relabel an option; its value is re-derived from the new label
    pub fn update_option(
        &mut self,
        field_id: &str,
        index: usize,
        label: impl Into<String>,
    ) -> Result<FieldOption, DraftError> {
        let field = self.choice_field_mut(field_id)?;
        let slot = field
            .options
            .get_mut(index)
            .ok_or(DraftError::OptionIndexOutOfRange(index))?;
        *slot = FieldOption::from_label(label.into());
        Ok(slot.clone())
    }

    pub fn remove_option(&mut self, field_id: &str, index: usize) -> Result<(), DraftError> {
        let field = self.choice_field_mut(field_id)?;
        if index >= field.options.len() {
            return Err(DraftError::OptionIndexOutOfRange(index));
        }
        field.options.remove(index);
        Ok(())
    }

    /// Flip one catalog service on or off; returns the new state
    pub fn toggle_service(&mut self, field_id: &str, service_id: &str) -> Result<bool, DraftError> {
        if service_name(service_id).is_none() {
            return Err(DraftError::UnknownService(service_id.into()));
        }
        let field = self.field_mut(field_id)?;
        if !field.field_type.is_multi_service() {
            return Err(DraftError::ServicesNotSupported(field.label.clone()));
        }
        let entry = field
            .selected_services
            .entry(service_id.to_string())
            .or_insert(false);
        *entry = !*entry;
        Ok(*entry)
    }

    /// Move the field at `from` so it ends up at position `to`
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<(), DraftError> {
        let len = self.fields.len();
        if from >= len {
            return Err(DraftError::PositionOutOfRange(from));
        }
        if to >= len {
            return Err(DraftError::PositionOutOfRange(to));
        }
        let field = self.fields.remove(from);
        self.fields.insert(to, field);
        Ok(())
    }

    /// Turn the draft into a calculator owned by `owner_id`.
    ///
    /// Schema validation happens here; the draft is untouched on failure
    /// so the builder can fix it and retry.
    pub fn build(&self, owner_id: EntityId) -> Result<Calculator, CalculatorError> {
        Calculator::create(self.name.clone(), self.fields.clone(), owner_id)
    }

    fn field_mut(&mut self, field_id: &str) -> Result<&mut FieldDefinition, DraftError> {
        self.fields
            .iter_mut()
            .find(|f| f.id == field_id)
            .ok_or_else(|| DraftError::FieldNotFound(field_id.into()))
    }

    fn choice_field_mut(&mut self, field_id: &str) -> Result<&mut FieldDefinition, DraftError> {
        let field = self.field_mut(field_id)?;
        if !field.field_type.has_options() {
            return Err(DraftError::OptionsNotSupported(field.label.clone()));
        }
        Ok(field)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    FieldNotFound(String),
    OptionsNotSupported(String),
    OptionIndexOutOfRange(usize),
    ServicesNotSupported(String),
    UnknownService(String),
    PositionOutOfRange(usize),
}

impl std::error::Error for DraftError {}

impl std::fmt::Display for DraftError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FieldNotFound(id) => write!(f, "No field with id {}", id),
            Self::OptionsNotSupported(label) => {
                write!(f, "Field \"{}\" does not take options", label)
            }
            Self::OptionIndexOutOfRange(index) => write!(f, "No option at index {}", index),
            Self::ServicesNotSupported(label) => {
                write!(f, "Field \"{}\" does not take services", label)
            }
            Self::UnknownService(id) => write!(f, "Unknown service: {}", id),
            Self::PositionOutOfRange(index) => write!(f, "No field at position {}", index),
        }
    }
}
