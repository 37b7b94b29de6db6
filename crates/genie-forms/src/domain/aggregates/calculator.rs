//! Calculator Aggregate
//!
//! A published booking form: a named, ordered list of typed fields.
//! Calculators are immutable once created; the builder works on a
//! [`CalculatorDraft`](super::draft::CalculatorDraft) and saves a new
//! calculator each time.

use chrono::{DateTime, Utc};
use std::collections::HashSet;

use crate::domain::events::{CalculatorEvent, DomainEvent};
use crate::domain::value_objects::{EntityId, FieldDefinition};

/// Calculator aggregate root
#[derive(Clone, Debug)]
pub struct Calculator {
    id: EntityId,
    name: String,
    fields: Vec<FieldDefinition>,
    owner_id: EntityId,
    created_at: DateTime<Utc>,
    // Domain events accumulated during operations
    events: Vec<DomainEvent>,
}

impl Calculator {
    /// Create a new calculator (factory method).
    ///
    /// Enforces the schema invariants: a non-empty name, at least one
    /// field, unique field ids, and at least one option on every
    /// dropdown or radio field.
    pub fn create(
        name: impl Into<String>,
        fields: Vec<FieldDefinition>,
        owner_id: EntityId,
    ) -> Result<Self, CalculatorError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(CalculatorError::EmptyName);
        }
        if fields.is_empty() {
            return Err(CalculatorError::NoFields);
        }

        let mut seen = HashSet::new();
        for field in &fields {
            if !field.id.is_empty() && !seen.insert(field.id.clone()) {
                return Err(CalculatorError::DuplicateFieldId(field.id.clone()));
            }
            if field.field_type.has_options() && field.options.is_empty() {
                return Err(CalculatorError::MissingOptions(field.label.clone()));
            }
        }

        let now = Utc::now();
        let id = EntityId::new();

        let mut calculator = Self {
            id: id.clone(),
            name: name.clone(),
            fields,
            owner_id: owner_id.clone(),
            created_at: now,
            events: vec![],
        };

        let field_count = calculator.fields.len();
        calculator.raise_event(DomainEvent::Calculator(CalculatorEvent::Created {
            calculator_id: id,
            name,
            field_count,
            owner_id,
            created_at: now,
        }));

        Ok(calculator)
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    pub fn owner_id(&self) -> &EntityId {
        &self.owner_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Get and clear accumulated domain events
    pub fn take_events(&mut self) -> Vec<DomainEvent> {
        std::mem::take(&mut self.events)
    }

    fn raise_event(&mut self, event: DomainEvent) {
        self.events.push(event);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    EmptyName,
    NoFields,
    DuplicateFieldId(String),
    MissingOptions(String),
}

impl std::error::Error for CalculatorError {}

impl std::fmt::Display for CalculatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Calculator name cannot be empty"),
            Self::NoFields => write!(f, "Please add at least one field to the calculator"),
            Self::DuplicateFieldId(id) => write!(f, "Duplicate field id: {}", id),
            Self::MissingOptions(label) => {
                write!(f, "Field \"{}\" needs at least one option", label)
            }
        }
    }
}
