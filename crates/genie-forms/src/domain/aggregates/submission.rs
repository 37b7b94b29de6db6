//! Submission Record
//!
//! An immutable customer booking. The calculator name is denormalized at
//! submission time so the dashboard can still title the card after the
//! calculator itself is deleted.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use crate::domain::value_objects::EntityId;

/// A submitted booking form
#[derive(Clone, Debug)]
pub struct Submission {
    pub id: EntityId,
    pub calculator_id: EntityId,
    pub calculator_name: String,
    pub data: BTreeMap<String, serde_json::Value>,
    pub submitted_at: DateTime<Utc>,
}

impl Submission {
    pub fn create(
        calculator_id: EntityId,
        calculator_name: impl Into<String>,
        data: BTreeMap<String, serde_json::Value>,
    ) -> Self {
        Self {
            id: EntityId::new(),
            calculator_id,
            calculator_name: calculator_name.into(),
            data,
            submitted_at: Utc::now(),
        }
    }
}
