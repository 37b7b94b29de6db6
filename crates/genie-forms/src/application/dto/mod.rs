//! Data Transfer Objects (DTOs)
//!
//! Objects for transferring data across boundaries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::aggregates::CalculatorDraft;
use crate::domain::value_objects::FieldDefinition;

// =============================================================================
// Builder Commands
// =============================================================================

/// Partial update for one draft field; absent members are left alone.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FieldPatch {
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub required: Option<bool>,
}

// =============================================================================
// Builder Views
// =============================================================================

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DraftView {
    pub name: String,
    pub fields: Vec<FieldDefinition>,
}

impl From<&CalculatorDraft> for DraftView {
    fn from(draft: &CalculatorDraft) -> Self {
        Self {
            name: draft.name().to_string(),
            fields: draft.fields().to_vec(),
        }
    }
}

/// One selectable field type for the builder palette
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FieldTypeView {
    pub id: String,
    pub name: String,
}

// =============================================================================
// Dashboard Views (Read Models)
// =============================================================================

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DashboardOverview {
    pub calculators: Vec<CalculatorSummary>,
    pub submissions: Vec<SubmissionSummary>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CalculatorSummary {
    pub id: String,
    pub name: String,
    pub field_count: usize,
    /// Absolute URL of the public booking page.
    pub booking_link: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SubmissionSummary {
    pub id: String,
    pub calculator_id: String,
    /// Display title; "Booking Submission" when the stored name is empty.
    pub calculator_name: String,
    pub submitted_at: DateTime<Utc>,
    /// First few answers, formatted for display.
    pub preview: Vec<SubmissionEntry>,
    pub entry_count: usize,
}

/// One formatted answer line
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SubmissionEntry {
    pub key: String,
    pub label: String,
    pub value: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SubmissionDetail {
    pub id: String,
    pub calculator_id: String,
    pub calculator_name: String,
    pub submitted_at: DateTime<Utc>,
    pub entries: Vec<SubmissionEntry>,
}

// =============================================================================
// Booking Views
// =============================================================================

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub submission_id: String,
    pub calculator_id: String,
    pub submitted_at: DateTime<Utc>,
    pub notification: NotificationStatus,
}

/// Outcome of the best-effort owner notification
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationStatus {
    Sent,
    Failed,
    Disabled,
}
