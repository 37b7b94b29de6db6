//! Domain Events
//!
//! Events raised when calculators and submissions change state.

use chrono::{DateTime, Utc};

use crate::domain::value_objects::EntityId;

/// All domain events in the booking bounded context
#[derive(Clone, Debug)]
pub enum DomainEvent {
    Calculator(CalculatorEvent),
    Submission(SubmissionEvent),
}

/// Calculator lifecycle events
#[derive(Clone, Debug)]
pub enum CalculatorEvent {
    Created {
        calculator_id: EntityId,
        name: String,
        field_count: usize,
        owner_id: EntityId,
        created_at: DateTime<Utc>,
    },

    Deleted {
        calculator_id: EntityId,
        removed_submissions: usize,
        deleted_at: DateTime<Utc>,
    },
}

/// Submission lifecycle events
#[derive(Clone, Debug)]
pub enum SubmissionEvent {
    Received {
        submission_id: EntityId,
        calculator_id: EntityId,
        submitted_at: DateTime<Utc>,
    },

    Deleted {
        submission_id: EntityId,
        deleted_at: DateTime<Utc>,
    },
}

impl DomainEvent {
    /// Get the aggregate ID this event belongs to
    pub fn aggregate_id(&self) -> &EntityId {
        match self {
            DomainEvent::Calculator(e) => match e {
                CalculatorEvent::Created { calculator_id, .. } => calculator_id,
                CalculatorEvent::Deleted { calculator_id, .. } => calculator_id,
            },
            DomainEvent::Submission(e) => match e {
                SubmissionEvent::Received { submission_id, .. } => submission_id,
                SubmissionEvent::Deleted { submission_id, .. } => submission_id,
            },
        }
    }

    /// Get event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            DomainEvent::Calculator(e) => match e {
                CalculatorEvent::Created { .. } => "calculator.created",
                CalculatorEvent::Deleted { .. } => "calculator.deleted",
            },
            DomainEvent::Submission(e) => match e {
                SubmissionEvent::Received { .. } => "submission.received",
                SubmissionEvent::Deleted { .. } => "submission.deleted",
            },
        }
    }
}
