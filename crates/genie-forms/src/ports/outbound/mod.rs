//! Outbound ports - interfaces the application core needs from the outside world
//!
//! Implemented by infrastructure adapters (persistence, notification delivery).

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::aggregates::{Calculator, Submission};
use crate::domain::events::DomainEvent;
use crate::domain::services::renderer::FormData;

// ============================================================================
// Repository Ports
// ============================================================================

/// Repository for calculator aggregates.
#[async_trait]
pub trait CalculatorRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<Calculator>, RepositoryError>;

    /// All calculators belonging to an owner, newest first.
    async fn find_by_owner(&self, owner_id: &str) -> Result<Vec<Calculator>, RepositoryError>;

    async fn save(&self, calculator: &Calculator) -> Result<(), RepositoryError>;

    /// Deletes a calculator together with its submissions.
    ///
    /// Returns the number of submissions removed alongside the calculator.
    async fn delete(&self, id: &str) -> Result<usize, RepositoryError>;
}

/// Repository for booking submissions.
#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<Submission>, RepositoryError>;

    /// Every stored submission, newest first.
    async fn find_all(&self) -> Result<Vec<Submission>, RepositoryError>;

    async fn find_by_calculator(
        &self,
        calculator_id: &str,
    ) -> Result<Vec<Submission>, RepositoryError>;

    async fn save(&self, submission: &Submission) -> Result<(), RepositoryError>;

    async fn delete(&self, id: &str) -> Result<(), RepositoryError>;
}

/// Repository operation errors
#[derive(Debug)]
pub enum RepositoryError {
    NotFound,
    DuplicateKey(String),
    StorageError(String),
}

impl std::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RepositoryError::NotFound => write!(f, "Entity not found"),
            RepositoryError::DuplicateKey(key) => write!(f, "Duplicate key: {}", key),
            RepositoryError::StorageError(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for RepositoryError {}

// ============================================================================
// Notification Port
// ============================================================================

/// Payload delivered to the booking-notification endpoint.
#[derive(Clone, Debug, Serialize)]
pub struct SubmissionNotice {
    #[serde(rename = "submissionData")]
    pub submission: SubmissionPayload,
    #[serde(rename = "ownerEmail")]
    pub owner_email: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct SubmissionPayload {
    pub calculator_id: String,
    pub calculator_name: String,
    pub data: FormData,
    pub submitted_at: DateTime<Utc>,
}

impl SubmissionNotice {
    pub fn for_submission(submission: &Submission, owner_email: impl Into<String>) -> Self {
        Self {
            submission: SubmissionPayload {
                calculator_id: submission.calculator_id.to_string(),
                calculator_name: submission.calculator_name.clone(),
                data: submission.data.clone(),
                submitted_at: submission.submitted_at,
            },
            owner_email: owner_email.into(),
        }
    }
}

/// Delivers owner notifications for new submissions.
///
/// Delivery is best-effort: callers record the outcome but never fail the
/// submission because of it.
#[async_trait]
pub trait NotificationGateway: Send + Sync {
    async fn notify_submission(&self, notice: &SubmissionNotice) -> Result<(), NotifyError>;
}

#[derive(Debug)]
pub enum NotifyError {
    /// No endpoint configured; nothing was sent.
    Disabled,
    /// Request could not be delivered.
    Delivery(String),
    /// Endpoint answered with a non-success status.
    Rejected(u16),
}

impl std::fmt::Display for NotifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotifyError::Disabled => write!(f, "Notification delivery is disabled"),
            NotifyError::Delivery(msg) => write!(f, "Notification delivery failed: {}", msg),
            NotifyError::Rejected(status) => {
                write!(f, "Notification endpoint rejected the request: HTTP {}", status)
            }
        }
    }
}

impl std::error::Error for NotifyError {}

// ============================================================================
// Event Publishing Port
// ============================================================================

/// Event publisher for domain events
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, events: Vec<DomainEvent>) -> Result<(), PublishError>;
}

#[derive(Debug)]
pub struct PublishError(pub String);

impl std::fmt::Display for PublishError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Event publish error: {}", self.0)
    }
}

impl std::error::Error for PublishError {}
