//! Inbound ports - use case interfaces offered to driving adapters
//!
//! Implemented by application services, consumed by the HTTP layer.

use async_trait::async_trait;

use crate::application::dto::{DashboardOverview, SubmissionDetail, SubmissionReceipt};
use crate::domain::aggregates::{Calculator, CalculatorDraft};
use crate::domain::services::renderer::{FormData, RenderPlan};

/// Calculator management use cases
#[async_trait]
pub trait CalculatorUseCases: Send + Sync {
    /// Validates and persists a draft as a new calculator.
    async fn save_draft(
        &self,
        owner_id: &str,
        draft: &CalculatorDraft,
    ) -> Result<Calculator, UseCaseError>;

    async fn get_calculator(&self, id: &str) -> Result<Option<Calculator>, UseCaseError>;

    /// Deletes a calculator and its submissions, returning the submission count.
    async fn delete_calculator(&self, id: &str) -> Result<usize, UseCaseError>;
}

/// Public booking-form use cases
#[async_trait]
pub trait SubmissionUseCases: Send + Sync {
    /// Render plan for the public booking page of a calculator.
    async fn booking_form(&self, calculator_id: &str) -> Result<RenderPlan, UseCaseError>;

    /// Validates and stores a booking, then notifies the owner.
    async fn submit_booking(
        &self,
        calculator_id: &str,
        input: FormData,
    ) -> Result<SubmissionReceipt, UseCaseError>;

    async fn delete_submission(&self, id: &str) -> Result<(), UseCaseError>;
}

/// Dashboard read-model use cases
#[async_trait]
pub trait DashboardUseCases: Send + Sync {
    async fn overview(&self, owner_id: &str) -> Result<DashboardOverview, UseCaseError>;

    async fn submission_detail(&self, id: &str) -> Result<SubmissionDetail, UseCaseError>;
}

/// Use case operation errors
#[derive(Debug)]
pub enum UseCaseError {
    NotFound(String),
    ValidationError(String),
    DomainError(String),
    RepositoryError(String),
    Unauthorized,
}

impl std::fmt::Display for UseCaseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UseCaseError::NotFound(msg) => write!(f, "Not found: {}", msg),
            UseCaseError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            UseCaseError::DomainError(msg) => write!(f, "Domain error: {}", msg),
            UseCaseError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
            UseCaseError::Unauthorized => write!(f, "Unauthorized"),
        }
    }
}

impl std::error::Error for UseCaseError {}
