//! FormGenie Booking Calculator Platform
//!
//! Core domain for building custom booking forms ("calculators"),
//! collecting customer submissions through them, and reviewing the
//! results on a dashboard. Follows Domain-Driven Design (DDD) with
//! hexagonal ports.
//!
//! ## Architecture
//!
//! - **Domain Layer**: Field schema value objects, calculator/submission
//!   aggregates, rendering and formatting services
//! - **Application Layer**: Use case orchestration, builder draft
//!   registry, DTOs
//! - **Ports Layer**: Repository, notification and event interfaces
//! - **Infrastructure Layer**: In-memory storage, HTTP notification
//!   delivery
//!
//! ## Key Aggregates
//!
//! - **Calculator**: A published booking form, a named ordered list of
//!   typed fields
//! - **CalculatorDraft**: The builder's mutable working copy, in memory
//!   only until saved
//! - **Submission**: An immutable customer booking record

pub mod domain;
pub mod application;
pub mod ports;
pub mod infrastructure;

// Re-exports for convenience
pub use domain::aggregates::{Calculator, CalculatorDraft, CalculatorError, DraftError, Submission};
pub use domain::value_objects::{
    EntityId, FieldDefinition, FieldOption, FieldType, ServiceOption, SERVICE_CATALOG,
};
pub use domain::events::{CalculatorEvent, DomainEvent, SubmissionEvent};
pub use domain::services::renderer::{self, Control, FormData, RenderPlan, RenderedField};
pub use domain::services::formatting;
pub use application::{BuilderError, BuilderRegistry, CalculatorService, DashboardService, SubmissionService};
pub use ports::inbound::{CalculatorUseCases, DashboardUseCases, SubmissionUseCases, UseCaseError};
pub use ports::outbound::{
    CalculatorRepository, EventPublisher, NotificationGateway, NotifyError, RepositoryError,
    SubmissionRepository,
};
