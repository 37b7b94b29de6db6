//! Application layer
//!
//! Orchestrates use cases and coordinates domain objects.

pub mod builder;
pub mod commands;
pub mod dto;
pub mod queries;

pub use builder::{BuilderError, BuilderRegistry};
pub use commands::{CalculatorService, SubmissionService};
pub use queries::DashboardService;
pub use dto::*;
