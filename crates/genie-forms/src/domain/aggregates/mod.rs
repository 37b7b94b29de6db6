//! Aggregates module

pub mod calculator;
pub mod draft;
pub mod submission;

pub use calculator::{Calculator, CalculatorError};
pub use draft::{CalculatorDraft, DraftError};
pub use submission::Submission;
