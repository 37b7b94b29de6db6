//! Query handlers
//!
//! Read models for the owner dashboard. Submissions are rendered
//! through the schema of their calculator when it still exists;
//! otherwise the raw stored keys are shown.

use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;

use crate::application::dto::*;
use crate::domain::aggregates::{Calculator, Submission};
use crate::domain::services::formatting;
use crate::domain::services::renderer::FormData;
use crate::domain::value_objects::{EntityId, FieldDefinition};
use crate::ports::inbound::{DashboardUseCases, UseCaseError};
use crate::ports::outbound::{CalculatorRepository, SubmissionRepository};

/// How many answers a submission card shows before "and more"
const PREVIEW_ENTRIES: usize = 3;

/// Public booking page URL for a calculator
pub fn booking_link(public_url: &str, calculator_id: &str) -> String {
    format!("{}/book/{}", public_url.trim_end_matches('/'), calculator_id)
}

/// Dashboard read-model service
pub struct DashboardService {
    calculator_repo: Arc<dyn CalculatorRepository>,
    submission_repo: Arc<dyn SubmissionRepository>,
    public_url: String,
}

impl DashboardService {
    pub fn new(
        calculator_repo: Arc<dyn CalculatorRepository>,
        submission_repo: Arc<dyn SubmissionRepository>,
        public_url: impl Into<String>,
    ) -> Self {
        Self {
            calculator_repo,
            submission_repo,
            public_url: public_url.into(),
        }
    }

    async fn schema_for(
        &self,
        calculator_id: &EntityId,
    ) -> Result<Option<Calculator>, UseCaseError> {
        self.calculator_repo.find_by_id(calculator_id.as_str()).await
            .map_err(|e| UseCaseError::RepositoryError(e.to_string()))
    }
}

#[async_trait]
impl DashboardUseCases for DashboardService {
    async fn overview(&self, owner_id: &str) -> Result<DashboardOverview, UseCaseError> {
        let calculators = self.calculator_repo.find_by_owner(owner_id).await
            .map_err(|e| UseCaseError::RepositoryError(e.to_string()))?;

        let calculator_cards = calculators
            .iter()
            .map(|calc| CalculatorSummary {
                id: calc.id().to_string(),
                name: calc.name().to_string(),
                field_count: calc.fields().len(),
                booking_link: booking_link(&self.public_url, calc.id().as_str()),
                created_at: calc.created_at(),
            })
            .collect();

        let submissions = self.submission_repo.find_all().await
            .map_err(|e| UseCaseError::RepositoryError(e.to_string()))?;

        // Schemas fetched once per calculator; deleted ones stay absent
        let mut schemas: HashMap<EntityId, Calculator> = HashMap::new();
        for submission in &submissions {
            if schemas.contains_key(&submission.calculator_id) {
                continue;
            }
            if let Some(calc) = self.schema_for(&submission.calculator_id).await? {
                schemas.insert(submission.calculator_id.clone(), calc);
            }
        }

        let submission_cards = submissions
            .iter()
            .map(|submission| {
                let fields = schemas
                    .get(&submission.calculator_id)
                    .map(|c| c.fields())
                    .unwrap_or(&[]);
                summarize(submission, fields)
            })
            .collect();

        Ok(DashboardOverview {
            calculators: calculator_cards,
            submissions: submission_cards,
        })
    }

    async fn submission_detail(&self, id: &str) -> Result<SubmissionDetail, UseCaseError> {
        let submission = self.submission_repo.find_by_id(id).await
            .map_err(|e| UseCaseError::RepositoryError(e.to_string()))?
            .ok_or_else(|| UseCaseError::NotFound("Submission not found".into()))?;

        let calculator = self.schema_for(&submission.calculator_id).await?;
        let fields = calculator.as_ref().map(|c| c.fields()).unwrap_or(&[]);

        Ok(SubmissionDetail {
            id: submission.id.to_string(),
            calculator_id: submission.calculator_id.to_string(),
            calculator_name: display_title(&submission.calculator_name),
            submitted_at: submission.submitted_at,
            entries: ordered_entries(fields, &submission.data),
        })
    }
}

fn summarize(submission: &Submission, fields: &[FieldDefinition]) -> SubmissionSummary {
    let entries = ordered_entries(fields, &submission.data);
    let entry_count = entries.len();
    SubmissionSummary {
        id: submission.id.to_string(),
        calculator_id: submission.calculator_id.to_string(),
        calculator_name: display_title(&submission.calculator_name),
        submitted_at: submission.submitted_at,
        preview: entries.into_iter().take(PREVIEW_ENTRIES).collect(),
        entry_count,
    }
}

fn display_title(name: &str) -> String {
    if name.is_empty() {
        "Booking Submission".to_string()
    } else {
        name.to_string()
    }
}

/// Answers in schema order, then any keys the schema no longer knows
fn ordered_entries(fields: &[FieldDefinition], data: &FormData) -> Vec<SubmissionEntry> {
    let mut entries = Vec::with_capacity(data.len());
    let mut leftover: Vec<&String> = data.keys().collect();

    for field in fields {
        let key = field.key();
        if let Some(value) = data.get(&key) {
            leftover.retain(|k| **k != key);
            entries.push(SubmissionEntry {
                label: formatting::field_label(fields, &key),
                value: formatting::format_value(fields, &key, value),
                key,
            });
        }
    }

    for key in leftover {
        entries.push(SubmissionEntry {
            key: key.clone(),
            label: formatting::field_label(fields, key),
            value: formatting::format_value(fields, key, &data[key]),
        });
    }

    entries
}
