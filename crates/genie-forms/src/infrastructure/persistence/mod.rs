//! In-memory repository implementations
//!
//! One shared store backs both repositories so deleting a calculator
//! can cascade over its submissions under the same roof.

use std::collections::HashMap;
use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::aggregates::{Calculator, Submission};
use crate::domain::events::DomainEvent;
use crate::ports::outbound::{
    CalculatorRepository, EventPublisher, PublishError, RepositoryError, SubmissionRepository,
};

/// In-memory calculator and submission store
#[derive(Default)]
pub struct InMemoryStore {
    calculators: RwLock<HashMap<String, Calculator>>,
    submissions: RwLock<HashMap<String, Submission>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CalculatorRepository for InMemoryStore {
    async fn find_by_id(&self, id: &str) -> Result<Option<Calculator>, RepositoryError> {
        let calculators = self.calculators.read();
        Ok(calculators.get(id).cloned())
    }

    async fn find_by_owner(&self, owner_id: &str) -> Result<Vec<Calculator>, RepositoryError> {
        let calculators = self.calculators.read();
        let mut found: Vec<Calculator> = calculators.values()
            .filter(|c| c.owner_id().as_str() == owner_id)
            .cloned()
            .collect();
        // newest first, id as tie-break so equal timestamps stay stable
        found.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| b.id().as_str().cmp(a.id().as_str()))
        });
        Ok(found)
    }

    async fn save(&self, calculator: &Calculator) -> Result<(), RepositoryError> {
        let mut calculators = self.calculators.write();
        calculators.insert(calculator.id().to_string(), calculator.clone());
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<usize, RepositoryError> {
        let mut calculators = self.calculators.write();
        if calculators.remove(id).is_none() {
            return Err(RepositoryError::NotFound);
        }

        // lock order is always calculators before submissions
        let mut submissions = self.submissions.write();
        let before = submissions.len();
        submissions.retain(|_, s| s.calculator_id.as_str() != id);
        Ok(before - submissions.len())
    }
}

#[async_trait]
impl SubmissionRepository for InMemoryStore {
    async fn find_by_id(&self, id: &str) -> Result<Option<Submission>, RepositoryError> {
        let submissions = self.submissions.read();
        Ok(submissions.get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Submission>, RepositoryError> {
        let submissions = self.submissions.read();
        let mut found: Vec<Submission> = submissions.values().cloned().collect();
        found.sort_by(|a, b| {
            b.submitted_at
                .cmp(&a.submitted_at)
                .then_with(|| b.id.as_str().cmp(a.id.as_str()))
        });
        Ok(found)
    }

    async fn find_by_calculator(
        &self,
        calculator_id: &str,
    ) -> Result<Vec<Submission>, RepositoryError> {
        let submissions = self.submissions.read();
        let mut found: Vec<Submission> = submissions.values()
            .filter(|s| s.calculator_id.as_str() == calculator_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| {
            b.submitted_at
                .cmp(&a.submitted_at)
                .then_with(|| b.id.as_str().cmp(a.id.as_str()))
        });
        Ok(found)
    }

    async fn save(&self, submission: &Submission) -> Result<(), RepositoryError> {
        let mut submissions = self.submissions.write();
        submissions.insert(submission.id.to_string(), submission.clone());
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        let mut submissions = self.submissions.write();
        if submissions.remove(id).is_none() {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

/// No-op event publisher for testing
#[derive(Default)]
pub struct NoOpEventPublisher;

#[async_trait]
impl EventPublisher for NoOpEventPublisher {
    async fn publish(&self, _events: Vec<DomainEvent>) -> Result<(), PublishError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{EntityId, FieldDefinition, FieldType};
    use std::collections::BTreeMap;
    use std::time::Duration;

    fn calculator(owner: &str) -> Calculator {
        let field = FieldDefinition::new(FieldType::Text);
        Calculator::create("Test Calculator", vec![field], EntityId::from_string(owner)).unwrap()
    }

    fn submission_for(calc: &Calculator) -> Submission {
        let mut data = BTreeMap::new();
        data.insert("note".to_string(), serde_json::json!("hi"));
        Submission::create(calc.id().clone(), calc.name(), data)
    }

    #[tokio::test]
    async fn test_calculator_save_and_find() {
        let store = InMemoryStore::new();
        let calc = calculator("owner-1");

        CalculatorRepository::save(&store, &calc).await.unwrap();

        let found = CalculatorRepository::find_by_id(&store, calc.id().as_str())
            .await
            .unwrap();
        assert_eq!(found.unwrap().name(), "Test Calculator");
    }

    #[tokio::test]
    async fn test_find_by_owner_newest_first() {
        let store = InMemoryStore::new();
        let older = calculator("owner-1");
        CalculatorRepository::save(&store, &older).await.unwrap();
        tokio::time::sleep(Duration::from_millis(2)).await;
        let newer = calculator("owner-1");
        CalculatorRepository::save(&store, &newer).await.unwrap();
        CalculatorRepository::save(&store, &calculator("owner-2"))
            .await
            .unwrap();

        let found = CalculatorRepository::find_by_owner(&store, "owner-1")
            .await
            .unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].id(), newer.id());
        assert_eq!(found[1].id(), older.id());
    }

    #[tokio::test]
    async fn test_delete_cascades_over_submissions() {
        let store = InMemoryStore::new();
        let doomed = calculator("owner-1");
        let survivor = calculator("owner-1");
        CalculatorRepository::save(&store, &doomed).await.unwrap();
        CalculatorRepository::save(&store, &survivor).await.unwrap();

        SubmissionRepository::save(&store, &submission_for(&doomed)).await.unwrap();
        SubmissionRepository::save(&store, &submission_for(&doomed)).await.unwrap();
        let kept = submission_for(&survivor);
        SubmissionRepository::save(&store, &kept).await.unwrap();

        let removed = CalculatorRepository::delete(&store, doomed.id().as_str())
            .await
            .unwrap();
        assert_eq!(removed, 2);

        let remaining = SubmissionRepository::find_all(&store).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, kept.id);
    }

    #[tokio::test]
    async fn test_delete_missing_calculator() {
        let store = InMemoryStore::new();
        let err = CalculatorRepository::delete(&store, "missing").await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound));
    }

    #[tokio::test]
    async fn test_submissions_newest_first() {
        let store = InMemoryStore::new();
        let calc = calculator("owner-1");

        let older = submission_for(&calc);
        SubmissionRepository::save(&store, &older).await.unwrap();
        tokio::time::sleep(Duration::from_millis(2)).await;
        let newer = submission_for(&calc);
        SubmissionRepository::save(&store, &newer).await.unwrap();

        let all = SubmissionRepository::find_all(&store).await.unwrap();
        assert_eq!(all[0].id, newer.id);
        assert_eq!(all[1].id, older.id);

        let by_calc = SubmissionRepository::find_by_calculator(&store, calc.id().as_str())
            .await
            .unwrap();
        assert_eq!(by_calc.len(), 2);
    }

    #[tokio::test]
    async fn test_delete_missing_submission() {
        let store = InMemoryStore::new();
        let err = SubmissionRepository::delete(&store, "missing").await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound));
    }
}
