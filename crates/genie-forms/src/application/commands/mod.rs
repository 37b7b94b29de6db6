//! Command handlers
//!
//! Application services that orchestrate use cases.

use std::sync::Arc;
use async_trait::async_trait;
use chrono::Utc;

use crate::application::dto::*;
use crate::domain::aggregates::{Calculator, CalculatorDraft, Submission};
use crate::domain::events::{CalculatorEvent, DomainEvent, SubmissionEvent};
use crate::domain::services::renderer::{self, FormData, RenderPlan};
use crate::domain::value_objects::EntityId;
use crate::ports::inbound::{CalculatorUseCases, SubmissionUseCases, UseCaseError};
use crate::ports::outbound::{
    CalculatorRepository, EventPublisher, NotificationGateway, NotifyError, RepositoryError,
    SubmissionNotice, SubmissionRepository,
};

/// Calculator application service
pub struct CalculatorService {
    calculator_repo: Arc<dyn CalculatorRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl CalculatorService {
    pub fn new(
        calculator_repo: Arc<dyn CalculatorRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            calculator_repo,
            event_publisher,
        }
    }
}

#[async_trait]
impl CalculatorUseCases for CalculatorService {
    async fn save_draft(
        &self,
        owner_id: &str,
        draft: &CalculatorDraft,
    ) -> Result<Calculator, UseCaseError> {
        // Validate the schema and mint the aggregate
        let mut calculator = draft
            .build(EntityId::from_string(owner_id))
            .map_err(|e| UseCaseError::ValidationError(e.to_string()))?;

        // Persist
        self.calculator_repo.save(&calculator).await
            .map_err(|e| UseCaseError::RepositoryError(e.to_string()))?;

        // Publish events
        let events = calculator.take_events();
        self.event_publisher.publish(events).await
            .map_err(|e| UseCaseError::RepositoryError(e.to_string()))?;

        Ok(calculator)
    }

    async fn get_calculator(&self, id: &str) -> Result<Option<Calculator>, UseCaseError> {
        self.calculator_repo.find_by_id(id).await
            .map_err(|e| UseCaseError::RepositoryError(e.to_string()))
    }

    async fn delete_calculator(&self, id: &str) -> Result<usize, UseCaseError> {
        let removed = self.calculator_repo.delete(id).await
            .map_err(|e| match e {
                RepositoryError::NotFound => UseCaseError::NotFound("Calculator not found".into()),
                other => UseCaseError::RepositoryError(other.to_string()),
            })?;

        let event = DomainEvent::Calculator(CalculatorEvent::Deleted {
            calculator_id: EntityId::from_string(id),
            removed_submissions: removed,
            deleted_at: Utc::now(),
        });
        self.event_publisher.publish(vec![event]).await
            .map_err(|e| UseCaseError::RepositoryError(e.to_string()))?;

        Ok(removed)
    }
}

/// Booking submission application service
pub struct SubmissionService {
    calculator_repo: Arc<dyn CalculatorRepository>,
    submission_repo: Arc<dyn SubmissionRepository>,
    notifier: Arc<dyn NotificationGateway>,
    event_publisher: Arc<dyn EventPublisher>,
    owner_email: String,
}

impl SubmissionService {
    pub fn new(
        calculator_repo: Arc<dyn CalculatorRepository>,
        submission_repo: Arc<dyn SubmissionRepository>,
        notifier: Arc<dyn NotificationGateway>,
        event_publisher: Arc<dyn EventPublisher>,
        owner_email: impl Into<String>,
    ) -> Self {
        Self {
            calculator_repo,
            submission_repo,
            notifier,
            event_publisher,
            owner_email: owner_email.into(),
        }
    }
}

#[async_trait]
impl SubmissionUseCases for SubmissionService {
    async fn booking_form(&self, calculator_id: &str) -> Result<RenderPlan, UseCaseError> {
        let calculator = self.calculator_repo.find_by_id(calculator_id).await
            .map_err(|e| UseCaseError::RepositoryError(e.to_string()))?
            .ok_or_else(|| UseCaseError::NotFound("Calculator not found".into()))?;

        Ok(renderer::render_plan(&calculator))
    }

    async fn submit_booking(
        &self,
        calculator_id: &str,
        input: FormData,
    ) -> Result<SubmissionReceipt, UseCaseError> {
        let calculator = self.calculator_repo.find_by_id(calculator_id).await
            .map_err(|e| UseCaseError::RepositoryError(e.to_string()))?
            .ok_or_else(|| UseCaseError::NotFound("Calculator not found".into()))?;

        // Fill defaults for untouched fields, drop unknown keys
        let data = renderer::merge_input(calculator.fields(), &input);

        // Reject before anything is stored
        renderer::validate(calculator.fields(), &data)
            .map_err(|e| UseCaseError::ValidationError(e.to_string()))?;

        let submission = Submission::create(
            calculator.id().clone(),
            calculator.name(),
            data,
        );

        self.submission_repo.save(&submission).await
            .map_err(|e| UseCaseError::RepositoryError(e.to_string()))?;

        let event = DomainEvent::Submission(SubmissionEvent::Received {
            submission_id: submission.id.clone(),
            calculator_id: submission.calculator_id.clone(),
            submitted_at: submission.submitted_at,
        });
        self.event_publisher.publish(vec![event]).await
            .map_err(|e| UseCaseError::RepositoryError(e.to_string()))?;

        // Best-effort owner notification; the booking stands either way
        let notice = SubmissionNotice::for_submission(&submission, self.owner_email.clone());
        let notification = match self.notifier.notify_submission(&notice).await {
            Ok(()) => NotificationStatus::Sent,
            Err(NotifyError::Disabled) => NotificationStatus::Disabled,
            Err(err) => {
                tracing::warn!(
                    submission_id = %submission.id,
                    error = %err,
                    "Owner notification failed"
                );
                NotificationStatus::Failed
            }
        };

        Ok(SubmissionReceipt {
            submission_id: submission.id.to_string(),
            calculator_id: submission.calculator_id.to_string(),
            submitted_at: submission.submitted_at,
            notification,
        })
    }

    async fn delete_submission(&self, id: &str) -> Result<(), UseCaseError> {
        self.submission_repo.delete(id).await
            .map_err(|e| match e {
                RepositoryError::NotFound => UseCaseError::NotFound("Submission not found".into()),
                other => UseCaseError::RepositoryError(other.to_string()),
            })?;

        let event = DomainEvent::Submission(SubmissionEvent::Deleted {
            submission_id: EntityId::from_string(id),
            deleted_at: Utc::now(),
        });
        self.event_publisher.publish(vec![event]).await
            .map_err(|e| UseCaseError::RepositoryError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::FieldType;
    use crate::infrastructure::notify::RecordingNotificationGateway;
    use crate::infrastructure::persistence::InMemoryStore;
    use crate::infrastructure::NoOpEventPublisher;
    use crate::ports::outbound::PublishError;
    use parking_lot::Mutex;

    struct CapturingPublisher {
        events: Mutex<Vec<DomainEvent>>,
    }

    impl CapturingPublisher {
        fn new() -> Self {
            Self {
                events: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl EventPublisher for CapturingPublisher {
        async fn publish(&self, mut events: Vec<DomainEvent>) -> Result<(), PublishError> {
            self.events.lock().append(&mut events);
            Ok(())
        }
    }

    struct FailingGateway;

    #[async_trait]
    impl NotificationGateway for FailingGateway {
        async fn notify_submission(&self, _notice: &SubmissionNotice) -> Result<(), NotifyError> {
            Err(NotifyError::Rejected(500))
        }
    }

    fn booking_draft() -> (CalculatorDraft, String, String) {
        let mut draft = CalculatorDraft::new();
        draft.set_name("Office Cleaning");
        let name = draft.add_field(FieldType::Text);
        draft
            .update_field(&name.id, Some("Full Name".into()), None, Some(true))
            .unwrap();
        let rush = draft.add_field(FieldType::Switch);
        draft
            .update_field(&rush.id, Some("Rush Job".into()), None, None)
            .unwrap();
        (draft, name.id, rush.id)
    }

    fn submission_service(
        store: Arc<InMemoryStore>,
        notifier: Arc<dyn NotificationGateway>,
    ) -> SubmissionService {
        SubmissionService::new(
            store.clone(),
            store,
            notifier,
            Arc::new(NoOpEventPublisher),
            "owner@example.com",
        )
    }

    async fn saved_calculator(store: &Arc<InMemoryStore>) -> (Calculator, String, String) {
        let (draft, name_id, rush_id) = booking_draft();
        let service = CalculatorService::new(store.clone(), Arc::new(NoOpEventPublisher));
        let calculator = service.save_draft("owner-1", &draft).await.unwrap();
        (calculator, name_id, rush_id)
    }

    #[tokio::test]
    async fn test_save_draft_persists_calculator() {
        let store = Arc::new(InMemoryStore::new());
        let (calculator, _, _) = saved_calculator(&store).await;

        let service = CalculatorService::new(store, Arc::new(NoOpEventPublisher));
        let found = service
            .get_calculator(calculator.id().as_str())
            .await
            .unwrap();
        assert_eq!(found.unwrap().name(), "Office Cleaning");
    }

    #[tokio::test]
    async fn test_save_draft_rejects_invalid_schema() {
        let store = Arc::new(InMemoryStore::new());
        let service = CalculatorService::new(store.clone(), Arc::new(NoOpEventPublisher));

        let mut draft = CalculatorDraft::new();
        draft.set_name("No Fields Yet");
        let err = service.save_draft("owner-1", &draft).await.unwrap_err();
        assert!(matches!(err, UseCaseError::ValidationError(_)));

        // rejected drafts never reach the store
        let saved = CalculatorRepository::find_by_owner(store.as_ref(), "owner-1")
            .await
            .unwrap();
        assert!(saved.is_empty());
    }

    #[tokio::test]
    async fn test_submit_booking_stores_and_notifies() {
        let store = Arc::new(InMemoryStore::new());
        let (calculator, name_id, rush_id) = saved_calculator(&store).await;

        let gateway = Arc::new(RecordingNotificationGateway::new());
        let service = submission_service(store.clone(), gateway.clone());

        let mut input = FormData::new();
        input.insert(name_id.clone(), serde_json::json!("Ada Lovelace"));
        input.insert("stray_key".into(), serde_json::json!("ignored"));

        let receipt = service
            .submit_booking(calculator.id().as_str(), input)
            .await
            .unwrap();
        assert_eq!(receipt.notification, NotificationStatus::Sent);

        let notices = gateway.notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].owner_email, "owner@example.com");
        assert_eq!(notices[0].submission.calculator_name, "Office Cleaning");
        assert_eq!(notices[0].submission.data[&name_id], "Ada Lovelace");
        // untouched switch stored as its default, stray input dropped
        assert_eq!(notices[0].submission.data[&rush_id], false);
        assert!(!notices[0].submission.data.contains_key("stray_key"));

        let stored = SubmissionRepository::find_by_id(store.as_ref(), &receipt.submission_id)
            .await
            .unwrap();
        assert!(stored.is_some());
    }

    #[tokio::test]
    async fn test_submit_booking_missing_required_field() {
        let store = Arc::new(InMemoryStore::new());
        let (calculator, _, _) = saved_calculator(&store).await;

        let gateway = Arc::new(RecordingNotificationGateway::new());
        let service = submission_service(store.clone(), gateway.clone());

        let err = service
            .submit_booking(calculator.id().as_str(), FormData::new())
            .await
            .unwrap_err();
        match err {
            UseCaseError::ValidationError(msg) => assert_eq!(msg, "Full Name is required."),
            other => panic!("expected validation error, got {other:?}"),
        }

        // nothing stored, nothing sent
        let all: Vec<Submission> = SubmissionRepository::find_all(store.as_ref()).await.unwrap();
        assert!(all.is_empty());
        assert!(gateway.notices().is_empty());
    }

    #[tokio::test]
    async fn test_submit_booking_unknown_calculator() {
        let store = Arc::new(InMemoryStore::new());
        let service = submission_service(store, Arc::new(RecordingNotificationGateway::new()));

        let err = service
            .submit_booking("missing", FormData::new())
            .await
            .unwrap_err();
        assert!(matches!(err, UseCaseError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_submit_booking_survives_notification_failure() {
        let store = Arc::new(InMemoryStore::new());
        let (calculator, name_id, _) = saved_calculator(&store).await;

        let service = submission_service(store.clone(), Arc::new(FailingGateway));

        let mut input = FormData::new();
        input.insert(name_id, serde_json::json!("Grace Hopper"));

        let receipt = service
            .submit_booking(calculator.id().as_str(), input)
            .await
            .unwrap();
        assert_eq!(receipt.notification, NotificationStatus::Failed);

        // the booking itself went through
        let stored = SubmissionRepository::find_by_id(store.as_ref(), &receipt.submission_id)
            .await
            .unwrap();
        assert!(stored.is_some());
    }

    #[tokio::test]
    async fn test_delete_calculator_reports_cascade() {
        let store = Arc::new(InMemoryStore::new());
        let (calculator, name_id, _) = saved_calculator(&store).await;

        let submission_svc =
            submission_service(store.clone(), Arc::new(RecordingNotificationGateway::new()));
        for visitor in ["Ada", "Grace"] {
            let mut input = FormData::new();
            input.insert(name_id.clone(), serde_json::json!(visitor));
            submission_svc
                .submit_booking(calculator.id().as_str(), input)
                .await
                .unwrap();
        }

        let publisher = Arc::new(CapturingPublisher::new());
        let service = CalculatorService::new(store.clone(), publisher.clone());

        let removed = service
            .delete_calculator(calculator.id().as_str())
            .await
            .unwrap();
        assert_eq!(removed, 2);

        let events = publisher.events.lock();
        assert_eq!(events.len(), 1);
        match &events[0] {
            DomainEvent::Calculator(CalculatorEvent::Deleted {
                removed_submissions, ..
            }) => assert_eq!(*removed_submissions, 2),
            other => panic!("expected deleted event, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_delete_calculator_not_found() {
        let store = Arc::new(InMemoryStore::new());
        let service = CalculatorService::new(store, Arc::new(NoOpEventPublisher));

        let err = service.delete_calculator("missing").await.unwrap_err();
        assert!(matches!(err, UseCaseError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_submission() {
        let store = Arc::new(InMemoryStore::new());
        let (calculator, name_id, _) = saved_calculator(&store).await;

        let service =
            submission_service(store.clone(), Arc::new(RecordingNotificationGateway::new()));
        let mut input = FormData::new();
        input.insert(name_id, serde_json::json!("Ada"));
        let receipt = service
            .submit_booking(calculator.id().as_str(), input)
            .await
            .unwrap();

        service.delete_submission(&receipt.submission_id).await.unwrap();
        let err = service
            .delete_submission(&receipt.submission_id)
            .await
            .unwrap_err();
        assert!(matches!(err, UseCaseError::NotFound(_)));
    }
}
