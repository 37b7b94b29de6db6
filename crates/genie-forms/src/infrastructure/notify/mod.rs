//! Notification delivery adapters
//!
//! New-booking notices go out as signed JSON POSTs; the receiving
//! endpoint turns them into owner emails.

use std::time::Duration;
use async_trait::async_trait;
use parking_lot::Mutex;

use crate::ports::outbound::{NotificationGateway, NotifyError, SubmissionNotice};

/// HTTP notification gateway.
///
/// Without an endpoint every send reports [`NotifyError::Disabled`],
/// which callers surface as "notifications off" rather than a failure.
pub struct HttpNotificationGateway {
    endpoint: Option<String>,
    secret: Option<String>,
    client: reqwest::Client,
}

impl HttpNotificationGateway {
    pub fn new(endpoint: Option<String>, secret: Option<String>) -> Self {
        Self {
            endpoint: endpoint.filter(|e| !e.is_empty()),
            secret,
            client: reqwest::Client::new(),
        }
    }

    fn sign(payload: &str, secret: &str) -> String {
        use sha2::{Digest, Sha256};
        let mut mac = Sha256::new();
        mac.update(secret.as_bytes());
        mac.update(payload.as_bytes());
        format!("sha256={}", hex::encode(mac.finalize()))
    }
}

#[async_trait]
impl NotificationGateway for HttpNotificationGateway {
    async fn notify_submission(&self, notice: &SubmissionNotice) -> Result<(), NotifyError> {
        let endpoint = self.endpoint.as_deref().ok_or(NotifyError::Disabled)?;

        let payload = serde_json::to_string(notice)
            .map_err(|e| NotifyError::Delivery(e.to_string()))?;
        let signature = self.secret.as_deref().map(|s| Self::sign(&payload, s));

        let mut request = self.client
            .post(endpoint)
            .header("Content-Type", "application/json")
            .timeout(Duration::from_secs(30));
        if let Some(signature) = signature {
            request = request.header("X-Genie-Signature", signature);
        }

        let resp = request.body(payload).send().await
            .map_err(|e| NotifyError::Delivery(e.to_string()))?;

        if resp.status().is_success() {
            Ok(())
        } else {
            Err(NotifyError::Rejected(resp.status().as_u16()))
        }
    }
}

/// Captures notices instead of sending them (for testing)
#[derive(Default)]
pub struct RecordingNotificationGateway {
    sent: Mutex<Vec<SubmissionNotice>>,
}

impl RecordingNotificationGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<SubmissionNotice> {
        self.sent.lock().clone()
    }
}

#[async_trait]
impl NotificationGateway for RecordingNotificationGateway {
    async fn notify_submission(&self, notice: &SubmissionNotice) -> Result<(), NotifyError> {
        self.sent.lock().push(notice.clone());
        Ok(())
    }
}
