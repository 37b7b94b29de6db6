//! API request and response models.

use chrono::{DateTime, Utc};
use genie_auth::{AuthenticatedUser, UserStatus};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Standard API response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ErrorResponse>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self { success: true, data: Some(data), error: None }
    }

    pub fn error(code: &str, message: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ErrorResponse {
                code: code.to_string(),
                message: message.to_string(),
            }),
        }
    }
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

// ============ Auth ============

#[derive(Debug, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
    /// Where the client wanted to go before being sent to sign in.
    #[serde(default)]
    pub redirect_to: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VerifyEmailRequest {
    pub token: String,
}

/// Signup result. The verification token is echoed back so deployments
/// without an email provider can still complete verification.
#[derive(Debug, Serialize, Deserialize)]
pub struct SignUpResponse {
    pub user_id: Uuid,
    pub email: String,
    pub status: UserStatus,
    pub message: String,
    pub verification_token: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub token: String,
    pub user: AuthenticatedUser,
    pub expires_at: DateTime<Utc>,
    pub redirect: String,
}

// ============ Builder ============

/// Adds a field of the given palette type to the open draft.
#[derive(Debug, Serialize, Deserialize)]
pub struct AddFieldRequest {
    #[serde(rename = "type")]
    pub field_type: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RenameRequest {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReorderRequest {
    pub from: usize,
    pub to: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OptionLabelRequest {
    pub label: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceToggleResponse {
    pub service_id: String,
    pub enabled: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DiscardResponse {
    pub discarded: bool,
}

/// A calculator published from the builder.
#[derive(Debug, Serialize, Deserialize)]
pub struct SavedCalculatorResponse {
    pub id: String,
    pub name: String,
    pub field_count: usize,
    pub booking_link: String,
}

// ============ Dashboard ============

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteCalculatorResponse {
    pub removed_submissions: usize,
}
