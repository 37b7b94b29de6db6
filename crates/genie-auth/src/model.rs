//! Account Data Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registered portal account
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
}

/// Account lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    PendingVerification,
    Active,
}

/// Identity attached to a valid session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub email: String,
}

/// Issued session token plus who it belongs to
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
    pub user: AuthenticatedUser,
    pub expires_at: DateTime<Utc>,
}

/// Server-side session record; removing it revokes the session
#[derive(Debug, Clone)]
pub struct SessionRecord {
    pub session_id: String,
    pub user_id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Outcome of account registration
#[derive(Debug, Clone)]
pub struct SignUpOutcome {
    pub user_id: Uuid,
    pub email: String,
    pub status: UserStatus,
    /// Present until the address is confirmed; consumed by `verify_email`
    pub verification_token: Option<String>,
}
