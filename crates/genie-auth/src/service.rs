//! Account & Session Management

use std::collections::HashMap;
use chrono::{Duration, Utc};
use parking_lot::RwLock;
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::error::AuthError;
use crate::model::{
    AuthSession, AuthenticatedUser, SessionRecord, SignUpOutcome, User, UserStatus,
};
use crate::password::{hash_password, verify_password};
use crate::token::{create_token, verify_token, SESSION_HOURS};

const MIN_PASSWORD_CHARS: usize = 6;

/// Account lifecycle events
#[derive(Debug, Clone)]
pub enum AuthEvent {
    SignedUp { user_id: Uuid, email: String },
    EmailVerified { user_id: Uuid },
    SignedIn { user_id: Uuid },
    SignedOut { user_id: Uuid },
}

/// Account and session manager
pub struct AuthService {
    /// Email → account
    users: RwLock<HashMap<String, User>>,
    /// Session id → record
    sessions: RwLock<HashMap<String, SessionRecord>>,
    /// Verification token → user id
    verifications: RwLock<HashMap<String, Uuid>>,
    event_tx: broadcast::Sender<AuthEvent>,
    secret: Vec<u8>,
    auto_confirm: bool,
}

impl AuthService {
    /// With `auto_confirm` new accounts skip email verification
    pub fn new(secret: impl Into<Vec<u8>>, auto_confirm: bool) -> Self {
        let (event_tx, _) = broadcast::channel(256);
        Self {
            users: RwLock::new(HashMap::new()),
            sessions: RwLock::new(HashMap::new()),
            verifications: RwLock::new(HashMap::new()),
            event_tx,
            secret: secret.into(),
            auto_confirm,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
        self.event_tx.subscribe()
    }

    /// Register a new account
    pub fn sign_up(&self, email: &str, password: &str) -> Result<SignUpOutcome, AuthError> {
        let email = normalize_email(email)?;
        if password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(AuthError::WeakPassword(MIN_PASSWORD_CHARS));
        }

        let mut users = self.users.write();
        if users.contains_key(&email) {
            return Err(AuthError::EmailTaken);
        }

        let status = if self.auto_confirm {
            UserStatus::Active
        } else {
            UserStatus::PendingVerification
        };
        let user = User {
            id: Uuid::new_v4(),
            email: email.clone(),
            password_hash: hash_password(password),
            status,
            created_at: Utc::now(),
        };
        let user_id = user.id;
        users.insert(email.clone(), user);
        drop(users);

        let verification_token = if self.auto_confirm {
            None
        } else {
            let token = Uuid::new_v4().to_string();
            self.verifications.write().insert(token.clone(), user_id);
            Some(token)
        };

        tracing::info!(%email, "Account registered");
        let _ = self.event_tx.send(AuthEvent::SignedUp {
            user_id,
            email: email.clone(),
        });

        Ok(SignUpOutcome {
            user_id,
            email,
            status,
            verification_token,
        })
    }

    /// Confirm an email address with its verification token.
    ///
    /// Tokens are single use.
    pub fn verify_email(&self, token: &str) -> Result<(), AuthError> {
        let user_id = self.verifications.write().remove(token)
            .ok_or(AuthError::VerificationNotFound)?;

        let mut users = self.users.write();
        let user = users.values_mut().find(|u| u.id == user_id)
            .ok_or(AuthError::UserNotFound)?;
        user.status = UserStatus::Active;
        drop(users);

        let _ = self.event_tx.send(AuthEvent::EmailVerified { user_id });
        Ok(())
    }

    /// Exchange credentials for a session token
    pub fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AuthError> {
        let email = email.trim().to_lowercase();

        let users = self.users.read();
        let user = users.get(&email).ok_or(AuthError::InvalidCredentials)?;
        if !verify_password(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials);
        }
        if user.status != UserStatus::Active {
            return Err(AuthError::EmailNotVerified);
        }
        let user_id = user.id;
        let email = user.email.clone();
        drop(users);

        let now = Utc::now();
        let expires_at = now + Duration::hours(SESSION_HOURS);
        let record = SessionRecord {
            session_id: Uuid::new_v4().to_string(),
            user_id,
            email: email.clone(),
            created_at: now,
            expires_at,
        };

        let token = create_token(&self.secret, user_id, &email, &record.session_id, expires_at)
            .map_err(|_| AuthError::InvalidToken)?;
        self.sessions.write().insert(record.session_id.clone(), record);

        tracing::info!(%email, "Signed in");
        let _ = self.event_tx.send(AuthEvent::SignedIn { user_id });

        Ok(AuthSession {
            token,
            user: AuthenticatedUser { id: user_id, email },
            expires_at,
        })
    }

    /// Resolve the account behind a session token.
    ///
    /// Fails for bad signatures, expired sessions and revoked sessions.
    pub fn current_user(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let claims = verify_token(&self.secret, token).map_err(|_| AuthError::InvalidToken)?;

        let sessions = self.sessions.read();
        let record = sessions.get(&claims.sid).ok_or(AuthError::InvalidToken)?;
        if record.expires_at <= Utc::now() {
            return Err(AuthError::InvalidToken);
        }

        Ok(AuthenticatedUser {
            id: record.user_id,
            email: record.email.clone(),
        })
    }

    /// Revoke the session behind a token. Already-gone sessions are fine.
    pub fn sign_out(&self, token: &str) -> Result<(), AuthError> {
        let claims = verify_token(&self.secret, token).map_err(|_| AuthError::InvalidToken)?;

        if let Some(record) = self.sessions.write().remove(&claims.sid) {
            let _ = self.event_tx.send(AuthEvent::SignedOut {
                user_id: record.user_id,
            });
        }
        Ok(())
    }
}

fn normalize_email(email: &str) -> Result<String, AuthError> {
    let email = email.trim().to_lowercase();
    let (local, domain) = match email.split_once('@') {
        Some(parts) => parts,
        None => return Err(AuthError::InvalidEmail),
    };
    if local.is_empty() || domain.len() < 3 || !domain.contains('.') {
        return Err(AuthError::InvalidEmail);
    }
    Ok(email)
}
