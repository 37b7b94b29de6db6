//! Authentication extractors.
//!
//! Handlers that require a signed-in owner take [`CurrentUser`] as an
//! argument; extraction fails with 401 when the bearer token is missing,
//! invalid, or belongs to a revoked session.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use genie_auth::AuthenticatedUser;

use crate::error::ApiError;
use crate::AppState;

fn bearer_token(parts: &Parts) -> Result<String, ApiError> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| token.to_string())
        .ok_or_else(|| ApiError::Unauthorized("Missing bearer token".into()))
}

/// The signed-in user attached to the request.
pub struct CurrentUser(pub AuthenticatedUser);

impl CurrentUser {
    /// Owner key used for drafts and calculator ownership.
    pub fn owner_id(&self) -> String {
        self.0.id.to_string()
    }
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        let user = state.auth.current_user(&token)?;
        Ok(CurrentUser(user))
    }
}

/// The raw bearer token, for endpoints that operate on the session
/// itself (sign-out).
pub struct BearerToken(pub String);

#[async_trait]
impl FromRequestParts<AppState> for BearerToken {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &AppState) -> Result<Self, Self::Rejection> {
        Ok(BearerToken(bearer_token(parts)?))
    }
}
