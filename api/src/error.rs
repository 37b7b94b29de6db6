//! API error type and HTTP mappings.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use genie_auth::AuthError;
use genie_forms::{BuilderError, DraftError, UseCaseError};
use thiserror::Error;

use crate::models::ApiResponse;

/// Errors surfaced to API clients. Each variant maps to a status code
/// and a stable error code in the response envelope.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Storage(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "VALIDATION_ERROR",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::Unauthorized(_) => "UNAUTHORIZED",
            ApiError::Conflict(_) => "CONFLICT",
            ApiError::Storage(_) => "STORAGE_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiResponse::<()>::error(self.code(), &self.to_string());
        (self.status(), Json(body)).into_response()
    }
}

impl From<UseCaseError> for ApiError {
    fn from(err: UseCaseError) -> Self {
        match err {
            UseCaseError::NotFound(msg) => ApiError::NotFound(msg),
            UseCaseError::ValidationError(msg) => ApiError::Validation(msg),
            UseCaseError::DomainError(msg) => ApiError::Validation(msg),
            UseCaseError::RepositoryError(msg) => ApiError::Storage(msg),
            UseCaseError::Unauthorized => ApiError::Unauthorized("Unauthorized".into()),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials | AuthError::InvalidToken => {
                ApiError::Unauthorized(err.to_string())
            }
            AuthError::EmailTaken => ApiError::Conflict(err.to_string()),
            AuthError::UserNotFound => ApiError::NotFound(err.to_string()),
            _ => ApiError::Validation(err.to_string()),
        }
    }
}

impl From<BuilderError> for ApiError {
    fn from(err: BuilderError) -> Self {
        match err {
            BuilderError::NoActiveDraft => ApiError::NotFound(err.to_string()),
            BuilderError::Draft(DraftError::FieldNotFound(_))
            | BuilderError::Draft(DraftError::OptionIndexOutOfRange(_)) => {
                ApiError::NotFound(err.to_string())
            }
            BuilderError::Draft(_) => ApiError::Validation(err.to_string()),
        }
    }
}
