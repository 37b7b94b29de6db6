//! Account and session endpoints.

use axum::extract::State;
use axum::Json;

use crate::error::ApiError;
use crate::middleware::{BearerToken, CurrentUser};
use crate::models::*;
use crate::AppState;

pub async fn sign_up(
    State(state): State<AppState>,
    Json(req): Json<SignUpRequest>,
) -> Result<Json<ApiResponse<SignUpResponse>>, ApiError> {
    let outcome = state.auth.sign_up(&req.email, &req.password)?;
    let message = match outcome.status {
        genie_auth::UserStatus::PendingVerification => {
            "Check your email to verify your account!".to_string()
        }
        genie_auth::UserStatus::Active => "Account created".to_string(),
    };
    Ok(Json(ApiResponse::success(SignUpResponse {
        user_id: outcome.user_id,
        email: outcome.email,
        status: outcome.status,
        message,
        verification_token: outcome.verification_token,
    })))
}

pub async fn verify_email(
    State(state): State<AppState>,
    Json(req): Json<VerifyEmailRequest>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.auth.verify_email(&req.token)?;
    Ok(Json(ApiResponse::success(())))
}

pub async fn sign_in(
    State(state): State<AppState>,
    Json(req): Json<SignInRequest>,
) -> Result<Json<ApiResponse<SessionResponse>>, ApiError> {
    let session = state.auth.sign_in(&req.email, &req.password)?;
    // Send the client back where it came from, dashboard by default
    let redirect = req
        .redirect_to
        .filter(|r| !r.is_empty())
        .unwrap_or_else(|| "/dashboard".to_string());
    Ok(Json(ApiResponse::success(SessionResponse {
        token: session.token,
        user: session.user,
        expires_at: session.expires_at,
        redirect,
    })))
}

pub async fn sign_out(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.auth.sign_out(&token)?;
    Ok(Json(ApiResponse::success(())))
}

pub async fn session(user: CurrentUser) -> Json<ApiResponse<genie_auth::AuthenticatedUser>> {
    Json(ApiResponse::success(user.0))
}
