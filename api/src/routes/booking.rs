//! Public booking form endpoints.
//!
//! These routes are unauthenticated: anyone holding a booking link can
//! load the form and submit a booking.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use genie_forms::application::SubmissionReceipt;
use genie_forms::{FormData, RenderPlan};

use crate::error::ApiError;
use crate::models::ApiResponse;
use crate::AppState;

pub async fn booking_form(
    State(state): State<AppState>,
    Path(calculator_id): Path<String>,
) -> Result<Json<ApiResponse<RenderPlan>>, ApiError> {
    let plan = state.submissions.booking_form(&calculator_id).await?;
    Ok(Json(ApiResponse::success(plan)))
}

pub async fn submit_booking(
    State(state): State<AppState>,
    Path(calculator_id): Path<String>,
    Json(input): Json<FormData>,
) -> Result<(StatusCode, Json<ApiResponse<SubmissionReceipt>>), ApiError> {
    let receipt = state.submissions.submit_booking(&calculator_id, input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(receipt))))
}
