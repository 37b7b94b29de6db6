//! Owner dashboard endpoints.

use axum::extract::{Path, State};
use axum::Json;
use genie_forms::application::{DashboardOverview, SubmissionDetail};

use crate::error::ApiError;
use crate::middleware::CurrentUser;
use crate::models::{ApiResponse, DeleteCalculatorResponse};
use crate::AppState;

pub async fn overview(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<ApiResponse<DashboardOverview>>, ApiError> {
    let overview = state.dashboard.overview(&user.owner_id()).await?;
    Ok(Json(ApiResponse::success(overview)))
}

pub async fn submission_detail(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<SubmissionDetail>>, ApiError> {
    let detail = state.dashboard.submission_detail(&id).await?;
    Ok(Json(ApiResponse::success(detail)))
}

pub async fn delete_submission(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.submissions.delete_submission(&id).await?;
    Ok(Json(ApiResponse::success(())))
}

/// Deletes one of the owner's calculators along with its submissions.
/// Calculators belonging to other owners are reported as missing.
pub async fn delete_calculator(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<DeleteCalculatorResponse>>, ApiError> {
    let owner = user.owner_id();
    let calculator = state
        .calculators
        .get_calculator(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Calculator not found".into()))?;
    if calculator.owner_id().as_str() != owner {
        return Err(ApiError::NotFound("Calculator not found".into()));
    }
    let removed_submissions = state.calculators.delete_calculator(&id).await?;
    Ok(Json(ApiResponse::success(DeleteCalculatorResponse { removed_submissions })))
}
