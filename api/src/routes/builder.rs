//! Calculator builder endpoints.
//!
//! Every route here operates on the signed-in owner's working draft.
//! Mutations return either the element they created or the refreshed
//! draft view, so the client can re-render without a follow-up fetch.

use axum::extract::{Path, State};
use axum::Json;
use genie_forms::application::queries;
use genie_forms::application::{DraftView, FieldPatch, FieldTypeView};
use genie_forms::{FieldDefinition, FieldOption, FieldType};

use crate::error::ApiError;
use crate::middleware::CurrentUser;
use crate::models::*;
use crate::AppState;

pub async fn open_draft(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Json<ApiResponse<DraftView>> {
    let draft = state.builder.open(&user.owner_id());
    Json(ApiResponse::success(DraftView::from(&draft)))
}

pub async fn get_draft(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<ApiResponse<DraftView>>, ApiError> {
    let draft = state.builder.current(&user.owner_id())?;
    Ok(Json(ApiResponse::success(DraftView::from(&draft))))
}

pub async fn discard_draft(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Json<ApiResponse<DiscardResponse>> {
    let discarded = state.builder.discard(&user.owner_id());
    Json(ApiResponse::success(DiscardResponse { discarded }))
}

pub async fn rename_draft(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<RenameRequest>,
) -> Result<Json<ApiResponse<DraftView>>, ApiError> {
    let view = state.builder.with_draft(&user.owner_id(), |draft| {
        draft.set_name(req.name);
        Ok(DraftView::from(&*draft))
    })?;
    Ok(Json(ApiResponse::success(view)))
}

pub async fn add_field(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<AddFieldRequest>,
) -> Result<Json<ApiResponse<FieldDefinition>>, ApiError> {
    let field_type = FieldType::from_id(&req.field_type)
        .ok_or_else(|| ApiError::Validation(format!("Unknown field type: {}", req.field_type)))?;
    let field = state
        .builder
        .with_draft(&user.owner_id(), |draft| Ok(draft.add_field(field_type)))?;
    Ok(Json(ApiResponse::success(field)))
}

pub async fn update_field(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(field_id): Path<String>,
    Json(patch): Json<FieldPatch>,
) -> Result<Json<ApiResponse<DraftView>>, ApiError> {
    let view = state.builder.with_draft(&user.owner_id(), |draft| {
        draft.update_field(&field_id, patch.label, patch.placeholder, patch.required)?;
        Ok(DraftView::from(&*draft))
    })?;
    Ok(Json(ApiResponse::success(view)))
}

pub async fn remove_field(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(field_id): Path<String>,
) -> Result<Json<ApiResponse<DraftView>>, ApiError> {
    let view = state.builder.with_draft(&user.owner_id(), |draft| {
        draft.remove_field(&field_id)?;
        Ok(DraftView::from(&*draft))
    })?;
    Ok(Json(ApiResponse::success(view)))
}

pub async fn add_option(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(field_id): Path<String>,
) -> Result<Json<ApiResponse<FieldOption>>, ApiError> {
    let option = state
        .builder
        .with_draft(&user.owner_id(), |draft| draft.add_option(&field_id))?;
    Ok(Json(ApiResponse::success(option)))
}

pub async fn update_option(
    State(state): State<AppState>,
    user: CurrentUser,
    Path((field_id, index)): Path<(String, usize)>,
    Json(req): Json<OptionLabelRequest>,
) -> Result<Json<ApiResponse<FieldOption>>, ApiError> {
    let option = state.builder.with_draft(&user.owner_id(), |draft| {
        draft.update_option(&field_id, index, req.label)
    })?;
    Ok(Json(ApiResponse::success(option)))
}

pub async fn remove_option(
    State(state): State<AppState>,
    user: CurrentUser,
    Path((field_id, index)): Path<(String, usize)>,
) -> Result<Json<ApiResponse<DraftView>>, ApiError> {
    let view = state.builder.with_draft(&user.owner_id(), |draft| {
        draft.remove_option(&field_id, index)?;
        Ok(DraftView::from(&*draft))
    })?;
    Ok(Json(ApiResponse::success(view)))
}

pub async fn toggle_service(
    State(state): State<AppState>,
    user: CurrentUser,
    Path((field_id, service_id)): Path<(String, String)>,
) -> Result<Json<ApiResponse<ServiceToggleResponse>>, ApiError> {
    let enabled = state.builder.with_draft(&user.owner_id(), |draft| {
        draft.toggle_service(&field_id, &service_id)
    })?;
    Ok(Json(ApiResponse::success(ServiceToggleResponse { service_id, enabled })))
}

pub async fn reorder_fields(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<ReorderRequest>,
) -> Result<Json<ApiResponse<DraftView>>, ApiError> {
    let view = state.builder.with_draft(&user.owner_id(), |draft| {
        draft.reorder(req.from, req.to)?;
        Ok(DraftView::from(&*draft))
    })?;
    Ok(Json(ApiResponse::success(view)))
}

/// Publishes the working draft as a calculator. The draft is kept when
/// validation fails so the builder can fix it and retry.
pub async fn save_draft(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<ApiResponse<SavedCalculatorResponse>>, ApiError> {
    let owner = user.owner_id();
    let draft = state.builder.current(&owner)?;
    let calculator = state.calculators.save_draft(&owner, &draft).await?;
    state.builder.discard(&owner);
    Ok(Json(ApiResponse::success(SavedCalculatorResponse {
        id: calculator.id().to_string(),
        name: calculator.name().to_string(),
        field_count: calculator.fields().len(),
        booking_link: queries::booking_link(&state.config.public_url, calculator.id().as_str()),
    })))
}

pub async fn field_types(_user: CurrentUser) -> Json<ApiResponse<Vec<FieldTypeView>>> {
    let palette = FieldType::ALL
        .iter()
        .map(|ty| FieldTypeView {
            id: ty.id().to_string(),
            name: ty.display_name().to_string(),
        })
        .collect();
    Json(ApiResponse::success(palette))
}
