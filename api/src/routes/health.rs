//! Health check and service banner endpoints

use axum::{response::IntoResponse, Json};
use genie_forms::{FieldType, SERVICE_CATALOG};
use serde::Serialize;

use crate::error::ApiError;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}

#[derive(Serialize)]
pub struct HomeResponse {
    pub name: String,
    pub version: String,
    pub field_types: usize,
    pub services: usize,
}

/// Health check
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Service banner at the root: what this is and how big the catalogs are.
pub async fn home() -> impl IntoResponse {
    Json(HomeResponse {
        name: "FormGenie".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        field_types: FieldType::ALL.len(),
        services: SERVICE_CATALOG.len(),
    })
}

/// Fallback for unknown routes.
pub async fn not_found() -> ApiError {
    ApiError::NotFound("Resource not found".into())
}
