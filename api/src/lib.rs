//! FormGenie REST API
//!
//! HTTP adapter over the genie-forms application services and the
//! genie-auth session service.
//!
//! # Surface
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        FORMGENIE API                         │
//! │                                                              │
//! │  /auth/*        signup, email verification, sessions         │
//! │  /build/*       calculator builder (draft editing, publish)  │
//! │  /book/:id      public booking form (render + submit)        │
//! │  /dashboard/*   owner overview, submission detail, deletion  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Builder and dashboard routes require a bearer session token from
//! `/auth/signin`; booking routes are public.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;

use std::sync::Arc;

use axum::routing::{delete, get, patch, post, put};
use axum::Router;
use genie_auth::AuthService;
use genie_forms::infrastructure::{HttpNotificationGateway, InMemoryStore, NoOpEventPublisher};
use genie_forms::{
    BuilderRegistry, CalculatorService, CalculatorUseCases, DashboardService, DashboardUseCases,
    SubmissionService, SubmissionUseCases,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub builder: Arc<BuilderRegistry>,
    pub calculators: Arc<dyn CalculatorUseCases>,
    pub submissions: Arc<dyn SubmissionUseCases>,
    pub dashboard: Arc<dyn DashboardUseCases>,
    pub config: ApiConfig,
}

/// Wires stores, services and gateways into application state.
pub fn build_state(config: ApiConfig) -> AppState {
    let store = Arc::new(InMemoryStore::new());
    let events = Arc::new(NoOpEventPublisher);
    let notifier = Arc::new(HttpNotificationGateway::new(
        config.notify_url.clone(),
        config.notify_secret.clone(),
    ));

    let calculators: Arc<dyn CalculatorUseCases> =
        Arc::new(CalculatorService::new(store.clone(), events.clone()));
    let submissions: Arc<dyn SubmissionUseCases> = Arc::new(SubmissionService::new(
        store.clone(),
        store.clone(),
        notifier,
        events,
        config.owner_email.clone(),
    ));
    let dashboard: Arc<dyn DashboardUseCases> = Arc::new(DashboardService::new(
        store.clone(),
        store,
        config.public_url.clone(),
    ));
    let auth = Arc::new(AuthService::new(
        config.jwt_secret.as_bytes(),
        config.auto_confirm,
    ));

    AppState {
        auth,
        builder: Arc::new(BuilderRegistry::new()),
        calculators,
        submissions,
        dashboard,
        config,
    }
}

/// Builds the full route table over the given state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::health::home))
        .route("/health", get(routes::health::health_check))
        // Accounts & sessions
        .route("/auth/signup", post(routes::auth::sign_up))
        .route("/auth/verify", post(routes::auth::verify_email))
        .route("/auth/signin", post(routes::auth::sign_in))
        .route("/auth/signout", post(routes::auth::sign_out))
        .route("/auth/session", get(routes::auth::session))
        // Calculator builder
        .route(
            "/build/draft",
            post(routes::builder::open_draft)
                .get(routes::builder::get_draft)
                .delete(routes::builder::discard_draft),
        )
        .route("/build/draft/name", put(routes::builder::rename_draft))
        .route("/build/draft/reorder", post(routes::builder::reorder_fields))
        .route("/build/draft/fields", post(routes::builder::add_field))
        .route(
            "/build/draft/fields/:field_id",
            patch(routes::builder::update_field).delete(routes::builder::remove_field),
        )
        .route(
            "/build/draft/fields/:field_id/options",
            post(routes::builder::add_option),
        )
        .route(
            "/build/draft/fields/:field_id/options/:index",
            patch(routes::builder::update_option).delete(routes::builder::remove_option),
        )
        .route(
            "/build/draft/fields/:field_id/services/:service_id",
            post(routes::builder::toggle_service),
        )
        .route("/build/save", post(routes::builder::save_draft))
        .route("/build/field-types", get(routes::builder::field_types))
        // Public booking pages
        .route(
            "/book/:calculator_id",
            get(routes::booking::booking_form).post(routes::booking::submit_booking),
        )
        // Owner dashboard
        .route("/dashboard", get(routes::dashboard::overview))
        .route(
            "/dashboard/submissions/:id",
            get(routes::dashboard::submission_detail).delete(routes::dashboard::delete_submission),
        )
        .route(
            "/dashboard/calculators/:id",
            delete(routes::dashboard::delete_calculator),
        )
        .fallback(routes::health::not_found)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
