//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the activity endpoints and the liveness probe under a
//! single Axum router. Request tracing and permissive CORS are applied to
//! every route.

pub mod activities;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router around `state`.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/activities", get(activities::list_activities))
        .route("/activities/{name}/signup", post(activities::signup))
        .route("/activities/{name}/unregister", post(activities::unregister))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
