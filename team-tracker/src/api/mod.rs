//! API routes for team-tracker

pub mod convert;
pub mod employees;
pub mod extract;
pub mod health;
pub mod projects;

use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

/// Create the combined router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .merge(employees::router())
        .merge(projects::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
