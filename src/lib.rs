// Library crate for the Mergington High School activities API
// This file exposes the public API for the binary and integration tests

pub mod activity;
pub mod config;
pub mod shared;

use axum::{
    response::Redirect,
    routing::{delete, get, post},
    Router,
};
use std::path::Path;
use tower_http::{services::ServeDir, trace::TraceLayer};

// Re-export commonly used types for easier access in tests
pub use activity::{
    models::ActivityModel,
    repository::{ActivityRepository, InMemoryActivityRepository},
};
pub use config::ServerConfig;
pub use shared::{AppError, AppState};

/// Landing page the root path redirects to
pub const LANDING_PAGE: &str = "/static/index.html";

/// Builds the full application router
pub fn build_router(app_state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::temporary(LANDING_PAGE) }))
        .route("/activities", get(activity::list_activities))
        .route(
            "/activities/:activity_name/signup",
            post(activity::signup_for_activity),
        )
        .route(
            "/activities/:activity_name/unregister",
            delete(activity::unregister_from_activity),
        )
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
