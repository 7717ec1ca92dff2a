use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::{
    service::ActivityService,
    types::{ActivityCatalog, EmailQuery, MessageResponse},
};
use crate::shared::{AppError, AppState};

type QueryPairs = Result<Query<Vec<(String, String)>>, QueryRejection>;

/// Turns an undecodable activity name into a 422 with a `detail` body
fn activity_from_path(path: Result<Path<String>, PathRejection>) -> Result<String, AppError> {
    match path {
        Ok(Path(activity_name)) => Ok(activity_name),
        Err(rejection) => {
            warn!(error = %rejection, "Rejected request path");
            Err(AppError::Validation(rejection.body_text()))
        }
    }
}

/// Turns a bad or incomplete query string into a 422 with a `detail` body
fn email_from_query(query: QueryPairs) -> Result<String, AppError> {
    let Query(pairs) = query.map_err(|rejection| {
        warn!(error = %rejection, "Rejected request query");
        AppError::Validation(rejection.body_text())
    })?;

    match EmailQuery::from_pairs(pairs) {
        Some(EmailQuery { email }) => Ok(email),
        None => {
            warn!("Request query has no email");
            Err(AppError::Validation(
                "Missing query parameter `email`".to_string(),
            ))
        }
    }
}

/// HTTP handler for listing all activities
///
/// GET /activities
/// Returns a JSON object keyed by activity name
#[instrument(name = "list_activities", skip(state))]
pub async fn list_activities(
    State(state): State<AppState>,
) -> Result<Json<ActivityCatalog>, AppError> {
    let service = ActivityService::new(Arc::clone(&state.activity_repository));
    let catalog = service.list_activities().await?;

    info!(activity_count = catalog.len(), "Activities listed");

    Ok(Json(catalog))
}

/// HTTP handler for signing a student up
///
/// POST /activities/{activity_name}/signup?email=...
#[instrument(name = "signup_for_activity", skip(state, path, query))]
pub async fn signup_for_activity(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: QueryPairs,
) -> Result<Json<MessageResponse>, AppError> {
    let activity_name = activity_from_path(path)?;
    let email = email_from_query(query)?;

    let service = ActivityService::new(Arc::clone(&state.activity_repository));
    let response = service.signup(&activity_name, &email).await?;

    Ok(Json(response))
}

/// HTTP handler for removing a student from an activity
///
/// DELETE /activities/{activity_name}/unregister?email=...
#[instrument(name = "unregister_from_activity", skip(state, path, query))]
pub async fn unregister_from_activity(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: QueryPairs,
) -> Result<Json<MessageResponse>, AppError> {
    let activity_name = activity_from_path(path)?;
    let email = email_from_query(query)?;

    let service = ActivityService::new(Arc::clone(&state.activity_repository));
    let response = service.unregister(&activity_name, &email).await?;

    Ok(Json(response))
}
