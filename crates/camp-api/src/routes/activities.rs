//! # Activity API
//!
//! Activities are read-mostly: they are listed, viewed through their
//! campers, and removed once nobody is signed up.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get};
use axum::{Json, Router};
use camp_core::{Activity, ActivityId};
use sqlx::SqlitePool;

use crate::db;
use crate::error::AppError;
use crate::extractors::extract_id;
use crate::routes::delete_error;
use crate::state::AppState;
use crate::views::{ActivitySummary, CamperSummary};

const ACTIVITY: &str = "Activity";

/// Build the activities router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/activities", get(list_activities))
        .route("/activities/:id", delete(delete_activity))
        .route("/activities/:id/campers", get(list_activity_campers))
}

/// GET /activities — List activities as `{id, name, difficulty}`.
#[utoipa::path(
    get,
    path = "/activities",
    responses(
        (status = 200, description = "All activities", body = [ActivitySummary]),
    ),
    tag = "activities"
)]
pub async fn list_activities(
    State(state): State<AppState>,
) -> Result<Json<Vec<ActivitySummary>>, AppError> {
    let activities = db::activities::list(&state.pool).await?;
    Ok(Json(activities.iter().map(ActivitySummary::from).collect()))
}

/// GET /activities/:id/campers — Distinct campers signed up for the activity.
#[utoipa::path(
    get,
    path = "/activities/{id}/campers",
    params(("id" = i64, Path, description = "Activity ID")),
    responses(
        (status = 200, description = "Activity's campers", body = [CamperSummary]),
        (status = 404, description = "Activity not found", body = crate::error::ErrorBody),
    ),
    tag = "activities"
)]
pub async fn list_activity_campers(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vec<CamperSummary>>, AppError> {
    let activity = load_activity(&state.pool, extract_id(id, ACTIVITY)?).await?;
    let campers = db::signups::campers_for_activity(&state.pool, activity.id).await?;
    Ok(Json(campers.iter().map(CamperSummary::from).collect()))
}

/// DELETE /activities/:id — Remove an activity nobody is signed up for.
#[utoipa::path(
    delete,
    path = "/activities/{id}",
    params(("id" = i64, Path, description = "Activity ID")),
    responses(
        (status = 204, description = "Activity deleted"),
        (status = 404, description = "Activity not found", body = crate::error::ErrorBody),
        (status = 409, description = "Activity still has signups", body = crate::error::ErrorBody),
    ),
    tag = "activities"
)]
pub async fn delete_activity(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    const CONFLICT: &str = "Activity has signups and cannot be deleted";

    let activity = load_activity(&state.pool, extract_id(id, ACTIVITY)?).await?;

    if db::signups::count_for_activity(&state.pool, activity.id).await? > 0 {
        return Err(AppError::Conflict(CONFLICT.to_string()));
    }

    let deleted = db::activities::delete(&state.pool, activity.id)
        .await
        .map_err(|e| delete_error(e, CONFLICT))?;
    if !deleted {
        return Err(AppError::not_found(ACTIVITY));
    }

    tracing::info!(activity_id = %activity.id, "activity deleted");
    Ok(StatusCode::NO_CONTENT)
}

async fn load_activity(pool: &SqlitePool, id: ActivityId) -> Result<Activity, AppError> {
    db::activities::get_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(ACTIVITY))
}
