//! # Camper API
//!
//! CRUD over campers plus the camper's activity view. Every write goes
//! through `camp_core` validation before it reaches the store.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use camp_core::{Camper, CamperId, CamperPatch, NewCamper, ValidationError};
use serde::Deserialize;
use serde_json::Value;
use sqlx::SqlitePool;
use utoipa::ToSchema;

use crate::db;
use crate::error::AppError;
use crate::extractors::{extract_id, extract_json, non_null, present};
use crate::routes::delete_error;
use crate::state::AppState;
use crate::views::{ActivitySummary, CamperDetail, CamperSummary};

const CAMPER: &str = "Camper";

/// Request to create a camper.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateCamperRequest {
    pub name: Option<String>,
    pub age: Option<i64>,
}

impl CreateCamperRequest {
    fn into_draft(self) -> Result<NewCamper, ValidationError> {
        NewCamper::try_new(self.name, self.age)
    }
}

/// Partial camper update. Each supplied key overwrites that attribute.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateCamperRequest {
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<i64>)]
    pub age: Option<Option<i64>>,
}

impl UpdateCamperRequest {
    fn into_patch(self) -> Result<CamperPatch, ValidationError> {
        Ok(CamperPatch {
            name: non_null(self.name, "name")?,
            age: non_null(self.age, "age")?,
        })
    }
}

/// Build the campers router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/campers", get(list_campers).post(create_camper))
        .route(
            "/campers/:id",
            get(get_camper).patch(update_camper).delete(delete_camper),
        )
        .route("/campers/:id/activities", get(list_camper_activities))
}

/// GET /campers — List campers.
#[utoipa::path(
    get,
    path = "/campers",
    responses(
        (status = 200, description = "All campers", body = [CamperSummary]),
    ),
    tag = "campers"
)]
pub async fn list_campers(
    State(state): State<AppState>,
) -> Result<Json<Vec<CamperSummary>>, AppError> {
    let campers = db::campers::list(&state.pool).await?;
    Ok(Json(campers.iter().map(CamperSummary::from).collect()))
}

/// POST /campers — Create a camper.
#[utoipa::path(
    post,
    path = "/campers",
    request_body = CreateCamperRequest,
    responses(
        (status = 201, description = "Camper created", body = CamperSummary),
        (status = 400, description = "Invalid camper", body = crate::error::ErrorBody),
    ),
    tag = "campers"
)]
pub async fn create_camper(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<CamperSummary>), AppError> {
    let draft = extract_json::<CreateCamperRequest>(body)?.into_draft()?;
    let camper = db::campers::insert(&state.pool, &draft).await?;
    tracing::info!(camper_id = %camper.id, "camper created");
    Ok((StatusCode::CREATED, Json(CamperSummary::from(&camper))))
}

/// GET /campers/:id — Get a camper with their signups' activities.
#[utoipa::path(
    get,
    path = "/campers/{id}",
    params(("id" = i64, Path, description = "Camper ID")),
    responses(
        (status = 200, description = "Camper found", body = CamperDetail),
        (status = 404, description = "Camper not found", body = crate::error::ErrorBody),
    ),
    tag = "campers"
)]
pub async fn get_camper(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<CamperDetail>, AppError> {
    let camper = load_camper(&state.pool, extract_id(id, CAMPER)?).await?;
    Ok(Json(camper_detail(&state.pool, &camper).await?))
}

/// PATCH /campers/:id — Overwrite supplied attributes.
#[utoipa::path(
    patch,
    path = "/campers/{id}",
    params(("id" = i64, Path, description = "Camper ID")),
    request_body = UpdateCamperRequest,
    responses(
        (status = 200, description = "Camper updated", body = CamperDetail),
        (status = 400, description = "Invalid update", body = crate::error::ErrorBody),
        (status = 404, description = "Camper not found", body = crate::error::ErrorBody),
    ),
    tag = "campers"
)]
pub async fn update_camper(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<CamperDetail>, AppError> {
    let mut camper = load_camper(&state.pool, extract_id(id, CAMPER)?).await?;

    let patch = extract_json::<UpdateCamperRequest>(body)?.into_patch()?;

    // An empty body changes nothing, so `updated_at` is left alone.
    if !patch.is_empty() {
        patch.apply_to(&mut camper)?;
        if !db::campers::update(&state.pool, &mut camper).await? {
            return Err(AppError::not_found(CAMPER));
        }
        tracing::info!(camper_id = %camper.id, "camper updated");
    }

    Ok(Json(camper_detail(&state.pool, &camper).await?))
}

/// DELETE /campers/:id — Remove a camper without signups.
#[utoipa::path(
    delete,
    path = "/campers/{id}",
    params(("id" = i64, Path, description = "Camper ID")),
    responses(
        (status = 204, description = "Camper deleted"),
        (status = 404, description = "Camper not found", body = crate::error::ErrorBody),
        (status = 409, description = "Camper still has signups", body = crate::error::ErrorBody),
    ),
    tag = "campers"
)]
pub async fn delete_camper(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    const CONFLICT: &str = "Camper has signups and cannot be deleted";

    let camper = load_camper(&state.pool, extract_id(id, CAMPER)?).await?;

    if db::signups::count_for_camper(&state.pool, camper.id).await? > 0 {
        return Err(AppError::Conflict(CONFLICT.to_string()));
    }

    let deleted = db::campers::delete(&state.pool, camper.id)
        .await
        .map_err(|e| delete_error(e, CONFLICT))?;
    if !deleted {
        return Err(AppError::not_found(CAMPER));
    }

    tracing::info!(camper_id = %camper.id, "camper deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /campers/:id/activities — Distinct activities the camper signed up for.
#[utoipa::path(
    get,
    path = "/campers/{id}/activities",
    params(("id" = i64, Path, description = "Camper ID")),
    responses(
        (status = 200, description = "Camper's activities", body = [ActivitySummary]),
        (status = 404, description = "Camper not found", body = crate::error::ErrorBody),
    ),
    tag = "campers"
)]
pub async fn list_camper_activities(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vec<ActivitySummary>>, AppError> {
    let camper = load_camper(&state.pool, extract_id(id, CAMPER)?).await?;
    let activities = db::signups::activities_for_camper(&state.pool, camper.id).await?;
    Ok(Json(activities.iter().map(ActivitySummary::from).collect()))
}

async fn load_camper(pool: &SqlitePool, id: CamperId) -> Result<Camper, AppError> {
    db::campers::get_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(CAMPER))
}

async fn camper_detail(pool: &SqlitePool, camper: &Camper) -> Result<CamperDetail, AppError> {
    let signups = db::signups::for_camper_with_activity(pool, camper.id).await?;
    Ok(CamperDetail::new(camper, &signups))
}
