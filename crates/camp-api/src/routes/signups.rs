//! # Signup API
//!
//! Signing a camper up for an activity, and moving a signup to another hour.
//! The hour is validated in `camp_core`; dangling camper or activity ids are
//! refused by the store's foreign keys and reported as 400.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{patch, post};
use axum::{Json, Router};
use camp_core::{ActivityId, CamperId, NewSignup, SignupId, SignupPatch, ValidationError};
use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::db;
use crate::error::AppError;
use crate::extractors::{extract_id, extract_json, non_null, present};
use crate::state::AppState;
use crate::views::SignupSummary;

const SIGNUP: &str = "Signup";

/// Request to sign a camper up for an activity.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateSignupRequest {
    pub camper_id: Option<i64>,
    pub activity_id: Option<i64>,
    /// Hour of the day, 0 through 23.
    pub time: Option<i64>,
}

impl CreateSignupRequest {
    fn into_draft(self) -> Result<NewSignup, ValidationError> {
        let camper_id = self.camper_id.ok_or(ValidationError::Required("camper_id"))?;
        let activity_id = self
            .activity_id
            .ok_or(ValidationError::Required("activity_id"))?;
        let time = self.time.ok_or(ValidationError::Required("time"))?;
        NewSignup::try_new(CamperId::new(camper_id), ActivityId::new(activity_id), time)
    }
}

/// Move a signup to another hour.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateSignupRequest {
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<i64>)]
    pub time: Option<Option<i64>>,
}

/// Build the signups router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/signups", post(create_signup))
        .route("/signups/:id", patch(update_signup))
}

/// POST /signups — Sign a camper up for an activity.
#[utoipa::path(
    post,
    path = "/signups",
    request_body = CreateSignupRequest,
    responses(
        (status = 201, description = "Signup created", body = SignupSummary),
        (status = 400, description = "Invalid signup", body = crate::error::ErrorBody),
    ),
    tag = "signups"
)]
pub async fn create_signup(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<SignupSummary>), AppError> {
    let draft = extract_json::<CreateSignupRequest>(body)?.into_draft()?;
    let signup = db::signups::insert(&state.pool, &draft).await?;
    tracing::info!(
        signup_id = %signup.id,
        camper_id = %signup.camper_id,
        activity_id = %signup.activity_id,
        "signup created"
    );
    Ok((StatusCode::CREATED, Json(SignupSummary::from(&signup))))
}

/// PATCH /signups/:id — Change a signup's hour.
#[utoipa::path(
    patch,
    path = "/signups/{id}",
    params(("id" = i64, Path, description = "Signup ID")),
    request_body = UpdateSignupRequest,
    responses(
        (status = 200, description = "Signup updated", body = SignupSummary),
        (status = 400, description = "Invalid hour", body = crate::error::ErrorBody),
        (status = 404, description = "Signup not found", body = crate::error::ErrorBody),
    ),
    tag = "signups"
)]
pub async fn update_signup(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<SignupSummary>, AppError> {
    let id: SignupId = extract_id(id, SIGNUP)?;
    let mut signup = db::signups::get_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(SIGNUP))?;

    let req: UpdateSignupRequest = extract_json(body)?;
    let patch = SignupPatch {
        time: non_null(req.time, "time")?,
    };
    patch.apply_to(&mut signup)?;

    if !db::signups::update(&state.pool, &mut signup).await? {
        return Err(AppError::not_found(SIGNUP));
    }
    tracing::info!(signup_id = %signup.id, time = signup.time, "signup updated");

    Ok(Json(SignupSummary::from(&signup)))
}
