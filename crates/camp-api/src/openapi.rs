//! # OpenAPI Specification Assembly
//!
//! Collects the utoipa-documented handlers and view schemas into one
//! document served at `/openapi.json`.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use utoipa::openapi::server::Server;
use utoipa::OpenApi;

use crate::state::{AppConfig, AppState};

/// Assembled OpenAPI document for the registry API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Camp Registry API",
        version = "0.1.0",
        description = "Campers, activities, and the signups between them.\n\nErrors are returned as `{\"error\": \"<message>\"}`."
    ),
    paths(
        // ── Activities ───────────────────────────────────────────────────
        crate::routes::activities::list_activities,
        crate::routes::activities::list_activity_campers,
        crate::routes::activities::delete_activity,
        // ── Campers ──────────────────────────────────────────────────────
        crate::routes::campers::list_campers,
        crate::routes::campers::create_camper,
        crate::routes::campers::get_camper,
        crate::routes::campers::update_camper,
        crate::routes::campers::delete_camper,
        crate::routes::campers::list_camper_activities,
        // ── Signups ──────────────────────────────────────────────────────
        crate::routes::signups::create_signup,
        crate::routes::signups::update_signup,
    ),
    components(schemas(
        crate::error::ErrorBody,
        crate::views::ActivitySummary,
        crate::views::CamperSummary,
        crate::views::CamperDetail,
        crate::views::SignupActivity,
        crate::views::SignupSummary,
        crate::routes::campers::CreateCamperRequest,
        crate::routes::campers::UpdateCamperRequest,
        crate::routes::signups::CreateSignupRequest,
        crate::routes::signups::UpdateSignupRequest,
    )),
    tags(
        (name = "activities", description = "Camp activities"),
        (name = "campers", description = "Enrolled campers"),
        (name = "signups", description = "Camper-to-activity signups"),
    )
)]
pub struct ApiDoc;

/// Router serving the generated document.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json — The document, advertising the configured listen port.
async fn openapi_json(State(state): State<AppState>) -> Json<utoipa::openapi::OpenApi> {
    Json(document(&state.config))
}

/// Build the document with a server entry for `config.port`.
pub fn document(config: &AppConfig) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    let mut server = Server::new(format!("http://localhost:{}", config.port));
    server.description = Some("Local development server".to_string());
    doc.servers = Some(vec![server]);
    doc
}
