//! # camp-api — Axum API for the Camp Registry
//!
//! HTTP endpoints over campers, activities, and signups, persisted in SQLite.
//!
//! ## API Surface
//!
//! | Route                         | Module                   |
//! |-------------------------------|--------------------------|
//! | `GET /`                       | [`home`]                 |
//! | `/activities/*`               | [`routes::activities`]   |
//! | `/campers/*`                  | [`routes::campers`]      |
//! | `/signups/*`                  | [`routes::signups`]      |
//! | `/health/*`                   | [`liveness`], [`readiness`] |
//! | `/openapi.json`               | [`openapi`]              |
//!
//! ## Request Flow
//!
//! ```text
//! TraceLayer → Handler → camp_core validation → db → views
//! ```
//!
//! Every failure is an [`AppError`] rendered as `{"error": "<message>"}`.

pub mod db;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;
pub mod views;

pub use error::AppError;
pub use state::{AppConfig, AppState};

use axum::extract::{DefaultBodyLimit, State};
use axum::routing::get;
use axum::Router;

/// Assemble the full application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness))
        .merge(routes::activities::router())
        .merge(routes::campers::router())
        .merge(routes::signups::router())
        .merge(openapi::router())
        .layer(DefaultBodyLimit::max(1024 * 1024))
        .layer(middleware::tracing_layer::layer())
        .with_state(state)
}

/// Static confirmation that the service is up.
pub async fn home() -> &'static str {
    "Home"
}

/// Liveness probe: 200 whenever the process can answer.
pub async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe: 200 once the database answers, 503 otherwise.
pub async fn readiness(State(state): State<AppState>) -> Result<&'static str, AppError> {
    sqlx::query("SELECT 1")
        .execute(&state.pool)
        .await
        .map_err(|e| AppError::ServiceUnavailable(format!("database unreachable: {e}")))?;
    Ok("ready")
}
