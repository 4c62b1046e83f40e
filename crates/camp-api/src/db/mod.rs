//! # Database Persistence Layer
//!
//! SQLite persistence for the registry via SQLx.
//!
//! ## Layout
//!
//! One module per table, each a set of free functions over `&SqlitePool`:
//! `insert`, `get_by_id`, `list`, `update`, `delete`. The many-to-many views
//! (activities of a camper, campers of an activity) are explicit joins in
//! [`signups`].
//!
//! ## Integrity
//!
//! Every connection runs with `PRAGMA foreign_keys = ON`, so a signup can
//! only reference existing rows and a parent with signups cannot be deleted.
//! Violations come back as `sqlx::Error::Database` and are classified in
//! [`crate::error::AppError`].
//!
//! ## Migrations
//!
//! `./migrations` is embedded at compile time and applied on every start.
//! The same directory works with `sqlx migrate run`.

pub mod activities;
pub mod campers;
pub mod signups;

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

/// Open a pool for `url` and apply pending migrations.
///
/// File databases are created if missing.
pub async fn init_pool(url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(options)
        .await?;

    tracing::info!(url, "connected to SQLite");

    migrate(&pool).await?;
    Ok(pool)
}

/// Open a private in-memory database with the schema applied.
///
/// The pool holds exactly one connection that never expires, since each
/// SQLite in-memory connection is its own database.
pub async fn connect_in_memory() -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    migrate(&pool).await?;
    Ok(pool)
}

async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("database migrations applied");
    Ok(())
}

/// Delete every row from every table, children first.
pub async fn reset(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for table in ["signups", "campers", "activities"] {
        sqlx::query(&format!("DELETE FROM {table}"))
            .execute(pool)
            .await?;
    }
    tracing::warn!("all registry tables cleared");
    Ok(())
}
