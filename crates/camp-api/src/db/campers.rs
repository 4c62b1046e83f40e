//! Camper persistence operations on the `campers` table.
//!
//! Callers validate before writing; the schema's CHECK constraints are a
//! second line, not the primary one.

use camp_core::{Camper, CamperId, NewCamper};
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

/// Insert a validated camper and return the stored record.
pub async fn insert(pool: &SqlitePool, camper: &NewCamper) -> Result<Camper, sqlx::Error> {
    let now = Utc::now();
    let result = sqlx::query(
        "INSERT INTO campers (name, age, created_at, updated_at) VALUES (?, ?, ?, ?)",
    )
    .bind(camper.name())
    .bind(camper.age())
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    let id = CamperId::new(result.last_insert_rowid());
    tracing::debug!(camper_id = %id, "camper inserted");

    Ok(Camper {
        id,
        name: camper.name().to_string(),
        age: camper.age(),
        created_at: now,
        updated_at: now,
    })
}

/// Fetch a camper by ID.
pub async fn get_by_id(pool: &SqlitePool, id: CamperId) -> Result<Option<Camper>, sqlx::Error> {
    let row = sqlx::query_as::<_, CamperRow>(
        "SELECT id, name, age, created_at, updated_at FROM campers WHERE id = ?",
    )
    .bind(id.get())
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Camper::from))
}

/// List all campers in insertion order.
pub async fn list(pool: &SqlitePool) -> Result<Vec<Camper>, sqlx::Error> {
    let rows = sqlx::query_as::<_, CamperRow>(
        "SELECT id, name, age, created_at, updated_at FROM campers ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Camper::from).collect())
}

/// Persist the camper's name and age and refresh `updated_at`.
///
/// Returns `false` if no row has the camper's ID.
pub async fn update(pool: &SqlitePool, camper: &mut Camper) -> Result<bool, sqlx::Error> {
    let now = Utc::now();
    let result = sqlx::query("UPDATE campers SET name = ?, age = ?, updated_at = ? WHERE id = ?")
        .bind(&camper.name)
        .bind(camper.age)
        .bind(now)
        .bind(camper.id.get())
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Ok(false);
    }
    camper.updated_at = now;
    Ok(true)
}

/// Delete a camper. Fails with a foreign key violation while signups
/// still reference it.
pub async fn delete(pool: &SqlitePool, id: CamperId) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM campers WHERE id = ?")
        .bind(id.get())
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Internal row type for SQLx mapping.
#[derive(sqlx::FromRow)]
pub(crate) struct CamperRow {
    id: i64,
    name: String,
    age: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CamperRow> for Camper {
    fn from(row: CamperRow) -> Self {
        Camper {
            id: CamperId::new(row.id),
            name: row.name,
            age: row.age,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
