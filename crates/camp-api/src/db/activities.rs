//! Activity persistence operations on the `activities` table.

use camp_core::{Activity, ActivityId, NewActivity};
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

/// Insert an activity and return the stored record.
pub async fn insert(pool: &SqlitePool, activity: &NewActivity) -> Result<Activity, sqlx::Error> {
    let now = Utc::now();
    let result = sqlx::query(
        "INSERT INTO activities (name, difficulty, created_at, updated_at)
         VALUES (?, ?, ?, ?)",
    )
    .bind(&activity.name)
    .bind(activity.difficulty)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(Activity {
        id: ActivityId::new(result.last_insert_rowid()),
        name: activity.name.clone(),
        difficulty: activity.difficulty,
        created_at: now,
        updated_at: now,
    })
}

/// Fetch an activity by ID.
pub async fn get_by_id(pool: &SqlitePool, id: ActivityId) -> Result<Option<Activity>, sqlx::Error> {
    let row = sqlx::query_as::<_, ActivityRow>(
        "SELECT id, name, difficulty, created_at, updated_at
         FROM activities WHERE id = ?",
    )
    .bind(id.get())
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Activity::from))
}

/// List all activities in insertion order.
pub async fn list(pool: &SqlitePool) -> Result<Vec<Activity>, sqlx::Error> {
    let rows = sqlx::query_as::<_, ActivityRow>(
        "SELECT id, name, difficulty, created_at, updated_at
         FROM activities ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Activity::from).collect())
}

/// Persist the activity's name and difficulty and refresh `updated_at`.
///
/// Returns `false` if no row has the activity's ID.
pub async fn update(pool: &SqlitePool, activity: &mut Activity) -> Result<bool, sqlx::Error> {
    let now = Utc::now();
    let result = sqlx::query(
        "UPDATE activities SET name = ?, difficulty = ?, updated_at = ? WHERE id = ?",
    )
    .bind(&activity.name)
    .bind(activity.difficulty)
    .bind(now)
    .bind(activity.id.get())
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Ok(false);
    }
    activity.updated_at = now;
    Ok(true)
}

/// Delete an activity. Fails with a foreign key violation while signups
/// still reference it.
pub async fn delete(pool: &SqlitePool, id: ActivityId) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM activities WHERE id = ?")
        .bind(id.get())
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Internal row type for SQLx mapping.
#[derive(sqlx::FromRow)]
pub(crate) struct ActivityRow {
    id: i64,
    name: String,
    difficulty: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ActivityRow> for Activity {
    fn from(row: ActivityRow) -> Self {
        Activity {
            id: ActivityId::new(row.id),
            name: row.name,
            difficulty: row.difficulty,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
