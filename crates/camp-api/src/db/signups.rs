//! Signup persistence operations and the join queries built on them.
//!
//! The `signups` table is the only link between campers and activities,
//! so every cross-entity view in the API is one of the queries here.

use camp_core::{Activity, ActivityId, Camper, CamperId, NewSignup, Signup, SignupId};
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use super::activities::ActivityRow;
use super::campers::CamperRow;

/// Insert a validated signup. Fails with a foreign key violation when the
/// camper or activity does not exist.
pub async fn insert(pool: &SqlitePool, signup: &NewSignup) -> Result<Signup, sqlx::Error> {
    let now = Utc::now();
    let result = sqlx::query(
        "INSERT INTO signups (time, camper_id, activity_id, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(signup.time())
    .bind(signup.camper_id().get())
    .bind(signup.activity_id().get())
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(Signup {
        id: SignupId::new(result.last_insert_rowid()),
        time: signup.time(),
        camper_id: signup.camper_id(),
        activity_id: signup.activity_id(),
        created_at: now,
        updated_at: now,
    })
}

/// Fetch a signup by ID.
pub async fn get_by_id(pool: &SqlitePool, id: SignupId) -> Result<Option<Signup>, sqlx::Error> {
    let row = sqlx::query_as::<_, SignupRow>(
        "SELECT id, time, camper_id, activity_id, created_at, updated_at
         FROM signups WHERE id = ?",
    )
    .bind(id.get())
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Signup::from))
}

/// List all signups in insertion order.
pub async fn list(pool: &SqlitePool) -> Result<Vec<Signup>, sqlx::Error> {
    let rows = sqlx::query_as::<_, SignupRow>(
        "SELECT id, time, camper_id, activity_id, created_at, updated_at
         FROM signups ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Signup::from).collect())
}

/// Persist the signup's hour and references and refresh `updated_at`.
pub async fn update(pool: &SqlitePool, signup: &mut Signup) -> Result<bool, sqlx::Error> {
    let now = Utc::now();
    let result = sqlx::query(
        "UPDATE signups SET time = ?, camper_id = ?, activity_id = ?, updated_at = ?
         WHERE id = ?",
    )
    .bind(signup.time)
    .bind(signup.camper_id.get())
    .bind(signup.activity_id.get())
    .bind(now)
    .bind(signup.id.get())
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Ok(false);
    }
    signup.updated_at = now;
    Ok(true)
}

/// Delete a signup.
pub async fn delete(pool: &SqlitePool, id: SignupId) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM signups WHERE id = ?")
        .bind(id.get())
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// A camper's signups, each paired with the activity it points to.
pub async fn for_camper_with_activity(
    pool: &SqlitePool,
    camper_id: CamperId,
) -> Result<Vec<(Signup, Activity)>, sqlx::Error> {
    let rows = sqlx::query_as::<_, SignupActivityRow>(
        "SELECT s.id, s.time, s.camper_id, s.activity_id, s.created_at, s.updated_at,
                a.name AS activity_name, a.difficulty AS activity_difficulty,
                a.created_at AS activity_created_at, a.updated_at AS activity_updated_at
         FROM signups s
         JOIN activities a ON a.id = s.activity_id
         WHERE s.camper_id = ?
         ORDER BY s.id",
    )
    .bind(camper_id.get())
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(SignupActivityRow::split).collect())
}

/// Distinct activities a camper has signed up for.
pub async fn activities_for_camper(
    pool: &SqlitePool,
    camper_id: CamperId,
) -> Result<Vec<Activity>, sqlx::Error> {
    let rows = sqlx::query_as::<_, ActivityRow>(
        "SELECT DISTINCT a.id, a.name, a.difficulty, a.created_at, a.updated_at
         FROM activities a
         JOIN signups s ON s.activity_id = a.id
         WHERE s.camper_id = ?
         ORDER BY a.id",
    )
    .bind(camper_id.get())
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Activity::from).collect())
}

/// Distinct campers signed up for an activity.
pub async fn campers_for_activity(
    pool: &SqlitePool,
    activity_id: ActivityId,
) -> Result<Vec<Camper>, sqlx::Error> {
    let rows = sqlx::query_as::<_, CamperRow>(
        "SELECT DISTINCT c.id, c.name, c.age, c.created_at, c.updated_at
         FROM campers c
         JOIN signups s ON s.camper_id = c.id
         WHERE s.activity_id = ?
         ORDER BY c.id",
    )
    .bind(activity_id.get())
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Camper::from).collect())
}

pub async fn count_for_camper(pool: &SqlitePool, camper_id: CamperId) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM signups WHERE camper_id = ?")
        .bind(camper_id.get())
        .fetch_one(pool)
        .await
}

pub async fn count_for_activity(
    pool: &SqlitePool,
    activity_id: ActivityId,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM signups WHERE activity_id = ?")
        .bind(activity_id.get())
        .fetch_one(pool)
        .await
}

/// Internal row type for SQLx mapping.
#[derive(sqlx::FromRow)]
struct SignupRow {
    id: i64,
    time: i64,
    camper_id: i64,
    activity_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<SignupRow> for Signup {
    fn from(row: SignupRow) -> Self {
        Signup {
            id: SignupId::new(row.id),
            time: row.time,
            camper_id: CamperId::new(row.camper_id),
            activity_id: ActivityId::new(row.activity_id),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// A signup row joined with its activity's columns.
#[derive(sqlx::FromRow)]
struct SignupActivityRow {
    #[sqlx(flatten)]
    signup: SignupRow,
    activity_name: String,
    activity_difficulty: i64,
    activity_created_at: DateTime<Utc>,
    activity_updated_at: DateTime<Utc>,
}

impl SignupActivityRow {
    fn split(self) -> (Signup, Activity) {
        let activity = Activity {
            id: ActivityId::new(self.signup.activity_id),
            name: self.activity_name,
            difficulty: self.activity_difficulty,
            created_at: self.activity_created_at,
            updated_at: self.activity_updated_at,
        };
        (Signup::from(self.signup), activity)
    }
}
