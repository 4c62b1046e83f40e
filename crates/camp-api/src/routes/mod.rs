//! # API Route Modules
//!
//! - `campers` — camper CRUD and the camper's activities.
//! - `activities` — activity listing, the activity's campers, and removal.
//! - `signups` — creating and re-timing signups.
//!
//! Handlers load and store through [`crate::db`], convert request DTOs into
//! `camp_core` draft/patch types (which validate), and answer with a struct
//! from [`crate::views`].

pub mod activities;
pub mod campers;
pub mod signups;

use crate::error::AppError;

/// Map a failed delete caused by remaining signups to 409.
///
/// Handlers check the signup count first; this covers a signup inserted
/// between that check and the delete.
pub(crate) fn delete_error(err: sqlx::Error, conflict: &str) -> AppError {
    if let sqlx::Error::Database(db) = &err {
        if db.is_foreign_key_violation() {
            return AppError::Conflict(conflict.to_string());
        }
    }
    AppError::from(err)
}
