//! # Response Views
//!
//! Each endpoint returns one of these structs, and each struct lists exactly
//! the fields the caller sees. Timestamps are never exposed.
//!
//! Only [`CamperDetail`] expands a relationship (camper → signups →
//! activity). No view expands the reverse direction, so the
//! Camper↔Signup↔Activity cycle cannot recurse.

use camp_core::{Activity, Camper, Signup};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An activity as listed: `{id, name, difficulty}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ActivitySummary {
    pub id: i64,
    pub name: String,
    pub difficulty: i64,
}

impl From<&Activity> for ActivitySummary {
    fn from(activity: &Activity) -> Self {
        Self {
            id: activity.id.get(),
            name: activity.name.clone(),
            difficulty: activity.difficulty,
        }
    }
}

/// A camper as listed or just created: `{id, name, age}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CamperSummary {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

impl From<&Camper> for CamperSummary {
    fn from(camper: &Camper) -> Self {
        Self {
            id: camper.id.get(),
            name: camper.name.clone(),
            age: camper.age,
        }
    }
}

/// One entry of [`CamperDetail::signups`]: just the activity signed up for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SignupActivity {
    pub activity: ActivitySummary,
}

/// A single camper with the activities behind each signup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CamperDetail {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub signups: Vec<SignupActivity>,
}

impl CamperDetail {
    pub fn new(camper: &Camper, signups: &[(Signup, Activity)]) -> Self {
        Self {
            id: camper.id.get(),
            name: camper.name.clone(),
            age: camper.age,
            signups: signups
                .iter()
                .map(|(_, activity)| SignupActivity {
                    activity: ActivitySummary::from(activity),
                })
                .collect(),
        }
    }
}

/// A signup with its references as bare ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SignupSummary {
    pub id: i64,
    pub time: i64,
    pub camper_id: i64,
    pub activity_id: i64,
}

impl From<&Signup> for SignupSummary {
    fn from(signup: &Signup) -> Self {
        Self {
            id: signup.id.get(),
            time: signup.time,
            camper_id: signup.camper_id.get(),
            activity_id: signup.activity_id.get(),
        }
    }
}
