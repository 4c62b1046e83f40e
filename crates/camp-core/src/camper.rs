//! # Campers
//!
//! A camper is created from a validated [`NewCamper`] and later changed only
//! through a [`CamperPatch`], which re-runs the rules for each field it sets.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::CamperId;
use crate::validation::{validate_camper_age, validate_camper_name};

/// A stored camper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Camper {
    pub id: CamperId,
    pub name: String,
    pub age: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A camper that has passed validation but has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCamper {
    name: String,
    age: i64,
}

impl NewCamper {
    /// Build a draft from optional request fields.
    ///
    /// Both fields are required; each is checked against its rule.
    pub fn try_new(name: Option<String>, age: Option<i64>) -> Result<Self, ValidationError> {
        let name = name.ok_or(ValidationError::Required("name"))?;
        validate_camper_name(&name)?;
        let age = age.ok_or(ValidationError::Required("age"))?;
        validate_camper_age(age)?;
        Ok(Self { name, age })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i64 {
        self.age
    }
}

/// A partial update to a camper. `None` leaves the field as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CamperPatch {
    pub name: Option<String>,
    pub age: Option<i64>,
}

impl CamperPatch {
    /// Check every field the patch sets.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            validate_camper_name(name)?;
        }
        if let Some(age) = self.age {
            validate_camper_age(age)?;
        }
        Ok(())
    }

    /// Overwrite the camper's fields with the patch's.
    ///
    /// Validation happens first; on error `camper` is untouched.
    pub fn apply_to(self, camper: &mut Camper) -> Result<(), ValidationError> {
        self.validate()?;
        if let Some(name) = self.name {
            camper.name = name;
        }
        if let Some(age) = self.age {
            camper.age = age;
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none()
    }
}
