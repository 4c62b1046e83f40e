//! # Signups
//!
//! The join record between a camper and an activity. Only the hour is
//! validated here; whether the referenced rows exist is enforced by the
//! store's foreign keys.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::{ActivityId, CamperId, SignupId};
use crate::validation::validate_signup_time;

/// A stored signup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signup {
    pub id: SignupId,
    /// Hour of the day, 0 through 23.
    pub time: i64,
    pub camper_id: CamperId,
    pub activity_id: ActivityId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A validated signup awaiting insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSignup {
    camper_id: CamperId,
    activity_id: ActivityId,
    time: i64,
}

impl NewSignup {
    pub fn try_new(
        camper_id: CamperId,
        activity_id: ActivityId,
        time: i64,
    ) -> Result<Self, ValidationError> {
        validate_signup_time(time)?;
        Ok(Self {
            camper_id,
            activity_id,
            time,
        })
    }

    pub fn camper_id(&self) -> CamperId {
        self.camper_id
    }

    pub fn activity_id(&self) -> ActivityId {
        self.activity_id
    }

    pub fn time(&self) -> i64 {
        self.time
    }
}

/// A partial update to a signup's hour.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupPatch {
    pub time: Option<i64>,
}

impl SignupPatch {
    pub fn apply_to(self, signup: &mut Signup) -> Result<(), ValidationError> {
        if let Some(time) = self.time {
            validate_signup_time(time)?;
            signup.time = time;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_signup_checks_hour() {
        let ok = NewSignup::try_new(CamperId::new(1), ActivityId::new(2), 9).unwrap();
        assert_eq!(ok.time(), 9);
        assert_eq!(ok.camper_id(), CamperId::new(1));
        assert_eq!(ok.activity_id(), ActivityId::new(2));

        assert_eq!(
            NewSignup::try_new(CamperId::new(1), ActivityId::new(2), 24),
            Err(ValidationError::TimeOutOfRange(24))
        );
    }

    #[test]
    fn patch_rejects_bad_hour_without_mutation() {
        let now = Utc::now();
        let mut signup = Signup {
            id: SignupId::new(1),
            time: 10,
            camper_id: CamperId::new(1),
            activity_id: ActivityId::new(1),
            created_at: now,
            updated_at: now,
        };
        let err = SignupPatch { time: Some(-3) }.apply_to(&mut signup).unwrap_err();
        assert_eq!(err, ValidationError::TimeOutOfRange(-3));
        assert_eq!(signup.time, 10);

        SignupPatch { time: Some(23) }.apply_to(&mut signup).unwrap();
        assert_eq!(signup.time, 23);
    }
}
