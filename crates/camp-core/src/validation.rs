//! # Field Rules
//!
//! Every camper name, camper age, and signup hour passes through one of
//! these functions before it reaches the store. The same ranges are
//! repeated as CHECK constraints in the schema.

use std::ops::RangeInclusive;

use crate::error::ValidationError;

/// Accepted camper ages, inclusive.
pub const CAMPER_AGE_RANGE: RangeInclusive<i64> = 8..=18;

/// Accepted signup hours, inclusive.
pub const SIGNUP_HOUR_RANGE: RangeInclusive<i64> = 0..=23;

/// A camper name must be non-empty. Whitespace counts as content.
pub fn validate_camper_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(())
}

pub fn validate_camper_age(age: i64) -> Result<(), ValidationError> {
    if !CAMPER_AGE_RANGE.contains(&age) {
        return Err(ValidationError::AgeOutOfRange(age));
    }
    Ok(())
}

pub fn validate_signup_time(time: i64) -> Result<(), ValidationError> {
    if !SIGNUP_HOUR_RANGE.contains(&time) {
        return Err(ValidationError::TimeOutOfRange(time));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_rules() {
        assert!(validate_camper_name("Alex").is_ok());
        assert_eq!(validate_camper_name(""), Err(ValidationError::EmptyName));
        assert!(validate_camper_name("   ").is_ok());
    }

    #[test]
    fn age_bounds_are_inclusive() {
        assert!(validate_camper_age(8).is_ok());
        assert!(validate_camper_age(18).is_ok());
        assert_eq!(validate_camper_age(7), Err(ValidationError::AgeOutOfRange(7)));
        assert_eq!(validate_camper_age(19), Err(ValidationError::AgeOutOfRange(19)));
    }

    #[test]
    fn time_bounds_are_inclusive() {
        assert!(validate_signup_time(0).is_ok());
        assert!(validate_signup_time(23).is_ok());
        assert_eq!(validate_signup_time(-1), Err(ValidationError::TimeOutOfRange(-1)));
        assert_eq!(validate_signup_time(24), Err(ValidationError::TimeOutOfRange(24)));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn age_accepted_iff_in_range(age in any::<i64>()) {
            let accepted = validate_camper_age(age).is_ok();
            prop_assert_eq!(accepted, (8..=18).contains(&age));
        }

        #[test]
        fn time_accepted_iff_in_range(time in any::<i64>()) {
            let accepted = validate_signup_time(time).is_ok();
            prop_assert_eq!(accepted, (0..=23).contains(&time));
        }

        /// Exactly the empty string is refused.
        #[test]
        fn name_accepted_iff_non_empty(name in "[ A-Za-z]{0,20}") {
            prop_assert_eq!(validate_camper_name(&name).is_ok(), !name.is_empty());
        }
    }
}
