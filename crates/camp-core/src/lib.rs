//! # camp-core — Domain Types for the Camp Registry
//!
//! Records for the three entities the registry tracks, the typed identifiers
//! that reference them, and the field rules every write must satisfy.
//!
//! ```text
//!   Camper ──< Signup >── Activity
//! ```
//!
//! A [`Signup`] joins one [`Camper`] to one [`Activity`] at an hour of the day.
//!
//! ## Validation Model
//!
//! Rules are plain functions in [`validation`] returning
//! `Result<(), ValidationError>`. Draft types ([`NewCamper`], [`NewSignup`])
//! can only be built through a validating constructor, and patch types
//! ([`CamperPatch`], [`SignupPatch`]) validate every supplied field before
//! touching the target record. A failed patch leaves the record unchanged.
//!
//! ## Crate Policy
//!
//! - No I/O. Persistence lives in `camp-api::db`.
//! - No `.unwrap()` outside tests.

pub mod activity;
pub mod camper;
pub mod error;
pub mod id;
pub mod signup;
pub mod validation;

pub use activity::{Activity, NewActivity};
pub use camper::{Camper, CamperPatch, NewCamper};
pub use error::ValidationError;
pub use id::{ActivityId, CamperId, SignupId};
pub use signup::{NewSignup, Signup, SignupPatch};
pub use validation::{
    validate_camper_age, validate_camper_name, validate_signup_time, CAMPER_AGE_RANGE,
    SIGNUP_HOUR_RANGE,
};
