//! # Error Types
//!
//! Field rule violations raised before a record is written. The `Display`
//! text is returned to API clients verbatim, so it is written for them.

use thiserror::Error;

/// A field value rejected by the registry's rules.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Camper name is empty.
    #[error("Camper must have a name.")]
    EmptyName,

    /// Camper age outside the accepted range.
    #[error("Camper must be 8 to 18 years old!")]
    AgeOutOfRange(i64),

    /// Signup hour outside the day.
    #[error("time must be between 0 to 23")]
    TimeOutOfRange(i64),

    /// A field that must be supplied was absent or null.
    #[error("{0} is required")]
    Required(&'static str),
}
