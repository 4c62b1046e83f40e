//! # Record Identifiers
//!
//! Each table's primary key gets its own newtype so a camper id can never be
//! passed where an activity id is expected. The inner value is the SQLite
//! rowid assigned on insert.

use serde::{Deserialize, Serialize};

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw rowid.
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// The raw rowid.
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

record_id!(
    /// Primary key of an `activities` row.
    ActivityId
);
record_id!(
    /// Primary key of a `campers` row.
    CamperId
);
record_id!(
    /// Primary key of a `signups` row.
    SignupId
);
