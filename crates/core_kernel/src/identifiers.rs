//! Strongly-typed identifiers for domain entities
//!
//! Claims, documents and lecturers are numbered by the store that owns
//! them. Wrapping the raw sequence number in a newtype keeps a claim id
//! from being passed where a document id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when an identifier string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid {kind} identifier '{input}': {source}")]
pub struct IdParseError {
    pub kind: &'static str,
    pub input: String,
    #[source]
    pub source: ParseIntError,
}

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Creates an identifier from a raw sequence value
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// Returns the raw sequence value
            pub const fn value(&self) -> u64 {
                self.0
            }

            /// Returns the identifier prefix for display
            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", Self::prefix(), self.0)
            }
        }

        impl FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                // Strip prefix if present
                let raw = s.trim();
                let raw = raw.strip_prefix(concat!($prefix, "-")).unwrap_or(raw);
                raw.parse::<u64>().map(Self).map_err(|source| IdParseError {
                    kind: $prefix,
                    input: s.to_string(),
                    source,
                })
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> u64 {
                id.0
            }
        }
    };
}

define_id!(ClaimId, "CLM");
define_id!(DocumentId, "DOC");
define_id!(LecturerId, "LEC");
