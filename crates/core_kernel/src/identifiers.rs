//! Strongly-typed identifiers for the catalog entities
//!
//! Downstream services key their records with plain integers. Wrapping them in
//! newtypes keeps a product id from being passed where a review id is expected,
//! while `#[serde(transparent)]` keeps the wire format a bare JSON integer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

macro_rules! define_id {
    ($name:ident, $entity:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Wraps a raw identifier
            pub const fn new(value: i32) -> Self {
                Self(value)
            }

            /// Returns the raw identifier
            pub const fn value(&self) -> i32 {
                self.0
            }

            /// Returns the entity name used in log and error messages
            pub fn entity() -> &'static str {
                $entity
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }

        impl From<i32> for $name {
            fn from(value: i32) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> i32 {
                id.0
            }
        }
    };
}

define_id!(ProductId, "Product");
define_id!(RecommendationId, "Recommendation");
define_id!(ReviewId, "Review");
