//! Strongly-typed identifiers for domain entities
//!
//! The source datasets key every record by a plain integer. Newtype wrappers
//! keep an agent id from being compared against a disaster id by mistake.
//! Ids are signed so that dangling or malformed references (0, -1) still
//! round-trip without failing deserialization.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Creates an identifier from its raw value
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw integer value
            pub const fn value(&self) -> i64 {
                self.0
            }

            /// Returns the identifier prefix for display
            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                // Strip prefix if present
                let raw = s.strip_prefix(concat!($prefix, "-")).unwrap_or(s);
                raw.trim()
                    .parse::<i64>()
                    .map(Self)
                    .map_err(|_| CoreError::validation(format!("invalid {} id: {:?}", $prefix, s)))
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> i64 {
                id.0
            }
        }
    };
}

define_id!(AgentId, "AGT");
define_id!(ClaimHandlerId, "CH");
define_id!(ClaimId, "CLM");
define_id!(DisasterId, "DIS");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_id_display() {
        assert_eq!(AgentId::new(24).to_string(), "AGT-24");
    }

    #[test]
    fn test_id_parsing_with_and_without_prefix() {
        assert_eq!("DIS-15".parse::<DisasterId>().unwrap(), DisasterId::new(15));
        assert_eq!("15".parse::<DisasterId>().unwrap(), DisasterId::new(15));
        assert_eq!("-1".parse::<AgentId>().unwrap(), AgentId::new(-1));
    }

    #[test]
    fn test_id_parsing_rejects_garbage() {
        assert!("Texas".parse::<ClaimHandlerId>().is_err());
    }

    #[test]
    fn test_serde_is_transparent() {
        let json = serde_json::to_string(&ClaimId::new(7)).unwrap();
        assert_eq!(json, "7");
        let back: ClaimId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ClaimId::new(7));
    }
}
