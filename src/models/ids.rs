//! Strongly-typed ID wrappers for all record types
//!
//! Using newtype wrappers prevents accidentally mixing up IDs from different
//! record types at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;
use uuid::Uuid;

/// Behaviour shared by every record ID
pub trait RecordId: Copy + Eq + Hash + fmt::Display {
    /// Whether `reference` names this ID: the display form ("prj-1a2b3c4d"),
    /// its hex part alone, or the full UUID
    fn matches(&self, reference: &str) -> bool;
}

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl RecordId for $name {
            fn matches(&self, reference: &str) -> bool {
                let reference = reference.trim();
                let full = self.0.to_string();
                reference == self.to_string() || reference == full || reference == &full[..8]
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, &self.0.to_string()[..8])
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(ProjectId, "prj-");
define_id!(CompanyProjectId, "cpj-");
define_id!(FixedExpenseId, "fix-");
define_id!(PersonalExpenseId, "pex-");
define_id!(ExpenseReportId, "bol-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let id = ExpenseReportId::new();
        let display = id.to_string();
        assert!(display.starts_with("bol-"));
        assert_eq!(display.len(), 12);
    }

    #[test]
    fn test_matches_short_and_full_forms() {
        let id = ProjectId::new();
        assert!(id.matches(&id.to_string()));
        assert!(id.matches(&id.as_uuid().to_string()));
        assert!(id.matches(&id.as_uuid().to_string()[..8]));
        assert!(id.matches(&format!(" {} ", id)));
        assert!(!id.matches("prj-00000000"));
        assert!(!id.matches(&id.as_uuid().to_string()[..4]));
    }

    #[test]
    fn test_from_str_accepts_prefixed_uuid() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id: FixedExpenseId = format!("fix-{}", uuid_str).parse().unwrap();
        assert_eq!(id.as_uuid().to_string(), uuid_str);
    }
}
