//! The two company partners
//!
//! The company has exactly two partners. Everything that is "per partner"
//! (project ownership, bonuses, boletins, personal expenses, the fixed-expense
//! split) is keyed by this enum.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;
use crate::error::AgoraError;

/// One of the two partners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Partner {
    A,
    B,
}

impl Partner {
    /// Both partners, in display order
    pub const ALL: [Partner; 2] = [Partner::A, Partner::B];

    /// Number of partners sharing company-wide costs
    pub const COUNT: usize = Self::ALL.len();

    /// Short lowercase code ("a" or "b")
    pub fn code(&self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
        }
    }
}

impl fmt::Display for Partner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
        }
    }
}

impl FromStr for Partner {
    type Err = AgoraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" | "partner a" | "partner_a" => Ok(Self::A),
            "b" | "partner b" | "partner_b" => Ok(Self::B),
            _ => Err(AgoraError::InvalidPartner(s.to_string())),
        }
    }
}

/// Historical initial investment for each partner
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InitialInvestments {
    pub a: Money,
    pub b: Money,
}

impl InitialInvestments {
    pub fn for_partner(&self, partner: Partner) -> Money {
        match partner {
            Partner::A => self.a,
            Partner::B => self.b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_partner() {
        assert_eq!("a".parse::<Partner>().unwrap(), Partner::A);
        assert_eq!(" B ".parse::<Partner>().unwrap(), Partner::B);
        assert_eq!("Partner A".parse::<Partner>().unwrap(), Partner::A);
    }

    #[test]
    fn test_parse_invalid_partner() {
        let err = "c".parse::<Partner>().unwrap_err();
        assert!(err.is_invalid_partner());
        assert!("".parse::<Partner>().is_err());
    }

    #[test]
    fn test_serialization() {
        assert_eq!(serde_json::to_string(&Partner::A).unwrap(), "\"a\"");
        let p: Partner = serde_json::from_str("\"b\"").unwrap();
        assert_eq!(p, Partner::B);
    }

    #[test]
    fn test_initial_investments_lookup() {
        let inv = InitialInvestments {
            a: Money::from_cents(100),
            b: Money::from_cents(200),
        };
        assert_eq!(inv.for_partner(Partner::A), Money::from_cents(100));
        assert_eq!(inv.for_partner(Partner::B), Money::from_cents(200));
    }
}
