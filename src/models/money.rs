//! Money type for representing currency amounts
//!
//! Wraps a `rust_decimal::Decimal` so sums and the fixed-expense split stay
//! exact. Amounts are only rounded to two decimal places when displayed or
//! exported.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use super::partner::Partner;

/// An exact monetary amount in euros
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use agora::models::Money;
    /// let amount = Money::from_cents(1050); // €10.50
    /// assert_eq!(amount.to_string(), "€10.50");
    /// ```
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// The exact underlying amount, with full precision
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Exactly half of this amount
    pub fn half(&self) -> Self {
        Self(self.0 / Decimal::from(Partner::COUNT))
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Total of `amounts`, or `None` if it leaves the representable range
    pub fn checked_sum<I>(amounts: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        amounts
            .into_iter()
            .try_fold(Self::zero(), Self::checked_add)
    }

    /// This amount, or zero when it is negative
    pub fn clamp_to_zero(&self) -> Self {
        if self.is_negative() {
            Self::zero()
        } else {
            *self
        }
    }

    /// The amount rounded half away from zero to two decimal places
    pub fn rounded(&self) -> Decimal {
        let mut rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(2);
        if rounded.is_zero() {
            rounded.set_sign_positive(true);
        }
        rounded
    }

    /// Parse a money amount from a string
    ///
    /// Accepts "10.50", "-10.50", "€10.50", "10,50" and "1.234,56".
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed),
        };

        let rest = rest
            .trim_start_matches('€')
            .trim_end_matches('€')
            .trim()
            .replace(' ', "");

        if rest.is_empty() {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        // A trailing comma group marks the decimal separator; dots are then
        // thousands separators.
        let normalized = match (rest.rfind(','), rest.rfind('.')) {
            (Some(comma), Some(dot)) if comma > dot => rest.replace('.', "").replace(',', "."),
            (Some(_), Some(_)) => rest.replace(',', ""),
            (Some(_), None) => rest.replace(',', "."),
            _ => rest,
        };

        let amount = Decimal::from_str(&normalized)
            .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

        Ok(Self(if negative { -amount } else { amount }))
    }

    /// Format with a currency symbol, rounded to cents
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let rounded = self.rounded();
        if rounded.is_sign_negative() {
            format!("-{}{}", symbol, rounded.abs())
        } else {
            format!("{}{}", symbol, rounded)
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.format_with_symbol("€"))
    }
}

impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
