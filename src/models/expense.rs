//! Company expense models
//!
//! Fixed monthly expenses are shared by both partners once paid. Personal
//! expenses are company payments made on behalf of one partner.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::{FixedExpenseId, PersonalExpenseId};
use super::money::Money;
use super::partner::Partner;
use super::validation::{check_description, check_amount, RecordValidationError};
use crate::error::AgoraError;

/// Payment state of a company expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Overdue,
    Paid,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Overdue => write!(f, "Overdue"),
            Self::Paid => write!(f, "Paid"),
        }
    }
}

impl FromStr for PaymentStatus {
    type Err = AgoraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "overdue" => Ok(Self::Overdue),
            "paid" => Ok(Self::Paid),
            _ => Err(AgoraError::Validation(format!(
                "Unknown payment status '{}' (use pending, overdue or paid)",
                s
            ))),
        }
    }
}

/// Recurring company-wide cost (rent, accounting, software...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedMonthlyExpense {
    pub id: FixedExpenseId,
    pub description: String,
    pub amount: Money,

    /// Expense date, used for period filtering
    pub date: NaiveDate,

    #[serde(default)]
    pub payment_status: PaymentStatus,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FixedMonthlyExpense {
    pub fn new(description: impl Into<String>, amount: Money, date: NaiveDate) -> Self {
        let now = Utc::now();
        Self {
            id: FixedExpenseId::new(),
            description: description.into(),
            amount,
            date,
            payment_status: PaymentStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn paid(mut self) -> Self {
        self.payment_status = PaymentStatus::Paid;
        self
    }

    pub fn set_payment_status(&mut self, status: PaymentStatus) {
        self.payment_status = status;
        self.updated_at = Utc::now();
    }

    pub fn is_paid(&self) -> bool {
        self.payment_status == PaymentStatus::Paid
    }

    pub fn validate(&self) -> Result<(), RecordValidationError> {
        check_description(&self.description)?;
        check_amount(self.amount, "Expense amount")
    }
}

/// Company expense booked against one partner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalExpense {
    pub id: PersonalExpenseId,
    pub partner: Partner,
    pub description: String,
    pub amount: Money,
    pub date: NaiveDate,

    #[serde(default)]
    pub payment_status: PaymentStatus,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PersonalExpense {
    pub fn new(
        partner: Partner,
        description: impl Into<String>,
        amount: Money,
        date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: PersonalExpenseId::new(),
            partner,
            description: description.into(),
            amount,
            date,
            payment_status: PaymentStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn paid(mut self) -> Self {
        self.payment_status = PaymentStatus::Paid;
        self
    }

    pub fn set_payment_status(&mut self, status: PaymentStatus) {
        self.payment_status = status;
        self.updated_at = Utc::now();
    }

    pub fn is_paid(&self) -> bool {
        self.payment_status == PaymentStatus::Paid
    }

    pub fn validate(&self) -> Result<(), RecordValidationError> {
        check_description(&self.description)?;
        check_amount(self.amount, "Expense amount")
    }
}
