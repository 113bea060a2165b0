//! Expense report ("boletim") model
//!
//! A boletim is a per diem / reimbursement claim issued to one partner. It is
//! how a partner draws down a positive balance with the company.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::ExpenseReportId;
use super::money::Money;
use super::partner::Partner;
use super::validation::{check_description, check_amount, RecordValidationError};
use crate::error::AgoraError;

/// Payment state of a boletim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    #[default]
    Pending,
    Paid,
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Paid => write!(f, "Paid"),
        }
    }
}

impl FromStr for ReportStatus {
    type Err = AgoraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            _ => Err(AgoraError::Validation(format!(
                "Unknown expense report status '{}' (use pending or paid)",
                s
            ))),
        }
    }
}

/// A boletim issued to a partner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseReport {
    pub id: ExpenseReportId,
    pub partner: Partner,
    pub description: String,
    pub amount: Money,

    /// Date the boletim was issued, used for period filtering
    pub issue_date: NaiveDate,

    #[serde(default)]
    pub payment_status: ReportStatus,

    #[serde(default)]
    pub paid_date: Option<NaiveDate>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ExpenseReport {
    pub fn new(
        partner: Partner,
        description: impl Into<String>,
        amount: Money,
        issue_date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: ExpenseReportId::new(),
            partner,
            description: description.into(),
            amount,
            issue_date,
            payment_status: ReportStatus::Pending,
            paid_date: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn mark_paid(&mut self, on: NaiveDate) {
        self.payment_status = ReportStatus::Paid;
        self.paid_date = Some(on);
        self.updated_at = Utc::now();
    }

    pub fn is_paid(&self) -> bool {
        self.payment_status == ReportStatus::Paid
    }

    pub fn validate(&self) -> Result<(), RecordValidationError> {
        check_description(&self.description)?;
        check_amount(self.amount, "Boletim amount")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_mark_paid() {
        let mut report = ExpenseReport::new(
            Partner::A,
            "Ajudas de custo Março",
            Money::from_cents(52536),
            date(2025, 3, 31),
        );
        assert!(!report.is_paid());

        report.mark_paid(date(2025, 4, 2));
        assert!(report.is_paid());
        assert_eq!(report.paid_date, Some(date(2025, 4, 2)));
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("Paid".parse::<ReportStatus>().unwrap(), ReportStatus::Paid);
        assert!("overdue".parse::<ReportStatus>().is_err());
    }
}
