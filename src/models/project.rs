//! Project models
//!
//! A `PersonalProject` is invoiced directly to one partner. A
//! `CompanyProject` belongs to the company and may carry a bonus for each
//! partner; bonuses are credited regardless of the project's own status.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::{CompanyProjectId, ProjectId};
use super::money::Money;
use super::partner::Partner;
use super::validation::{check_description, check_amount, RecordValidationError};
use crate::error::AgoraError;

/// Invoicing lifecycle of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    NotInvoiced,
    Invoiced,
    /// Payment received from the client
    Received,
    Void,
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInvoiced => write!(f, "Not invoiced"),
            Self::Invoiced => write!(f, "Invoiced"),
            Self::Received => write!(f, "Received"),
            Self::Void => write!(f, "Void"),
        }
    }
}

impl FromStr for ProjectStatus {
    type Err = AgoraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "not_invoiced" | "draft" => Ok(Self::NotInvoiced),
            "invoiced" => Ok(Self::Invoiced),
            "received" | "paid" => Ok(Self::Received),
            "void" | "cancelled" => Ok(Self::Void),
            _ => Err(AgoraError::Validation(format!(
                "Unknown project status '{}' (use not-invoiced, invoiced, received or void)",
                s
            ))),
        }
    }
}

/// Fill in the invoice/payment dates implied by a status change
fn stamp_dates(
    status: ProjectStatus,
    on: NaiveDate,
    invoice_date: &mut Option<NaiveDate>,
    payment_date: &mut Option<NaiveDate>,
) {
    match status {
        ProjectStatus::Invoiced => {
            invoice_date.get_or_insert(on);
        }
        ProjectStatus::Received => {
            invoice_date.get_or_insert(on);
            payment_date.get_or_insert(on);
        }
        ProjectStatus::NotInvoiced | ProjectStatus::Void => {}
    }
}

/// Work invoiced directly to one partner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalProject {
    pub id: ProjectId,

    /// Partner the project is invoiced to
    pub owner: Partner,

    #[serde(default)]
    pub client: String,

    pub description: String,

    /// Pre-tax amount
    pub amount: Money,

    #[serde(default)]
    pub status: ProjectStatus,

    /// Date used when filtering balances by period
    #[serde(default)]
    pub invoice_date: Option<NaiveDate>,

    #[serde(default)]
    pub payment_date: Option<NaiveDate>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PersonalProject {
    pub fn new(owner: Partner, description: impl Into<String>, amount: Money) -> Self {
        let now = Utc::now();
        Self {
            id: ProjectId::new(),
            owner,
            client: String::new(),
            description: description.into(),
            amount,
            status: ProjectStatus::NotInvoiced,
            invoice_date: None,
            payment_date: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_client(mut self, client: impl Into<String>) -> Self {
        self.client = client.into();
        self
    }

    pub fn with_invoice_date(mut self, date: NaiveDate) -> Self {
        self.invoice_date = Some(date);
        self
    }

    /// Move to a new status, stamping invoice/payment dates that are still empty
    pub fn set_status(&mut self, status: ProjectStatus, on: NaiveDate) {
        self.status = status;
        stamp_dates(status, on, &mut self.invoice_date, &mut self.payment_date);
        self.updated_at = Utc::now();
    }

    pub fn set_amount(&mut self, amount: Money) {
        self.amount = amount;
        self.updated_at = Utc::now();
    }

    pub fn is_received(&self) -> bool {
        self.status == ProjectStatus::Received
    }

    pub fn validate(&self) -> Result<(), RecordValidationError> {
        check_description(&self.description)?;
        check_amount(self.amount, "Project amount")
    }
}

/// A company project, with an optional bonus for each partner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyProject {
    pub id: CompanyProjectId,

    #[serde(default)]
    pub client: String,

    pub description: String,

    /// Amount invoiced by the company
    pub amount: Money,

    #[serde(default)]
    pub status: ProjectStatus,

    #[serde(default)]
    pub invoice_date: Option<NaiveDate>,

    #[serde(default)]
    pub payment_date: Option<NaiveDate>,

    #[serde(default)]
    pub bonus_a: Money,

    #[serde(default)]
    pub bonus_b: Money,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CompanyProject {
    pub fn new(description: impl Into<String>, amount: Money) -> Self {
        let now = Utc::now();
        Self {
            id: CompanyProjectId::new(),
            client: String::new(),
            description: description.into(),
            amount,
            status: ProjectStatus::NotInvoiced,
            invoice_date: None,
            payment_date: None,
            bonus_a: Money::zero(),
            bonus_b: Money::zero(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_client(mut self, client: impl Into<String>) -> Self {
        self.client = client.into();
        self
    }

    pub fn with_invoice_date(mut self, date: NaiveDate) -> Self {
        self.invoice_date = Some(date);
        self
    }

    pub fn with_bonus(mut self, partner: Partner, bonus: Money) -> Self {
        *self.bonus_mut(partner) = bonus;
        self
    }

    /// Bonus credited to `partner`
    pub fn bonus_for(&self, partner: Partner) -> Money {
        match partner {
            Partner::A => self.bonus_a,
            Partner::B => self.bonus_b,
        }
    }

    fn bonus_mut(&mut self, partner: Partner) -> &mut Money {
        match partner {
            Partner::A => &mut self.bonus_a,
            Partner::B => &mut self.bonus_b,
        }
    }

    pub fn set_bonus(&mut self, partner: Partner, bonus: Money) {
        *self.bonus_mut(partner) = bonus;
        self.updated_at = Utc::now();
    }

    pub fn set_status(&mut self, status: ProjectStatus, on: NaiveDate) {
        self.status = status;
        stamp_dates(status, on, &mut self.invoice_date, &mut self.payment_date);
        self.updated_at = Utc::now();
    }

    pub fn validate(&self) -> Result<(), RecordValidationError> {
        check_description(&self.description)?;
        check_amount(self.amount, "Project amount")?;
        check_amount(self.bonus_a, "Bonus for partner A")?;
        check_amount(self.bonus_b, "Bonus for partner B")
    }
}
