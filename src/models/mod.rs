//! Core data models for Agora Books
//!
//! This module contains the records the bookkeeping core reads and writes:
//! projects, company projects with partner bonuses, expenses and boletins.

pub mod expense;
pub mod expense_report;
pub mod ids;
pub mod money;
pub mod partner;
pub mod period;
pub mod project;
pub mod validation;

pub use expense::{FixedMonthlyExpense, PaymentStatus, PersonalExpense};
pub use expense_report::{ExpenseReport, ReportStatus};
pub use ids::{
    CompanyProjectId, ExpenseReportId, FixedExpenseId, PersonalExpenseId, ProjectId, RecordId,
};
pub use money::Money;
pub use partner::{InitialInvestments, Partner};
pub use period::{last_day_of_month, month_name, DateRange, MONTH_NAMES};
pub use project::{CompanyProject, PersonalProject, ProjectStatus};
pub use validation::RecordValidationError;
