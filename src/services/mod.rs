//! Service layer for Agora Books
//!
//! The service layer provides business logic on top of the storage layer:
//! the balance calculator, record management with validation and auditing,
//! and balance verification.

pub mod balance;
pub mod company_project;
pub mod expense;
pub mod expense_report;
pub mod project;
pub mod verification;

pub use balance::{
    BalanceBreakdown, BalanceQuery, BalanceService, BalanceSource, Ins, MonthlyBalance,
    MonthlyHistory, Outs,
};
pub use company_project::{CompanyProjectService, NewCompanyProject};
pub use expense::{ExpenseRecord, ExpenseService};
pub use expense_report::ExpenseReportService;
pub use project::{NewProject, ProjectService};
pub use verification::{
    CheckSource, Discrepancy, ReferenceTotals, VerificationReport, VerificationService,
};
