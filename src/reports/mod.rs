//! Reports module for Agora Books
//!
//! Partner balance breakdowns and the monthly balance history, each with a
//! terminal rendering and a CSV export.

pub mod history;
pub mod partner_balance;

pub use history::BalanceHistoryReport;
pub use partner_balance::{PartnerBalanceReport, PartnerBalanceRow, QuerySummary};
