//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod balance;
pub mod boletim;
pub mod company;
pub mod config;
pub mod expense;
pub mod project;

pub use balance::{handle_balance_command, BalanceCommands};
pub use boletim::{handle_boletim_command, BoletimCommands};
pub use company::{handle_company_command, CompanyCommands};
pub use config::{handle_config_command, ConfigCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use project::{handle_project_command, ProjectCommands};

use chrono::NaiveDate;

use crate::error::{AgoraError, AgoraResult};
use crate::models::{Money, Partner};

/// Parse a date given as `YYYY-MM-DD` or `DD/MM/YYYY`
pub fn parse_date(s: &str) -> AgoraResult<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%d/%m/%Y"))
        .map_err(|_| {
            AgoraError::Validation(format!(
                "Invalid date '{}' (use YYYY-MM-DD or DD/MM/YYYY)",
                s
            ))
        })
}

pub fn parse_optional_date(s: Option<&str>) -> AgoraResult<Option<NaiveDate>> {
    s.map(parse_date).transpose()
}

pub fn parse_money(s: &str) -> AgoraResult<Money> {
    Money::parse(s).map_err(|e| AgoraError::Validation(e.to_string()))
}

pub fn parse_optional_money(s: Option<&str>) -> AgoraResult<Option<Money>> {
    s.map(parse_money).transpose()
}

pub fn parse_partner(s: &str) -> AgoraResult<Partner> {
    s.parse()
}
