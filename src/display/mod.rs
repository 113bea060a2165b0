//! Display formatting for terminal output
//!
//! Renders record lists as tables for the CLI.

pub mod expense;
pub mod project;
pub mod verification;

pub use expense::{
    format_expense_report_list, format_fixed_expense_list, format_personal_expense_list,
};
pub use project::{format_company_project_list, format_project_list};
pub use verification::format_verification_report;

use chrono::NaiveDate;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::config::settings::Settings;
use crate::models::Money;

fn money(settings: &Settings, amount: Money) -> String {
    amount.format_with_symbol(&settings.currency_symbol)
}

fn date(settings: &Settings, date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(&settings.date_format).to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Build a table, right-aligning the given amount columns
fn render<T: Tabled>(rows: Vec<T>, amount_columns: &[usize]) -> String {
    let mut table = Table::new(rows);
    table.with(Style::psql());
    for &column in amount_columns {
        table.modify(Columns::single(column), Alignment::right());
    }
    table.to_string()
}
