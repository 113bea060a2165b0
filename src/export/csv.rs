//! CSV Export functionality
//!
//! One row per partner with every line item and total, rounded to cents.
//! Each row also carries the export timestamp and app version.

use chrono::Utc;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

use crate::config::settings::Settings;
use crate::error::{AgoraError, AgoraResult};
use crate::reports::PartnerBalanceReport;
use crate::services::BalanceQuery;
use crate::storage::Storage;

#[derive(Debug, Serialize)]
struct BalanceCsvRow<'a> {
    exported_at: &'a str,
    app_version: &'a str,
    partner: String,
    name: &'a str,
    start: Option<String>,
    end: Option<String>,
    personal_projects: Decimal,
    bonuses: Decimal,
    initial_investment: Decimal,
    total_in: Decimal,
    fixed_expenses: Decimal,
    expense_reports_paid: Decimal,
    expense_reports_pending: Decimal,
    personal_expenses: Decimal,
    total_out: Decimal,
    total_out_with_pending: Decimal,
    total_out_excluding_personal: Decimal,
    balance: Decimal,
    balance_with_pending: Decimal,
    balance_excluding_personal: Decimal,
    suggested_report_amount: Decimal,
}

/// Export the balance report to CSV
pub fn export_balance_csv<W: Write>(
    storage: &Storage,
    settings: &Settings,
    query: &BalanceQuery,
    writer: W,
) -> AgoraResult<()> {
    let report = PartnerBalanceReport::generate(storage, settings, query)?;
    let exported_at = Utc::now().to_rfc3339();
    let app_version = env!("CARGO_PKG_VERSION");

    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in &report.rows {
        let b = &row.breakdown;
        csv_writer.serialize(BalanceCsvRow {
            exported_at: &exported_at,
            app_version,
            partner: row.partner.to_string(),
            name: &row.name,
            start: b.range.start.map(|d| d.to_string()),
            end: b.range.end.map(|d| d.to_string()),
            personal_projects: b.ins.personal_projects.rounded(),
            bonuses: b.ins.bonuses.rounded(),
            initial_investment: b.ins.initial_investment.rounded(),
            total_in: b.ins.total.rounded(),
            fixed_expenses: b.outs.fixed_expenses.rounded(),
            expense_reports_paid: b.outs.expense_reports_paid.rounded(),
            expense_reports_pending: b.outs.expense_reports_pending.rounded(),
            personal_expenses: b.outs.personal_expenses.rounded(),
            total_out: b.outs.total_strict.rounded(),
            total_out_with_pending: b.outs.total_with_pending.rounded(),
            total_out_excluding_personal: b.outs.total_excluding_personal.rounded(),
            balance: b.balance.rounded(),
            balance_with_pending: b.balance_with_pending.rounded(),
            balance_excluding_personal: b.balance_excluding_personal.rounded(),
            suggested_report_amount: b.suggested_report_amount.rounded(),
        })?;
    }
    csv_writer
        .flush()
        .map_err(|e| AgoraError::Export(e.to_string()))?;

    Ok(())
}
