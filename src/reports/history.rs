//! Balance History Report
//!
//! Month-end balances for one partner over a calendar year, with a simple
//! bar column for the trend.

use std::io::Write;

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::config::settings::Settings;
use crate::error::{AgoraError, AgoraResult};
use crate::models::{Money, Partner};
use crate::services::{BalanceService, MonthlyBalance};
use crate::storage::Storage;

/// Width of the longest bar
const BAR_WIDTH: usize = 30;

#[derive(Debug, Clone, Serialize)]
pub struct BalanceHistoryReport {
    pub partner: Partner,
    pub name: String,
    pub year: i32,
    pub months: Vec<MonthlyBalance>,
    #[serde(skip)]
    currency_symbol: String,
}

impl BalanceHistoryReport {
    pub fn generate(
        storage: &Storage,
        settings: &Settings,
        partner: Partner,
        year: i32,
    ) -> AgoraResult<Self> {
        let service = BalanceService::new(storage, settings.initial_investments());
        let months = service
            .monthly_history(partner, year)?
            .collect::<AgoraResult<Vec<_>>>()?;

        Ok(Self {
            partner,
            name: settings.partner_name(partner).to_string(),
            year,
            months,
            currency_symbol: settings.currency_symbol.clone(),
        })
    }

    fn bar(&self, balance: Money) -> String {
        let max = self
            .months
            .iter()
            .map(|m| m.balance.abs())
            .max()
            .unwrap_or_default();
        if max.is_zero() {
            return String::new();
        }

        let ratio = balance.abs().amount() / max.amount() * Decimal::from(BAR_WIDTH);
        let len = ratio.round().to_usize().unwrap_or(0).min(BAR_WIDTH);
        let glyph = if balance.is_negative() { '-' } else { '#' };
        std::iter::repeat(glyph).take(len).collect()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Balance History: {} (partner {}), {}\n",
            self.name, self.partner, self.year
        ));
        output.push_str(&"=".repeat(60));
        output.push('\n');

        for month in &self.months {
            output.push_str(&format!(
                "{:<10} {:>14}  {}\n",
                month.month_name,
                month.balance.format_with_symbol(&self.currency_symbol),
                self.bar(month.balance)
            ));
        }

        output
    }

    /// Export the report to CSV format, one row per month
    pub fn export_csv<W: Write>(&self, writer: W) -> AgoraResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for month in &self.months {
            csv_writer.serialize(HistoryCsvRow {
                partner: self.partner.to_string(),
                year: self.year,
                month: month.month,
                month_name: month.month_name,
                cutoff: month.cutoff,
                balance: month.balance.rounded(),
            })?;
        }
        csv_writer
            .flush()
            .map_err(|e| AgoraError::Export(e.to_string()))
    }
}

#[derive(Serialize)]
struct HistoryCsvRow {
    partner: String,
    year: i32,
    month: u32,
    month_name: &'static str,
    cutoff: NaiveDate,
    balance: Decimal,
}
