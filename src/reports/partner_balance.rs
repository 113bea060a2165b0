//! Partner Balance Report
//!
//! Shows both partners' balance breakdowns side by side with every line item
//! and every total variant.

use serde::Serialize;

use crate::config::settings::Settings;
use crate::error::AgoraResult;
use crate::models::{Money, Partner};
use crate::services::{BalanceBreakdown, BalanceQuery, BalanceService};
use crate::storage::Storage;

/// One partner's section of the report
#[derive(Debug, Clone, Serialize)]
pub struct PartnerBalanceRow {
    pub partner: Partner,
    /// Display name from settings
    pub name: String,
    pub breakdown: BalanceBreakdown,
}

/// Balance report for both partners
#[derive(Debug, Clone, Serialize)]
pub struct PartnerBalanceReport {
    pub query: QuerySummary,
    pub rows: Vec<PartnerBalanceRow>,
    #[serde(skip)]
    currency_symbol: String,
}

/// Serializable description of the options a report was generated with
#[derive(Debug, Clone, Copy, Serialize)]
pub struct QuerySummary {
    pub include_initial_investment: bool,
    pub start: Option<chrono::NaiveDate>,
    pub end: Option<chrono::NaiveDate>,
}

impl From<&BalanceQuery> for QuerySummary {
    fn from(query: &BalanceQuery) -> Self {
        Self {
            include_initial_investment: query.include_initial_investment,
            start: query.range.start,
            end: query.range.end,
        }
    }
}

impl PartnerBalanceReport {
    /// Generate the report for both partners
    pub fn generate(
        storage: &Storage,
        settings: &Settings,
        query: &BalanceQuery,
    ) -> AgoraResult<Self> {
        Self::generate_for(storage, settings, query, &Partner::ALL)
    }

    /// Generate the report for a subset of partners
    pub fn generate_for(
        storage: &Storage,
        settings: &Settings,
        query: &BalanceQuery,
        partners: &[Partner],
    ) -> AgoraResult<Self> {
        let service = BalanceService::new(storage, settings.initial_investments());

        let rows = partners
            .iter()
            .map(|&partner| {
                Ok(PartnerBalanceRow {
                    partner,
                    name: settings.partner_name(partner).to_string(),
                    breakdown: service.compute_balance(partner, query)?,
                })
            })
            .collect::<AgoraResult<Vec<_>>>()?;

        Ok(Self {
            query: query.into(),
            rows,
            currency_symbol: settings.currency_symbol.clone(),
        })
    }

    fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Partner Balance Report\n");
        output.push_str(&"=".repeat(50));
        output.push('\n');

        let period = self
            .rows
            .first()
            .map(|r| r.breakdown.range.to_string())
            .unwrap_or_else(|| "all time".to_string());
        output.push_str(&format!("Period: {}\n", period));
        if self.query.include_initial_investment {
            output.push_str("Initial investment included\n");
        }

        for row in &self.rows {
            let b = &row.breakdown;
            output.push('\n');
            output.push_str(&format!("{} (partner {})\n", row.name, row.partner));
            output.push_str(&"-".repeat(50));
            output.push('\n');

            let lines = [
                ("Personal projects received", b.ins.personal_projects),
                ("Company project bonuses", b.ins.bonuses),
                ("Initial investment", b.ins.initial_investment),
            ];
            for (label, amount) in lines {
                output.push_str(&format!("  + {:<32} {:>12}\n", label, self.money(amount)));
            }
            output.push_str(&format!("    {:<32} {:>12}\n", "Total in", self.money(b.ins.total)));

            let lines = [
                ("Fixed expenses (half)", b.outs.fixed_expenses),
                ("Boletins paid", b.outs.expense_reports_paid),
                ("Personal expenses", b.outs.personal_expenses),
            ];
            for (label, amount) in lines {
                output.push_str(&format!("  - {:<32} {:>12}\n", label, self.money(amount)));
            }
            output.push_str(&format!(
                "    {:<32} {:>12}\n",
                "Total out",
                self.money(b.outs.total_strict)
            ));

            let direction = if b.company_owes_partner() {
                "company owes partner"
            } else if b.balance.is_negative() {
                "partner owes company"
            } else {
                "settled"
            };
            output.push_str(&format!(
                "\n  {:<34} {:>12}  ({})\n",
                "BALANCE",
                self.money(b.balance),
                direction
            ));
            output.push_str(&format!(
                "  {:<34} {:>12}\n",
                "With pending boletins",
                self.money(b.balance_with_pending)
            ));
            output.push_str(&format!(
                "  {:<34} {:>12}\n",
                "Excluding personal expenses",
                self.money(b.balance_excluding_personal)
            ));
            output.push_str(&format!(
                "  {:<34} {:>12}\n",
                "Pending boletins",
                self.money(b.outs.expense_reports_pending)
            ));
            output.push_str(&format!(
                "  {:<34} {:>12}\n",
                "Suggested boletim",
                self.money(b.suggested_report_amount)
            ));
        }

        output
    }
}
