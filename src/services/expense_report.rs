//! Expense report (boletim) service
//!
//! A boletim settles a partner's positive balance. When no amount is given,
//! a new boletim is pre-filled with the partner's current suggested amount.

use chrono::{Local, NaiveDate};
use tracing::info;

use crate::audit::EntityType;
use crate::error::{AgoraError, AgoraResult};
use crate::models::{ExpenseReport, InitialInvestments, Money, Partner, ReportStatus};
use crate::storage::Storage;

use super::balance::{BalanceQuery, BalanceService};

pub struct ExpenseReportService<'a> {
    storage: &'a Storage,
    investments: InitialInvestments,
}

impl<'a> ExpenseReportService<'a> {
    pub fn new(storage: &'a Storage, investments: InitialInvestments) -> Self {
        Self {
            storage,
            investments,
        }
    }

    /// Amount a new boletim for `partner` would be pre-filled with
    pub fn suggested_amount(&self, partner: Partner) -> AgoraResult<Money> {
        let balance = BalanceService::new(self.storage, self.investments)
            .compute_balance(partner, &BalanceQuery::all_time())?;
        Ok(balance.suggested_report_amount)
    }

    /// Issue a boletim
    ///
    /// Without an explicit amount the suggested amount is used; issuing one
    /// while nothing is owed to the partner is rejected.
    pub fn create(
        &self,
        partner: Partner,
        description: &str,
        amount: Option<Money>,
        issue_date: Option<NaiveDate>,
    ) -> AgoraResult<ExpenseReport> {
        let amount = match amount {
            Some(amount) => amount,
            None => {
                let suggested = self.suggested_amount(partner)?;
                if suggested.is_zero() {
                    return Err(AgoraError::Validation(format!(
                        "Nothing is owed to partner {}; give an explicit amount",
                        partner
                    )));
                }
                suggested
            }
        };

        let issue_date = issue_date.unwrap_or_else(|| Local::now().date_naive());
        let report = ExpenseReport::new(partner, description.trim(), amount, issue_date);

        report
            .validate()
            .map_err(|e| AgoraError::Validation(e.to_string()))?;

        self.storage.expense_reports.upsert(report.clone())?;
        self.storage.expense_reports.save()?;

        self.storage.log_create(
            EntityType::ExpenseReport,
            report.id.to_string(),
            Some(report.description.clone()),
            &report,
        )?;

        info!(id = %report.id, partner = %partner, amount = %report.amount, "issued boletim");
        Ok(report)
    }

    pub fn find(&self, reference: &str) -> AgoraResult<ExpenseReport> {
        self.storage
            .expense_reports
            .find_by_ref(reference)?
            .ok_or_else(|| AgoraError::expense_report_not_found(reference))
    }

    /// Mark a boletim as paid on `on` (today by default)
    pub fn mark_paid(&self, reference: &str, on: Option<NaiveDate>) -> AgoraResult<ExpenseReport> {
        let mut report = self.find(reference)?;
        if report.is_paid() {
            return Err(AgoraError::Validation(format!(
                "Boletim {} is already paid",
                report.id
            )));
        }

        let before = report.clone();
        report.mark_paid(on.unwrap_or_else(|| Local::now().date_naive()));

        self.storage.expense_reports.upsert(report.clone())?;
        self.storage.expense_reports.save()?;

        self.storage.log_update(
            EntityType::ExpenseReport,
            report.id.to_string(),
            Some(report.description.clone()),
            &before,
            &report,
        )?;

        info!(id = %report.id, "boletim paid");
        Ok(report)
    }

    pub fn list(
        &self,
        partner: Option<Partner>,
        status: Option<ReportStatus>,
    ) -> AgoraResult<Vec<ExpenseReport>> {
        self.storage.expense_reports.filter(|r| {
            partner.map_or(true, |p| r.partner == p)
                && status.map_or(true, |s| r.payment_status == s)
        })
    }

    pub fn delete(&self, reference: &str) -> AgoraResult<ExpenseReport> {
        let report = self.find(reference)?;
        self.storage.expense_reports.delete(report.id)?;
        self.storage.expense_reports.save()?;

        self.storage.log_delete(
            EntityType::ExpenseReport,
            report.id.to_string(),
            Some(report.description.clone()),
            &report,
        )?;

        info!(id = %report.id, "deleted boletim");
        Ok(report)
    }
}
