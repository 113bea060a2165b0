//! Aggregate queries backing the balance calculator
//!
//! Each query is a filtered sum over one record collection. Date filters
//! follow `DateRange::contains`, so undated projects only count when no
//! window is given.

use crate::error::AgoraResult;
use crate::models::{DateRange, Money, Partner, ReportStatus};
use crate::services::balance::BalanceSource;

use super::Storage;

impl BalanceSource for Storage {
    fn received_personal_projects(
        &self,
        partner: Partner,
        range: &DateRange,
    ) -> AgoraResult<Money> {
        self.projects.sum_by(|p| {
            (p.owner == partner
                && p.is_received()
                && range.contains(p.invoice_date))
            .then_some(p.amount)
        })
    }

    fn company_bonuses(&self, partner: Partner, range: &DateRange) -> AgoraResult<Money> {
        self.company_projects.sum_by(|p| {
            let bonus = p.bonus_for(partner);
            (bonus.is_positive() && range.contains(p.invoice_date)).then_some(bonus)
        })
    }

    fn paid_fixed_expenses(&self, range: &DateRange) -> AgoraResult<Money> {
        self.fixed_expenses
            .sum_by(|e| (e.is_paid() && range.contains(Some(e.date))).then_some(e.amount))
    }

    fn expense_reports(
        &self,
        partner: Partner,
        status: ReportStatus,
        range: &DateRange,
    ) -> AgoraResult<Money> {
        self.expense_reports.sum_by(|r| {
            (r.partner == partner
                && r.payment_status == status
                && range.contains(Some(r.issue_date)))
            .then_some(r.amount)
        })
    }

    fn paid_personal_expenses(&self, partner: Partner, range: &DateRange) -> AgoraResult<Money> {
        self.personal_expenses.sum_by(|e| {
            (e.partner == partner && e.is_paid() && range.contains(Some(e.date)))
                .then_some(e.amount)
        })
    }
}
