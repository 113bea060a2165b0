//! Balance verification
//!
//! Recounts every aggregate straight from the stored rows, without going
//! through `BalanceSource`, and checks the calculator's breakdown against the
//! recount and against optional reference figures (e.g. copied from the
//! bookkeeping spreadsheet). Figures are compared at two decimal places.

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{AgoraError, AgoraResult};
use crate::models::{InitialInvestments, Money, Partner, PaymentStatus, ReportStatus};
use crate::storage::Storage;

use super::balance::{difference, total, BalanceBreakdown, BalanceQuery, BalanceService};

/// Known-good figures to check a breakdown against; `None` fields are skipped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReferenceTotals {
    pub personal_projects: Option<Money>,
    pub bonuses: Option<Money>,
    pub fixed_expenses: Option<Money>,
    pub expense_reports_paid: Option<Money>,
    pub ins_total: Option<Money>,
    pub outs_total: Option<Money>,
    pub balance: Option<Money>,
}

impl ReferenceTotals {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Where the expected value of a check came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckSource {
    /// Independent recount of the stored rows
    Recount,
    /// Caller-supplied reference figure
    Reference,
}

/// A single mismatching figure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Discrepancy {
    pub field: &'static str,
    pub source: CheckSource,
    pub expected: Money,
    pub actual: Money,
}

impl Discrepancy {
    /// `actual - expected`, saturating at the representable range
    pub fn difference(&self) -> Money {
        Money::new(self.actual.amount().saturating_sub(self.expected.amount()))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VerificationReport {
    pub partner: Partner,
    pub breakdown: BalanceBreakdown,
    pub checks_run: usize,
    pub discrepancies: Vec<Discrepancy>,
}

impl VerificationReport {
    pub fn is_consistent(&self) -> bool {
        self.discrepancies.is_empty()
    }
}

/// Totals recounted from raw rows
#[derive(Debug, Default)]
struct Recount {
    personal_projects: Money,
    bonuses: Money,
    fixed_total: Money,
    reports_paid: Money,
    reports_pending: Money,
    personal_expenses: Money,
}

pub struct VerificationService<'a> {
    storage: &'a Storage,
    investments: InitialInvestments,
}

impl<'a> VerificationService<'a> {
    pub fn new(storage: &'a Storage, investments: InitialInvestments) -> Self {
        Self {
            storage,
            investments,
        }
    }

    /// Verify one partner's balance
    pub fn verify(
        &self,
        partner: Partner,
        query: &BalanceQuery,
        reference: Option<&ReferenceTotals>,
    ) -> AgoraResult<VerificationReport> {
        if let (Some(start), Some(end)) = (query.range.start, query.range.end) {
            if start > end {
                return Err(AgoraError::Verification(format!(
                    "Window starts after it ends ({} > {})",
                    start, end
                )));
            }
        }

        let breakdown =
            BalanceService::new(self.storage, self.investments).compute_balance(partner, query)?;
        let recount = self.recount(partner, query)?;

        let mut checks = Checks::default();

        let initial = if query.include_initial_investment {
            self.investments.for_partner(partner)
        } else {
            Money::zero()
        };
        let ins_total = total("ins", [recount.personal_projects, recount.bonuses, initial])?;
        let fixed_half = recount.fixed_total.half();
        let outs_total = total(
            "outs",
            [fixed_half, recount.reports_paid, recount.personal_expenses],
        )?;

        let recounted = [
            ("personal_projects", recount.personal_projects, breakdown.ins.personal_projects),
            ("bonuses", recount.bonuses, breakdown.ins.bonuses),
            ("ins_total", ins_total, breakdown.ins.total),
            ("fixed_expenses", fixed_half, breakdown.outs.fixed_expenses),
            ("expense_reports_paid", recount.reports_paid, breakdown.outs.expense_reports_paid),
            (
                "expense_reports_pending",
                recount.reports_pending,
                breakdown.outs.expense_reports_pending,
            ),
            ("personal_expenses", recount.personal_expenses, breakdown.outs.personal_expenses),
            ("outs_total", outs_total, breakdown.outs.total_strict),
            ("balance", difference(ins_total, outs_total)?, breakdown.balance),
        ];
        for (field, expected, actual) in recounted {
            checks.compare(field, CheckSource::Recount, expected, actual);
        }

        if let Some(reference) = reference {
            let referenced = [
                ("personal_projects", reference.personal_projects, breakdown.ins.personal_projects),
                ("bonuses", reference.bonuses, breakdown.ins.bonuses),
                ("fixed_expenses", reference.fixed_expenses, breakdown.outs.fixed_expenses),
                (
                    "expense_reports_paid",
                    reference.expense_reports_paid,
                    breakdown.outs.expense_reports_paid,
                ),
                ("ins_total", reference.ins_total, breakdown.ins.total),
                ("outs_total", reference.outs_total, breakdown.outs.total_strict),
                ("balance", reference.balance, breakdown.balance),
            ];
            for (field, expected, actual) in referenced {
                if let Some(expected) = expected {
                    checks.compare(field, CheckSource::Reference, expected, actual);
                }
            }
        }

        if checks.discrepancies.is_empty() {
            debug!(partner = %partner, checks = checks.run, "balance verified");
        } else {
            warn!(
                partner = %partner,
                discrepancies = checks.discrepancies.len(),
                "balance verification found discrepancies"
            );
        }

        Ok(VerificationReport {
            partner,
            breakdown,
            checks_run: checks.run,
            discrepancies: checks.discrepancies,
        })
    }

    fn recount(&self, partner: Partner, query: &BalanceQuery) -> AgoraResult<Recount> {
        let range = &query.range;
        let mut recount = Recount::default();

        for project in self.storage.projects.get_all()? {
            if project.owner == partner
                && project.is_received()
                && range.contains(project.invoice_date)
            {
                accumulate(&mut recount.personal_projects, project.amount)?;
            }
        }

        for project in self.storage.company_projects.get_all()? {
            let bonus = match partner {
                Partner::A => project.bonus_a,
                Partner::B => project.bonus_b,
            };
            if bonus > Money::zero() && range.contains(project.invoice_date) {
                accumulate(&mut recount.bonuses, bonus)?;
            }
        }

        for expense in self.storage.fixed_expenses.get_all()? {
            if expense.payment_status == PaymentStatus::Paid && range.contains(Some(expense.date)) {
                accumulate(&mut recount.fixed_total, expense.amount)?;
            }
        }

        for report in self.storage.expense_reports.get_all()? {
            if report.partner != partner || !range.contains(Some(report.issue_date)) {
                continue;
            }
            let bucket = match report.payment_status {
                ReportStatus::Paid => &mut recount.reports_paid,
                ReportStatus::Pending => &mut recount.reports_pending,
            };
            accumulate(bucket, report.amount)?;
        }

        for expense in self.storage.personal_expenses.get_all()? {
            if expense.partner == partner
                && expense.payment_status == PaymentStatus::Paid
                && range.contains(Some(expense.date))
            {
                accumulate(&mut recount.personal_expenses, expense.amount)?;
            }
        }

        Ok(recount)
    }
}

fn accumulate(sum: &mut Money, amount: Money) -> AgoraResult<()> {
    *sum = sum
        .checked_add(amount)
        .ok_or_else(|| AgoraError::amount_overflow("recount"))?;
    Ok(())
}

#[derive(Default)]
struct Checks {
    run: usize,
    discrepancies: Vec<Discrepancy>,
}

impl Checks {
    fn compare(
        &mut self,
        field: &'static str,
        source: CheckSource,
        expected: Money,
        actual: Money,
    ) {
        self.run += 1;
        if expected.rounded() != actual.rounded() {
            self.discrepancies.push(Discrepancy {
                field,
                source,
                expected,
                actual,
            });
        }
    }
}
