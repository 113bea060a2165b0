//! Expense service
//!
//! Fixed monthly expenses are shared by both partners; personal expenses are
//! booked against one partner. Only paid expenses reduce a balance.

use chrono::NaiveDate;
use tracing::info;

use crate::audit::EntityType;
use crate::error::{AgoraError, AgoraResult};
use crate::models::{FixedMonthlyExpense, Money, Partner, PaymentStatus, PersonalExpense};
use crate::storage::Storage;

/// An expense of either kind, as returned by `ExpenseService::delete`
#[derive(Debug, Clone)]
pub enum ExpenseRecord {
    Fixed(FixedMonthlyExpense),
    Personal(PersonalExpense),
}

impl ExpenseRecord {
    pub fn description(&self) -> &str {
        match self {
            Self::Fixed(e) => &e.description,
            Self::Personal(e) => &e.description,
        }
    }
}

pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a fixed monthly expense
    pub fn create_fixed(
        &self,
        description: &str,
        amount: Money,
        date: NaiveDate,
        status: PaymentStatus,
    ) -> AgoraResult<FixedMonthlyExpense> {
        let mut expense = FixedMonthlyExpense::new(description.trim(), amount, date);
        expense.payment_status = status;

        expense
            .validate()
            .map_err(|e| AgoraError::Validation(e.to_string()))?;

        self.storage.fixed_expenses.upsert(expense.clone())?;
        self.storage.fixed_expenses.save()?;

        self.storage.log_create(
            EntityType::FixedExpense,
            expense.id.to_string(),
            Some(expense.description.clone()),
            &expense,
        )?;

        info!(id = %expense.id, amount = %expense.amount, "created fixed expense");
        Ok(expense)
    }

    pub fn find_fixed(&self, reference: &str) -> AgoraResult<FixedMonthlyExpense> {
        self.storage
            .fixed_expenses
            .find_by_ref(reference)?
            .ok_or_else(|| AgoraError::expense_not_found(reference))
    }

    pub fn set_fixed_status(
        &self,
        reference: &str,
        status: PaymentStatus,
    ) -> AgoraResult<FixedMonthlyExpense> {
        let mut expense = self.find_fixed(reference)?;
        let before = expense.clone();
        expense.set_payment_status(status);

        self.storage.fixed_expenses.upsert(expense.clone())?;
        self.storage.fixed_expenses.save()?;

        self.storage.log_update(
            EntityType::FixedExpense,
            expense.id.to_string(),
            Some(expense.description.clone()),
            &before,
            &expense,
        )?;

        info!(id = %expense.id, status = %expense.payment_status, "updated fixed expense");
        Ok(expense)
    }

    pub fn list_fixed(
        &self,
        status: Option<PaymentStatus>,
    ) -> AgoraResult<Vec<FixedMonthlyExpense>> {
        self.storage
            .fixed_expenses
            .filter(|e| status.map_or(true, |s| e.payment_status == s))
    }

    /// Record an expense booked against one partner
    pub fn create_personal(
        &self,
        partner: Partner,
        description: &str,
        amount: Money,
        date: NaiveDate,
        status: PaymentStatus,
    ) -> AgoraResult<PersonalExpense> {
        let mut expense = PersonalExpense::new(partner, description.trim(), amount, date);
        expense.payment_status = status;

        expense
            .validate()
            .map_err(|e| AgoraError::Validation(e.to_string()))?;

        self.storage.personal_expenses.upsert(expense.clone())?;
        self.storage.personal_expenses.save()?;

        self.storage.log_create(
            EntityType::PersonalExpense,
            expense.id.to_string(),
            Some(expense.description.clone()),
            &expense,
        )?;

        info!(
            id = %expense.id,
            partner = %partner,
            amount = %expense.amount,
            "created personal expense"
        );
        Ok(expense)
    }

    pub fn find_personal(&self, reference: &str) -> AgoraResult<PersonalExpense> {
        self.storage
            .personal_expenses
            .find_by_ref(reference)?
            .ok_or_else(|| AgoraError::expense_not_found(reference))
    }

    pub fn set_personal_status(
        &self,
        reference: &str,
        status: PaymentStatus,
    ) -> AgoraResult<PersonalExpense> {
        let mut expense = self.find_personal(reference)?;
        let before = expense.clone();
        expense.set_payment_status(status);

        self.storage.personal_expenses.upsert(expense.clone())?;
        self.storage.personal_expenses.save()?;

        self.storage.log_update(
            EntityType::PersonalExpense,
            expense.id.to_string(),
            Some(expense.description.clone()),
            &before,
            &expense,
        )?;

        info!(id = %expense.id, status = %expense.payment_status, "updated personal expense");
        Ok(expense)
    }

    pub fn list_personal(&self, partner: Option<Partner>) -> AgoraResult<Vec<PersonalExpense>> {
        self.storage
            .personal_expenses
            .filter(|e| partner.map_or(true, |p| e.partner == p))
    }

    /// Delete an expense of either kind
    pub fn delete(&self, reference: &str) -> AgoraResult<ExpenseRecord> {
        if let Some(expense) = self.storage.fixed_expenses.find_by_ref(reference)? {
            self.storage.fixed_expenses.delete(expense.id)?;
            self.storage.fixed_expenses.save()?;
            self.storage.log_delete(
                EntityType::FixedExpense,
                expense.id.to_string(),
                Some(expense.description.clone()),
                &expense,
            )?;
            info!(id = %expense.id, "deleted fixed expense");
            return Ok(ExpenseRecord::Fixed(expense));
        }

        let expense = self.find_personal(reference)?;
        self.storage.personal_expenses.delete(expense.id)?;
        self.storage.personal_expenses.save()?;
        self.storage.log_delete(
            EntityType::PersonalExpense,
            expense.id.to_string(),
            Some(expense.description.clone()),
            &expense,
        )?;
        info!(id = %expense.id, "deleted personal expense");
        Ok(ExpenseRecord::Personal(expense))
    }
}
