//! `Record` implementations for the persisted models

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::{
    CompanyProject, CompanyProjectId, ExpenseReport, ExpenseReportId, FixedExpenseId,
    FixedMonthlyExpense, PersonalExpense, PersonalExpenseId, PersonalProject, ProjectId,
};

use super::repository::Record;

impl Record for PersonalProject {
    type Id = ProjectId;
    const KIND: &'static str = "personal_project";

    fn id(&self) -> ProjectId {
        self.id
    }

    fn record_date(&self) -> Option<NaiveDate> {
        self.invoice_date
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Record for CompanyProject {
    type Id = CompanyProjectId;
    const KIND: &'static str = "company_project";

    fn id(&self) -> CompanyProjectId {
        self.id
    }

    fn record_date(&self) -> Option<NaiveDate> {
        self.invoice_date
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Record for FixedMonthlyExpense {
    type Id = FixedExpenseId;
    const KIND: &'static str = "fixed_expense";

    fn id(&self) -> FixedExpenseId {
        self.id
    }

    fn record_date(&self) -> Option<NaiveDate> {
        Some(self.date)
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Record for PersonalExpense {
    type Id = PersonalExpenseId;
    const KIND: &'static str = "personal_expense";

    fn id(&self) -> PersonalExpenseId {
        self.id
    }

    fn record_date(&self) -> Option<NaiveDate> {
        Some(self.date)
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Record for ExpenseReport {
    type Id = ExpenseReportId;
    const KIND: &'static str = "expense_report";

    fn id(&self) -> ExpenseReportId {
        self.id
    }

    fn record_date(&self) -> Option<NaiveDate> {
        Some(self.issue_date)
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
