//! Expense and boletim display formatting

use tabled::Tabled;

use super::{date, money, render};
use crate::config::settings::Settings;
use crate::models::{ExpenseReport, FixedMonthlyExpense, Money, PersonalExpense};

#[derive(Tabled)]
struct FixedExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Half")]
    half: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// Format fixed monthly expenses, with each partner's half
pub fn format_fixed_expense_list(expenses: &[FixedMonthlyExpense], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No fixed expenses found.".to_string();
    }

    let rows: Vec<_> = expenses
        .iter()
        .map(|e| FixedExpenseRow {
            id: e.id.to_string(),
            date: date(settings, Some(e.date)),
            description: e.description.clone(),
            amount: money(settings, e.amount),
            half: money(settings, e.amount.half()),
            status: e.payment_status.to_string(),
        })
        .collect();

    let table = render(rows, &[3, 4]);
    match Money::checked_sum(expenses.iter().filter(|e| e.is_paid()).map(|e| e.amount)) {
        Some(paid) => format!(
            "{}\nPaid total: {} (each partner {})",
            table,
            money(settings, paid),
            money(settings, paid.half())
        ),
        None => format!("{}\nPaid total: too large to display", table),
    }
}

#[derive(Tabled)]
struct PersonalExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Partner")]
    partner: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Status")]
    status: String,
}

pub fn format_personal_expense_list(expenses: &[PersonalExpense], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No personal expenses found.".to_string();
    }

    let rows: Vec<_> = expenses
        .iter()
        .map(|e| PersonalExpenseRow {
            id: e.id.to_string(),
            partner: settings.partner_name(e.partner).to_string(),
            date: date(settings, Some(e.date)),
            description: e.description.clone(),
            amount: money(settings, e.amount),
            status: e.payment_status.to_string(),
        })
        .collect();

    render(rows, &[4])
}

#[derive(Tabled)]
struct ExpenseReportRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Partner")]
    partner: String,
    #[tabled(rename = "Issued")]
    issue_date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Paid")]
    paid_date: String,
}

/// Format boletins as a table
pub fn format_expense_report_list(reports: &[ExpenseReport], settings: &Settings) -> String {
    if reports.is_empty() {
        return "No boletins found.".to_string();
    }

    let rows: Vec<_> = reports
        .iter()
        .map(|r| ExpenseReportRow {
            id: r.id.to_string(),
            partner: settings.partner_name(r.partner).to_string(),
            issue_date: date(settings, Some(r.issue_date)),
            description: r.description.clone(),
            amount: money(settings, r.amount),
            status: r.payment_status.to_string(),
            paid_date: date(settings, r.paid_date),
        })
        .collect();

    render(rows, &[4])
}
