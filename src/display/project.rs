//! Project display formatting

use tabled::Tabled;

use super::{date, money, render};
use crate::config::settings::Settings;
use crate::models::{CompanyProject, PersonalProject};

#[derive(Tabled)]
struct ProjectRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Owner")]
    owner: String,
    #[tabled(rename = "Client")]
    client: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Invoiced")]
    invoice_date: String,
    #[tabled(rename = "Paid")]
    payment_date: String,
}

/// Format personal projects as a table
pub fn format_project_list(projects: &[PersonalProject], settings: &Settings) -> String {
    if projects.is_empty() {
        return "No projects found.".to_string();
    }

    let rows: Vec<_> = projects
        .iter()
        .map(|p| ProjectRow {
            id: p.id.to_string(),
            owner: settings.partner_name(p.owner).to_string(),
            client: p.client.clone(),
            description: p.description.clone(),
            amount: money(settings, p.amount),
            status: p.status.to_string(),
            invoice_date: date(settings, p.invoice_date),
            payment_date: date(settings, p.payment_date),
        })
        .collect();

    render(rows, &[4])
}

#[derive(Tabled)]
struct CompanyProjectRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Client")]
    client: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Bonus A")]
    bonus_a: String,
    #[tabled(rename = "Bonus B")]
    bonus_b: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Invoiced")]
    invoice_date: String,
}

/// Format company projects with their bonuses as a table
pub fn format_company_project_list(projects: &[CompanyProject], settings: &Settings) -> String {
    if projects.is_empty() {
        return "No company projects found.".to_string();
    }

    let rows: Vec<_> = projects
        .iter()
        .map(|p| CompanyProjectRow {
            id: p.id.to_string(),
            client: p.client.clone(),
            description: p.description.clone(),
            amount: money(settings, p.amount),
            bonus_a: money(settings, p.bonus_a),
            bonus_b: money(settings, p.bonus_b),
            status: p.status.to_string(),
            invoice_date: date(settings, p.invoice_date),
        })
        .collect();

    render(rows, &[3, 4, 5])
}
