//! Company project CLI commands

use clap::Subcommand;

use super::{parse_money, parse_optional_date, parse_optional_money, parse_partner};
use crate::config::settings::Settings;
use crate::display::format_company_project_list;
use crate::error::AgoraResult;
use crate::models::{Money, ProjectStatus};
use crate::services::{CompanyProjectService, NewCompanyProject};
use crate::storage::Storage;

/// Company project subcommands
#[derive(Subcommand)]
pub enum CompanyCommands {
    /// Add a company project
    Add {
        /// Project description
        description: String,
        /// Amount invoiced by the company
        #[arg(allow_hyphen_values = true)]
        amount: String,
        #[arg(short, long)]
        client: Option<String>,
        /// Invoice date (YYYY-MM-DD)
        #[arg(short = 'd', long)]
        invoice_date: Option<String>,
        /// Bonus credited to partner A
        #[arg(long)]
        bonus_a: Option<String>,
        /// Bonus credited to partner B
        #[arg(long)]
        bonus_b: Option<String>,
    },
    /// List company projects
    List {
        #[arg(short, long)]
        status: Option<String>,
    },
    /// Set a partner's bonus on a project
    Bonus {
        /// Project ID
        project: String,
        /// Partner (a or b)
        partner: String,
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Change a project's status
    Status {
        project: String,
        status: String,
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Delete a company project
    Delete { project: String },
}

pub fn handle_company_command(
    storage: &Storage,
    settings: &Settings,
    cmd: CompanyCommands,
) -> AgoraResult<()> {
    let service = CompanyProjectService::new(storage);
    let fmt = |m: Money| m.format_with_symbol(&settings.currency_symbol);

    match cmd {
        CompanyCommands::Add {
            description,
            amount,
            client,
            invoice_date,
            bonus_a,
            bonus_b,
        } => {
            let mut input = NewCompanyProject::new(description, parse_money(&amount)?);
            input.client = client;
            input.invoice_date = parse_optional_date(invoice_date.as_deref())?;
            input.bonus_a = parse_optional_money(bonus_a.as_deref())?.unwrap_or_default();
            input.bonus_b = parse_optional_money(bonus_b.as_deref())?.unwrap_or_default();

            let project = service.create(input)?;
            println!(
                "Added company project {}: {} (bonus A {}, bonus B {})",
                project.id,
                fmt(project.amount),
                fmt(project.bonus_a),
                fmt(project.bonus_b)
            );
        }

        CompanyCommands::List { status } => {
            let status: Option<ProjectStatus> = status.as_deref().map(str::parse).transpose()?;
            let projects = service.list(status)?;
            println!("{}", format_company_project_list(&projects, settings));
        }

        CompanyCommands::Bonus {
            project,
            partner,
            amount,
        } => {
            let partner = parse_partner(&partner)?;
            let updated = service.set_bonus(&project, partner, parse_money(&amount)?)?;
            println!(
                "Bonus for {} on {} set to {}",
                settings.partner_name(partner),
                updated.id,
                fmt(updated.bonus_for(partner))
            );
        }

        CompanyCommands::Status {
            project,
            status,
            date,
        } => {
            let status: ProjectStatus = status.parse()?;
            let on = parse_optional_date(date.as_deref())?;
            let updated = service.set_status(&project, status, on)?;
            println!("Company project {} is now {}", updated.id, updated.status);
        }

        CompanyCommands::Delete { project } => {
            let deleted = service.delete(&project)?;
            println!("Deleted company project {}: {}", deleted.id, deleted.description);
        }
    }

    Ok(())
}
