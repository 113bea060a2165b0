//! Personal project CLI commands

use clap::Subcommand;

use super::{parse_money, parse_optional_date, parse_partner};
use crate::config::settings::Settings;
use crate::display::format_project_list;
use crate::error::AgoraResult;
use crate::models::ProjectStatus;
use crate::services::{NewProject, ProjectService};
use crate::storage::Storage;

/// Personal project subcommands
#[derive(Subcommand)]
pub enum ProjectCommands {
    /// Add a project invoiced to a partner
    Add {
        /// Owning partner (a or b)
        partner: String,
        /// Project description
        description: String,
        /// Pre-tax amount (e.g. 1500 or 1.500,00)
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Client name
        #[arg(short, long)]
        client: Option<String>,
        /// Invoice date (YYYY-MM-DD)
        #[arg(short = 'd', long)]
        invoice_date: Option<String>,
        /// Initial status (not-invoiced, invoiced, received, void)
        #[arg(short, long)]
        status: Option<String>,
    },
    /// List projects
    List {
        /// Filter by partner
        #[arg(short, long)]
        partner: Option<String>,
        /// Filter by status
        #[arg(short, long)]
        status: Option<String>,
    },
    /// Change a project's status
    Status {
        /// Project ID
        project: String,
        /// New status (not-invoiced, invoiced, received, void)
        status: String,
        /// Date stamped on the invoice/payment (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Change a project's amount
    Amount {
        /// Project ID
        project: String,
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Delete a project
    Delete {
        /// Project ID
        project: String,
    },
}

/// Handle a project command
pub fn handle_project_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ProjectCommands,
) -> AgoraResult<()> {
    let service = ProjectService::new(storage);

    match cmd {
        ProjectCommands::Add {
            partner,
            description,
            amount,
            client,
            invoice_date,
            status,
        } => {
            let mut input =
                NewProject::new(parse_partner(&partner)?, description, parse_money(&amount)?);
            input.client = client;
            input.invoice_date = parse_optional_date(invoice_date.as_deref())?;
            let status: Option<ProjectStatus> = status.as_deref().map(str::parse).transpose()?;

            let mut project = service.create(input)?;
            if let Some(status) = status {
                project =
                    service.set_status(&project.id.to_string(), status, project.invoice_date)?;
            }

            println!(
                "Added project {} for {}: {} ({})",
                project.id,
                settings.partner_name(project.owner),
                project.amount.format_with_symbol(&settings.currency_symbol),
                project.status
            );
        }

        ProjectCommands::List { partner, status } => {
            let partner = partner.as_deref().map(parse_partner).transpose()?;
            let status: Option<ProjectStatus> = status.as_deref().map(str::parse).transpose()?;
            let projects = service.list(partner, status)?;
            println!("{}", format_project_list(&projects, settings));
        }

        ProjectCommands::Status {
            project,
            status,
            date,
        } => {
            let status: ProjectStatus = status.parse()?;
            let on = parse_optional_date(date.as_deref())?;
            let updated = service.set_status(&project, status, on)?;
            println!("Project {} is now {}", updated.id, updated.status);
        }

        ProjectCommands::Amount { project, amount } => {
            let updated = service.update_amount(&project, parse_money(&amount)?)?;
            println!(
                "Project {} amount set to {}",
                updated.id,
                updated.amount.format_with_symbol(&settings.currency_symbol)
            );
        }

        ProjectCommands::Delete { project } => {
            let deleted = service.delete(&project)?;
            println!("Deleted project {}: {}", deleted.id, deleted.description);
        }
    }

    Ok(())
}
