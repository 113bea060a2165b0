//! Boletim (expense report) CLI commands

use clap::Subcommand;

use super::{parse_optional_date, parse_optional_money, parse_partner};
use crate::config::settings::Settings;
use crate::display::format_expense_report_list;
use crate::error::AgoraResult;
use crate::models::ReportStatus;
use crate::services::ExpenseReportService;
use crate::storage::Storage;

/// Boletim subcommands
#[derive(Subcommand)]
pub enum BoletimCommands {
    /// Issue a boletim; the amount defaults to what the company owes the partner
    Add {
        /// Partner (a or b)
        partner: String,
        #[arg(default_value = "Boletim")]
        description: String,
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        /// Issue date (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Mark a boletim as paid
    Pay {
        boletim: String,
        /// Payment date (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List boletins
    List {
        #[arg(short, long)]
        partner: Option<String>,
        /// pending or paid
        #[arg(short, long)]
        status: Option<String>,
    },
    /// Delete a boletim
    Delete { boletim: String },
}

pub fn handle_boletim_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BoletimCommands,
) -> AgoraResult<()> {
    let service = ExpenseReportService::new(storage, settings.initial_investments());

    match cmd {
        BoletimCommands::Add {
            partner,
            description,
            amount,
            date,
        } => {
            let report = service.create(
                parse_partner(&partner)?,
                &description,
                parse_optional_money(amount.as_deref())?,
                parse_optional_date(date.as_deref())?,
            )?;
            println!(
                "Issued boletim {} to {}: {}",
                report.id,
                settings.partner_name(report.partner),
                report.amount.format_with_symbol(&settings.currency_symbol)
            );
        }

        BoletimCommands::Pay { boletim, date } => {
            let report = service.mark_paid(&boletim, parse_optional_date(date.as_deref())?)?;
            println!("Boletim {} marked as paid", report.id);
        }

        BoletimCommands::List { partner, status } => {
            let partner = partner.as_deref().map(parse_partner).transpose()?;
            let status: Option<ReportStatus> = status.as_deref().map(str::parse).transpose()?;
            let reports = service.list(partner, status)?;
            println!("{}", format_expense_report_list(&reports, settings));
        }

        BoletimCommands::Delete { boletim } => {
            let deleted = service.delete(&boletim)?;
            println!("Deleted boletim {}: {}", deleted.id, deleted.description);
        }
    }

    Ok(())
}
