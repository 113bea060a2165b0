//! Balance CLI commands

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use chrono::{Datelike, Local};
use clap::{Args, Subcommand};

use super::{parse_optional_date, parse_optional_money, parse_partner};
use crate::config::settings::Settings;
use crate::display::format_verification_report;
use crate::error::{AgoraError, AgoraResult};
use crate::export::{export_balance, ExportFormat};
use crate::models::Partner;
use crate::reports::{BalanceHistoryReport, PartnerBalanceReport};
use crate::services::{BalanceQuery, ReferenceTotals, VerificationService};
use crate::storage::Storage;

/// Date window and options shared by balance commands
#[derive(Args, Debug, Clone, Default)]
pub struct WindowArgs {
    /// Only count records dated on or after this date
    #[arg(long)]
    pub from: Option<String>,
    /// Only count records dated on or before this date
    #[arg(long)]
    pub to: Option<String>,
    /// Add the partner's initial investment to the ins
    #[arg(long)]
    pub with_investment: bool,
}

impl WindowArgs {
    fn query(&self) -> AgoraResult<BalanceQuery> {
        let mut query = BalanceQuery::all_time();
        if let Some(start) = parse_optional_date(self.from.as_deref())? {
            query = query.from(start);
        }
        if let Some(end) = parse_optional_date(self.to.as_deref())? {
            query = query.to(end);
        }
        if self.with_investment {
            query = query.with_initial_investment();
        }
        Ok(query)
    }
}

/// Balance subcommands
#[derive(Subcommand)]
pub enum BalanceCommands {
    /// Show the balance breakdown
    Show {
        /// Only this partner (a or b)
        #[arg(short, long)]
        partner: Option<String>,
        #[command(flatten)]
        window: WindowArgs,
    },
    /// Month-end balances over a year
    History {
        #[arg(short, long)]
        partner: String,
        /// Calendar year (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,
        /// Write CSV to this file instead of printing
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Export the balance report to a file
    Export {
        /// Output file
        file: PathBuf,
        /// csv, json or yaml (guessed from the extension when omitted)
        #[arg(short, long)]
        format: Option<String>,
        #[command(flatten)]
        window: WindowArgs,
    },
    /// Recount a partner's balance from the raw records
    Verify {
        #[arg(short, long)]
        partner: String,
        #[command(flatten)]
        window: WindowArgs,
        /// Expected balance, e.g. from the spreadsheet
        #[arg(long, allow_hyphen_values = true)]
        expected_balance: Option<String>,
        /// Expected total ins
        #[arg(long)]
        expected_ins: Option<String>,
        /// Expected total outs
        #[arg(long)]
        expected_outs: Option<String>,
        /// Expected share of fixed expenses
        #[arg(long)]
        expected_fixed: Option<String>,
    },
}

pub fn handle_balance_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BalanceCommands,
) -> AgoraResult<()> {
    match cmd {
        BalanceCommands::Show { partner, window } => {
            let query = window.query()?;
            let report = match partner {
                Some(p) => {
                    let partners = [parse_partner(&p)?];
                    PartnerBalanceReport::generate_for(storage, settings, &query, &partners)?
                }
                None => PartnerBalanceReport::generate(storage, settings, &query)?,
            };
            print!("{}", report.format_terminal());
        }

        BalanceCommands::History { partner, year, csv } => {
            let partner = parse_partner(&partner)?;
            let year = year.unwrap_or_else(|| Local::now().year());
            let report = BalanceHistoryReport::generate(storage, settings, partner, year)?;

            match csv {
                Some(path) => {
                    let mut writer = BufWriter::new(File::create(&path)?);
                    report.export_csv(&mut writer)?;
                    println!("Wrote history to {}", path.display());
                }
                None => print!("{}", report.format_terminal()),
            }
        }

        BalanceCommands::Export {
            file,
            format,
            window,
        } => {
            let format = match format {
                Some(f) => f.parse()?,
                None => ExportFormat::from_path(&file).unwrap_or_default(),
            };
            let query = window.query()?;

            let mut writer = BufWriter::new(File::create(&file)?);
            export_balance(format, storage, settings, &query, &mut writer)?;
            println!("Exported balance ({}) to {}", format, file.display());
        }

        BalanceCommands::Verify {
            partner,
            window,
            expected_balance,
            expected_ins,
            expected_outs,
            expected_fixed,
        } => {
            let partner: Partner = parse_partner(&partner)?;
            let reference = ReferenceTotals {
                balance: parse_optional_money(expected_balance.as_deref())?,
                ins_total: parse_optional_money(expected_ins.as_deref())?,
                outs_total: parse_optional_money(expected_outs.as_deref())?,
                fixed_expenses: parse_optional_money(expected_fixed.as_deref())?,
                ..Default::default()
            };

            let service = VerificationService::new(storage, settings.initial_investments());
            let report = service.verify(
                partner,
                &window.query()?,
                (!reference.is_empty()).then_some(&reference),
            )?;
            println!("{}", format_verification_report(&report, settings));

            if !report.is_consistent() {
                return Err(AgoraError::Verification(format!(
                    "{} discrepancies found",
                    report.discrepancies.len()
                )));
            }
        }
    }

    Ok(())
}
