//! Expense CLI commands
//!
//! Fixed monthly expenses and personal expenses share one command group.

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use super::{parse_money, parse_optional_date, parse_partner};
use crate::config::settings::Settings;
use crate::display::{format_fixed_expense_list, format_personal_expense_list};
use crate::error::AgoraResult;
use crate::models::PaymentStatus;
use crate::services::{ExpenseRecord, ExpenseService};
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Add a fixed monthly expense (split between both partners)
    FixedAdd {
        description: String,
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Expense date (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Record as already paid
        #[arg(long)]
        paid: bool,
    },
    /// Set a fixed expense's payment status (paid by default)
    FixedPay {
        expense: String,
        #[arg(short, long, default_value = "paid")]
        status: String,
    },
    /// List fixed expenses
    FixedList {
        #[arg(short, long)]
        status: Option<String>,
    },
    /// Add an expense booked against one partner
    PersonalAdd {
        /// Partner (a or b)
        partner: String,
        description: String,
        #[arg(allow_hyphen_values = true)]
        amount: String,
        #[arg(short, long)]
        date: Option<String>,
        #[arg(long)]
        paid: bool,
    },
    /// Set a personal expense's payment status (paid by default)
    PersonalPay {
        expense: String,
        #[arg(short, long, default_value = "paid")]
        status: String,
    },
    /// List personal expenses
    PersonalList {
        #[arg(short, long)]
        partner: Option<String>,
    },
    /// Delete an expense of either kind
    Delete { expense: String },
}

fn status_for(paid: bool) -> PaymentStatus {
    if paid {
        PaymentStatus::Paid
    } else {
        PaymentStatus::Pending
    }
}

fn date_or_today(date: Option<&str>) -> AgoraResult<NaiveDate> {
    Ok(parse_optional_date(date)?.unwrap_or_else(|| Local::now().date_naive()))
}

pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> AgoraResult<()> {
    let service = ExpenseService::new(storage);

    match cmd {
        ExpenseCommands::FixedAdd {
            description,
            amount,
            date,
            paid,
        } => {
            let expense = service.create_fixed(
                &description,
                parse_money(&amount)?,
                date_or_today(date.as_deref())?,
                status_for(paid),
            )?;
            println!(
                "Added fixed expense {}: {} ({})",
                expense.id,
                expense.amount.format_with_symbol(&settings.currency_symbol),
                expense.payment_status
            );
        }

        ExpenseCommands::FixedPay { expense, status } => {
            let updated = service.set_fixed_status(&expense, status.parse()?)?;
            println!("Fixed expense {} is now {}", updated.id, updated.payment_status);
        }

        ExpenseCommands::FixedList { status } => {
            let status: Option<PaymentStatus> = status.as_deref().map(str::parse).transpose()?;
            let expenses = service.list_fixed(status)?;
            println!("{}", format_fixed_expense_list(&expenses, settings));
        }

        ExpenseCommands::PersonalAdd {
            partner,
            description,
            amount,
            date,
            paid,
        } => {
            let expense = service.create_personal(
                parse_partner(&partner)?,
                &description,
                parse_money(&amount)?,
                date_or_today(date.as_deref())?,
                status_for(paid),
            )?;
            println!(
                "Added personal expense {} for {}: {} ({})",
                expense.id,
                settings.partner_name(expense.partner),
                expense.amount.format_with_symbol(&settings.currency_symbol),
                expense.payment_status
            );
        }

        ExpenseCommands::PersonalPay { expense, status } => {
            let updated = service.set_personal_status(&expense, status.parse()?)?;
            println!(
                "Personal expense {} is now {}",
                updated.id, updated.payment_status
            );
        }

        ExpenseCommands::PersonalList { partner } => {
            let partner = partner.as_deref().map(parse_partner).transpose()?;
            let expenses = service.list_personal(partner)?;
            println!("{}", format_personal_expense_list(&expenses, settings));
        }

        ExpenseCommands::Delete { expense } => {
            let deleted = service.delete(&expense)?;
            let kind = match deleted {
                ExpenseRecord::Fixed(_) => "fixed",
                ExpenseRecord::Personal(_) => "personal",
            };
            println!("Deleted {} expense: {}", kind, deleted.description());
        }
    }

    Ok(())
}
