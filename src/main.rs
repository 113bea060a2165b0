use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use agora::cli::{
    handle_balance_command, handle_boletim_command, handle_company_command,
    handle_config_command, handle_expense_command, handle_project_command,
};
use agora::config::{paths::AgoraPaths, settings::Settings};
use agora::storage::Storage;

#[derive(Parser)]
#[command(
    name = "agora",
    author = "Agora Media",
    version,
    about = "Bookkeeping and partner balances for Agora Media",
    long_about = "Agora Books tracks projects, company expenses and boletins \
                  for a two-partner company, and computes each partner's \
                  balance (saldo) with the company."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config {
        #[command(subcommand)]
        action: Option<agora::cli::ConfigCommands>,
    },

    /// Personal project commands
    #[command(subcommand)]
    Project(agora::cli::ProjectCommands),

    /// Company project commands
    #[command(subcommand)]
    Company(agora::cli::CompanyCommands),

    /// Fixed and personal expense commands
    #[command(subcommand)]
    Expense(agora::cli::ExpenseCommands),

    /// Boletim (expense report) commands
    #[command(subcommand)]
    Boletim(agora::cli::BoletimCommands),

    /// Partner balance commands
    #[command(subcommand, alias = "saldo")]
    Balance(agora::cli::BalanceCommands),

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        count: usize,
    },
}

fn main() -> Result<()> {
    // Diagnostics go to stderr; report output stays on stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agora=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = AgoraPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing Agora Books at: {}", paths.base_dir().display());
            let created = agora::storage::initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete ({} data files created).", created);
            println!();
            println!("Set partner names with 'agora config set-partner a --name <name>'.");
        }
        Some(Commands::Config { action }) => {
            handle_config_command(&storage, &paths, &mut settings, action)?;
        }
        Some(Commands::Project(cmd)) => {
            handle_project_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Company(cmd)) => {
            handle_company_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Boletim(cmd)) => {
            handle_boletim_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Balance(cmd)) => {
            handle_balance_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Audit { count }) => {
            let entries = storage.audit().read_recent(count)?;
            if entries.is_empty() {
                println!("No audit entries yet.");
            }
            for entry in entries {
                println!("{}", entry.format_human_readable());
            }
        }
        None => {
            println!("Agora Books - partner balances for Agora Media");
            println!();
            println!("Run 'agora --help' for usage information.");
            println!("Run 'agora balance show' to see both partners' balances.");
        }
    }

    Ok(())
}
