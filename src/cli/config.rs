//! Configuration CLI commands

use clap::Subcommand;

use super::{parse_money, parse_partner};
use crate::audit::EntityType;
use crate::config::paths::AgoraPaths;
use crate::config::settings::Settings;
use crate::error::AgoraResult;
use crate::models::Partner;
use crate::storage::Storage;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Set a partner's display name and/or initial investment
    SetPartner {
        /// Partner (a or b)
        partner: String,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        investment: Option<String>,
    },
}

/// Show paths and settings, or apply a config change
pub fn handle_config_command(
    storage: &Storage,
    paths: &AgoraPaths,
    settings: &mut Settings,
    cmd: Option<ConfigCommands>,
) -> AgoraResult<()> {
    match cmd {
        None => {
            println!("Agora Books Configuration");
            println!("=========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency:    {}", settings.currency_symbol);
            println!("  Date format: {}", settings.date_format);
            for partner in Partner::ALL {
                let profile = settings.partners.get(partner);
                println!(
                    "  Partner {}:   {} (initial investment {})",
                    partner,
                    profile.name,
                    profile
                        .initial_investment
                        .format_with_symbol(&settings.currency_symbol)
                );
            }
        }

        Some(ConfigCommands::SetPartner {
            partner,
            name,
            investment,
        }) => {
            let partner = parse_partner(&partner)?;
            let before = settings.clone();

            let profile = settings.partners.get_mut(partner);
            if let Some(name) = name {
                profile.name = name.trim().to_string();
            }
            if let Some(investment) = investment {
                profile.initial_investment = parse_money(&investment)?;
            }

            settings.save(paths)?;
            storage.log_update(
                EntityType::Settings,
                format!("partner-{}", partner.code()),
                Some(settings.partner_name(partner).to_string()),
                &before,
                &*settings,
            )?;

            println!("Updated partner {}: {}", partner, settings.partner_name(partner));
        }
    }

    Ok(())
}
