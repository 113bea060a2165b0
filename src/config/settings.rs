//! User settings for Agora Books
//!
//! Stores display preferences and the per-partner profile, including the
//! historical initial investment used by the balance calculator.

use serde::{Deserialize, Serialize};

use super::paths::AgoraPaths;
use crate::error::AgoraError;
use crate::models::{InitialInvestments, Money, Partner};

/// Display name and historical data for one partner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnerProfile {
    /// Name shown in reports
    pub name: String,

    /// Capital the partner put into the company when it was founded
    #[serde(default)]
    pub initial_investment: Money,
}

/// Profiles for both partners
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnerProfiles {
    pub a: PartnerProfile,
    pub b: PartnerProfile,
}

impl PartnerProfiles {
    pub fn get(&self, partner: Partner) -> &PartnerProfile {
        match partner {
            Partner::A => &self.a,
            Partner::B => &self.b,
        }
    }

    pub fn get_mut(&mut self, partner: Partner) -> &mut PartnerProfile {
        match partner {
            Partner::A => &mut self.a,
            Partner::B => &mut self.b,
        }
    }
}

impl Default for PartnerProfiles {
    fn default() -> Self {
        Self {
            a: PartnerProfile {
                name: "Partner A".into(),
                initial_investment: Money::zero(),
            },
            b: PartnerProfile {
                name: "Partner B".into(),
                initial_investment: Money::zero(),
            },
        }
    }
}

/// User settings for Agora Books
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in reports
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Partner names and initial investments
    #[serde(default)]
    pub partners: PartnerProfiles,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "€".to_string()
}

fn default_date_format() -> String {
    "%d/%m/%Y".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            partners: PartnerProfiles::default(),
        }
    }
}

impl Settings {
    /// Initial investments as handed to the balance calculator
    pub fn initial_investments(&self) -> InitialInvestments {
        InitialInvestments {
            a: self.partners.a.initial_investment,
            b: self.partners.b.initial_investment,
        }
    }

    /// Display name for a partner
    pub fn partner_name(&self, partner: Partner) -> &str {
        &self.partners.get(partner).name
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &AgoraPaths) -> Result<Self, AgoraError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| AgoraError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                AgoraError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &AgoraPaths) -> Result<(), AgoraError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| AgoraError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| AgoraError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "€");
        assert_eq!(settings.partner_name(Partner::A), "Partner A");
        assert!(settings.initial_investments().a.is_zero());
        assert!(settings.initial_investments().b.is_zero());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AgoraPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.partners.get_mut(Partner::B).name = "Rui".into();
        settings.partners.get_mut(Partner::B).initial_investment = Money::new(dec!(2500.00));

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.partner_name(Partner::B), "Rui");
        assert_eq!(
            loaded.initial_investments().for_partner(Partner::B),
            Money::new(dec!(2500.00))
        );
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"schema_version": 1}"#).unwrap();
        assert_eq!(settings.date_format, "%d/%m/%Y");
        assert_eq!(settings.partners, PartnerProfiles::default());
    }
}
