//! Export module for Agora Books
//!
//! Writes the partner balance report in several formats:
//! - CSV: one row per partner (spreadsheet-compatible)
//! - JSON: machine-readable, with export metadata
//! - YAML: human-readable version of the JSON export

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_balance_csv;
pub use json::{export_balance_json, BalanceExport, ExportMetadata, EXPORT_SCHEMA_VERSION};
pub use yaml::export_balance_yaml;

use std::fmt;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use crate::config::settings::Settings;
use crate::error::{AgoraError, AgoraResult};
use crate::services::BalanceQuery;
use crate::storage::Storage;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
    Yaml,
}

impl ExportFormat {
    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = AgoraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(AgoraError::Export(format!(
                "Unknown export format '{}' (use csv, json or yaml)",
                s
            ))),
        }
    }
}

/// Export the balance report in the given format
pub fn export_balance<W: Write>(
    format: ExportFormat,
    storage: &Storage,
    settings: &Settings,
    query: &BalanceQuery,
    writer: &mut W,
) -> AgoraResult<()> {
    match format {
        ExportFormat::Csv => export_balance_csv(storage, settings, query, writer),
        ExportFormat::Json => export_balance_json(storage, settings, query, writer),
        ExportFormat::Yaml => export_balance_yaml(storage, settings, query, writer),
    }
}
