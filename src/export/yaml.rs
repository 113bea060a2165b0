//! YAML Export functionality
//!
//! Human-readable version of the JSON balance export.

use crate::config::settings::Settings;
use crate::error::{AgoraError, AgoraResult};
use crate::export::json::BalanceExport;
use crate::services::BalanceQuery;
use crate::storage::Storage;
use std::io::Write;

/// Export the balance report to YAML format
pub fn export_balance_yaml<W: Write>(
    storage: &Storage,
    settings: &Settings,
    query: &BalanceQuery,
    writer: &mut W,
) -> AgoraResult<()> {
    let export = BalanceExport::generate(storage, settings, query)?;

    writeln!(writer, "# Agora Books Partner Balance Export")
        .map_err(|e| AgoraError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| AgoraError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| AgoraError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| AgoraError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| AgoraError::Export(e.to_string()))?;

    Ok(())
}
