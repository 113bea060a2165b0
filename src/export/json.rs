//! JSON Export functionality
//!
//! Exports the partner balance report with export metadata.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::config::settings::Settings;
use crate::error::{AgoraError, AgoraResult};
use crate::reports::PartnerBalanceReport;
use crate::services::BalanceQuery;
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Balance export structure
#[derive(Debug, Clone, Serialize)]
pub struct BalanceExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub currency_symbol: String,

    pub report: PartnerBalanceReport,

    pub metadata: ExportMetadata,
}

/// Record counts at export time
#[derive(Debug, Clone, Serialize)]
pub struct ExportMetadata {
    pub project_count: usize,
    pub company_project_count: usize,
    pub fixed_expense_count: usize,
    pub personal_expense_count: usize,
    pub expense_report_count: usize,
}

impl BalanceExport {
    pub fn generate(
        storage: &Storage,
        settings: &Settings,
        query: &BalanceQuery,
    ) -> AgoraResult<Self> {
        let report = PartnerBalanceReport::generate(storage, settings, query)?;

        let metadata = ExportMetadata {
            project_count: storage.projects.count()?,
            company_project_count: storage.company_projects.count()?,
            fixed_expense_count: storage.fixed_expenses.count()?,
            personal_expense_count: storage.personal_expenses.count()?,
            expense_report_count: storage.expense_reports.count()?,
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            currency_symbol: settings.currency_symbol.clone(),
            report,
            metadata,
        })
    }
}

/// Export the balance report to pretty-printed JSON
pub fn export_balance_json<W: Write>(
    storage: &Storage,
    settings: &Settings,
    query: &BalanceQuery,
    writer: &mut W,
) -> AgoraResult<()> {
    let export = BalanceExport::generate(storage, settings, query)?;

    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| AgoraError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| AgoraError::Export(e.to_string()))?;

    Ok(())
}
