//! Storage initialization
//!
//! Handles first-run setup: directories plus an empty file per record
//! collection, so a fresh install can be inspected and backed up right away.

use std::path::PathBuf;

use serde_json::json;
use tracing::info;

use crate::config::paths::AgoraPaths;
use crate::error::AgoraError;

use super::file_io::write_json_atomic;

fn record_files(paths: &AgoraPaths) -> [PathBuf; 5] {
    [
        paths.projects_file(),
        paths.company_projects_file(),
        paths.fixed_expenses_file(),
        paths.personal_expenses_file(),
        paths.expense_reports_file(),
    ]
}

/// Create missing directories and record files; existing files are left alone
///
/// Returns the number of files created.
pub fn initialize_storage(paths: &AgoraPaths) -> Result<usize, AgoraError> {
    paths.ensure_directories()?;

    let mut created = 0;
    for file in record_files(paths) {
        if !file.exists() {
            write_json_atomic(&file, &json!({ "records": [] }))?;
            created += 1;
        }
    }

    if created > 0 {
        info!(created, base = %paths.base_dir().display(), "initialized storage");
    }
    Ok(created)
}
