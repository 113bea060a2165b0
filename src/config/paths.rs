//! Path management for Agora Books
//!
//! ## Path Resolution Order
//!
//! 1. `AGORA_DATA_DIR` environment variable (if set)
//! 2. The platform configuration directory for `pt.Agora Media.agora`
//!    (e.g. `~/.config/agora` on Linux, `%APPDATA%\Agora Media\agora\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::AgoraError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "AGORA_DATA_DIR";

/// Manages all paths used by Agora Books
#[derive(Debug, Clone)]
pub struct AgoraPaths {
    base_dir: PathBuf,
}

impl AgoraPaths {
    /// Resolve the base directory from the environment or the platform defaults
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, AgoraError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => ProjectDirs::from("pt", "Agora Media", "agora")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    AgoraError::Config("Could not determine a configuration directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Create AgoraPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding the record files
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    pub fn projects_file(&self) -> PathBuf {
        self.data_dir().join("projects.json")
    }

    pub fn company_projects_file(&self) -> PathBuf {
        self.data_dir().join("company_projects.json")
    }

    pub fn fixed_expenses_file(&self) -> PathBuf {
        self.data_dir().join("fixed_expenses.json")
    }

    pub fn personal_expenses_file(&self) -> PathBuf {
        self.data_dir().join("personal_expenses.json")
    }

    pub fn expense_reports_file(&self) -> PathBuf {
        self.data_dir().join("expense_reports.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), AgoraError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| AgoraError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| AgoraError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}
