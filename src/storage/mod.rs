//! Storage layer for Agora Books
//!
//! JSON file storage with atomic writes. Each record collection has its own
//! file under `data/`; `Storage` bundles them with the audit log and answers
//! the aggregate queries the balance calculator issues.

pub mod aggregates;
pub mod file_io;
pub mod init;
pub mod records;
pub mod repository;

pub use file_io::{read_json, write_json_atomic};
pub use init::initialize_storage;
pub use repository::{JsonRepository, Record};

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::AgoraPaths;
use crate::error::AgoraError;
use crate::models::{
    CompanyProject, ExpenseReport, FixedMonthlyExpense, PersonalExpense, PersonalProject,
};

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    pub projects: JsonRepository<PersonalProject>,
    pub company_projects: JsonRepository<CompanyProject>,
    pub fixed_expenses: JsonRepository<FixedMonthlyExpense>,
    pub personal_expenses: JsonRepository<PersonalExpense>,
    pub expense_reports: JsonRepository<ExpenseReport>,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance, creating the data directory if needed
    pub fn new(paths: AgoraPaths) -> Result<Self, AgoraError> {
        paths.ensure_directories()?;

        Ok(Self {
            projects: JsonRepository::new(paths.projects_file()),
            company_projects: JsonRepository::new(paths.company_projects_file()),
            fixed_expenses: JsonRepository::new(paths.fixed_expenses_file()),
            personal_expenses: JsonRepository::new(paths.personal_expenses_file()),
            expense_reports: JsonRepository::new(paths.expense_reports_file()),
            audit: AuditLogger::new(paths.audit_log()),
        })
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), AgoraError> {
        self.projects.load()?;
        self.company_projects.load()?;
        self.fixed_expenses.load()?;
        self.personal_expenses.load()?;
        self.expense_reports.load()?;
        Ok(())
    }

    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), AgoraError> {
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> Result<(), AgoraError> {
        self.audit.log(&AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
        ))
    }

    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), AgoraError> {
        self.audit
            .log(&AuditEntry::delete(entity_type, entity_id, entity_name, entity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Partner};
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AgoraPaths::with_base_dir(temp_dir.path().to_path_buf());
        Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
    }

    #[test]
    fn test_load_all_reads_saved_records() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AgoraPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths.clone()).unwrap();

        storage
            .projects
            .upsert(PersonalProject::new(Partner::A, "Teaser", Money::from_cents(100)))
            .unwrap();
        storage.projects.save().unwrap();

        let mut reloaded = Storage::new(paths).unwrap();
        reloaded.load_all().unwrap();
        assert_eq!(reloaded.projects.count().unwrap(), 1);
        assert_eq!(reloaded.expense_reports.count().unwrap(), 0);
    }

    #[test]
    fn test_audit_helpers_append() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AgoraPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        let project = PersonalProject::new(Partner::B, "Teaser", Money::from_cents(100));

        storage
            .log_create(EntityType::PersonalProject, project.id.to_string(), None, &project)
            .unwrap();
        storage
            .log_delete(EntityType::PersonalProject, project.id.to_string(), None, &project)
            .unwrap();

        assert_eq!(storage.audit().read_all().unwrap().len(), 2);
    }
}
