//! Personal project service
//!
//! Creates and updates projects invoiced directly to a partner. Every change
//! is saved immediately and recorded in the audit log.

use chrono::{Local, NaiveDate};
use tracing::info;

use crate::audit::EntityType;
use crate::error::{AgoraError, AgoraResult};
use crate::models::{Money, Partner, PersonalProject, ProjectStatus};
use crate::storage::Storage;

/// Fields for a new personal project
#[derive(Debug, Clone)]
pub struct NewProject {
    pub owner: Partner,
    pub description: String,
    pub amount: Money,
    pub client: Option<String>,
    pub invoice_date: Option<NaiveDate>,
}

impl NewProject {
    pub fn new(owner: Partner, description: impl Into<String>, amount: Money) -> Self {
        Self {
            owner,
            description: description.into(),
            amount,
            client: None,
            invoice_date: None,
        }
    }
}

/// Service for personal project management
pub struct ProjectService<'a> {
    storage: &'a Storage,
}

impl<'a> ProjectService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new personal project
    pub fn create(&self, input: NewProject) -> AgoraResult<PersonalProject> {
        let mut project = PersonalProject::new(input.owner, input.description.trim(), input.amount);
        if let Some(client) = input.client {
            project = project.with_client(client.trim());
        }
        if let Some(date) = input.invoice_date {
            project = project.with_invoice_date(date);
        }

        project
            .validate()
            .map_err(|e| AgoraError::Validation(e.to_string()))?;

        self.storage.projects.upsert(project.clone())?;
        self.storage.projects.save()?;

        self.storage.log_create(
            EntityType::PersonalProject,
            project.id.to_string(),
            Some(project.description.clone()),
            &project,
        )?;

        info!(
            id = %project.id,
            owner = %project.owner,
            amount = %project.amount,
            "created project"
        );
        Ok(project)
    }

    /// Find a project by its ID reference
    pub fn find(&self, reference: &str) -> AgoraResult<PersonalProject> {
        self.storage
            .projects
            .find_by_ref(reference)?
            .ok_or_else(|| AgoraError::project_not_found(reference))
    }

    /// List projects, newest first, optionally filtered by owner and status
    pub fn list(
        &self,
        owner: Option<Partner>,
        status: Option<ProjectStatus>,
    ) -> AgoraResult<Vec<PersonalProject>> {
        self.storage.projects.filter(|p| {
            owner.map_or(true, |o| p.owner == o) && status.map_or(true, |s| p.status == s)
        })
    }

    /// Change a project's amount
    pub fn update_amount(&self, reference: &str, amount: Money) -> AgoraResult<PersonalProject> {
        let mut project = self.find(reference)?;
        let before = project.clone();
        project.set_amount(amount);
        self.persist_update(&before, project)
    }

    /// Move a project to a new status
    ///
    /// Missing invoice/payment dates are stamped with `on`, or today when no
    /// date is given.
    pub fn set_status(
        &self,
        reference: &str,
        status: ProjectStatus,
        on: Option<NaiveDate>,
    ) -> AgoraResult<PersonalProject> {
        let mut project = self.find(reference)?;
        let before = project.clone();
        project.set_status(status, on.unwrap_or_else(|| Local::now().date_naive()));
        self.persist_update(&before, project)
    }

    /// Delete a project
    pub fn delete(&self, reference: &str) -> AgoraResult<PersonalProject> {
        let project = self.find(reference)?;
        self.storage.projects.delete(project.id)?;
        self.storage.projects.save()?;

        self.storage.log_delete(
            EntityType::PersonalProject,
            project.id.to_string(),
            Some(project.description.clone()),
            &project,
        )?;

        info!(id = %project.id, "deleted project");
        Ok(project)
    }

    fn persist_update(
        &self,
        before: &PersonalProject,
        project: PersonalProject,
    ) -> AgoraResult<PersonalProject> {
        project
            .validate()
            .map_err(|e| AgoraError::Validation(e.to_string()))?;

        self.storage.projects.upsert(project.clone())?;
        self.storage.projects.save()?;

        self.storage.log_update(
            EntityType::PersonalProject,
            project.id.to_string(),
            Some(project.description.clone()),
            before,
            &project,
        )?;

        info!(id = %project.id, status = %project.status, "updated project");
        Ok(project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::AgoraPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = AgoraPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_create_project() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ProjectService::new(&storage);

        let mut input = NewProject::new(Partner::A, "  Music video  ", Money::from_cents(150000));
        input.client = Some("Label".into());
        let project = service.create(input).unwrap();

        assert_eq!(project.description, "Music video");
        assert_eq!(project.client, "Label");
        assert_eq!(project.status, ProjectStatus::NotInvoiced);
        assert_eq!(storage.audit().read_all().unwrap().len(), 1);
    }

    #[test]
    fn test_create_rejects_negative_amount() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ProjectService::new(&storage);

        let err = service
            .create(NewProject::new(Partner::A, "Refund", Money::from_cents(-100)))
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(storage.projects.count().unwrap(), 0);
    }

    #[test]
    fn test_create_rejects_out_of_range_amount() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ProjectService::new(&storage);
        let huge = Money::parse("79228162514264337593543950000").unwrap();

        let err = service
            .create(NewProject::new(Partner::A, "Huge", huge))
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(storage.projects.count().unwrap(), 0);
    }

    #[test]
    fn test_set_status_stamps_dates() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ProjectService::new(&storage);
        let project = service
            .create(NewProject::new(Partner::B, "Wedding", Money::from_cents(90000)))
            .unwrap();
        let reference = project.id.to_string();

        let invoiced = service
            .set_status(&reference, ProjectStatus::Invoiced, Some(date(2025, 3, 1)))
            .unwrap();
        assert_eq!(invoiced.invoice_date, Some(date(2025, 3, 1)));
        assert_eq!(invoiced.payment_date, None);

        let received = service
            .set_status(&reference, ProjectStatus::Received, Some(date(2025, 4, 2)))
            .unwrap();
        assert_eq!(received.invoice_date, Some(date(2025, 3, 1)));
        assert_eq!(received.payment_date, Some(date(2025, 4, 2)));

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 3);
        assert!(entries[2].diff_summary.is_some());
    }

    #[test]
    fn test_list_filters() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ProjectService::new(&storage);
        let a = service
            .create(NewProject::new(Partner::A, "A1", Money::from_cents(1)))
            .unwrap();
        service
            .create(NewProject::new(Partner::B, "B1", Money::from_cents(1)))
            .unwrap();
        service
            .set_status(&a.id.to_string(), ProjectStatus::Received, None)
            .unwrap();

        assert_eq!(service.list(None, None).unwrap().len(), 2);
        assert_eq!(service.list(Some(Partner::A), None).unwrap().len(), 1);
        assert_eq!(
            service
                .list(Some(Partner::B), Some(ProjectStatus::Received))
                .unwrap()
                .len(),
            0
        );
    }

    #[test]
    fn test_delete_and_not_found() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ProjectService::new(&storage);
        let project = service
            .create(NewProject::new(Partner::A, "Ad", Money::from_cents(1)))
            .unwrap();

        service.delete(&project.id.to_string()).unwrap();
        let err = service.find(&project.id.to_string()).unwrap_err();
        assert!(err.is_not_found());
    }
}
