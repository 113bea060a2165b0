//! Company project service
//!
//! Company projects carry the per-partner bonuses that feed the balance.

use chrono::{Local, NaiveDate};
use tracing::info;

use crate::audit::EntityType;
use crate::error::{AgoraError, AgoraResult};
use crate::models::{CompanyProject, Money, Partner, ProjectStatus};
use crate::storage::Storage;

/// Fields for a new company project
#[derive(Debug, Clone)]
pub struct NewCompanyProject {
    pub description: String,
    pub amount: Money,
    pub client: Option<String>,
    pub invoice_date: Option<NaiveDate>,
    pub bonus_a: Money,
    pub bonus_b: Money,
}

impl NewCompanyProject {
    pub fn new(description: impl Into<String>, amount: Money) -> Self {
        Self {
            description: description.into(),
            amount,
            client: None,
            invoice_date: None,
            bonus_a: Money::zero(),
            bonus_b: Money::zero(),
        }
    }
}

pub struct CompanyProjectService<'a> {
    storage: &'a Storage,
}

impl<'a> CompanyProjectService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a company project with its bonuses
    pub fn create(&self, input: NewCompanyProject) -> AgoraResult<CompanyProject> {
        let mut project = CompanyProject::new(input.description.trim(), input.amount)
            .with_bonus(Partner::A, input.bonus_a)
            .with_bonus(Partner::B, input.bonus_b);
        if let Some(client) = input.client {
            project = project.with_client(client.trim());
        }
        if let Some(date) = input.invoice_date {
            project = project.with_invoice_date(date);
        }

        project
            .validate()
            .map_err(|e| AgoraError::Validation(e.to_string()))?;

        self.storage.company_projects.upsert(project.clone())?;
        self.storage.company_projects.save()?;

        self.storage.log_create(
            EntityType::CompanyProject,
            project.id.to_string(),
            Some(project.description.clone()),
            &project,
        )?;

        info!(id = %project.id, amount = %project.amount, "created company project");
        Ok(project)
    }

    pub fn find(&self, reference: &str) -> AgoraResult<CompanyProject> {
        self.storage
            .company_projects
            .find_by_ref(reference)?
            .ok_or_else(|| AgoraError::company_project_not_found(reference))
    }

    /// List company projects, optionally by status
    pub fn list(&self, status: Option<ProjectStatus>) -> AgoraResult<Vec<CompanyProject>> {
        self.storage
            .company_projects
            .filter(|p| status.map_or(true, |s| p.status == s))
    }

    /// Set the bonus credited to one partner
    pub fn set_bonus(
        &self,
        reference: &str,
        partner: Partner,
        bonus: Money,
    ) -> AgoraResult<CompanyProject> {
        let mut project = self.find(reference)?;
        let before = project.clone();
        project.set_bonus(partner, bonus);
        self.persist_update(&before, project)
    }

    /// Move a project to a new status, stamping missing dates with `on` or today
    pub fn set_status(
        &self,
        reference: &str,
        status: ProjectStatus,
        on: Option<NaiveDate>,
    ) -> AgoraResult<CompanyProject> {
        let mut project = self.find(reference)?;
        let before = project.clone();
        project.set_status(status, on.unwrap_or_else(|| Local::now().date_naive()));
        self.persist_update(&before, project)
    }

    pub fn delete(&self, reference: &str) -> AgoraResult<CompanyProject> {
        let project = self.find(reference)?;
        self.storage.company_projects.delete(project.id)?;
        self.storage.company_projects.save()?;

        self.storage.log_delete(
            EntityType::CompanyProject,
            project.id.to_string(),
            Some(project.description.clone()),
            &project,
        )?;

        info!(id = %project.id, "deleted company project");
        Ok(project)
    }

    fn persist_update(
        &self,
        before: &CompanyProject,
        project: CompanyProject,
    ) -> AgoraResult<CompanyProject> {
        project
            .validate()
            .map_err(|e| AgoraError::Validation(e.to_string()))?;

        self.storage.company_projects.upsert(project.clone())?;
        self.storage.company_projects.save()?;

        self.storage.log_update(
            EntityType::CompanyProject,
            project.id.to_string(),
            Some(project.description.clone()),
            before,
            &project,
        )?;

        info!(id = %project.id, "updated company project");
        Ok(project)
    }
}
