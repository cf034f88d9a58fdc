//! Project service: project lifecycle use-cases.
//!
//! Creating a project and moving it to a new status are the two events that
//! drive automations. Both persist the project first and then hand the stored
//! record to the [`AutomationEngine`], returning its summary to the caller.

use serde::Serialize;

use opsdash_domain::error::{NotFoundError, OpsDashError};
use opsdash_domain::id::ProjectId;
use opsdash_domain::project::{Project, ProjectStatus};

use crate::automation_engine::{AutomationEngine, AutomationSummary};
use crate::ports::{ProjectRepository, RecipeRepository, TaskRepository};

/// A saved project together with what its automations did.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectUpdate {
    pub project: Project,
    pub automations: AutomationSummary,
}

impl ProjectUpdate {
    fn quiet(project: Project) -> Self {
        Self {
            project,
            automations: AutomationSummary::default(),
        }
    }
}

/// Application service for projects.
pub struct ProjectService<PR, RR, TR> {
    repo: PR,
    engine: AutomationEngine<RR, PR, TR>,
}

impl<PR, RR, TR> ProjectService<PR, RR, TR>
where
    PR: ProjectRepository,
    RR: RecipeRepository,
    TR: TaskRepository,
{
    /// `repo` and the engine usually share the same store, e.g. through an
    /// `Arc`.
    pub fn new(repo: PR, engine: AutomationEngine<RR, PR, TR>) -> Self {
        Self { repo, engine }
    }

    /// Save a new project, then run the `NEW_PROJECT` automations.
    ///
    /// # Errors
    ///
    /// Returns [`OpsDashError::Validation`] if invariants fail, or a storage
    /// error from the repository or while loading recipes. In the latter
    /// case the project has already been saved.
    #[tracing::instrument(skip_all, fields(project_id = %project.id))]
    pub async fn create_project(&self, project: Project) -> Result<ProjectUpdate, OpsDashError> {
        project.validate()?;
        let project = self.repo.create(project).await?;
        let automations = self.engine.on_project_created(&project).await?;
        Ok(ProjectUpdate {
            project,
            automations,
        })
    }

    /// Look up a project by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`OpsDashError::NotFound`] when no project with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_project(&self, id: ProjectId) -> Result<Project, OpsDashError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Project",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List projects, hiding archived ones unless asked for.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_projects(&self, include_archived: bool) -> Result<Vec<Project>, OpsDashError> {
        let mut projects = self.repo.get_all().await?;
        if !include_archived {
            projects.retain(|p| !p.is_archived());
        }
        Ok(projects)
    }

    /// Replace a project's fields.
    ///
    /// When the stored status differs from the incoming one this counts as a
    /// status change and runs the matching automations.
    ///
    /// # Errors
    ///
    /// Returns [`OpsDashError::Validation`] if invariants fail,
    /// [`OpsDashError::NotFound`] if the project does not exist, or a
    /// storage error.
    #[tracing::instrument(skip_all, fields(project_id = %project.id))]
    pub async fn update_project(&self, project: Project) -> Result<ProjectUpdate, OpsDashError> {
        project.validate()?;
        let previous = self.get_project(project.id).await?;
        let project = self.repo.update(project).await?;
        self.after_save(previous.status, project).await
    }

    /// Move a project to `new_status` and run the status-change automations.
    ///
    /// Setting the status a project already has is a no-op: nothing is
    /// written and no automation runs.
    ///
    /// # Errors
    ///
    /// Returns [`OpsDashError::NotFound`] if the project does not exist, or a
    /// storage error.
    #[tracing::instrument(skip(self))]
    pub async fn change_status(
        &self,
        id: ProjectId,
        new_status: ProjectStatus,
    ) -> Result<ProjectUpdate, OpsDashError> {
        let mut project = self.get_project(id).await?;
        let previous = project.status;
        if previous == new_status {
            tracing::debug!("status unchanged");
            return Ok(ProjectUpdate::quiet(project));
        }
        project.status = new_status;
        let project = self.repo.update(project).await?;
        self.after_save(previous, project).await
    }

    /// Delete a project by id. Its tasks are kept but detached.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn delete_project(&self, id: ProjectId) -> Result<(), OpsDashError> {
        self.repo.delete(id).await
    }

    async fn after_save(
        &self,
        previous: ProjectStatus,
        project: Project,
    ) -> Result<ProjectUpdate, OpsDashError> {
        if previous == project.status {
            return Ok(ProjectUpdate::quiet(project));
        }
        tracing::info!(from = %previous, to = %project.status, "project status changed");
        let automations = self
            .engine
            .on_project_status_changed(&project, project.status)
            .await?;
        Ok(ProjectUpdate {
            project,
            automations,
        })
    }
}
