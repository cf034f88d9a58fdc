//! Task service: use-cases for managing tasks.

use opsdash_domain::error::{NotFoundError, OpsDashError};
use opsdash_domain::id::{ProjectId, TaskId};
use opsdash_domain::task::{Task, TaskStatus};

use crate::ports::TaskRepository;

/// Application service for task operations.
pub struct TaskService<R> {
    repo: R,
}

impl<R: TaskRepository> TaskService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new task after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`OpsDashError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip_all, fields(task_id = %task.id))]
    pub async fn create_task(&self, task: Task) -> Result<Task, OpsDashError> {
        task.validate()?;
        self.repo.create(task).await
    }

    /// Look up a task by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`OpsDashError::NotFound`] when no task with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_task(&self, id: TaskId) -> Result<Task, OpsDashError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Task",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all tasks.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_tasks(&self) -> Result<Vec<Task>, OpsDashError> {
        self.repo.get_all().await
    }

    /// List the tasks attached to one project.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_for_project(&self, project_id: ProjectId) -> Result<Vec<Task>, OpsDashError> {
        self.repo.find_by_project(project_id).await
    }

    /// Update an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`OpsDashError::Validation`] if invariants fail, or a
    /// storage error from the repository.
    pub async fn update_task(&self, task: Task) -> Result<Task, OpsDashError> {
        task.validate()?;
        self.repo.update(task).await
    }

    /// Move a task through its workflow.
    ///
    /// # Errors
    ///
    /// Returns [`OpsDashError::NotFound`] when the task does not exist, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn set_status(&self, id: TaskId, status: TaskStatus) -> Result<Task, OpsDashError> {
        let mut task = self.get_task(id).await?;
        task.status = status;
        self.repo.update(task).await
    }

    /// Delete a task by id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn delete_task(&self, id: TaskId) -> Result<(), OpsDashError> {
        self.repo.delete(id).await
    }
}
