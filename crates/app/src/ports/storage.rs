//! Storage port: repository traits for the dashboard's records.
//!
//! `ProjectRepository` and `TaskRepository` are shared between the services
//! and the automation engine, so both are also implemented for `Arc<T>`.

use std::future::Future;
use std::sync::Arc;

use opsdash_domain::client::Client;
use opsdash_domain::contractor::Contractor;
use opsdash_domain::error::OpsDashError;
use opsdash_domain::id::{ClientId, ContractorId, ProjectId, TaskId};
use opsdash_domain::project::Project;
use opsdash_domain::task::Task;

/// Repository for persisting and querying [`Client`]s.
pub trait ClientRepository {
    fn create(&self, client: Client) -> impl Future<Output = Result<Client, OpsDashError>> + Send;

    fn get_by_id(
        &self,
        id: ClientId,
    ) -> impl Future<Output = Result<Option<Client>, OpsDashError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<Client>, OpsDashError>> + Send;

    fn update(&self, client: Client) -> impl Future<Output = Result<Client, OpsDashError>> + Send;

    fn delete(&self, id: ClientId) -> impl Future<Output = Result<(), OpsDashError>> + Send;
}

/// Repository for persisting and querying [`Contractor`]s.
pub trait ContractorRepository {
    fn create(
        &self,
        contractor: Contractor,
    ) -> impl Future<Output = Result<Contractor, OpsDashError>> + Send;

    fn get_by_id(
        &self,
        id: ContractorId,
    ) -> impl Future<Output = Result<Option<Contractor>, OpsDashError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<Contractor>, OpsDashError>> + Send;

    fn update(
        &self,
        contractor: Contractor,
    ) -> impl Future<Output = Result<Contractor, OpsDashError>> + Send;

    fn delete(&self, id: ContractorId) -> impl Future<Output = Result<(), OpsDashError>> + Send;
}

/// Repository for persisting and querying [`Project`]s.
pub trait ProjectRepository {
    fn create(&self, project: Project)
    -> impl Future<Output = Result<Project, OpsDashError>> + Send;

    fn get_by_id(
        &self,
        id: ProjectId,
    ) -> impl Future<Output = Result<Option<Project>, OpsDashError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<Project>, OpsDashError>> + Send;

    fn update(&self, project: Project)
    -> impl Future<Output = Result<Project, OpsDashError>> + Send;

    fn delete(&self, id: ProjectId) -> impl Future<Output = Result<(), OpsDashError>> + Send;
}

/// Repository for persisting and querying [`Task`]s.
pub trait TaskRepository {
    fn create(&self, task: Task) -> impl Future<Output = Result<Task, OpsDashError>> + Send;

    fn get_by_id(
        &self,
        id: TaskId,
    ) -> impl Future<Output = Result<Option<Task>, OpsDashError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<Task>, OpsDashError>> + Send;

    /// Tasks attached to `project_id`, earliest due date first.
    fn find_by_project(
        &self,
        project_id: ProjectId,
    ) -> impl Future<Output = Result<Vec<Task>, OpsDashError>> + Send;

    fn update(&self, task: Task) -> impl Future<Output = Result<Task, OpsDashError>> + Send;

    fn delete(&self, id: TaskId) -> impl Future<Output = Result<(), OpsDashError>> + Send;
}

impl<T: ProjectRepository + Send + Sync> ProjectRepository for Arc<T> {
    fn create(&self, project: Project) -> impl Future<Output = Result<Project, OpsDashError>> + Send {
        (**self).create(project)
    }

    fn get_by_id(
        &self,
        id: ProjectId,
    ) -> impl Future<Output = Result<Option<Project>, OpsDashError>> + Send {
        (**self).get_by_id(id)
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Project>, OpsDashError>> + Send {
        (**self).get_all()
    }

    fn update(&self, project: Project) -> impl Future<Output = Result<Project, OpsDashError>> + Send {
        (**self).update(project)
    }

    fn delete(&self, id: ProjectId) -> impl Future<Output = Result<(), OpsDashError>> + Send {
        (**self).delete(id)
    }
}

impl<T: TaskRepository + Send + Sync> TaskRepository for Arc<T> {
    fn create(&self, task: Task) -> impl Future<Output = Result<Task, OpsDashError>> + Send {
        (**self).create(task)
    }

    fn get_by_id(
        &self,
        id: TaskId,
    ) -> impl Future<Output = Result<Option<Task>, OpsDashError>> + Send {
        (**self).get_by_id(id)
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Task>, OpsDashError>> + Send {
        (**self).get_all()
    }

    fn find_by_project(
        &self,
        project_id: ProjectId,
    ) -> impl Future<Output = Result<Vec<Task>, OpsDashError>> + Send {
        (**self).find_by_project(project_id)
    }

    fn update(&self, task: Task) -> impl Future<Output = Result<Task, OpsDashError>> + Send {
        (**self).update(task)
    }

    fn delete(&self, id: TaskId) -> impl Future<Output = Result<(), OpsDashError>> + Send {
        (**self).delete(id)
    }
}
