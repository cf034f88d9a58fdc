//! Shared application state for axum handlers.

use std::sync::Arc;

use opsdash_app::ports::{
    ClientRepository, ContractorRepository, ProjectRepository, RecipeRepository, TaskRepository,
};
use opsdash_app::services::client_service::ClientService;
use opsdash_app::services::contractor_service::ContractorService;
use opsdash_app::services::project_service::ProjectService;
use opsdash_app::services::recipe_service::RecipeService;
use opsdash_app::services::task_service::TaskService;

/// Application state shared across all axum handlers.
///
/// Generic over the client, contractor, project, task and recipe
/// repositories to avoid dynamic dispatch. `Clone` is implemented manually
/// so the underlying types themselves do not need to be `Clone`; only the
/// `Arc` wrappers are cloned.
pub struct AppState<CR, KR, PR, TR, RR> {
    pub client_service: Arc<ClientService<CR>>,
    pub contractor_service: Arc<ContractorService<KR>>,
    /// Project lifecycle, including automation runs.
    pub project_service: Arc<ProjectService<PR, RR, TR>>,
    pub task_service: Arc<TaskService<TR>>,
    pub recipe_service: Arc<RecipeService<RR>>,
}

impl<CR, KR, PR, TR, RR> Clone for AppState<CR, KR, PR, TR, RR> {
    fn clone(&self) -> Self {
        Self {
            client_service: Arc::clone(&self.client_service),
            contractor_service: Arc::clone(&self.contractor_service),
            project_service: Arc::clone(&self.project_service),
            task_service: Arc::clone(&self.task_service),
            recipe_service: Arc::clone(&self.recipe_service),
        }
    }
}

impl<CR, KR, PR, TR, RR> AppState<CR, KR, PR, TR, RR>
where
    CR: ClientRepository + Send + Sync + 'static,
    KR: ContractorRepository + Send + Sync + 'static,
    PR: ProjectRepository + Send + Sync + 'static,
    TR: TaskRepository + Send + Sync + 'static,
    RR: RecipeRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        client_service: ClientService<CR>,
        contractor_service: ContractorService<KR>,
        project_service: ProjectService<PR, RR, TR>,
        task_service: TaskService<TR>,
        recipe_service: RecipeService<RR>,
    ) -> Self {
        Self {
            client_service: Arc::new(client_service),
            contractor_service: Arc::new(contractor_service),
            project_service: Arc::new(project_service),
            task_service: Arc::new(task_service),
            recipe_service: Arc::new(recipe_service),
        }
    }
}
