//! In-memory port implementations shared by the unit tests of this crate.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;

use opsdash_domain::client::Client;
use opsdash_domain::contractor::Contractor;
use opsdash_domain::error::OpsDashError;
use opsdash_domain::id::{ClientId, ContractorId, ProjectId, RecipeId, TaskId};
use opsdash_domain::project::Project;
use opsdash_domain::recipe::Recipe;
use opsdash_domain::task::Task;

use crate::ports::{
    ClientRepository, ContractorRepository, ProjectRepository, RecipeRepository, TaskRepository,
};

// ── Recipes ────────────────────────────────────────────────────────

/// Keeps insertion order so engine tests can rely on recipe list order.
#[derive(Default)]
pub struct InMemoryRecipeRepo {
    store: Mutex<Vec<Recipe>>,
    fail_listing: bool,
}

impl InMemoryRecipeRepo {
    pub fn with(recipes: Vec<Recipe>) -> Self {
        Self {
            store: Mutex::new(recipes),
            fail_listing: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            store: Mutex::new(Vec::new()),
            fail_listing: true,
        }
    }
}

impl RecipeRepository for InMemoryRecipeRepo {
    fn create(&self, recipe: Recipe) -> impl Future<Output = Result<Recipe, OpsDashError>> + Send {
        self.store.lock().unwrap().push(recipe.clone());
        async { Ok(recipe) }
    }

    fn get_by_id(
        &self,
        id: RecipeId,
    ) -> impl Future<Output = Result<Option<Recipe>, OpsDashError>> + Send {
        let r = self.store.lock().unwrap().iter().find(|r| r.id == id).cloned();
        async { Ok(r) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Recipe>, OpsDashError>> + Send {
        let r = self.store.lock().unwrap().clone();
        async { Ok(r) }
    }

    fn list_active(&self) -> impl Future<Output = Result<Vec<Recipe>, OpsDashError>> + Send {
        let result = if self.fail_listing {
            Err(OpsDashError::Storage("recipe store offline".into()))
        } else {
            Ok(self
                .store
                .lock()
                .unwrap()
                .iter()
                .filter(|r| r.is_active)
                .cloned()
                .collect())
        };
        async { result }
    }

    fn update(&self, recipe: Recipe) -> impl Future<Output = Result<Recipe, OpsDashError>> + Send {
        let mut store = self.store.lock().unwrap();
        if let Some(slot) = store.iter_mut().find(|r| r.id == recipe.id) {
            *slot = recipe.clone();
        }
        async { Ok(recipe) }
    }

    fn delete(&self, id: RecipeId) -> impl Future<Output = Result<(), OpsDashError>> + Send {
        self.store.lock().unwrap().retain(|r| r.id != id);
        async { Ok(()) }
    }
}

// ── Projects ───────────────────────────────────────────────────────

#[derive(Default)]
pub struct InMemoryProjectRepo {
    store: Mutex<HashMap<ProjectId, Project>>,
}

impl InMemoryProjectRepo {
    pub fn with(projects: Vec<Project>) -> Self {
        Self {
            store: Mutex::new(projects.into_iter().map(|p| (p.id, p)).collect()),
        }
    }
}

impl ProjectRepository for InMemoryProjectRepo {
    fn create(&self, project: Project) -> impl Future<Output = Result<Project, OpsDashError>> + Send {
        self.store.lock().unwrap().insert(project.id, project.clone());
        async { Ok(project) }
    }

    fn get_by_id(
        &self,
        id: ProjectId,
    ) -> impl Future<Output = Result<Option<Project>, OpsDashError>> + Send {
        let r = self.store.lock().unwrap().get(&id).cloned();
        async { Ok(r) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Project>, OpsDashError>> + Send {
        let r: Vec<_> = self.store.lock().unwrap().values().cloned().collect();
        async { Ok(r) }
    }

    fn update(&self, project: Project) -> impl Future<Output = Result<Project, OpsDashError>> + Send {
        self.store.lock().unwrap().insert(project.id, project.clone());
        async { Ok(project) }
    }

    fn delete(&self, id: ProjectId) -> impl Future<Output = Result<(), OpsDashError>> + Send {
        self.store.lock().unwrap().remove(&id);
        async { Ok(()) }
    }
}

// ── Tasks ──────────────────────────────────────────────────────────

/// Task store that can be told to reject specific titles, standing in for
/// a flaky downstream write.
#[derive(Default)]
pub struct InMemoryTaskRepo {
    store: Mutex<Vec<Task>>,
    rejected_titles: Vec<String>,
}

impl InMemoryTaskRepo {
    pub fn rejecting(titles: &[&str]) -> Self {
        Self {
            store: Mutex::new(Vec::new()),
            rejected_titles: titles.iter().map(ToString::to_string).collect(),
        }
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.store.lock().unwrap().clone()
    }
}

impl TaskRepository for InMemoryTaskRepo {
    fn create(&self, task: Task) -> impl Future<Output = Result<Task, OpsDashError>> + Send {
        let result = if self.rejected_titles.contains(&task.title) {
            Err(OpsDashError::Storage(
                format!("write rejected for {:?}", task.title).into(),
            ))
        } else {
            self.store.lock().unwrap().push(task.clone());
            Ok(task)
        };
        async { result }
    }

    fn get_by_id(&self, id: TaskId) -> impl Future<Output = Result<Option<Task>, OpsDashError>> + Send {
        let r = self.store.lock().unwrap().iter().find(|t| t.id == id).cloned();
        async { Ok(r) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Task>, OpsDashError>> + Send {
        let r = self.tasks();
        async { Ok(r) }
    }

    fn find_by_project(
        &self,
        project_id: ProjectId,
    ) -> impl Future<Output = Result<Vec<Task>, OpsDashError>> + Send {
        let r: Vec<_> = self
            .store
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.project_id == Some(project_id))
            .cloned()
            .collect();
        async { Ok(r) }
    }

    fn update(&self, task: Task) -> impl Future<Output = Result<Task, OpsDashError>> + Send {
        let mut store = self.store.lock().unwrap();
        if let Some(slot) = store.iter_mut().find(|t| t.id == task.id) {
            *slot = task.clone();
        }
        async { Ok(task) }
    }

    fn delete(&self, id: TaskId) -> impl Future<Output = Result<(), OpsDashError>> + Send {
        self.store.lock().unwrap().retain(|t| t.id != id);
        async { Ok(()) }
    }
}

// ── Clients & contractors ──────────────────────────────────────────

#[derive(Default)]
pub struct InMemoryClientRepo {
    store: Mutex<HashMap<ClientId, Client>>,
}

impl ClientRepository for InMemoryClientRepo {
    fn create(&self, client: Client) -> impl Future<Output = Result<Client, OpsDashError>> + Send {
        self.store.lock().unwrap().insert(client.id, client.clone());
        async { Ok(client) }
    }

    fn get_by_id(
        &self,
        id: ClientId,
    ) -> impl Future<Output = Result<Option<Client>, OpsDashError>> + Send {
        let r = self.store.lock().unwrap().get(&id).cloned();
        async { Ok(r) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Client>, OpsDashError>> + Send {
        let r: Vec<_> = self.store.lock().unwrap().values().cloned().collect();
        async { Ok(r) }
    }

    fn update(&self, client: Client) -> impl Future<Output = Result<Client, OpsDashError>> + Send {
        self.store.lock().unwrap().insert(client.id, client.clone());
        async { Ok(client) }
    }

    fn delete(&self, id: ClientId) -> impl Future<Output = Result<(), OpsDashError>> + Send {
        self.store.lock().unwrap().remove(&id);
        async { Ok(()) }
    }
}

#[derive(Default)]
pub struct InMemoryContractorRepo {
    store: Mutex<HashMap<ContractorId, Contractor>>,
}

impl ContractorRepository for InMemoryContractorRepo {
    fn create(
        &self,
        contractor: Contractor,
    ) -> impl Future<Output = Result<Contractor, OpsDashError>> + Send {
        self.store
            .lock()
            .unwrap()
            .insert(contractor.id, contractor.clone());
        async { Ok(contractor) }
    }

    fn get_by_id(
        &self,
        id: ContractorId,
    ) -> impl Future<Output = Result<Option<Contractor>, OpsDashError>> + Send {
        let r = self.store.lock().unwrap().get(&id).cloned();
        async { Ok(r) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Contractor>, OpsDashError>> + Send {
        let r: Vec<_> = self.store.lock().unwrap().values().cloned().collect();
        async { Ok(r) }
    }

    fn update(
        &self,
        contractor: Contractor,
    ) -> impl Future<Output = Result<Contractor, OpsDashError>> + Send {
        self.store
            .lock()
            .unwrap()
            .insert(contractor.id, contractor.clone());
        async { Ok(contractor) }
    }

    fn delete(&self, id: ContractorId) -> impl Future<Output = Result<(), OpsDashError>> + Send {
        self.store.lock().unwrap().remove(&id);
        async { Ok(()) }
    }
}
