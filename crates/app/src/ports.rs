//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.
//! Together they form the entity store the automation engine reads recipes
//! from and writes tasks to.

pub mod recipe_repo;
pub mod storage;

pub use recipe_repo::RecipeRepository;
pub use storage::{ClientRepository, ContractorRepository, ProjectRepository, TaskRepository};
