//! # opsdash-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `opsdash-app::ports`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `opsdash-app` (for port traits) and `opsdash-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod client_repo;
mod contractor_repo;
mod decode;
mod error;
mod pool;
mod project_repo;
mod recipe_repo;
mod task_repo;

pub use client_repo::SqliteClientRepository;
pub use contractor_repo::SqliteContractorRepository;
pub use error::StorageError;
pub use pool::{Config, Database};
pub use project_repo::SqliteProjectRepository;
pub use recipe_repo::SqliteRecipeRepository;
pub use task_repo::SqliteTaskRepository;
