//! # opsdash-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `ClientRepository`, `ContractorRepository`: CRUD for people records
//!   - `ProjectRepository`: CRUD for projects
//!   - `TaskRepository`: CRUD for tasks, lookup by project
//!   - `RecipeRepository`: CRUD for automation recipes, active listing
//! - Define **driving/inbound ports** as use-case structs:
//!   - `ProjectService`: create, update, change status (runs automations)
//!   - `RecipeService`, `TaskService`, `ClientService`, `ContractorService`
//!   - `AutomationEngine`: match triggers, check conditions, run actions
//! - Orchestrate domain objects without knowing *how* persistence or IO works
//!
//! ## Dependency rule
//! Depends on `opsdash-domain` only. Never imports adapter crates. Adapters
//! depend on *this* crate, not the reverse.

pub mod automation_engine;
pub mod ports;
pub mod services;

#[cfg(test)]
mod testing;
