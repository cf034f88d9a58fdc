//! Application services: use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod client_service;
pub mod contractor_service;
pub mod project_service;
pub mod recipe_service;
pub mod task_service;
