//! # opsdash-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON API** for the dashboard front end
//!   (`/api/projects`, `/api/tasks`, `/api/recipes`, `/api/growth/plan`, …)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results, including automation summaries, into JSON
//!   responses
//!
//! ## Dependency rule
//! Depends on `opsdash-app` (for port traits and services) and `opsdash-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
