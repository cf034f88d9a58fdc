//! # opsdash-domain
//!
//! Pure domain model for the opsdash business-operations dashboard.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Clients**, **Contractors**, **Projects** and **Tasks**
//! - Define **Recipes** (trigger → condition → action automation rules)
//!   together with trigger matching and condition evaluation
//! - Define **Domain events** (project created, project status changed)
//! - Provide the **growth lab** reverse-funnel calculator
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod client;
pub mod contractor;
pub mod event;
pub mod growth;
pub mod project;
pub mod recipe;
pub mod task;
