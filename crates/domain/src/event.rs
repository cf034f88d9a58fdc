//! Domain events: transient notifications fed into the automation engine.
//!
//! Events are constructed at the moment a project is created or its status
//! changes and are never persisted.

use serde::{Deserialize, Serialize};

use crate::project::{Project, ProjectStatus};

/// Something that happened to a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DomainEvent {
    /// A project was just created.
    NewProject { project: Project },
    /// A project moved to `new_status`.
    ProjectStatusChange {
        project: Project,
        new_status: ProjectStatus,
    },
}

impl DomainEvent {
    #[must_use]
    pub fn new_project(project: Project) -> Self {
        Self::NewProject { project }
    }

    #[must_use]
    pub fn status_change(project: Project, new_status: ProjectStatus) -> Self {
        Self::ProjectStatusChange {
            project,
            new_status,
        }
    }

    /// The record conditions are evaluated against.
    #[must_use]
    pub fn subject(&self) -> &Project {
        match self {
            Self::NewProject { project } | Self::ProjectStatusChange { project, .. } => project,
        }
    }
}

impl std::fmt::Display for DomainEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NewProject { project } => write!(f, "new_project({})", project.id),
            Self::ProjectStatusChange {
                project,
                new_status,
            } => write!(f, "project_status_change({}, {new_status})", project.id),
        }
    }
}
