//! Project: a unit of client work moving through a status lifecycle.
//!
//! Status changes are the main source of [`DomainEvent`](crate::event::DomainEvent)s
//! fed into the automation engine.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{OpsDashError, ValidationError};
use crate::id::{ClientId, ProjectId};
use crate::recipe::FieldLookup;
use crate::time::{Timestamp, now};

/// Lifecycle status of a [`Project`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    #[default]
    Onboarding,
    Active,
    Completed,
    Paused,
    Archived,
}

impl ProjectStatus {
    /// Statuses a recipe trigger may listen for.
    ///
    /// Archived projects are hidden from the dashboard and never drive
    /// automations.
    #[must_use]
    pub fn is_trigger_eligible(self) -> bool {
        !matches!(self, Self::Archived)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Onboarding => "ONBOARDING",
            Self::Active => "ACTIVE",
            Self::Completed => "COMPLETED",
            Self::Paused => "PAUSED",
            Self::Archived => "ARCHIVED",
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = UnknownProjectStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ONBOARDING" => Ok(Self::Onboarding),
            "ACTIVE" => Ok(Self::Active),
            "COMPLETED" => Ok(Self::Completed),
            "PAUSED" => Ok(Self::Paused),
            "ARCHIVED" => Ok(Self::Archived),
            other => Err(UnknownProjectStatus(other.to_string())),
        }
    }
}

/// Returned when parsing a string that is not a known [`ProjectStatus`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown project status: {0}")]
pub struct UnknownProjectStatus(pub String);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub client_id: Option<ClientId>,
    pub name: String,
    pub industry: Option<String>,
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub created_at: Timestamp,
}

impl Project {
    /// Create a builder for constructing a [`Project`].
    #[must_use]
    pub fn builder() -> ProjectBuilder {
        ProjectBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`OpsDashError::Validation`] when `name` is blank.
    pub fn validate(&self) -> Result<(), OpsDashError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }

    #[must_use]
    pub fn is_archived(&self) -> bool {
        self.status == ProjectStatus::Archived
    }
}

impl FieldLookup for Project {
    fn field(&self, name: &str) -> Option<String> {
        match name {
            "name" => Some(self.name.clone()),
            "industry" => self.industry.clone(),
            "description" => self.description.clone(),
            "status" => Some(self.status.to_string()),
            "client_id" => self.client_id.map(|id| id.to_string()),
            _ => None,
        }
    }
}

/// Step-by-step builder for [`Project`].
#[derive(Debug, Default)]
pub struct ProjectBuilder {
    id: Option<ProjectId>,
    client_id: Option<ClientId>,
    name: Option<String>,
    industry: Option<String>,
    description: Option<String>,
    status: Option<ProjectStatus>,
    created_at: Option<Timestamp>,
}

impl ProjectBuilder {
    #[must_use]
    pub fn id(mut self, id: ProjectId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn client_id(mut self, client_id: ClientId) -> Self {
        self.client_id = Some(client_id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = Some(industry.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn status(mut self, status: ProjectStatus) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn created_at(mut self, ts: Timestamp) -> Self {
        self.created_at = Some(ts);
        self
    }

    /// Consume the builder, validate, and return a [`Project`].
    ///
    /// # Errors
    ///
    /// Returns [`OpsDashError::Validation`] if `name` is missing or blank.
    pub fn build(self) -> Result<Project, OpsDashError> {
        let project = Project {
            id: self.id.unwrap_or_default(),
            client_id: self.client_id,
            name: self.name.unwrap_or_default(),
            industry: self.industry,
            description: self.description,
            status: self.status.unwrap_or_default(),
            created_at: self.created_at.unwrap_or_else(now),
        };
        project.validate()?;
        Ok(project)
    }
}
