//! Trigger: the domain event a recipe listens for.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::event::DomainEvent;
use crate::project::ProjectStatus;

/// Describes which project event activates a recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Trigger {
    /// Fires when a project moves to `status`.
    ///
    /// `status` is required; a recipe stored without one never fires.
    ProjectStatusChange {
        #[serde(default)]
        status: Option<ProjectStatus>,
    },
    /// Fires when a project is created.
    NewProject,
    /// Any trigger type this build does not recognise. Never matches.
    #[serde(other)]
    Unsupported,
}

impl Trigger {
    #[must_use]
    pub fn on_status(status: ProjectStatus) -> Self {
        Self::ProjectStatusChange {
            status: Some(status),
        }
    }

    /// Check whether this trigger matches a given event.
    ///
    /// A status trigger matches one exact, trigger-eligible status. It has
    /// no wildcard form.
    #[must_use]
    pub fn matches(&self, event: &DomainEvent) -> bool {
        match (self, event) {
            (Self::NewProject, DomainEvent::NewProject { .. }) => true,
            (
                Self::ProjectStatusChange {
                    status: Some(expected),
                },
                DomainEvent::ProjectStatusChange { new_status, .. },
            ) => new_status.is_trigger_eligible() && expected == new_status,
            _ => false,
        }
    }

    /// Check authoring-time invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingTriggerValue`] for a status trigger
    /// without a status, [`ValidationError::IneligibleTriggerStatus`]
    /// when that status can never be observed by the engine, and
    /// [`ValidationError::UnsupportedTrigger`] for an unknown trigger type.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::ProjectStatusChange { status: None } => Err(ValidationError::MissingTriggerValue),
            Self::ProjectStatusChange {
                status: Some(status),
            } if !status.is_trigger_eligible() => {
                Err(ValidationError::IneligibleTriggerStatus(status.to_string()))
            }
            Self::Unsupported => Err(ValidationError::UnsupportedTrigger),
            _ => Ok(()),
        }
    }
}

impl std::fmt::Display for Trigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProjectStatusChange { status: Some(s) } => write!(f, "project_status_change({s})"),
            Self::ProjectStatusChange { status: None } => f.write_str("project_status_change(?)"),
            Self::NewProject => f.write_str("new_project"),
            Self::Unsupported => f.write_str("unsupported"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::Project;

    const ALL_STATUSES: [ProjectStatus; 5] = [
        ProjectStatus::Onboarding,
        ProjectStatus::Active,
        ProjectStatus::Completed,
        ProjectStatus::Paused,
        ProjectStatus::Archived,
    ];

    fn project() -> Project {
        Project::builder().name("Site").build().unwrap()
    }

    #[test]
    fn should_match_new_project_event_only_for_new_project_trigger() {
        let event = DomainEvent::new_project(project());
        assert!(Trigger::NewProject.matches(&event));
        assert!(!Trigger::on_status(ProjectStatus::Onboarding).matches(&event));
    }

    #[test]
    fn should_match_status_change_only_for_the_exact_status() {
        let trigger = Trigger::on_status(ProjectStatus::Active);
        for status in ALL_STATUSES {
            let event = DomainEvent::status_change(project(), status);
            assert_eq!(
                trigger.matches(&event),
                status == ProjectStatus::Active,
                "status {status}"
            );
        }
    }

    #[test]
    fn should_not_match_status_change_for_new_project_trigger() {
        let event = DomainEvent::status_change(project(), ProjectStatus::Active);
        assert!(!Trigger::NewProject.matches(&event));
    }

    #[test]
    fn should_never_match_when_status_value_is_missing() {
        let trigger = Trigger::ProjectStatusChange { status: None };
        for status in ALL_STATUSES {
            let event = DomainEvent::status_change(project(), status);
            assert!(!trigger.matches(&event));
        }
    }

    #[test]
    fn should_never_match_archived_transition() {
        let trigger = Trigger::on_status(ProjectStatus::Archived);
        let event = DomainEvent::status_change(project(), ProjectStatus::Archived);
        assert!(!trigger.matches(&event));
    }

    #[test]
    fn should_reject_missing_status_at_validation() {
        let trigger = Trigger::ProjectStatusChange { status: None };
        assert_eq!(trigger.validate(), Err(ValidationError::MissingTriggerValue));
    }

    #[test]
    fn should_reject_archived_status_at_validation() {
        let trigger = Trigger::on_status(ProjectStatus::Archived);
        assert_eq!(
            trigger.validate(),
            Err(ValidationError::IneligibleTriggerStatus(
                "ARCHIVED".to_string()
            ))
        );
    }

    #[test]
    fn should_deserialize_status_trigger_without_value() {
        let json = serde_json::json!({ "type": "PROJECT_STATUS_CHANGE" });
        let trigger: Trigger = serde_json::from_value(json).unwrap();
        assert_eq!(trigger, Trigger::ProjectStatusChange { status: None });
    }

    #[test]
    fn should_deserialize_tagged_status_trigger() {
        let json = serde_json::json!({ "type": "PROJECT_STATUS_CHANGE", "status": "COMPLETED" });
        let trigger: Trigger = serde_json::from_value(json).unwrap();
        assert_eq!(trigger, Trigger::on_status(ProjectStatus::Completed));
    }

    #[test]
    fn should_display_trigger_variants() {
        assert_eq!(Trigger::NewProject.to_string(), "new_project");
        assert_eq!(
            Trigger::on_status(ProjectStatus::Paused).to_string(),
            "project_status_change(PAUSED)"
        );
    }

    #[test]
    fn should_never_match_when_trigger_type_is_unknown() {
        let json = serde_json::json!({ "type": "INVOICE_PAID" });
        let trigger: Trigger = serde_json::from_value(json).unwrap();
        assert_eq!(trigger, Trigger::Unsupported);
        assert!(!trigger.matches(&DomainEvent::new_project(project())));
        for status in ALL_STATUSES {
            assert!(!trigger.matches(&DomainEvent::status_change(project(), status)));
        }
        assert_eq!(trigger.validate(), Err(ValidationError::UnsupportedTrigger));
    }
}
