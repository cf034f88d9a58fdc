//! What the engine did for one domain event.

use serde::Serialize;

use opsdash_domain::id::RecipeId;
use opsdash_domain::task::Task;

/// Result of running a single action.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ActionOutcome {
    TaskCreated { task: Task },
    /// The action type is not handled by this build.
    Skipped { action: String },
    Failed {
        action: String,
        reason: FailureReason,
        message: String,
    },
}

impl ActionOutcome {
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Why an action could not be carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    /// The triggering project vanished before the action ran.
    NotFound,
    /// The entity store rejected or failed the write.
    Downstream,
}

/// A recipe that matched the event and whose conditions held.
#[derive(Debug, Clone, Serialize)]
pub struct RecipeRun {
    pub recipe_id: RecipeId,
    pub recipe_name: String,
    pub outcomes: Vec<ActionOutcome>,
}

/// Report returned to the caller after an event has been processed.
///
/// Partial success is normal: a recipe counts as fired even when some of its
/// actions failed, and the failures are listed in its outcomes.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AutomationSummary {
    pub fired: Vec<RecipeRun>,
}

impl AutomationSummary {
    /// Ids of the recipes that fired, in evaluation order.
    #[must_use]
    pub fn fired_recipe_ids(&self) -> Vec<RecipeId> {
        self.fired.iter().map(|run| run.recipe_id).collect()
    }

    #[must_use]
    pub fn fired_count(&self) -> usize {
        self.fired.len()
    }

    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.fired
            .iter()
            .flat_map(|run| &run.outcomes)
            .any(ActionOutcome::is_failure)
    }

    /// Every task created while processing the event.
    pub fn created_tasks(&self) -> impl Iterator<Item = &Task> {
        self.fired
            .iter()
            .flat_map(|run| &run.outcomes)
            .filter_map(|outcome| match outcome {
                ActionOutcome::TaskCreated { task } => Some(task),
                _ => None,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(outcomes: Vec<ActionOutcome>) -> RecipeRun {
        RecipeRun {
            recipe_id: RecipeId::new(),
            recipe_name: "test".to_string(),
            outcomes,
        }
    }

    #[test]
    fn should_report_nothing_for_empty_summary() {
        let summary = AutomationSummary::default();
        assert_eq!(summary.fired_count(), 0);
        assert!(!summary.has_failures());
        assert_eq!(summary.created_tasks().count(), 0);
    }

    #[test]
    fn should_detect_failure_in_any_run() {
        let task = Task::builder().title("ok").build().unwrap();
        let summary = AutomationSummary {
            fired: vec![
                run(vec![ActionOutcome::TaskCreated { task }]),
                run(vec![ActionOutcome::Failed {
                    action: "create_task".to_string(),
                    reason: FailureReason::Downstream,
                    message: "boom".to_string(),
                }]),
            ],
        };
        assert!(summary.has_failures());
        assert_eq!(summary.created_tasks().count(), 1);
        assert_eq!(summary.fired_recipe_ids().len(), 2);
    }

    #[test]
    fn should_tag_outcomes_in_json() {
        let outcome = ActionOutcome::Skipped {
            action: "unsupported".to_string(),
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["outcome"], "skipped");
    }
}
