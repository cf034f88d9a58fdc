//! Action: the effect performed when a recipe fires.

use serde::{Deserialize, Serialize};

use crate::task::TaskPriority;

/// An operation to execute when the recipe's trigger fires and all
/// conditions are satisfied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Create a task on the triggering project.
    CreateTask {
        title: String,
        #[serde(default)]
        priority: TaskPriority,
        /// Calendar days between today and the task's due date.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        delay_days: Option<u32>,
    },
    /// Any action type this build does not know how to run.
    #[serde(other)]
    Unsupported,
}

impl Action {
    #[must_use]
    pub fn create_task(title: impl Into<String>, priority: TaskPriority) -> Self {
        Self::CreateTask {
            title: title.into(),
            priority,
            delay_days: None,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CreateTask {
                title, delay_days, ..
            } => write!(f, "create_task({title:?}, +{}d)", delay_days.unwrap_or(0)),
            Self::Unsupported => f.write_str("unsupported"),
        }
    }
}
