//! Action dispatcher: turns a fired recipe's actions into store writes.

use chrono::NaiveDate;

use opsdash_domain::error::OpsDashError;
use opsdash_domain::project::Project;
use opsdash_domain::recipe::Action;
use opsdash_domain::task::{Task, TaskPriority, TaskStatus};
use opsdash_domain::time;

use super::summary::{ActionOutcome, FailureReason};
use crate::ports::{ProjectRepository, TaskRepository};

/// Executes actions in order against the entity store.
///
/// Actions are independent: a failed write is recorded for that action and
/// the next one is still attempted. Nothing is rolled back.
pub struct ActionDispatcher<PR, TR> {
    project_repo: PR,
    task_repo: TR,
    today: fn() -> NaiveDate,
}

impl<PR, TR> ActionDispatcher<PR, TR>
where
    PR: ProjectRepository,
    TR: TaskRepository,
{
    pub fn new(project_repo: PR, task_repo: TR) -> Self {
        Self {
            project_repo,
            task_repo,
            today: time::today,
        }
    }

    /// Replace the source of "today" used for due dates.
    #[must_use]
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Run `actions` for `project`, returning one outcome per action.
    ///
    /// The project is re-read first; if it no longer exists, every action
    /// that would write is reported as [`FailureReason::NotFound`].
    pub async fn execute(&self, actions: &[Action], project: &Project) -> Vec<ActionOutcome> {
        let missing = match self.project_repo.get_by_id(project.id).await {
            Ok(Some(_)) => None,
            Ok(None) => Some((
                FailureReason::NotFound,
                format!("Project {} not found", project.id),
            )),
            Err(err) => Some((FailureReason::Downstream, err.to_string())),
        };

        let mut outcomes = Vec::with_capacity(actions.len());
        for action in actions {
            let outcome = match (&missing, action) {
                (_, Action::Unsupported) => {
                    tracing::warn!(project_id = %project.id, "unhandled action type, skipping");
                    ActionOutcome::Skipped {
                        action: action.to_string(),
                    }
                }
                (Some((reason, message)), _) => {
                    tracing::warn!(project_id = %project.id, %action, %message, "cannot run action");
                    ActionOutcome::Failed {
                        action: action.to_string(),
                        reason: *reason,
                        message: message.clone(),
                    }
                }
                (
                    None,
                    Action::CreateTask {
                        title,
                        priority,
                        delay_days,
                    },
                ) => match self.create_task(title, *priority, *delay_days, project).await {
                    Ok(task) => ActionOutcome::TaskCreated { task },
                    Err(err) => {
                        tracing::warn!(project_id = %project.id, %action, error = %err, "task creation failed");
                        ActionOutcome::Failed {
                            action: action.to_string(),
                            reason: FailureReason::Downstream,
                            message: err.to_string(),
                        }
                    }
                },
            };
            outcomes.push(outcome);
        }
        outcomes
    }

    async fn create_task(
        &self,
        title: &str,
        priority: TaskPriority,
        delay_days: Option<u32>,
        project: &Project,
    ) -> Result<Task, OpsDashError> {
        let due_date = time::add_days((self.today)(), delay_days.unwrap_or(0));
        let task = Task::builder()
            .title(title)
            .priority(priority)
            .status(TaskStatus::Todo)
            .project_id(project.id)
            .due_date(due_date)
            .build()?;
        let task = self.task_repo.create(task).await?;
        tracing::debug!(task_id = %task.id, %due_date, "task created");
        Ok(task)
    }
}
