//! Automation engine: reacts to project events by running matching recipes.
//!
//! For each incoming event the engine checks every active recipe. When a
//! trigger matches, it evaluates conditions against the project and, if all
//! pass, hands the recipe's actions to the [`ActionDispatcher`].
//!
//! The engine runs inline with the caller: no queue, no retry, no
//! deduplication. Delivering the same event twice creates the tasks twice.

mod dispatcher;
mod summary;

pub use dispatcher::ActionDispatcher;
pub use summary::{ActionOutcome, AutomationSummary, FailureReason, RecipeRun};

use opsdash_domain::error::OpsDashError;
use opsdash_domain::event::DomainEvent;
use opsdash_domain::project::{Project, ProjectStatus};
use opsdash_domain::recipe::{MatchOptions, Recipe};

use crate::ports::{ProjectRepository, RecipeRepository, TaskRepository};

/// Trigger → condition → action evaluator for project events.
pub struct AutomationEngine<RR, PR, TR> {
    recipe_repo: RR,
    dispatcher: ActionDispatcher<PR, TR>,
    options: MatchOptions,
}

impl<RR, PR, TR> AutomationEngine<RR, PR, TR>
where
    RR: RecipeRepository,
    PR: ProjectRepository,
    TR: TaskRepository,
{
    /// Create a new engine with case-insensitive condition matching.
    pub fn new(recipe_repo: RR, project_repo: PR, task_repo: TR) -> Self {
        Self::with_dispatcher(recipe_repo, ActionDispatcher::new(project_repo, task_repo))
    }

    pub fn with_dispatcher(recipe_repo: RR, dispatcher: ActionDispatcher<PR, TR>) -> Self {
        Self {
            recipe_repo,
            dispatcher,
            options: MatchOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: MatchOptions) -> Self {
        self.options = options;
        self
    }

    /// Run automations for a freshly created project.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the active recipes cannot be loaded.
    pub async fn on_project_created(
        &self,
        project: &Project,
    ) -> Result<AutomationSummary, OpsDashError> {
        self.on_event(&DomainEvent::new_project(project.clone()))
            .await
    }

    /// Run automations for a project that just moved to `new_status`.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the active recipes cannot be loaded.
    pub async fn on_project_status_changed(
        &self,
        project: &Project,
        new_status: ProjectStatus,
    ) -> Result<AutomationSummary, OpsDashError> {
        self.on_event(&DomainEvent::status_change(project.clone(), new_status))
            .await
    }

    /// Process a single event against all active recipes.
    ///
    /// # Errors
    ///
    /// Returns a storage error if loading recipes fails. Failures while
    /// running actions are reported inside the summary instead.
    #[tracing::instrument(skip_all, fields(event = %event))]
    pub async fn on_event(&self, event: &DomainEvent) -> Result<AutomationSummary, OpsDashError> {
        let recipes = self.recipe_repo.list_active().await?;
        Ok(self.evaluate(&recipes, event).await)
    }

    /// Evaluate `event` against an explicit recipe list, in list order.
    pub async fn evaluate(&self, recipes: &[Recipe], event: &DomainEvent) -> AutomationSummary {
        let mut summary = AutomationSummary::default();

        for recipe in recipes {
            if !recipe.matches(event) {
                continue;
            }
            if !recipe.conditions_hold(event, self.options) {
                tracing::debug!(recipe_id = %recipe.id, "conditions not met");
                continue;
            }

            tracing::info!(recipe_id = %recipe.id, recipe = %recipe.name, "recipe fired");
            let outcomes = self
                .dispatcher
                .execute(&recipe.actions, event.subject())
                .await;

            summary.fired.push(RecipeRun {
                recipe_id: recipe.id,
                recipe_name: recipe.name.clone(),
                outcomes,
            });
        }

        if summary.has_failures() {
            tracing::warn!(fired = summary.fired_count(), "automations finished with failures");
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{InMemoryProjectRepo, InMemoryRecipeRepo, InMemoryTaskRepo};
    use opsdash_domain::recipe::{Action, Condition, ConditionOperator, Trigger};
    use opsdash_domain::task::TaskPriority;
    use opsdash_domain::time;
    use std::sync::Arc;

    // ── Helpers ────────────────────────────────────────────────────

    fn project(industry: &str) -> Project {
        Project::builder()
            .name("Client portal")
            .industry(industry)
            .build()
            .unwrap()
    }

    fn send_contract_recipe() -> Recipe {
        Recipe::builder()
            .name("Contract on new project")
            .trigger(Trigger::NewProject)
            .action(Action::CreateTask {
                title: "Send contract".to_string(),
                priority: TaskPriority::High,
                delay_days: Some(0),
            })
            .build()
            .unwrap()
    }

    fn saas_kickoff_recipe() -> Recipe {
        Recipe::builder()
            .name("SaaS kickoff")
            .trigger(Trigger::on_status(ProjectStatus::Active))
            .condition(Condition::contains("industry", "SaaS"))
            .action(Action::create_task("Schedule kickoff", TaskPriority::Medium))
            .build()
            .unwrap()
    }

    fn make_engine(
        recipes: Vec<Recipe>,
        projects: Vec<Project>,
        tasks: Arc<InMemoryTaskRepo>,
    ) -> AutomationEngine<InMemoryRecipeRepo, InMemoryProjectRepo, Arc<InMemoryTaskRepo>> {
        AutomationEngine::new(
            InMemoryRecipeRepo::with(recipes),
            InMemoryProjectRepo::with(projects),
            tasks,
        )
    }

    // ── Tests ──────────────────────────────────────────────────────

    #[tokio::test]
    async fn should_create_one_task_when_new_project_recipe_fires() {
        let recipe = send_contract_recipe();
        let p = project("Consulting");
        let tasks = Arc::new(InMemoryTaskRepo::default());
        let engine = make_engine(vec![recipe.clone()], vec![p.clone()], Arc::clone(&tasks));

        let summary = engine.on_project_created(&p).await.unwrap();

        assert_eq!(summary.fired_recipe_ids(), vec![recipe.id]);
        let created = tasks.tasks();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].title, "Send contract");
        assert_eq!(created[0].priority, TaskPriority::High);
        assert_eq!(created[0].project_id, Some(p.id));
        assert_eq!(created[0].due_date, Some(time::today()));
    }

    #[tokio::test]
    async fn should_not_fire_when_condition_fails() {
        let p = project("Consulting");
        let tasks = Arc::new(InMemoryTaskRepo::default());
        let engine = make_engine(vec![saas_kickoff_recipe()], vec![p.clone()], Arc::clone(&tasks));

        let summary = engine
            .on_project_status_changed(&p, ProjectStatus::Active)
            .await
            .unwrap();

        assert!(summary.fired_recipe_ids().is_empty());
        assert!(tasks.tasks().is_empty());
    }

    #[tokio::test]
    async fn should_fire_status_recipe_when_condition_holds() {
        let p = project("B2B SaaS Tools");
        let recipe = saas_kickoff_recipe();
        let tasks = Arc::new(InMemoryTaskRepo::default());
        let engine = make_engine(vec![recipe.clone()], vec![p.clone()], Arc::clone(&tasks));

        let summary = engine
            .on_project_status_changed(&p, ProjectStatus::Active)
            .await
            .unwrap();

        assert_eq!(summary.fired_recipe_ids(), vec![recipe.id]);
        assert_eq!(tasks.tasks()[0].title, "Schedule kickoff");
    }

    #[tokio::test]
    async fn should_ignore_status_recipe_for_other_status() {
        let p = project("B2B SaaS Tools");
        let tasks = Arc::new(InMemoryTaskRepo::default());
        let engine = make_engine(vec![saas_kickoff_recipe()], vec![p.clone()], Arc::clone(&tasks));

        let summary = engine
            .on_project_status_changed(&p, ProjectStatus::Paused)
            .await
            .unwrap();

        assert_eq!(summary.fired_count(), 0);
    }

    #[tokio::test]
    async fn should_fire_both_recipes_even_when_first_action_fails() {
        let p = project("SaaS");
        let first = Recipe::builder()
            .name("First")
            .action(Action::create_task("will fail", TaskPriority::High))
            .build()
            .unwrap();
        let second = Recipe::builder()
            .name("Second")
            .action(Action::create_task("will succeed", TaskPriority::Low))
            .build()
            .unwrap();
        let tasks = Arc::new(InMemoryTaskRepo::rejecting(&["will fail"]));
        let engine = make_engine(
            vec![first.clone(), second.clone()],
            vec![p.clone()],
            Arc::clone(&tasks),
        );

        let summary = engine.on_project_created(&p).await.unwrap();

        assert_eq!(summary.fired_recipe_ids(), vec![first.id, second.id]);
        assert!(summary.has_failures());
        assert!(summary.fired[0].outcomes[0].is_failure());
        let created = tasks.tasks();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].title, "will succeed");
    }

    #[tokio::test]
    async fn should_fire_valid_recipe_next_to_recipes_with_unknown_rules() {
        let p = project("SaaS");
        let mut unknown_trigger = send_contract_recipe();
        unknown_trigger.name = "Invoice paid".to_string();
        unknown_trigger.trigger = Trigger::Unsupported;
        let mut unknown_operator = send_contract_recipe();
        unknown_operator.name = "Starts with".to_string();
        unknown_operator.conditions = vec![Condition::new("name", ConditionOperator::Unknown, "C")];
        let valid = send_contract_recipe();
        let tasks = Arc::new(InMemoryTaskRepo::default());
        let engine = make_engine(
            vec![unknown_trigger, unknown_operator, valid.clone()],
            vec![p.clone()],
            Arc::clone(&tasks),
        );

        let summary = engine.on_project_created(&p).await.unwrap();

        assert_eq!(summary.fired_recipe_ids(), vec![valid.id]);
        assert_eq!(tasks.tasks().len(), 1);
    }

    #[tokio::test]
    async fn should_duplicate_tasks_when_same_event_is_processed_twice() {
        // No deduplication: each delivery of an event runs the recipes again.
        let p = project("Consulting");
        let tasks = Arc::new(InMemoryTaskRepo::default());
        let engine = make_engine(vec![send_contract_recipe()], vec![p.clone()], Arc::clone(&tasks));
        let event = DomainEvent::new_project(p);

        engine.on_event(&event).await.unwrap();
        engine.on_event(&event).await.unwrap();

        let created = tasks.tasks();
        assert_eq!(created.len(), 2);
        assert_ne!(created[0].id, created[1].id);
    }

    #[tokio::test]
    async fn should_skip_inactive_recipes() {
        let p = project("SaaS");
        let mut recipe = send_contract_recipe();
        recipe.is_active = false;
        let tasks = Arc::new(InMemoryTaskRepo::default());
        let engine = make_engine(vec![], vec![p.clone()], Arc::clone(&tasks));

        // Injected list bypasses the store's active filter.
        let summary = engine
            .evaluate(&[recipe], &DomainEvent::new_project(p))
            .await;

        assert_eq!(summary.fired_count(), 0);
        assert!(tasks.tasks().is_empty());
    }

    #[tokio::test]
    async fn should_never_fire_recipe_without_trigger_value() {
        let p = project("SaaS");
        let mut recipe = saas_kickoff_recipe();
        recipe.trigger = Trigger::ProjectStatusChange { status: None };
        let tasks = Arc::new(InMemoryTaskRepo::default());
        let engine = make_engine(vec![recipe], vec![p.clone()], Arc::clone(&tasks));

        let summary = engine
            .on_project_status_changed(&p, ProjectStatus::Active)
            .await
            .unwrap();

        assert_eq!(summary.fired_count(), 0);
    }

    #[tokio::test]
    async fn should_honor_case_sensitive_option() {
        let p = project("b2b saas");
        let tasks = Arc::new(InMemoryTaskRepo::default());
        let recipes = vec![saas_kickoff_recipe()];

        let lenient = make_engine(recipes.clone(), vec![p.clone()], Arc::clone(&tasks));
        let summary = lenient
            .on_project_status_changed(&p, ProjectStatus::Active)
            .await
            .unwrap();
        assert_eq!(summary.fired_count(), 1);

        let strict = make_engine(recipes, vec![p.clone()], Arc::clone(&tasks))
            .with_options(MatchOptions::case_sensitive());
        let summary = strict
            .on_project_status_changed(&p, ProjectStatus::Active)
            .await
            .unwrap();
        assert_eq!(summary.fired_count(), 0);
    }

    #[tokio::test]
    async fn should_propagate_error_when_recipes_cannot_be_loaded() {
        let p = project("SaaS");
        let engine = AutomationEngine::new(
            InMemoryRecipeRepo::failing(),
            InMemoryProjectRepo::with(vec![p.clone()]),
            InMemoryTaskRepo::default(),
        );

        let result = engine.on_project_created(&p).await;
        assert!(matches!(result, Err(OpsDashError::Storage(_))));
    }

    #[tokio::test]
    async fn should_report_not_found_when_project_deleted_before_dispatch() {
        let p = project("SaaS");
        let tasks = Arc::new(InMemoryTaskRepo::default());
        let engine = make_engine(vec![send_contract_recipe()], vec![], Arc::clone(&tasks));

        let summary = engine.on_project_created(&p).await.unwrap();

        assert_eq!(summary.fired_count(), 1);
        assert!(matches!(
            summary.fired[0].outcomes[0],
            ActionOutcome::Failed {
                reason: FailureReason::NotFound,
                ..
            }
        ));
        assert!(tasks.tasks().is_empty());
    }
}
