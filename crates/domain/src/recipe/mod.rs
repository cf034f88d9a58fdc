//! Recipe: trigger → condition → action automation rules.
//!
//! A recipe listens for one kind of project event ([`Trigger`]), checks an
//! ordered list of [`Condition`]s against the project, and when all of them
//! hold runs its [`Action`]s in order.

mod action;
mod condition;
mod trigger;

pub use action::Action;
pub use condition::{Condition, ConditionOperator, FieldLookup, MatchOptions, evaluate_all};
pub use trigger::Trigger;

use serde::{Deserialize, Serialize};

use crate::error::{OpsDashError, ValidationError};
use crate::event::DomainEvent;
use crate::id::RecipeId;

/// A persisted automation rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    pub is_active: bool,
    pub trigger: Trigger,
    pub conditions: Vec<Condition>,
    pub actions: Vec<Action>,
}

impl Recipe {
    /// Create a builder for constructing a [`Recipe`].
    #[must_use]
    pub fn builder() -> RecipeBuilder {
        RecipeBuilder::default()
    }

    /// Whether this recipe listens for `event`. Inactive recipes never do.
    #[must_use]
    pub fn matches(&self, event: &DomainEvent) -> bool {
        self.is_active && self.trigger.matches(event)
    }

    /// Whether every condition holds for the event's subject.
    #[must_use]
    pub fn conditions_hold(&self, event: &DomainEvent, options: MatchOptions) -> bool {
        evaluate_all(&self.conditions, event.subject(), options)
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`OpsDashError::Validation`] when:
    /// - `name` is blank ([`ValidationError::EmptyName`])
    /// - the trigger is incomplete or targets an ineligible status
    /// - a condition has no field ([`ValidationError::EmptyConditionField`])
    ///   or an unknown operator ([`ValidationError::UnsupportedOperator`])
    /// - `actions` is empty ([`ValidationError::NoActions`])
    /// - a task action has a blank title ([`ValidationError::EmptyTitle`])
    /// - an action type is unknown ([`ValidationError::UnsupportedAction`])
    pub fn validate(&self) -> Result<(), OpsDashError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        self.trigger.validate()?;
        for (index, condition) in self.conditions.iter().enumerate() {
            if condition.field.trim().is_empty() {
                return Err(ValidationError::EmptyConditionField(index).into());
            }
            if condition.operator == ConditionOperator::Unknown {
                return Err(ValidationError::UnsupportedOperator(index).into());
            }
        }
        if self.actions.is_empty() {
            return Err(ValidationError::NoActions.into());
        }
        for (index, action) in self.actions.iter().enumerate() {
            match action {
                Action::CreateTask { title, .. } if title.trim().is_empty() => {
                    return Err(ValidationError::EmptyTitle.into());
                }
                Action::CreateTask { .. } => {}
                Action::Unsupported => return Err(ValidationError::UnsupportedAction(index).into()),
            }
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Recipe`].
#[derive(Debug, Default)]
pub struct RecipeBuilder {
    id: Option<RecipeId>,
    name: Option<String>,
    is_active: Option<bool>,
    trigger: Option<Trigger>,
    conditions: Vec<Condition>,
    actions: Vec<Action>,
}

impl RecipeBuilder {
    #[must_use]
    pub fn id(mut self, id: RecipeId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    #[must_use]
    pub fn trigger(mut self, trigger: Trigger) -> Self {
        self.trigger = Some(trigger);
        self
    }

    #[must_use]
    pub fn condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    #[must_use]
    pub fn action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    /// Consume the builder, validate, and return a [`Recipe`].
    ///
    /// Defaults to an active recipe on [`Trigger::NewProject`].
    ///
    /// # Errors
    ///
    /// Returns [`OpsDashError::Validation`] if any invariant of
    /// [`Recipe::validate`] fails.
    pub fn build(self) -> Result<Recipe, OpsDashError> {
        let recipe = Recipe {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            is_active: self.is_active.unwrap_or(true),
            trigger: self.trigger.unwrap_or(Trigger::NewProject),
            conditions: self.conditions,
            actions: self.actions,
        };
        recipe.validate()?;
        Ok(recipe)
    }
}
