//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`OpsDashError`] via `From`.

/// Top-level error returned by domain validation, services and ports.
#[derive(Debug, thiserror::Error)]
pub enum OpsDashError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// Failure reported by a persistence adapter.
    #[error("storage error: {0}")]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

/// A domain invariant was violated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("title must not be empty")]
    EmptyTitle,

    #[error("recipe must define at least one action")]
    NoActions,

    #[error("status change trigger requires a target status")]
    MissingTriggerValue,

    #[error("status {0} cannot be used as a trigger")]
    IneligibleTriggerStatus(String),

    #[error("trigger type is not supported")]
    UnsupportedTrigger,

    #[error("action #{0} has an unsupported type")]
    UnsupportedAction(usize),

    #[error("condition #{0} has an unsupported operator")]
    UnsupportedOperator(usize),

    #[error("condition #{0} must name a field")]
    EmptyConditionField(usize),

    #[error("{field} must be {expected}")]
    OutOfRange {
        field: &'static str,
        expected: &'static str,
    },

    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

/// A referenced record does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_wrap_validation_error_via_from() {
        let err: OpsDashError = ValidationError::EmptyName.into();
        assert!(matches!(
            err,
            OpsDashError::Validation(ValidationError::EmptyName)
        ));
    }

    #[test]
    fn should_display_not_found_with_entity_and_id() {
        let err = NotFoundError {
            entity: "Project",
            id: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Project abc not found");
    }

    #[test]
    fn should_display_out_of_range_details() {
        let err = ValidationError::OutOfRange {
            field: "close_rate",
            expected: "within (0, 1]",
        };
        assert_eq!(err.to_string(), "close_rate must be within (0, 1]");
    }
}
