//! Condition: a guard over the triggering record.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Read access to named fields of a record, e.g. a project's `industry`.
///
/// Conditions address fields by name, so anything that can answer "what is
/// the value of field X" can be evaluated against.
pub trait FieldLookup {
    /// Return the string form of `name`, or `None` when absent.
    fn field(&self, name: &str) -> Option<String>;
}

impl FieldLookup for HashMap<String, String> {
    fn field(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl FieldLookup for serde_json::Value {
    fn field(&self, name: &str) -> Option<String> {
        match self.get(name)? {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// Comparison applied between a field value and a condition value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionOperator {
    /// Field value includes the condition value as a substring.
    Contains,
    NotContains,
    Equals,
    /// Both sides parse as numbers and the field value is larger.
    GreaterThan,
    /// An operator this build does not recognise. Never holds.
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for ConditionOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Contains => "contains",
            Self::NotContains => "not_contains",
            Self::Equals => "equals",
            Self::GreaterThan => "greater_than",
            Self::Unknown => "unknown",
        })
    }
}

/// How string comparisons are performed.
///
/// Authored values are stored as typed by the user, so matching ignores case
/// unless explicitly configured otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchOptions {
    pub case_sensitive: bool,
}

impl MatchOptions {
    #[must_use]
    pub fn case_sensitive() -> Self {
        Self {
            case_sensitive: true,
        }
    }
}

/// A `{field, operator, value}` predicate that must hold for a recipe's
/// actions to execute.
///
/// Conditions are evaluated *after* the trigger fires. All conditions of a
/// recipe must be satisfied (logical AND).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub field: String,
    pub operator: ConditionOperator,
    pub value: String,
}

impl Condition {
    #[must_use]
    pub fn new(field: impl Into<String>, operator: ConditionOperator, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            operator,
            value: value.into(),
        }
    }

    #[must_use]
    pub fn contains(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, ConditionOperator::Contains, value)
    }

    /// Evaluate against `record`. A missing field reads as the empty string.
    #[must_use]
    pub fn evaluate<R: FieldLookup + ?Sized>(&self, record: &R, options: MatchOptions) -> bool {
        let actual = record.field(&self.field).unwrap_or_default();
        let (actual, expected) = if options.case_sensitive {
            (actual, self.value.clone())
        } else {
            (actual.to_lowercase(), self.value.to_lowercase())
        };

        match self.operator {
            ConditionOperator::Contains => actual.contains(&expected),
            ConditionOperator::NotContains => !actual.contains(&expected),
            ConditionOperator::Equals => actual == expected,
            ConditionOperator::GreaterThan => {
                match (actual.trim().parse::<f64>(), expected.trim().parse::<f64>()) {
                    (Ok(a), Ok(b)) => a > b,
                    _ => false,
                }
            }
            ConditionOperator::Unknown => false,
        }
    }
}

/// Evaluate every condition (logical AND). Returns `true` if empty.
#[must_use]
pub fn evaluate_all<R: FieldLookup + ?Sized>(
    conditions: &[Condition],
    record: &R,
    options: MatchOptions,
) -> bool {
    conditions.iter().all(|c| c.evaluate(record, options))
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {:?}", self.field, self.operator, self.value)
    }
}
