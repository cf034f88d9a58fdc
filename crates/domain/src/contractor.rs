//! Contractor: an external person staffed on projects.

use serde::{Deserialize, Serialize};

use crate::error::{OpsDashError, ValidationError};
use crate::id::ContractorId;
use crate::time::{Timestamp, now};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contractor {
    pub id: ContractorId,
    pub name: String,
    /// Free-form specialty, e.g. `"Designer"`.
    pub role: Option<String>,
    pub hourly_rate: Option<f64>,
    pub created_at: Timestamp,
}

impl Contractor {
    #[must_use]
    pub fn builder() -> ContractorBuilder {
        ContractorBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`OpsDashError::Validation`] when `name` is blank or
    /// `hourly_rate` is negative or not finite.
    pub fn validate(&self) -> Result<(), OpsDashError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if let Some(rate) = self.hourly_rate
            && (!rate.is_finite() || rate < 0.0)
        {
            return Err(ValidationError::OutOfRange {
                field: "hourly_rate",
                expected: "a non-negative number",
            }
            .into());
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct ContractorBuilder {
    id: Option<ContractorId>,
    name: Option<String>,
    role: Option<String>,
    hourly_rate: Option<f64>,
    created_at: Option<Timestamp>,
}

impl ContractorBuilder {
    #[must_use]
    pub fn id(mut self, id: ContractorId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    #[must_use]
    pub fn hourly_rate(mut self, rate: f64) -> Self {
        self.hourly_rate = Some(rate);
        self
    }

    #[must_use]
    pub fn created_at(mut self, ts: Timestamp) -> Self {
        self.created_at = Some(ts);
        self
    }

    /// Consume the builder, validate, and return a [`Contractor`].
    ///
    /// # Errors
    ///
    /// Returns [`OpsDashError::Validation`] if invariants fail.
    pub fn build(self) -> Result<Contractor, OpsDashError> {
        let contractor = Contractor {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            role: self.role,
            hourly_rate: self.hourly_rate,
            created_at: self.created_at.unwrap_or_else(now),
        };
        contractor.validate()?;
        Ok(contractor)
    }
}
