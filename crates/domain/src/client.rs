//! Client: a customer the business delivers projects for.

use serde::{Deserialize, Serialize};

use crate::error::{OpsDashError, ValidationError};
use crate::id::ClientId;
use crate::time::{Timestamp, now};

/// A customer account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub industry: Option<String>,
    pub email: Option<String>,
    pub created_at: Timestamp,
}

impl Client {
    /// Create a builder for constructing a [`Client`].
    #[must_use]
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
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
}

/// Step-by-step builder for [`Client`].
#[derive(Debug, Default)]
pub struct ClientBuilder {
    id: Option<ClientId>,
    name: Option<String>,
    industry: Option<String>,
    email: Option<String>,
    created_at: Option<Timestamp>,
}

impl ClientBuilder {
    #[must_use]
    pub fn id(mut self, id: ClientId) -> Self {
        self.id = Some(id);
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
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn created_at(mut self, ts: Timestamp) -> Self {
        self.created_at = Some(ts);
        self
    }

    /// Consume the builder, validate, and return a [`Client`].
    ///
    /// # Errors
    ///
    /// Returns [`OpsDashError::Validation`] if `name` is missing or blank.
    pub fn build(self) -> Result<Client, OpsDashError> {
        let client = Client {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            industry: self.industry,
            email: self.email,
            created_at: self.created_at.unwrap_or_else(now),
        };
        client.validate()?;
        Ok(client)
    }
}
