//! Client service: use-cases for managing clients.

use opsdash_domain::client::Client;
use opsdash_domain::error::{NotFoundError, OpsDashError};
use opsdash_domain::id::ClientId;

use crate::ports::ClientRepository;

/// Application service for client CRUD operations.
pub struct ClientService<R> {
    repo: R,
}

impl<R: ClientRepository> ClientService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new client after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`OpsDashError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip_all, fields(client_id = %client.id))]
    pub async fn create_client(&self, client: Client) -> Result<Client, OpsDashError> {
        client.validate()?;
        self.repo.create(client).await
    }

    /// Look up a client by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`OpsDashError::NotFound`] when no client with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_client(&self, id: ClientId) -> Result<Client, OpsDashError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Client",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all clients.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_clients(&self) -> Result<Vec<Client>, OpsDashError> {
        self.repo.get_all().await
    }

    /// Update an existing client.
    ///
    /// # Errors
    ///
    /// Returns [`OpsDashError::Validation`] if invariants fail, or a
    /// storage error from the repository.
    pub async fn update_client(&self, client: Client) -> Result<Client, OpsDashError> {
        client.validate()?;
        self.repo.update(client).await
    }

    /// Delete a client by id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn delete_client(&self, id: ClientId) -> Result<(), OpsDashError> {
        self.repo.delete(id).await
    }
}
