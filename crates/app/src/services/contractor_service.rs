//! Contractor service: use-cases for managing contractors.

use opsdash_domain::contractor::Contractor;
use opsdash_domain::error::{NotFoundError, OpsDashError};
use opsdash_domain::id::ContractorId;

use crate::ports::ContractorRepository;

pub struct ContractorService<R> {
    repo: R,
}

impl<R: ContractorRepository> ContractorService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new contractor after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`OpsDashError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip_all, fields(contractor_id = %contractor.id))]
    pub async fn create_contractor(
        &self,
        contractor: Contractor,
    ) -> Result<Contractor, OpsDashError> {
        contractor.validate()?;
        self.repo.create(contractor).await
    }

    /// Look up a contractor by id.
    ///
    /// # Errors
    ///
    /// Returns [`OpsDashError::NotFound`] when no contractor with `id`
    /// exists, or a storage error from the repository.
    pub async fn get_contractor(&self, id: ContractorId) -> Result<Contractor, OpsDashError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Contractor",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_contractors(&self) -> Result<Vec<Contractor>, OpsDashError> {
        self.repo.get_all().await
    }

    /// # Errors
    ///
    /// Returns [`OpsDashError::Validation`] if invariants fail, or a
    /// storage error from the repository.
    pub async fn update_contractor(
        &self,
        contractor: Contractor,
    ) -> Result<Contractor, OpsDashError> {
        contractor.validate()?;
        self.repo.update(contractor).await
    }

    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn delete_contractor(&self, id: ContractorId) -> Result<(), OpsDashError> {
        self.repo.delete(id).await
    }
}
