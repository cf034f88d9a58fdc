//! `SQLite` implementation of [`ContractorRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use opsdash_app::ports::ContractorRepository;
use opsdash_domain::contractor::Contractor;
use opsdash_domain::error::OpsDashError;
use opsdash_domain::id::ContractorId;

use crate::decode;
use crate::error::StorageError;

struct Wrapper(Contractor);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let created_at: String = row.try_get("created_at")?;

        Ok(Self(Contractor {
            id: decode::parse(&id)?,
            name: row.try_get("name")?,
            role: row.try_get("role")?,
            hourly_rate: row.try_get("hourly_rate")?,
            created_at: decode::timestamp(&created_at)?,
        }))
    }
}

const INSERT: &str = "INSERT INTO contractors (id, name, role, hourly_rate, created_at) VALUES (?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM contractors WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM contractors ORDER BY name, id";
const UPDATE: &str = "UPDATE contractors SET name = ?, role = ?, hourly_rate = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM contractors WHERE id = ?";

/// `SQLite`-backed contractor repository.
pub struct SqliteContractorRepository {
    pool: SqlitePool,
}

impl SqliteContractorRepository {
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ContractorRepository for SqliteContractorRepository {
    fn create(
        &self,
        contractor: Contractor,
    ) -> impl Future<Output = Result<Contractor, OpsDashError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(contractor.id.to_string())
                .bind(&contractor.name)
                .bind(&contractor.role)
                .bind(contractor.hourly_rate)
                .bind(contractor.created_at.to_rfc3339())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(contractor)
        }
    }

    fn get_by_id(
        &self,
        id: ContractorId,
    ) -> impl Future<Output = Result<Option<Contractor>, OpsDashError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.map(|w| w.0))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Contractor>, OpsDashError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        contractor: Contractor,
    ) -> impl Future<Output = Result<Contractor, OpsDashError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(&contractor.name)
                .bind(&contractor.role)
                .bind(contractor.hourly_rate)
                .bind(contractor.id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(contractor)
        }
    }

    fn delete(&self, id: ContractorId) -> impl Future<Output = Result<(), OpsDashError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(DELETE_BY_ID)
                .bind(id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::memory_pool;

    async fn setup() -> SqliteContractorRepository {
        SqliteContractorRepository::new(memory_pool().await)
    }

    #[tokio::test]
    async fn should_store_hourly_rate_through_roundtrip() {
        let repo = setup().await;
        let contractor = Contractor::builder()
            .name("Dana")
            .role("Copywriter")
            .hourly_rate(72.5)
            .build()
            .unwrap();
        let id = contractor.id;

        repo.create(contractor).await.unwrap();

        let fetched = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched.role.as_deref(), Some("Copywriter"));
        assert_eq!(fetched.hourly_rate, Some(72.5));
    }

    #[tokio::test]
    async fn should_keep_missing_rate_as_none() {
        let repo = setup().await;
        let contractor = Contractor::builder().name("Sam").build().unwrap();
        let id = contractor.id;
        repo.create(contractor).await.unwrap();

        let fetched = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched.hourly_rate, None);
    }

    #[tokio::test]
    async fn should_update_list_and_delete_contractor() {
        let repo = setup().await;
        let mut contractor = Contractor::builder().name("Sam").build().unwrap();
        let id = contractor.id;
        repo.create(contractor.clone()).await.unwrap();

        contractor.role = Some("Developer".to_string());
        repo.update(contractor).await.unwrap();
        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].role.as_deref(), Some("Developer"));

        repo.delete(id).await.unwrap();
        assert!(repo.get_all().await.unwrap().is_empty());
    }
}
