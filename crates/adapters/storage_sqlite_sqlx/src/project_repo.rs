//! `SQLite` implementation of [`ProjectRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use opsdash_app::ports::ProjectRepository;
use opsdash_domain::error::OpsDashError;
use opsdash_domain::id::ProjectId;
use opsdash_domain::project::Project;

use crate::decode;
use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Project`].
struct Wrapper(Project);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Project> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let client_id: Option<String> = row.try_get("client_id")?;
        let status: String = row.try_get("status")?;
        let created_at: String = row.try_get("created_at")?;

        Ok(Self(Project {
            id: decode::parse(&id)?,
            client_id: decode::parse_opt(client_id)?,
            name: row.try_get("name")?,
            industry: row.try_get("industry")?,
            description: row.try_get("description")?,
            status: decode::parse(&status)?,
            created_at: decode::timestamp(&created_at)?,
        }))
    }
}

const INSERT: &str = "INSERT INTO projects (id, client_id, name, industry, description, status, created_at) VALUES (?, ?, ?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM projects WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM projects ORDER BY created_at DESC, id";
const UPDATE: &str = "UPDATE projects SET client_id = ?, name = ?, industry = ?, description = ?, status = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM projects WHERE id = ?";

/// `SQLite`-backed project repository.
pub struct SqliteProjectRepository {
    pool: SqlitePool,
}

impl SqliteProjectRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ProjectRepository for SqliteProjectRepository {
    fn create(&self, project: Project) -> impl Future<Output = Result<Project, OpsDashError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(project.id.to_string())
                .bind(project.client_id.map(|id| id.to_string()))
                .bind(&project.name)
                .bind(&project.industry)
                .bind(&project.description)
                .bind(project.status.as_str())
                .bind(project.created_at.to_rfc3339())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(project)
        }
    }

    fn get_by_id(
        &self,
        id: ProjectId,
    ) -> impl Future<Output = Result<Option<Project>, OpsDashError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Project>, OpsDashError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(&self, project: Project) -> impl Future<Output = Result<Project, OpsDashError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(project.client_id.map(|id| id.to_string()))
                .bind(&project.name)
                .bind(&project.industry)
                .bind(&project.description)
                .bind(project.status.as_str())
                .bind(project.id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(project)
        }
    }

    fn delete(&self, id: ProjectId) -> impl Future<Output = Result<(), OpsDashError>> + Send {
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
