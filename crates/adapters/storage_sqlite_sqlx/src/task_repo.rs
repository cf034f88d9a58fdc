//! `SQLite` implementation of [`TaskRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use opsdash_app::ports::TaskRepository;
use opsdash_domain::error::OpsDashError;
use opsdash_domain::id::{ProjectId, TaskId};
use opsdash_domain::task::Task;

use crate::decode;
use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Task`].
struct Wrapper(Task);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Task> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let project_id: Option<String> = row.try_get("project_id")?;
        let priority: String = row.try_get("priority")?;
        let status: String = row.try_get("status")?;
        let due_date: Option<String> = row.try_get("due_date")?;
        let created_at: String = row.try_get("created_at")?;

        Ok(Self(Task {
            id: decode::parse(&id)?,
            project_id: decode::parse_opt(project_id)?,
            title: row.try_get("title")?,
            priority: decode::parse(&priority)?,
            status: decode::parse(&status)?,
            due_date: decode::date(due_date)?,
            created_at: decode::timestamp(&created_at)?,
        }))
    }
}

const INSERT: &str = "INSERT INTO tasks (id, project_id, title, priority, status, due_date, created_at) VALUES (?, ?, ?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM tasks WHERE id = ?";
// Undated tasks sort last.
const SELECT_ALL: &str = "SELECT * FROM tasks ORDER BY due_date IS NULL, due_date, created_at, id";
const SELECT_BY_PROJECT: &str = "SELECT * FROM tasks WHERE project_id = ? ORDER BY due_date IS NULL, due_date, created_at, id";
const UPDATE: &str = "UPDATE tasks SET project_id = ?, title = ?, priority = ?, status = ?, due_date = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM tasks WHERE id = ?";

/// `SQLite`-backed task repository.
pub struct SqliteTaskRepository {
    pool: SqlitePool,
}

impl SqliteTaskRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl TaskRepository for SqliteTaskRepository {
    fn create(&self, task: Task) -> impl Future<Output = Result<Task, OpsDashError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(task.id.to_string())
                .bind(task.project_id.map(|id| id.to_string()))
                .bind(&task.title)
                .bind(task.priority.as_str())
                .bind(task.status.as_str())
                .bind(task.due_date.map(|d| d.to_string()))
                .bind(task.created_at.to_rfc3339())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(task)
        }
    }

    fn get_by_id(
        &self,
        id: TaskId,
    ) -> impl Future<Output = Result<Option<Task>, OpsDashError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<Task>, OpsDashError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn find_by_project(
        &self,
        project_id: ProjectId,
    ) -> impl Future<Output = Result<Vec<Task>, OpsDashError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_PROJECT)
                .bind(project_id.to_string())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(&self, task: Task) -> impl Future<Output = Result<Task, OpsDashError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(task.project_id.map(|id| id.to_string()))
                .bind(&task.title)
                .bind(task.priority.as_str())
                .bind(task.status.as_str())
                .bind(task.due_date.map(|d| d.to_string()))
                .bind(task.id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(task)
        }
    }

    fn delete(&self, id: TaskId) -> impl Future<Output = Result<(), OpsDashError>> + Send {
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
