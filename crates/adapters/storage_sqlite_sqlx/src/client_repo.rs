//! `SQLite` implementation of [`ClientRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use opsdash_app::ports::ClientRepository;
use opsdash_domain::client::Client;
use opsdash_domain::error::OpsDashError;
use opsdash_domain::id::ClientId;

use crate::decode;
use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Client`].
struct Wrapper(Client);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Client> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let created_at: String = row.try_get("created_at")?;

        Ok(Self(Client {
            id: decode::parse(&id)?,
            name: row.try_get("name")?,
            industry: row.try_get("industry")?,
            email: row.try_get("email")?,
            created_at: decode::timestamp(&created_at)?,
        }))
    }
}

const INSERT: &str =
    "INSERT INTO clients (id, name, industry, email, created_at) VALUES (?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM clients WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM clients ORDER BY name, id";
const UPDATE: &str = "UPDATE clients SET name = ?, industry = ?, email = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM clients WHERE id = ?";

/// `SQLite`-backed client repository.
pub struct SqliteClientRepository {
    pool: SqlitePool,
}

impl SqliteClientRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ClientRepository for SqliteClientRepository {
    fn create(&self, client: Client) -> impl Future<Output = Result<Client, OpsDashError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(client.id.to_string())
                .bind(&client.name)
                .bind(&client.industry)
                .bind(&client.email)
                .bind(client.created_at.to_rfc3339())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(client)
        }
    }

    fn get_by_id(
        &self,
        id: ClientId,
    ) -> impl Future<Output = Result<Option<Client>, OpsDashError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<Client>, OpsDashError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(&self, client: Client) -> impl Future<Output = Result<Client, OpsDashError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(&client.name)
                .bind(&client.industry)
                .bind(&client.email)
                .bind(client.id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(client)
        }
    }

    fn delete(&self, id: ClientId) -> impl Future<Output = Result<(), OpsDashError>> + Send {
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

    async fn setup() -> SqliteClientRepository {
        SqliteClientRepository::new(memory_pool().await)
    }

    fn test_client() -> Client {
        Client::builder()
            .name("Acme Studio")
            .industry("Design")
            .email("ops@acme.test")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_create_and_retrieve_client_when_valid() {
        let repo = setup().await;
        let client = test_client();
        let id = client.id;

        repo.create(client).await.unwrap();

        let fetched = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched.id, id);
        assert_eq!(fetched.name, "Acme Studio");
        assert_eq!(fetched.email.as_deref(), Some("ops@acme.test"));
    }

    #[tokio::test]
    async fn should_return_none_when_client_not_found() {
        let repo = setup().await;
        assert!(repo.get_by_id(ClientId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_list_clients_by_name() {
        let repo = setup().await;
        repo.create(test_client()).await.unwrap();
        repo.create(Client::builder().name("Beta Labs").build().unwrap())
            .await
            .unwrap();
        repo.create(Client::builder().name("Aardvark").build().unwrap())
            .await
            .unwrap();

        let names: Vec<String> = repo
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Aardvark", "Acme Studio", "Beta Labs"]);
    }

    #[tokio::test]
    async fn should_update_and_delete_client() {
        let repo = setup().await;
        let mut client = test_client();
        let id = client.id;
        repo.create(client.clone()).await.unwrap();

        client.industry = None;
        repo.update(client).await.unwrap();
        assert_eq!(repo.get_by_id(id).await.unwrap().unwrap().industry, None);

        repo.delete(id).await.unwrap();
        assert!(repo.get_by_id(id).await.unwrap().is_none());
    }
}
