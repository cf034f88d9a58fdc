//! `SQLite` implementation of [`RecipeRepository`].
//!
//! Trigger, conditions and actions are stored as JSON text so new action
//! kinds only need a domain change, not a migration.

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use opsdash_app::ports::RecipeRepository;
use opsdash_domain::error::OpsDashError;
use opsdash_domain::id::RecipeId;
use opsdash_domain::recipe::Recipe;

use crate::decode;
use crate::error::StorageError;

struct Wrapper(Recipe);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Recipe> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let trigger: String = row.try_get("trigger")?;
        let conditions: String = row.try_get("conditions")?;
        let actions: String = row.try_get("actions")?;

        Ok(Self(Recipe {
            id: decode::parse(&id)?,
            name: row.try_get("name")?,
            is_active: row.try_get("is_active")?,
            trigger: decode::json(&trigger)?,
            conditions: decode::json(&conditions)?,
            actions: decode::json(&actions)?,
        }))
    }
}

/// JSON columns of a recipe, serialized before the query is built.
struct Encoded {
    trigger: String,
    conditions: String,
    actions: String,
}

impl Encoded {
    fn from_recipe(recipe: &Recipe) -> Result<Self, StorageError> {
        Ok(Self {
            trigger: serde_json::to_string(&recipe.trigger)?,
            conditions: serde_json::to_string(&recipe.conditions)?,
            actions: serde_json::to_string(&recipe.actions)?,
        })
    }
}

const INSERT: &str = "INSERT INTO automation_recipes (id, name, is_active, trigger, conditions, actions) VALUES (?, ?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM automation_recipes WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM automation_recipes ORDER BY name, id";
const SELECT_ACTIVE: &str =
    "SELECT * FROM automation_recipes WHERE is_active = 1 ORDER BY name, id";
const UPDATE: &str = "UPDATE automation_recipes SET name = ?, is_active = ?, trigger = ?, conditions = ?, actions = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM automation_recipes WHERE id = ?";

/// `SQLite`-backed recipe repository.
pub struct SqliteRecipeRepository {
    pool: SqlitePool,
}

impl SqliteRecipeRepository {
    /// Create a new repository backed by the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

async fn fetch_many(pool: SqlitePool, query: &'static str) -> Result<Vec<Recipe>, OpsDashError> {
    let rows: Vec<Wrapper> = sqlx::query_as(query)
        .fetch_all(&pool)
        .await
        .map_err(StorageError::from)?;
    Ok(rows.into_iter().map(|w| w.0).collect())
}

impl RecipeRepository for SqliteRecipeRepository {
    fn create(&self, recipe: Recipe) -> impl Future<Output = Result<Recipe, OpsDashError>> + Send {
        let pool = self.pool.clone();
        async move {
            let encoded = Encoded::from_recipe(&recipe)?;

            sqlx::query(INSERT)
                .bind(recipe.id.to_string())
                .bind(&recipe.name)
                .bind(recipe.is_active)
                .bind(&encoded.trigger)
                .bind(&encoded.conditions)
                .bind(&encoded.actions)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(recipe)
        }
    }

    fn get_by_id(
        &self,
        id: RecipeId,
    ) -> impl Future<Output = Result<Option<Recipe>, OpsDashError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<Recipe>, OpsDashError>> + Send {
        fetch_many(self.pool.clone(), SELECT_ALL)
    }

    fn list_active(&self) -> impl Future<Output = Result<Vec<Recipe>, OpsDashError>> + Send {
        fetch_many(self.pool.clone(), SELECT_ACTIVE)
    }

    fn update(&self, recipe: Recipe) -> impl Future<Output = Result<Recipe, OpsDashError>> + Send {
        let pool = self.pool.clone();
        async move {
            let encoded = Encoded::from_recipe(&recipe)?;

            sqlx::query(UPDATE)
                .bind(&recipe.name)
                .bind(recipe.is_active)
                .bind(&encoded.trigger)
                .bind(&encoded.conditions)
                .bind(&encoded.actions)
                .bind(recipe.id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(recipe)
        }
    }

    fn delete(&self, id: RecipeId) -> impl Future<Output = Result<(), OpsDashError>> + Send {
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
