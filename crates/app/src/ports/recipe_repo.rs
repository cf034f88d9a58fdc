//! Recipe repository port: persistence for automation recipes.

use std::future::Future;
use std::sync::Arc;

use opsdash_domain::error::OpsDashError;
use opsdash_domain::id::RecipeId;
use opsdash_domain::recipe::Recipe;

/// Repository for persisting and querying [`Recipe`]s.
pub trait RecipeRepository {
    fn create(&self, recipe: Recipe) -> impl Future<Output = Result<Recipe, OpsDashError>> + Send;

    fn get_by_id(
        &self,
        id: RecipeId,
    ) -> impl Future<Output = Result<Option<Recipe>, OpsDashError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<Recipe>, OpsDashError>> + Send;

    /// Get active recipes only, in a stable order.
    ///
    /// Filtering happens in the store so the engine never loads disabled rules.
    fn list_active(&self) -> impl Future<Output = Result<Vec<Recipe>, OpsDashError>> + Send;

    fn update(&self, recipe: Recipe) -> impl Future<Output = Result<Recipe, OpsDashError>> + Send;

    fn delete(&self, id: RecipeId) -> impl Future<Output = Result<(), OpsDashError>> + Send;
}

impl<T: RecipeRepository + Send + Sync> RecipeRepository for Arc<T> {
    fn create(&self, recipe: Recipe) -> impl Future<Output = Result<Recipe, OpsDashError>> + Send {
        (**self).create(recipe)
    }

    fn get_by_id(
        &self,
        id: RecipeId,
    ) -> impl Future<Output = Result<Option<Recipe>, OpsDashError>> + Send {
        (**self).get_by_id(id)
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Recipe>, OpsDashError>> + Send {
        (**self).get_all()
    }

    fn list_active(&self) -> impl Future<Output = Result<Vec<Recipe>, OpsDashError>> + Send {
        (**self).list_active()
    }

    fn update(&self, recipe: Recipe) -> impl Future<Output = Result<Recipe, OpsDashError>> + Send {
        (**self).update(recipe)
    }

    fn delete(&self, id: RecipeId) -> impl Future<Output = Result<(), OpsDashError>> + Send {
        (**self).delete(id)
    }
}
