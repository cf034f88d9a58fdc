//! Recipe service: authoring automation recipes.
//!
//! Every write goes through [`Recipe::validate`], so the store only ever holds
//! recipes the engine can run: a status trigger always names an eligible
//! status and every action has a supported type.

use opsdash_domain::error::{NotFoundError, OpsDashError};
use opsdash_domain::id::RecipeId;
use opsdash_domain::recipe::Recipe;

use crate::ports::RecipeRepository;

/// Application service for recipe CRUD operations.
pub struct RecipeService<R> {
    repo: R,
}

impl<R: RecipeRepository> RecipeService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Save a new recipe.
    ///
    /// # Errors
    ///
    /// Returns [`OpsDashError::Validation`] if the recipe is malformed, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip_all, fields(recipe_id = %recipe.id, name = %recipe.name))]
    pub async fn create_recipe(&self, recipe: Recipe) -> Result<Recipe, OpsDashError> {
        recipe.validate()?;
        self.repo.create(recipe).await
    }

    /// Look up a recipe by id.
    ///
    /// # Errors
    ///
    /// Returns [`OpsDashError::NotFound`] when no recipe with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_recipe(&self, id: RecipeId) -> Result<Recipe, OpsDashError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Recipe",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all recipes, active or not.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_recipes(&self) -> Result<Vec<Recipe>, OpsDashError> {
        self.repo.get_all().await
    }

    /// Replace an existing recipe.
    ///
    /// # Errors
    ///
    /// Returns [`OpsDashError::Validation`] if the recipe is malformed,
    /// [`OpsDashError::NotFound`] if it does not exist, or a storage error.
    #[tracing::instrument(skip_all, fields(recipe_id = %recipe.id))]
    pub async fn update_recipe(&self, recipe: Recipe) -> Result<Recipe, OpsDashError> {
        recipe.validate()?;
        self.get_recipe(recipe.id).await?;
        self.repo.update(recipe).await
    }

    /// Enable or disable a recipe without touching its rules.
    ///
    /// # Errors
    ///
    /// Returns [`OpsDashError::NotFound`] if the recipe does not exist, or a
    /// storage error from the repository.
    pub async fn set_active(&self, id: RecipeId, is_active: bool) -> Result<Recipe, OpsDashError> {
        let mut recipe = self.get_recipe(id).await?;
        recipe.is_active = is_active;
        self.repo.update(recipe).await
    }

    /// Delete a recipe by id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn delete_recipe(&self, id: RecipeId) -> Result<(), OpsDashError> {
        self.repo.delete(id).await
    }
}
