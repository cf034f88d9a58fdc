//! JSON REST handlers for automation recipes.

use axum::Json;
use axum::extract::{Path, State};
use serde::Deserialize;

use opsdash_app::ports::{
    ClientRepository, ContractorRepository, ProjectRepository, RecipeRepository, TaskRepository,
};
use opsdash_domain::id::RecipeId;
use opsdash_domain::recipe::{Action, Condition, Recipe, Trigger};

use super::{Reply, parse_id};
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating or replacing a recipe.
#[derive(Deserialize)]
pub struct RecipeRequest {
    pub name: String,
    pub is_active: Option<bool>,
    pub trigger: Trigger,
    #[serde(default)]
    pub conditions: Vec<Condition>,
    pub actions: Vec<Action>,
}

impl RecipeRequest {
    fn into_recipe(self, id: Option<RecipeId>) -> Recipe {
        Recipe {
            id: id.unwrap_or_default(),
            name: self.name,
            is_active: self.is_active.unwrap_or(true),
            trigger: self.trigger,
            conditions: self.conditions,
            actions: self.actions,
        }
    }
}

#[derive(Deserialize)]
pub struct ActiveRequest {
    pub is_active: bool,
}

/// `GET /api/recipes`
pub async fn list<CR, KR, PR, TR, RR>(
    State(state): State<AppState<CR, KR, PR, TR, RR>>,
) -> Result<Reply<Vec<Recipe>>, ApiError>
where
    CR: ClientRepository + Send + Sync + 'static,
    KR: ContractorRepository + Send + Sync + 'static,
    PR: ProjectRepository + Send + Sync + 'static,
    TR: TaskRepository + Send + Sync + 'static,
    RR: RecipeRepository + Send + Sync + 'static,
{
    let recipes = state.recipe_service.list_recipes().await?;
    Ok(Reply::Ok(Json(recipes)))
}

/// `GET /api/recipes/{id}`
pub async fn get<CR, KR, PR, TR, RR>(
    State(state): State<AppState<CR, KR, PR, TR, RR>>,
    Path(id): Path<String>,
) -> Result<Reply<Recipe>, ApiError>
where
    CR: ClientRepository + Send + Sync + 'static,
    KR: ContractorRepository + Send + Sync + 'static,
    PR: ProjectRepository + Send + Sync + 'static,
    TR: TaskRepository + Send + Sync + 'static,
    RR: RecipeRepository + Send + Sync + 'static,
{
    let recipe_id: RecipeId = parse_id(&id)?;
    let recipe = state.recipe_service.get_recipe(recipe_id).await?;
    Ok(Reply::Ok(Json(recipe)))
}

/// `POST /api/recipes`: validation failures answer 400 and nothing is saved.
pub async fn create<CR, KR, PR, TR, RR>(
    State(state): State<AppState<CR, KR, PR, TR, RR>>,
    Json(req): Json<RecipeRequest>,
) -> Result<Reply<Recipe>, ApiError>
where
    CR: ClientRepository + Send + Sync + 'static,
    KR: ContractorRepository + Send + Sync + 'static,
    PR: ProjectRepository + Send + Sync + 'static,
    TR: TaskRepository + Send + Sync + 'static,
    RR: RecipeRepository + Send + Sync + 'static,
{
    let created = state
        .recipe_service
        .create_recipe(req.into_recipe(None))
        .await?;
    Ok(Reply::Created(Json(created)))
}

/// `PUT /api/recipes/{id}`
pub async fn update<CR, KR, PR, TR, RR>(
    State(state): State<AppState<CR, KR, PR, TR, RR>>,
    Path(id): Path<String>,
    Json(req): Json<RecipeRequest>,
) -> Result<Reply<Recipe>, ApiError>
where
    CR: ClientRepository + Send + Sync + 'static,
    KR: ContractorRepository + Send + Sync + 'static,
    PR: ProjectRepository + Send + Sync + 'static,
    TR: TaskRepository + Send + Sync + 'static,
    RR: RecipeRepository + Send + Sync + 'static,
{
    let recipe_id: RecipeId = parse_id(&id)?;
    let saved = state
        .recipe_service
        .update_recipe(req.into_recipe(Some(recipe_id)))
        .await?;
    Ok(Reply::Ok(Json(saved)))
}

/// `PUT /api/recipes/{id}/active`
pub async fn set_active<CR, KR, PR, TR, RR>(
    State(state): State<AppState<CR, KR, PR, TR, RR>>,
    Path(id): Path<String>,
    Json(req): Json<ActiveRequest>,
) -> Result<Reply<Recipe>, ApiError>
where
    CR: ClientRepository + Send + Sync + 'static,
    KR: ContractorRepository + Send + Sync + 'static,
    PR: ProjectRepository + Send + Sync + 'static,
    TR: TaskRepository + Send + Sync + 'static,
    RR: RecipeRepository + Send + Sync + 'static,
{
    let recipe_id: RecipeId = parse_id(&id)?;
    let recipe = state
        .recipe_service
        .set_active(recipe_id, req.is_active)
        .await?;
    Ok(Reply::Ok(Json(recipe)))
}

/// `DELETE /api/recipes/{id}`
pub async fn delete<CR, KR, PR, TR, RR>(
    State(state): State<AppState<CR, KR, PR, TR, RR>>,
    Path(id): Path<String>,
) -> Result<Reply<()>, ApiError>
where
    CR: ClientRepository + Send + Sync + 'static,
    KR: ContractorRepository + Send + Sync + 'static,
    PR: ProjectRepository + Send + Sync + 'static,
    TR: TaskRepository + Send + Sync + 'static,
    RR: RecipeRepository + Send + Sync + 'static,
{
    let recipe_id: RecipeId = parse_id(&id)?;
    state.recipe_service.delete_recipe(recipe_id).await?;
    Ok(Reply::NoContent)
}
