//! JSON REST handlers for projects.
//!
//! Creating a project and changing its status both answer with the saved
//! project plus the automation summary, so the caller sees which recipes
//! fired and which tasks they created without re-fetching.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;

use opsdash_app::ports::{
    ClientRepository, ContractorRepository, ProjectRepository, RecipeRepository, TaskRepository,
};
use opsdash_app::services::project_service::ProjectUpdate;
use opsdash_domain::id::{ClientId, ProjectId};
use opsdash_domain::project::{Project, ProjectStatus};

use super::{Reply, parse_id};
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating or replacing a project.
#[derive(Deserialize)]
pub struct ProjectRequest {
    pub name: String,
    pub client_id: Option<ClientId>,
    pub industry: Option<String>,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
}

/// Request body for `PUT /api/projects/{id}/status`.
#[derive(Deserialize)]
pub struct StatusRequest {
    pub status: ProjectStatus,
}

/// Query parameters for the list endpoint.
#[derive(Deserialize, Default)]
pub struct ListQuery {
    #[serde(default)]
    pub include_archived: bool,
}

/// `GET /api/projects?include_archived=true`
pub async fn list<CR, KR, PR, TR, RR>(
    State(state): State<AppState<CR, KR, PR, TR, RR>>,
    Query(query): Query<ListQuery>,
) -> Result<Reply<Vec<Project>>, ApiError>
where
    CR: ClientRepository + Send + Sync + 'static,
    KR: ContractorRepository + Send + Sync + 'static,
    PR: ProjectRepository + Send + Sync + 'static,
    TR: TaskRepository + Send + Sync + 'static,
    RR: RecipeRepository + Send + Sync + 'static,
{
    let projects = state
        .project_service
        .list_projects(query.include_archived)
        .await?;
    Ok(Reply::Ok(Json(projects)))
}

/// `GET /api/projects/{id}`
pub async fn get<CR, KR, PR, TR, RR>(
    State(state): State<AppState<CR, KR, PR, TR, RR>>,
    Path(id): Path<String>,
) -> Result<Reply<Project>, ApiError>
where
    CR: ClientRepository + Send + Sync + 'static,
    KR: ContractorRepository + Send + Sync + 'static,
    PR: ProjectRepository + Send + Sync + 'static,
    TR: TaskRepository + Send + Sync + 'static,
    RR: RecipeRepository + Send + Sync + 'static,
{
    let project_id: ProjectId = parse_id(&id)?;
    let project = state.project_service.get_project(project_id).await?;
    Ok(Reply::Ok(Json(project)))
}

/// `POST /api/projects`: create a project and run `NEW_PROJECT` recipes.
pub async fn create<CR, KR, PR, TR, RR>(
    State(state): State<AppState<CR, KR, PR, TR, RR>>,
    Json(req): Json<ProjectRequest>,
) -> Result<Reply<ProjectUpdate>, ApiError>
where
    CR: ClientRepository + Send + Sync + 'static,
    KR: ContractorRepository + Send + Sync + 'static,
    PR: ProjectRepository + Send + Sync + 'static,
    TR: TaskRepository + Send + Sync + 'static,
    RR: RecipeRepository + Send + Sync + 'static,
{
    let mut builder = Project::builder().name(req.name);
    if let Some(client_id) = req.client_id {
        builder = builder.client_id(client_id);
    }
    if let Some(industry) = req.industry {
        builder = builder.industry(industry);
    }
    if let Some(description) = req.description {
        builder = builder.description(description);
    }
    if let Some(status) = req.status {
        builder = builder.status(status);
    }

    let project = builder.build()?;
    let update = state.project_service.create_project(project).await?;
    Ok(Reply::Created(Json(update)))
}

/// `PUT /api/projects/{id}`: replace a project's fields.
///
/// A different `status` in the body counts as a status change.
pub async fn update<CR, KR, PR, TR, RR>(
    State(state): State<AppState<CR, KR, PR, TR, RR>>,
    Path(id): Path<String>,
    Json(req): Json<ProjectRequest>,
) -> Result<Reply<ProjectUpdate>, ApiError>
where
    CR: ClientRepository + Send + Sync + 'static,
    KR: ContractorRepository + Send + Sync + 'static,
    PR: ProjectRepository + Send + Sync + 'static,
    TR: TaskRepository + Send + Sync + 'static,
    RR: RecipeRepository + Send + Sync + 'static,
{
    let project_id: ProjectId = parse_id(&id)?;
    let mut project = state.project_service.get_project(project_id).await?;
    project.name = req.name;
    project.client_id = req.client_id;
    project.industry = req.industry;
    project.description = req.description;
    if let Some(status) = req.status {
        project.status = status;
    }

    let update = state.project_service.update_project(project).await?;
    Ok(Reply::Ok(Json(update)))
}

/// `PUT /api/projects/{id}/status`: move a project and run status recipes.
pub async fn change_status<CR, KR, PR, TR, RR>(
    State(state): State<AppState<CR, KR, PR, TR, RR>>,
    Path(id): Path<String>,
    Json(req): Json<StatusRequest>,
) -> Result<Reply<ProjectUpdate>, ApiError>
where
    CR: ClientRepository + Send + Sync + 'static,
    KR: ContractorRepository + Send + Sync + 'static,
    PR: ProjectRepository + Send + Sync + 'static,
    TR: TaskRepository + Send + Sync + 'static,
    RR: RecipeRepository + Send + Sync + 'static,
{
    let project_id: ProjectId = parse_id(&id)?;
    let update = state
        .project_service
        .change_status(project_id, req.status)
        .await?;
    Ok(Reply::Ok(Json(update)))
}

/// `DELETE /api/projects/{id}`
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
    let project_id: ProjectId = parse_id(&id)?;
    state.project_service.delete_project(project_id).await?;
    Ok(Reply::NoContent)
}
