//! JSON REST handlers for tasks.

use axum::Json;
use axum::extract::{Path, Query, State};
use chrono::NaiveDate;
use serde::Deserialize;

use opsdash_app::ports::{
    ClientRepository, ContractorRepository, ProjectRepository, RecipeRepository, TaskRepository,
};
use opsdash_domain::id::{ProjectId, TaskId};
use opsdash_domain::task::{Task, TaskPriority, TaskStatus};

use super::{Reply, parse_id};
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating or replacing a task.
#[derive(Deserialize)]
pub struct TaskRequest {
    pub title: String,
    pub project_id: Option<ProjectId>,
    #[serde(default)]
    pub priority: TaskPriority,
    #[serde(default)]
    pub status: TaskStatus,
    pub due_date: Option<NaiveDate>,
}

#[derive(Deserialize)]
pub struct StatusRequest {
    pub status: TaskStatus,
}

/// Query parameters for the list endpoint.
#[derive(Deserialize, Default)]
pub struct ListQuery {
    pub project_id: Option<String>,
}

/// `GET /api/tasks?project_id=…`
pub async fn list<CR, KR, PR, TR, RR>(
    State(state): State<AppState<CR, KR, PR, TR, RR>>,
    Query(query): Query<ListQuery>,
) -> Result<Reply<Vec<Task>>, ApiError>
where
    CR: ClientRepository + Send + Sync + 'static,
    KR: ContractorRepository + Send + Sync + 'static,
    PR: ProjectRepository + Send + Sync + 'static,
    TR: TaskRepository + Send + Sync + 'static,
    RR: RecipeRepository + Send + Sync + 'static,
{
    let tasks = match query.project_id {
        Some(raw) => {
            let project_id: ProjectId = parse_id(&raw)?;
            state.task_service.list_for_project(project_id).await?
        }
        None => state.task_service.list_tasks().await?,
    };
    Ok(Reply::Ok(Json(tasks)))
}

/// `GET /api/tasks/{id}`
pub async fn get<CR, KR, PR, TR, RR>(
    State(state): State<AppState<CR, KR, PR, TR, RR>>,
    Path(id): Path<String>,
) -> Result<Reply<Task>, ApiError>
where
    CR: ClientRepository + Send + Sync + 'static,
    KR: ContractorRepository + Send + Sync + 'static,
    PR: ProjectRepository + Send + Sync + 'static,
    TR: TaskRepository + Send + Sync + 'static,
    RR: RecipeRepository + Send + Sync + 'static,
{
    let task_id: TaskId = parse_id(&id)?;
    let task = state.task_service.get_task(task_id).await?;
    Ok(Reply::Ok(Json(task)))
}

/// `POST /api/tasks`
pub async fn create<CR, KR, PR, TR, RR>(
    State(state): State<AppState<CR, KR, PR, TR, RR>>,
    Json(req): Json<TaskRequest>,
) -> Result<Reply<Task>, ApiError>
where
    CR: ClientRepository + Send + Sync + 'static,
    KR: ContractorRepository + Send + Sync + 'static,
    PR: ProjectRepository + Send + Sync + 'static,
    TR: TaskRepository + Send + Sync + 'static,
    RR: RecipeRepository + Send + Sync + 'static,
{
    let mut builder = Task::builder()
        .title(req.title)
        .priority(req.priority)
        .status(req.status);
    if let Some(project_id) = req.project_id {
        builder = builder.project_id(project_id);
    }
    if let Some(due_date) = req.due_date {
        builder = builder.due_date(due_date);
    }

    let task = builder.build()?;
    let created = state.task_service.create_task(task).await?;
    Ok(Reply::Created(Json(created)))
}

/// `PUT /api/tasks/{id}`
pub async fn update<CR, KR, PR, TR, RR>(
    State(state): State<AppState<CR, KR, PR, TR, RR>>,
    Path(id): Path<String>,
    Json(req): Json<TaskRequest>,
) -> Result<Reply<Task>, ApiError>
where
    CR: ClientRepository + Send + Sync + 'static,
    KR: ContractorRepository + Send + Sync + 'static,
    PR: ProjectRepository + Send + Sync + 'static,
    TR: TaskRepository + Send + Sync + 'static,
    RR: RecipeRepository + Send + Sync + 'static,
{
    let task_id: TaskId = parse_id(&id)?;
    let mut task = state.task_service.get_task(task_id).await?;
    task.title = req.title;
    task.project_id = req.project_id;
    task.priority = req.priority;
    task.status = req.status;
    task.due_date = req.due_date;

    let saved = state.task_service.update_task(task).await?;
    Ok(Reply::Ok(Json(saved)))
}

/// `PUT /api/tasks/{id}/status`
pub async fn set_status<CR, KR, PR, TR, RR>(
    State(state): State<AppState<CR, KR, PR, TR, RR>>,
    Path(id): Path<String>,
    Json(req): Json<StatusRequest>,
) -> Result<Reply<Task>, ApiError>
where
    CR: ClientRepository + Send + Sync + 'static,
    KR: ContractorRepository + Send + Sync + 'static,
    PR: ProjectRepository + Send + Sync + 'static,
    TR: TaskRepository + Send + Sync + 'static,
    RR: RecipeRepository + Send + Sync + 'static,
{
    let task_id: TaskId = parse_id(&id)?;
    let task = state.task_service.set_status(task_id, req.status).await?;
    Ok(Reply::Ok(Json(task)))
}

/// `DELETE /api/tasks/{id}`
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
    let task_id: TaskId = parse_id(&id)?;
    state.task_service.delete_task(task_id).await?;
    Ok(Reply::NoContent)
}
