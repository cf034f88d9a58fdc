//! JSON REST handlers for contractors.

use axum::Json;
use axum::extract::{Path, State};
use serde::Deserialize;

use opsdash_app::ports::{
    ClientRepository, ContractorRepository, ProjectRepository, RecipeRepository, TaskRepository,
};
use opsdash_domain::contractor::Contractor;
use opsdash_domain::id::ContractorId;

use super::{Reply, parse_id};
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ContractorRequest {
    pub name: String,
    pub role: Option<String>,
    pub hourly_rate: Option<f64>,
}

/// `GET /api/contractors`
pub async fn list<CR, KR, PR, TR, RR>(
    State(state): State<AppState<CR, KR, PR, TR, RR>>,
) -> Result<Reply<Vec<Contractor>>, ApiError>
where
    CR: ClientRepository + Send + Sync + 'static,
    KR: ContractorRepository + Send + Sync + 'static,
    PR: ProjectRepository + Send + Sync + 'static,
    TR: TaskRepository + Send + Sync + 'static,
    RR: RecipeRepository + Send + Sync + 'static,
{
    let contractors = state.contractor_service.list_contractors().await?;
    Ok(Reply::Ok(Json(contractors)))
}

/// `GET /api/contractors/{id}`
pub async fn get<CR, KR, PR, TR, RR>(
    State(state): State<AppState<CR, KR, PR, TR, RR>>,
    Path(id): Path<String>,
) -> Result<Reply<Contractor>, ApiError>
where
    CR: ClientRepository + Send + Sync + 'static,
    KR: ContractorRepository + Send + Sync + 'static,
    PR: ProjectRepository + Send + Sync + 'static,
    TR: TaskRepository + Send + Sync + 'static,
    RR: RecipeRepository + Send + Sync + 'static,
{
    let contractor_id: ContractorId = parse_id(&id)?;
    let contractor = state.contractor_service.get_contractor(contractor_id).await?;
    Ok(Reply::Ok(Json(contractor)))
}

/// `POST /api/contractors`
pub async fn create<CR, KR, PR, TR, RR>(
    State(state): State<AppState<CR, KR, PR, TR, RR>>,
    Json(req): Json<ContractorRequest>,
) -> Result<Reply<Contractor>, ApiError>
where
    CR: ClientRepository + Send + Sync + 'static,
    KR: ContractorRepository + Send + Sync + 'static,
    PR: ProjectRepository + Send + Sync + 'static,
    TR: TaskRepository + Send + Sync + 'static,
    RR: RecipeRepository + Send + Sync + 'static,
{
    let mut builder = Contractor::builder().name(req.name);
    if let Some(role) = req.role {
        builder = builder.role(role);
    }
    if let Some(rate) = req.hourly_rate {
        builder = builder.hourly_rate(rate);
    }

    let contractor = builder.build()?;
    let created = state
        .contractor_service
        .create_contractor(contractor)
        .await?;
    Ok(Reply::Created(Json(created)))
}

/// `PUT /api/contractors/{id}`
pub async fn update<CR, KR, PR, TR, RR>(
    State(state): State<AppState<CR, KR, PR, TR, RR>>,
    Path(id): Path<String>,
    Json(req): Json<ContractorRequest>,
) -> Result<Reply<Contractor>, ApiError>
where
    CR: ClientRepository + Send + Sync + 'static,
    KR: ContractorRepository + Send + Sync + 'static,
    PR: ProjectRepository + Send + Sync + 'static,
    TR: TaskRepository + Send + Sync + 'static,
    RR: RecipeRepository + Send + Sync + 'static,
{
    let contractor_id: ContractorId = parse_id(&id)?;
    let mut contractor = state.contractor_service.get_contractor(contractor_id).await?;
    contractor.name = req.name;
    contractor.role = req.role;
    contractor.hourly_rate = req.hourly_rate;

    let saved = state
        .contractor_service
        .update_contractor(contractor)
        .await?;
    Ok(Reply::Ok(Json(saved)))
}

/// `DELETE /api/contractors/{id}`
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
    let contractor_id: ContractorId = parse_id(&id)?;
    state
        .contractor_service
        .delete_contractor(contractor_id)
        .await?;
    Ok(Reply::NoContent)
}
