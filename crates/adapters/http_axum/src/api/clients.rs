//! JSON REST handlers for clients.

use axum::Json;
use axum::extract::{Path, State};
use serde::Deserialize;

use opsdash_app::ports::{
    ClientRepository, ContractorRepository, ProjectRepository, RecipeRepository, TaskRepository,
};
use opsdash_domain::client::Client;
use opsdash_domain::id::ClientId;

use super::{Reply, parse_id};
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating or replacing a client.
#[derive(Deserialize)]
pub struct ClientRequest {
    pub name: String,
    pub industry: Option<String>,
    pub email: Option<String>,
}

/// `GET /api/clients`
pub async fn list<CR, KR, PR, TR, RR>(
    State(state): State<AppState<CR, KR, PR, TR, RR>>,
) -> Result<Reply<Vec<Client>>, ApiError>
where
    CR: ClientRepository + Send + Sync + 'static,
    KR: ContractorRepository + Send + Sync + 'static,
    PR: ProjectRepository + Send + Sync + 'static,
    TR: TaskRepository + Send + Sync + 'static,
    RR: RecipeRepository + Send + Sync + 'static,
{
    let clients = state.client_service.list_clients().await?;
    Ok(Reply::Ok(Json(clients)))
}

/// `GET /api/clients/{id}`
pub async fn get<CR, KR, PR, TR, RR>(
    State(state): State<AppState<CR, KR, PR, TR, RR>>,
    Path(id): Path<String>,
) -> Result<Reply<Client>, ApiError>
where
    CR: ClientRepository + Send + Sync + 'static,
    KR: ContractorRepository + Send + Sync + 'static,
    PR: ProjectRepository + Send + Sync + 'static,
    TR: TaskRepository + Send + Sync + 'static,
    RR: RecipeRepository + Send + Sync + 'static,
{
    let client_id: ClientId = parse_id(&id)?;
    let client = state.client_service.get_client(client_id).await?;
    Ok(Reply::Ok(Json(client)))
}

/// `POST /api/clients`
pub async fn create<CR, KR, PR, TR, RR>(
    State(state): State<AppState<CR, KR, PR, TR, RR>>,
    Json(req): Json<ClientRequest>,
) -> Result<Reply<Client>, ApiError>
where
    CR: ClientRepository + Send + Sync + 'static,
    KR: ContractorRepository + Send + Sync + 'static,
    PR: ProjectRepository + Send + Sync + 'static,
    TR: TaskRepository + Send + Sync + 'static,
    RR: RecipeRepository + Send + Sync + 'static,
{
    let mut builder = Client::builder().name(req.name);
    if let Some(industry) = req.industry {
        builder = builder.industry(industry);
    }
    if let Some(email) = req.email {
        builder = builder.email(email);
    }

    let client = builder.build()?;
    let created = state.client_service.create_client(client).await?;
    Ok(Reply::Created(Json(created)))
}

/// `PUT /api/clients/{id}`
pub async fn update<CR, KR, PR, TR, RR>(
    State(state): State<AppState<CR, KR, PR, TR, RR>>,
    Path(id): Path<String>,
    Json(req): Json<ClientRequest>,
) -> Result<Reply<Client>, ApiError>
where
    CR: ClientRepository + Send + Sync + 'static,
    KR: ContractorRepository + Send + Sync + 'static,
    PR: ProjectRepository + Send + Sync + 'static,
    TR: TaskRepository + Send + Sync + 'static,
    RR: RecipeRepository + Send + Sync + 'static,
{
    let client_id: ClientId = parse_id(&id)?;
    let mut client = state.client_service.get_client(client_id).await?;
    client.name = req.name;
    client.industry = req.industry;
    client.email = req.email;

    let saved = state.client_service.update_client(client).await?;
    Ok(Reply::Ok(Json(saved)))
}

/// `DELETE /api/clients/{id}`
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
    let client_id: ClientId = parse_id(&id)?;
    state.client_service.delete_client(client_id).await?;
    Ok(Reply::NoContent)
}
