//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod clients;
#[allow(clippy::missing_errors_doc)]
pub mod contractors;
#[allow(clippy::missing_errors_doc)]
pub mod growth;
#[allow(clippy::missing_errors_doc)]
pub mod projects;
#[allow(clippy::missing_errors_doc)]
pub mod recipes;
#[allow(clippy::missing_errors_doc)]
pub mod tasks;

use std::str::FromStr;

use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use serde::Serialize;

use opsdash_app::ports::{
    ClientRepository, ContractorRepository, ProjectRepository, RecipeRepository, TaskRepository,
};
use opsdash_domain::error::ValidationError;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible successful responses from an API endpoint.
pub enum Reply<T> {
    Ok(Json<T>),
    Created(Json<T>),
    NoContent,
}

impl<T: Serialize> IntoResponse for Reply<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// Parse an id taken from the URL path.
pub(crate) fn parse_id<T>(raw: &str) -> Result<T, ApiError>
where
    T: FromStr<Err = ValidationError>,
{
    T::from_str(raw).map_err(ApiError::from)
}

/// Build the `/api` sub-router.
pub fn routes<CR, KR, PR, TR, RR>() -> Router<AppState<CR, KR, PR, TR, RR>>
where
    CR: ClientRepository + Send + Sync + 'static,
    KR: ContractorRepository + Send + Sync + 'static,
    PR: ProjectRepository + Send + Sync + 'static,
    TR: TaskRepository + Send + Sync + 'static,
    RR: RecipeRepository + Send + Sync + 'static,
{
    Router::new()
        // Clients
        .route(
            "/clients",
            get(clients::list::<CR, KR, PR, TR, RR>).post(clients::create::<CR, KR, PR, TR, RR>),
        )
        .route(
            "/clients/{id}",
            get(clients::get::<CR, KR, PR, TR, RR>)
                .put(clients::update::<CR, KR, PR, TR, RR>)
                .delete(clients::delete::<CR, KR, PR, TR, RR>),
        )
        // Contractors
        .route(
            "/contractors",
            get(contractors::list::<CR, KR, PR, TR, RR>)
                .post(contractors::create::<CR, KR, PR, TR, RR>),
        )
        .route(
            "/contractors/{id}",
            get(contractors::get::<CR, KR, PR, TR, RR>)
                .put(contractors::update::<CR, KR, PR, TR, RR>)
                .delete(contractors::delete::<CR, KR, PR, TR, RR>),
        )
        // Projects
        .route(
            "/projects",
            get(projects::list::<CR, KR, PR, TR, RR>).post(projects::create::<CR, KR, PR, TR, RR>),
        )
        .route(
            "/projects/{id}",
            get(projects::get::<CR, KR, PR, TR, RR>)
                .put(projects::update::<CR, KR, PR, TR, RR>)
                .delete(projects::delete::<CR, KR, PR, TR, RR>),
        )
        .route(
            "/projects/{id}/status",
            put(projects::change_status::<CR, KR, PR, TR, RR>),
        )
        // Tasks
        .route(
            "/tasks",
            get(tasks::list::<CR, KR, PR, TR, RR>).post(tasks::create::<CR, KR, PR, TR, RR>),
        )
        .route(
            "/tasks/{id}",
            get(tasks::get::<CR, KR, PR, TR, RR>)
                .put(tasks::update::<CR, KR, PR, TR, RR>)
                .delete(tasks::delete::<CR, KR, PR, TR, RR>),
        )
        .route(
            "/tasks/{id}/status",
            put(tasks::set_status::<CR, KR, PR, TR, RR>),
        )
        // Recipes
        .route(
            "/recipes",
            get(recipes::list::<CR, KR, PR, TR, RR>).post(recipes::create::<CR, KR, PR, TR, RR>),
        )
        .route(
            "/recipes/{id}",
            get(recipes::get::<CR, KR, PR, TR, RR>)
                .put(recipes::update::<CR, KR, PR, TR, RR>)
                .delete(recipes::delete::<CR, KR, PR, TR, RR>),
        )
        .route(
            "/recipes/{id}/active",
            put(recipes::set_active::<CR, KR, PR, TR, RR>),
        )
        // Growth lab
        .route("/growth/plan", post(growth::plan))
}
