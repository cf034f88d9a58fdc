//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use opsdash_app::ports::{
    ClientRepository, ContractorRepository, ProjectRepository, RecipeRepository, TaskRepository,
};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests API routes under `/api`. Includes a [`TraceLayer`] that logs each
/// HTTP request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<CR, KR, PR, TR, RR>(state: AppState<CR, KR, PR, TR, RR>) -> Router
where
    CR: ClientRepository + Send + Sync + 'static,
    KR: ContractorRepository + Send + Sync + 'static,
    PR: ProjectRepository + Send + Sync + 'static,
    TR: TaskRepository + Send + Sync + 'static,
    RR: RecipeRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
