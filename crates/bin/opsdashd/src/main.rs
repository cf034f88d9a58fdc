//! # opsdashd: operations dashboard daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (env vars, config file)
//! - Initialize logging
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository implementations (adapters)
//! - Construct the automation engine and application services, injecting
//!   repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

mod config;

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use opsdash_adapter_http_axum::state::AppState;
use opsdash_adapter_storage_sqlite_sqlx::{
    SqliteClientRepository, SqliteContractorRepository, SqliteProjectRepository,
    SqliteRecipeRepository, SqliteTaskRepository,
};
use opsdash_app::automation_engine::AutomationEngine;
use opsdash_app::services::client_service::ClientService;
use opsdash_app::services::contractor_service::ContractorService;
use opsdash_app::services::project_service::ProjectService;
use opsdash_app::services::recipe_service::RecipeService;
use opsdash_app::services::task_service::TaskService;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading configuration")?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.logging.filter).context("parsing log filter")?)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database
    let db = opsdash_adapter_storage_sqlite_sqlx::Config {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await
    .context("opening database")?;
    let pool = db.pool().clone();

    // Repositories
    let client_repo = SqliteClientRepository::new(pool.clone());
    let contractor_repo = SqliteContractorRepository::new(pool.clone());
    let project_repo = Arc::new(SqliteProjectRepository::new(pool.clone()));
    let task_repo = Arc::new(SqliteTaskRepository::new(pool.clone()));
    let recipe_repo = Arc::new(SqliteRecipeRepository::new(pool));

    // Automation engine
    let engine = AutomationEngine::new(
        Arc::clone(&recipe_repo),
        Arc::clone(&project_repo),
        Arc::clone(&task_repo),
    )
    .with_options(config.match_options());

    // Services
    let state = AppState::new(
        ClientService::new(client_repo),
        ContractorService::new(contractor_repo),
        ProjectService::new(project_repo, engine),
        TaskService::new(task_repo),
        RecipeService::new(recipe_repo),
    );
    let app = opsdash_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding {bind_addr}"))?;
    tracing::info!(addr = %bind_addr, "opsdashd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving http")?;

    tracing::info!("opsdashd stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "cannot listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown requested");
}
