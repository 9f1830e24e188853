//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;
use tuiter_common::{AppConfig, AppError, StoreBackend};
use tuiter_db::{
    create_pool, run_migrations, DatabaseConfig, MemoryStore, PgReactionRepository,
    PgTuitRepository,
};
use tuiter_service::ServiceContextBuilder;

use crate::middleware::{apply_middleware, apply_rate_limit};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// # Errors
/// Returns `AppError::Config` if the rate limit settings are unusable
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();
    let api = apply_rate_limit(create_router(), &config.rate_limit)?;
    let router = apply_middleware(
        api.merge(health_routes()),
        &config.cors,
        config.app.env.is_production(),
    );
    Ok(router.with_state(state))
}

/// Initialize the configured store and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    match config.store {
        StoreBackend::Postgres => create_postgres_app_state(config).await,
        StoreBackend::Memory => {
            info!("Using in-memory store; data is lost on restart");
            create_memory_app_state(config, MemoryStore::new())
        }
    }
}

/// Create AppState over an existing in-memory store
pub fn create_memory_app_state(config: AppConfig, store: MemoryStore) -> Result<AppState, AppError> {
    let service_context = ServiceContextBuilder::new()
        .like_repo(Arc::new(store.likes()))
        .dislike_repo(Arc::new(store.dislikes()))
        .tuit_repo(Arc::new(store.tuits()))
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

async fn create_postgres_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let url = config
        .database
        .url
        .clone()
        .ok_or_else(|| AppError::Config("DATABASE_URL is required".to_string()))?;

    info!("Connecting to PostgreSQL...");
    let db_config = DatabaseConfig::new(
        url,
        config.database.max_connections,
        config.database.min_connections,
    );
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if config.database.run_migrations {
        info!(dir = %config.database.migrations_dir, "Running migrations");
        run_migrations(&pool, &config.database.migrations_dir)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
    }

    let service_context = ServiceContextBuilder::new()
        .like_repo(Arc::new(PgReactionRepository::likes(pool.clone())))
        .dislike_repo(Arc::new(PgReactionRepository::dislikes(pool.clone())))
        .tuit_repo(Arc::new(PgTuitRepository::new(pool)))
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid API address: {e}")))?;

    let state = create_app_state(config).await?;
    let app = create_app(state)?;

    run_server(app, addr).await
}
