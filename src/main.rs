use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use trivia_api::api::{self, AppState};
use trivia_api::config::{Config, StorageBackend};
use trivia_api::infrastructure::database;
use trivia_api::infrastructure::repositories::InMemoryTriviaStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("trivia_api=debug,tower_http=debug")),
        )
        .init();

    let config = Config::from_env()?;

    let state = match config.storage {
        StorageBackend::Postgres => {
            tracing::info!("Connecting to database...");
            let pool = database::create_pool(&config.database).await?;
            tracing::info!("Database connected successfully");

            if config.database.run_migrations {
                tracing::info!("Running database migrations...");
                database::run_migrations(&pool).await?;
                tracing::info!("Database migrations completed");
            }

            AppState::postgres(pool)
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage, data is lost on shutdown");
            AppState::in_memory(Arc::new(InMemoryTriviaStore::seeded()))
        }
    };

    let app = api::router(state);

    // Start server
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutdown signal received");
}
