use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use cine_suggest_api::{
    api::{create_router, AppState},
    config::{Config, StorageBackend},
    services::{OmdbProvider, PlaceholderImages},
    storage::{self, FileStore, KeyValueStore, MemoryStore, RedisStore},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("cine_suggest_api=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    let storage = create_storage(&config).await?;
    tracing::info!(backend = storage.name(), "Storage backend ready");

    let posters = Arc::new(OmdbProvider::new(
        config.omdb_api_key.clone(),
        config.omdb_api_url.clone(),
    ));
    let images = PlaceholderImages::new(config.placeholder_image_url.clone());

    let state = AppState::new(storage, posters, images);
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn create_storage(config: &Config) -> anyhow::Result<Arc<dyn KeyValueStore>> {
    let storage: Arc<dyn KeyValueStore> = match config.storage_backend {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage, feedback will not survive a restart");
            Arc::new(MemoryStore::new())
        }
        StorageBackend::File => Arc::new(FileStore::new(&config.storage_path)),
        StorageBackend::Redis => {
            let client = storage::redis::create_redis_client(&config.redis_url)?;
            Arc::new(RedisStore::connect(client, config.redis_key_prefix.clone()).await?)
        }
    };
    Ok(storage)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
