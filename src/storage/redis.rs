use ::redis::aio::ConnectionManager;
use ::redis::{AsyncCommands, Client};

use crate::error::AppResult;

use super::KeyValueStore;

/// Creates a Redis client for the storage backend
pub fn create_redis_client(redis_url: &str) -> anyhow::Result<Client> {
    let client = Client::open(redis_url)?;
    Ok(client)
}

/// Durable store backed by Redis
///
/// Values are written without a TTL. Every key is namespaced with `prefix`
/// so several deployments can share one Redis instance.
#[derive(Clone)]
pub struct RedisStore {
    connection: ConnectionManager,
    prefix: String,
}

impl RedisStore {
    /// Connects to Redis; the connection manager reconnects on its own after
    /// transient failures
    pub async fn connect(client: Client, prefix: impl Into<String>) -> AppResult<Self> {
        let connection = ConnectionManager::new(client).await?;
        let prefix = prefix.into();

        tracing::info!(prefix = %prefix, "Connected to Redis storage backend");

        Ok(Self { connection, prefix })
    }

    fn namespaced(&self, key: &str) -> String {
        namespaced_key(&self.prefix, key)
    }
}

fn namespaced_key(prefix: &str, key: &str) -> String {
    format!("{}{}", prefix, key)
}

#[async_trait::async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let mut conn = self.connection.clone();
        let value: Option<String> = conn.get(self.namespaced(key)).await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let mut conn = self.connection.clone();
        let _: () = conn.set(self.namespaced(key), value).await?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "redis"
    }
}
