//! Durable key-value storage behind the feedback and settings stores.
//!
//! The stores only need two capabilities: read a string by key and
//! overwrite a string by key. Backends:
//! - [`MemoryStore`]: process-local, used in tests
//! - [`FileStore`]: one JSON object file on disk
//! - [`RedisStore`]: keys under a prefix in Redis

use std::fmt::Display;

use crate::error::AppResult;

pub mod file;
pub mod memory;
pub mod redis;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use self::redis::RedisStore;

/// Fixed keys under which whole collections are serialized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    /// JSON array of feedback entries
    Feedback,
    /// JSON object with the user's settings
    Settings,
}

impl StorageKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::Feedback => "cineSuggestMovieFeedback",
            StorageKey::Settings => "cineSuggestAppSettings",
        }
    }
}

impl Display for StorageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// String key-value storage that survives restarts (except [`MemoryStore`])
///
/// `set` replaces the whole value stored under `key`. There is no
/// compare-and-swap: two writers racing on one key leave the last write.
#[async_trait::async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns `None` when nothing has been stored under `key`
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Backend name for logging
    fn name(&self) -> &'static str;
}
