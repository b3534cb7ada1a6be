use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::sync::Mutex;

use crate::error::{AppError, AppResult};

use super::KeyValueStore;

/// Durable store backed by a single JSON object file
///
/// Every `set` rewrites the whole file through a sibling temp file and a
/// rename, so a crash mid-write leaves the previous contents intact.
///
/// A `set` on a corrupt file starts from an empty map: the file is replaced
/// by one holding only the key being written, and every other key is lost.
pub struct FileStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles on the file within this process
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> AppResult<BTreeMap<String, String>> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(AppError::Storage(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&contents).map_err(|e| {
            AppError::Storage(format!("Corrupt store file {}: {}", self.path.display(), e))
        })
    }

    async fn write_all(&self, entries: &BTreeMap<String, String>) -> AppResult<()> {
        let json = serde_json::to_string_pretty(entries)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| AppError::Storage(e.to_string()))?;
            }
        }

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        tokio::fs::write(&tmp, json)
            .await
            .map_err(|e| AppError::Storage(format!("Failed to write {}: {}", tmp.display(), e)))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| AppError::Storage(format!("Failed to replace {}: {}", self.path.display(), e)))?;

        Ok(())
    }
}

#[async_trait::async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read_all().await?;
        Ok(entries.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let _guard = self.lock.lock().await;
        // A corrupt file is replaced rather than blocking all future writes
        let mut entries = match self.read_all().await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(error = %e, path = %self.path.display(), "Discarding unreadable store file");
                BTreeMap::new()
            }
        };
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries).await?;

        tracing::debug!(key = %key, path = %self.path.display(), "Store file updated");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "file"
    }
}
