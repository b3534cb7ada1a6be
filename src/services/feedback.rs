use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{FeedbackEntry, FeedbackLabel, MovieYear},
    storage::{KeyValueStore, StorageKey},
};

/// Remembers what the user thought of movies they already watched
///
/// The whole collection lives under one storage key as a JSON array and is
/// rewritten on every save. Nothing here coordinates concurrent savers, so
/// overlapping read-modify-write cycles resolve as last-writer-wins.
#[derive(Clone)]
pub struct FeedbackStore {
    storage: Arc<dyn KeyValueStore>,
}

impl FeedbackStore {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    /// Records feedback for (title, year), replacing any earlier entry
    ///
    /// Failures are logged and dropped; callers never see them.
    pub async fn save_feedback(&self, title: &str, year: &MovieYear, feedback: FeedbackLabel) {
        if title.is_empty() {
            tracing::warn!(year = %year, "Ignoring feedback for empty title");
            return;
        }

        if let Err(e) = self.try_save(title, year, feedback).await {
            tracing::error!(
                error = %e,
                title = %title,
                year = %year,
                backend = self.storage.name(),
                "Failed to save movie feedback"
            );
            return;
        }

        tracing::info!(title = %title, year = %year, feedback = %feedback, "Movie feedback saved");
    }

    /// Looks up the feedback recorded for (title, year)
    ///
    /// Returns `None` when nothing was recorded and also when storage cannot
    /// be read.
    pub async fn get_feedback(&self, title: &str, year: &MovieYear) -> Option<FeedbackEntry> {
        let entries = match self.load_entries().await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(error = %e, backend = self.storage.name(), "Feedback storage unavailable");
                return None;
            }
        };

        entries.into_iter().find(|entry| entry.is_for(title, year))
    }

    async fn try_save(&self, title: &str, year: &MovieYear, feedback: FeedbackLabel) -> AppResult<()> {
        // An unreadable backend aborts the save so existing entries are not overwritten
        let mut entries = self.load_entries().await?;
        entries.retain(|entry| !entry.is_for(title, year));
        entries.push(FeedbackEntry::new(title, year.clone(), feedback));

        let json = serde_json::to_string(&entries)?;
        self.storage.set(StorageKey::Feedback.as_str(), &json).await
    }

    /// Reads the stored collection; missing or malformed data reads as
    /// empty, a failing backend is an error
    async fn load_entries(&self) -> AppResult<Vec<FeedbackEntry>> {
        let Some(raw) = self.storage.get(StorageKey::Feedback.as_str()).await? else {
            return Ok(Vec::new());
        };

        Ok(serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Stored feedback is malformed, treating as empty");
            Vec::new()
        }))
    }
}
