use std::sync::Arc;

use crate::services::{FeedbackStore, PlaceholderImages, PosterProvider, SettingsStore};
use crate::storage::KeyValueStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub feedback: FeedbackStore,
    pub settings: SettingsStore,
    pub posters: Arc<dyn PosterProvider>,
    pub images: PlaceholderImages,
}

impl AppState {
    /// Wires both stores to the same storage backend
    pub fn new(
        storage: Arc<dyn KeyValueStore>,
        posters: Arc<dyn PosterProvider>,
        images: PlaceholderImages,
    ) -> Self {
        Self {
            feedback: FeedbackStore::new(storage.clone()),
            settings: SettingsStore::new(storage),
            posters,
            images,
        }
    }
}
