use std::sync::Arc;

use crate::{
    models::AppSettings,
    storage::{KeyValueStore, StorageKey},
};

/// Persists [`AppSettings`] under a single storage key
#[derive(Clone)]
pub struct SettingsStore {
    storage: Arc<dyn KeyValueStore>,
}

impl SettingsStore {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    /// Reads settings, falling back to defaults
    ///
    /// A missing or unparseable value is replaced on disk by the defaults. A
    /// parseable object without a usable `numberOfRecommendations` yields the
    /// defaults but is left as it is.
    pub async fn load(&self) -> AppSettings {
        let raw = match self.storage.get(StorageKey::Settings.as_str()).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, backend = self.storage.name(), "Settings storage unavailable");
                return AppSettings::default();
            }
        };

        let Some(raw) = raw else {
            tracing::debug!("No stored settings, initializing defaults");
            let defaults = AppSettings::default();
            self.save(defaults).await;
            return defaults;
        };

        let value: serde_json::Value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!(error = %e, "Error parsing stored settings, resetting to defaults");
                let defaults = AppSettings::default();
                self.save(defaults).await;
                return defaults;
            }
        };

        match serde_json::from_value::<AppSettings>(value) {
            Ok(settings) => settings.clamped(),
            Err(e) => {
                tracing::warn!(error = %e, "Stored settings have no usable numberOfRecommendations");
                AppSettings::default()
            }
        }
    }

    /// Overwrites the stored settings; failures are only logged
    pub async fn save(&self, settings: AppSettings) {
        let result = match serde_json::to_string(&settings) {
            Ok(json) => self.storage.set(StorageKey::Settings.as_str(), &json).await,
            Err(e) => Err(e.into()),
        };

        match result {
            Ok(()) => tracing::info!(
                number_of_recommendations = settings.number_of_recommendations,
                "Settings saved"
            ),
            Err(e) => tracing::error!(error = %e, "Error saving settings"),
        }
    }
}
