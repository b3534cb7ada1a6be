use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Smallest number of recommendations a user can ask for
pub const MIN_RECOMMENDATIONS: i64 = 1;
/// Largest number of recommendations a user can ask for
pub const MAX_RECOMMENDATIONS: i64 = 4;
/// Used when nothing valid has been stored yet
pub const DEFAULT_RECOMMENDATIONS: i64 = 3;

/// User-adjustable application settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    /// Recommendations shown per search, 1 to 4
    ///
    /// Signed so that negative or oversized input can be clamped or rejected
    /// instead of failing to deserialize.
    pub number_of_recommendations: i64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            number_of_recommendations: DEFAULT_RECOMMENDATIONS,
        }
    }
}

impl AppSettings {
    /// Rejects values the settings slider could never produce
    pub fn validate(&self) -> AppResult<()> {
        if !(MIN_RECOMMENDATIONS..=MAX_RECOMMENDATIONS).contains(&self.number_of_recommendations) {
            return Err(AppError::InvalidInput(format!(
                "numberOfRecommendations must be between {} and {}, got {}",
                MIN_RECOMMENDATIONS, MAX_RECOMMENDATIONS, self.number_of_recommendations
            )));
        }
        Ok(())
    }

    pub fn clamped(self) -> Self {
        Self {
            number_of_recommendations: self
                .number_of_recommendations
                .clamp(MIN_RECOMMENDATIONS, MAX_RECOMMENDATIONS),
        }
    }
}
