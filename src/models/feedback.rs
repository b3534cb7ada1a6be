use serde::{Deserialize, Serialize};
use std::fmt::Display;

use super::MovieYear;

/// How the user felt about a movie they already watched
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FeedbackLabel {
    #[serde(rename = "Loved it!")]
    LovedIt,
    #[serde(rename = "Liked it")]
    LikedIt,
    #[serde(rename = "Not my vibe")]
    NotMyVibe,
}

impl FeedbackLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackLabel::LovedIt => "Loved it!",
            FeedbackLabel::LikedIt => "Liked it",
            FeedbackLabel::NotMyVibe => "Not my vibe",
        }
    }
}

impl Display for FeedbackLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single persisted feedback record
///
/// The pair (`title`, `year`) is the identity: at most one entry per pair is
/// kept in the stored collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedbackEntry {
    pub title: String,
    pub year: MovieYear,
    pub feedback: FeedbackLabel,
}

impl FeedbackEntry {
    pub fn new(title: impl Into<String>, year: MovieYear, feedback: FeedbackLabel) -> Self {
        Self {
            title: title.into(),
            year,
            feedback,
        }
    }

    /// Case-sensitive title match plus exact year match
    pub fn is_for(&self, title: &str, year: &MovieYear) -> bool {
        self.title == title && &self.year == year
    }
}
