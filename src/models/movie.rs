use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use super::FeedbackLabel;

/// Release year of a movie, as supplied by the caller
///
/// Years arrive either as JSON numbers or strings. The two forms are kept
/// apart: `2010` and `"2010"` are different identities.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum MovieYear {
    Number(i64),
    Text(String),
}

impl Display for MovieYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MovieYear::Number(year) => write!(f, "{}", year),
            MovieYear::Text(year) => write!(f, "{}", year),
        }
    }
}

impl From<i64> for MovieYear {
    fn from(year: i64) -> Self {
        MovieYear::Number(year)
    }
}

impl From<&str> for MovieYear {
    fn from(year: &str) -> Self {
        MovieYear::Text(year.to_string())
    }
}

/// A recommended (or searched-for) movie handed to us by the caller
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub title: String,
    pub year: MovieYear,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    /// Opaque taste-match score, nominally 0 to 100
    #[serde(default)]
    pub match_score: Option<f64>,
    #[serde(default)]
    pub poster_url: Option<String>,
}

/// Colour band for a taste-match score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    High,
    Medium,
    Low,
    Unscored,
}

impl MatchTier {
    pub fn for_score(score: f64) -> Self {
        if score >= 75.0 {
            MatchTier::High
        } else if score >= 50.0 {
            MatchTier::Medium
        } else if score != 0.0 && !score.is_nan() {
            MatchTier::Low
        } else {
            MatchTier::Unscored
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchScore {
    pub value: f64,
    pub tier: MatchTier,
}

impl MatchScore {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            tier: MatchTier::for_score(value),
        }
    }
}

/// Where the primary poster URL came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PosterSource {
    /// Found by the metadata lookup
    Lookup,
    /// Supplied with the movie itself
    Provided,
    /// Nothing better was available
    Placeholder,
}

/// Ordered image URLs a client should try, first to last
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PosterChain {
    pub primary: String,
    pub placeholder: String,
    pub fallback: String,
    pub source: PosterSource,
    pub resolved_at: DateTime<Utc>,
}

impl PosterChain {
    /// URLs in load order with consecutive duplicates removed
    pub fn cascade(&self) -> Vec<&str> {
        let mut urls = vec![
            self.primary.as_str(),
            self.placeholder.as_str(),
            self.fallback.as_str(),
        ];
        urls.dedup();
        urls
    }
}

/// Everything a client needs to render one movie card
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MovieCard {
    pub title: String,
    pub year: MovieYear,
    pub heading: String,
    pub summary: Option<String>,
    pub genres: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_score: Option<MatchScore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<FeedbackLabel>,
    pub show_feedback_prompt: bool,
    pub poster: PosterChain,
    pub more_info_url: String,
    pub search_result: bool,
}
