//! OMDb poster provider
//!
//! One unauthenticated GET per movie: `/?t={title}&y={year}&apikey={key}`.
//! Only the `Poster` field of the response is used.

use reqwest::Client as HttpClient;
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::MovieYear,
    services::posters::{usable_poster, PosterProvider},
};

#[derive(Clone)]
pub struct OmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

/// The subset of an OMDb title response we read
#[derive(Debug, Deserialize)]
pub struct OmdbTitle {
    #[serde(rename = "Title", default)]
    pub title: Option<String>,
    #[serde(rename = "Poster", default)]
    pub poster: Option<String>,
    /// "True" or "False"
    #[serde(rename = "Response", default)]
    pub response: Option<String>,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

impl OmdbTitle {
    fn found(&self) -> bool {
        !matches!(self.response.as_deref(), Some(r) if r.eq_ignore_ascii_case("false"))
    }
}

impl OmdbProvider {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait::async_trait]
impl PosterProvider for OmdbProvider {
    async fn lookup_poster(&self, title: &str, year: &MovieYear) -> AppResult<Option<String>> {
        let url = format!("{}/", self.api_url);
        let year = year.to_string();

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("t", title),
                ("y", year.as_str()),
                ("apikey", self.api_key.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "OMDb API returned status {}: {}",
                status, body
            )));
        }

        let details: OmdbTitle = response.json().await?;

        if !details.found() {
            tracing::debug!(
                title = %title,
                year = %year,
                error = details.error.as_deref().unwrap_or("unknown"),
                provider = "omdb",
                "Title not found"
            );
            return Ok(None);
        }

        let poster = usable_poster(details.poster.as_deref());

        tracing::info!(
            title = %title,
            year = %year,
            found = poster.is_some(),
            provider = "omdb",
            "Poster lookup completed"
        );

        Ok(poster)
    }

    fn name(&self) -> &'static str {
        "omdb"
    }
}
