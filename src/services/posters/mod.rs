//! Poster resolution
//!
//! A poster provider looks a movie up by title and year. Resolution never
//! fails: a missing poster or a failed lookup degrades to the movie's own
//! poster URL, then to a seeded placeholder, with a generic image as the
//! final entry of the chain.

use chrono::Utc;

use crate::{
    error::AppResult,
    models::{Movie, MovieYear, PosterChain, PosterSource},
    services::links::PlaceholderImages,
};

pub mod omdb;

pub use omdb::OmdbProvider;

/// Sentinel the metadata API uses for "no poster"
pub const NO_POSTER: &str = "N/A";

/// Trait for movie metadata providers that can find a poster
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait PosterProvider: Send + Sync {
    /// Returns the poster URL, or `None` when the provider has none
    async fn lookup_poster(&self, title: &str, year: &MovieYear) -> AppResult<Option<String>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Normalizes a raw `Poster` field: empty and `"N/A"` mean no poster
pub fn usable_poster(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|p| !p.is_empty() && *p != NO_POSTER)
        .map(str::to_string)
}

/// Chain used when nothing better than the placeholder is known
pub fn placeholder_chain(images: &PlaceholderImages, movie: &Movie) -> PosterChain {
    let placeholder = images.seeded(&movie.title, &movie.year);
    PosterChain {
        primary: placeholder.clone(),
        placeholder,
        fallback: images.generic(),
        source: PosterSource::Placeholder,
        resolved_at: Utc::now(),
    }
}

/// Builds the image cascade for a movie
pub async fn resolve_poster(
    provider: &dyn PosterProvider,
    images: &PlaceholderImages,
    movie: &Movie,
) -> PosterChain {
    let placeholder = images.seeded(&movie.title, &movie.year);
    let fallback = images.generic();

    let looked_up = match provider.lookup_poster(&movie.title, &movie.year).await {
        Ok(poster) => poster,
        Err(e) => {
            tracing::warn!(
                error = %e,
                title = %movie.title,
                year = %movie.year,
                provider = provider.name(),
                "Poster lookup failed, falling back"
            );
            None
        }
    };

    let provided = movie
        .poster_url
        .as_deref()
        .filter(|url| !url.trim().is_empty());

    let (primary, source) = match (looked_up, provided) {
        (Some(url), _) => (url, PosterSource::Lookup),
        (None, Some(url)) => (url.to_string(), PosterSource::Provided),
        (None, None) => (placeholder.clone(), PosterSource::Placeholder),
    };

    tracing::debug!(title = %movie.title, source = ?source, "Poster resolved");

    PosterChain {
        primary,
        placeholder,
        fallback,
        source,
        resolved_at: Utc::now(),
    }
}
