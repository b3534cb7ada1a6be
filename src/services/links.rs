use reqwest::Url;

use crate::models::MovieYear;

const SEARCH_ENGINE_URL: &str = "https://www.google.com/search";
const SEED_TITLE_CHARS: usize = 10;

/// Builds image URLs against a placeholder image service
#[derive(Debug, Clone)]
pub struct PlaceholderImages {
    base_url: String,
}

impl PlaceholderImages {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Stable per-movie placeholder, seeded from title and year
    pub fn seeded(&self, title: &str, year: &MovieYear) -> String {
        format!("{}/seed/{}/400/300", self.base_url, image_seed(title, year))
    }

    /// Last resort when even the seeded placeholder fails to load
    pub fn generic(&self) -> String {
        format!("{}/400/300?grayscale&blur=2", self.base_url)
    }
}

/// First ten ASCII alphanumerics of the title followed by the year
pub fn image_seed(title: &str, year: &MovieYear) -> String {
    let title_part: String = title
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(SEED_TITLE_CHARS)
        .collect();
    format!("{}{}", title_part, year)
}

/// Search-engine link for the "more info" action on a card
pub fn more_info_url(title: &str, year: &MovieYear) -> String {
    let query = format!("{} {} movie", title, year);
    match Url::parse_with_params(SEARCH_ENGINE_URL, &[("q", query.as_str())]) {
        Ok(url) => url.to_string(),
        // SEARCH_ENGINE_URL is a constant, valid URL
        Err(_) => SEARCH_ENGINE_URL.to_string(),
    }
}
