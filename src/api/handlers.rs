use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::models::{AppSettings, FeedbackEntry, FeedbackLabel, Movie, MovieCard, MovieYear, PosterChain};
use crate::services::{cards, posters};

use super::AppState;

// Request types

#[derive(Debug, Deserialize)]
pub struct SaveFeedbackRequest {
    pub title: String,
    pub year: MovieYear,
    pub feedback: FeedbackLabel,
}

#[derive(Debug, Deserialize)]
pub struct FeedbackLookupRequest {
    pub title: String,
    pub year: MovieYear,
}

#[derive(Debug, Deserialize)]
pub struct PosterQuery {
    pub title: String,
    pub year: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardsRequest {
    pub movies: Vec<Movie>,
    #[serde(default)]
    pub search_result: bool,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Record feedback for a movie
pub async fn save_feedback(
    State(state): State<AppState>,
    Json(request): Json<SaveFeedbackRequest>,
) -> AppResult<StatusCode> {
    if request.title.is_empty() {
        return Err(AppError::InvalidInput("title must not be empty".to_string()));
    }

    state
        .feedback
        .save_feedback(&request.title, &request.year, request.feedback)
        .await;

    Ok(StatusCode::NO_CONTENT)
}

/// Look up feedback for a movie; `null` when none was recorded
pub async fn lookup_feedback(
    State(state): State<AppState>,
    Json(request): Json<FeedbackLookupRequest>,
) -> Json<Option<FeedbackEntry>> {
    Json(
        state
            .feedback
            .get_feedback(&request.title, &request.year)
            .await,
    )
}

/// Get current settings
pub async fn get_settings(State(state): State<AppState>) -> Json<AppSettings> {
    Json(state.settings.load().await)
}

/// Replace settings
pub async fn update_settings(
    State(state): State<AppState>,
    Json(settings): Json<AppSettings>,
) -> AppResult<Json<AppSettings>> {
    settings.validate()?;
    state.settings.save(settings).await;
    Ok(Json(settings))
}

/// Resolve the poster chain for a single movie
pub async fn get_poster(
    State(state): State<AppState>,
    Query(query): Query<PosterQuery>,
) -> AppResult<Json<PosterChain>> {
    if query.title.is_empty() {
        return Err(AppError::InvalidInput("title must not be empty".to_string()));
    }

    let year = match query.year.parse::<i64>() {
        Ok(year) => MovieYear::Number(year),
        Err(_) => MovieYear::Text(query.year),
    };

    let movie = Movie {
        title: query.title,
        year,
        summary: None,
        genres: Vec::new(),
        match_score: None,
        poster_url: None,
    };

    let chain = posters::resolve_poster(state.posters.as_ref(), &state.images, &movie).await;
    Ok(Json(chain))
}

/// Build movie cards; recommendations are limited to the configured count
pub async fn build_cards(
    State(state): State<AppState>,
    Json(request): Json<CardsRequest>,
) -> Json<Vec<MovieCard>> {
    let limit = state.settings.load().await.number_of_recommendations as usize;

    tracing::info!(
        movies = request.movies.len(),
        search_result = request.search_result,
        limit = limit,
        "Processing cards request"
    );

    let cards = cards::build_cards(
        request.movies,
        request.search_result,
        limit,
        &state.feedback,
        state.posters.clone(),
        &state.images,
    )
    .await;

    Json(cards)
}
