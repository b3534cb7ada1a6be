use std::sync::Arc;

use crate::{
    models::{FeedbackLabel, MatchScore, Movie, MovieCard, PosterChain},
    services::{
        feedback::FeedbackStore,
        links::{more_info_url, PlaceholderImages},
        posters::{placeholder_chain, resolve_poster, PosterProvider},
    },
};

/// Genres shown on a card
pub const MAX_CARD_GENRES: usize = 4;

/// Assembles a card from already-resolved parts
///
/// Search results carry neither a match score nor feedback and never prompt
/// for feedback.
pub fn build_card(
    movie: &Movie,
    feedback: Option<FeedbackLabel>,
    poster: PosterChain,
    search_result: bool,
) -> MovieCard {
    let feedback = if search_result { None } else { feedback };
    let match_score = if search_result {
        None
    } else {
        movie.match_score.map(MatchScore::new)
    };

    MovieCard {
        title: movie.title.clone(),
        year: movie.year.clone(),
        heading: format!("{} ({})", movie.title, movie.year),
        summary: movie.summary.clone(),
        genres: movie.genres.iter().take(MAX_CARD_GENRES).cloned().collect(),
        match_score,
        show_feedback_prompt: !search_result && feedback.is_none(),
        feedback,
        poster,
        more_info_url: more_info_url(&movie.title, &movie.year),
        search_result,
    }
}

/// Builds cards for a batch of movies
///
/// Recommendation batches are cut to `limit`; search results are not. Poster
/// lookups run in parallel, and output order follows input order.
pub async fn build_cards(
    movies: Vec<Movie>,
    search_result: bool,
    limit: usize,
    feedback: &FeedbackStore,
    posters: Arc<dyn PosterProvider>,
    images: &PlaceholderImages,
) -> Vec<MovieCard> {
    let movies: Vec<Movie> = if search_result {
        movies
    } else {
        movies.into_iter().take(limit).collect()
    };

    let mut tasks = Vec::with_capacity(movies.len());
    for movie in &movies {
        let provider = posters.clone();
        let images = images.clone();
        let movie = movie.clone();
        tasks.push(tokio::spawn(async move {
            resolve_poster(provider.as_ref(), &images, &movie).await
        }));
    }

    let mut cards = Vec::with_capacity(movies.len());
    for (movie, task) in movies.iter().zip(tasks) {
        let poster = match task.await {
            Ok(poster) => poster,
            Err(e) => {
                tracing::error!(error = %e, title = %movie.title, "Poster task join error");
                placeholder_chain(images, movie)
            }
        };

        let recorded = if search_result {
            None
        } else {
            feedback
                .get_feedback(&movie.title, &movie.year)
                .await
                .map(|entry| entry.feedback)
        };

        cards.push(build_card(movie, recorded, poster, search_result));
    }

    tracing::info!(
        cards = cards.len(),
        search_result = search_result,
        "Movie cards built"
    );

    cards
}
