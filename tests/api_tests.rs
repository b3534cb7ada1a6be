use std::sync::Arc;

use axum_test::TestServer;
use serde_json::json;

use cine_suggest_api::api::{create_router, AppState};
use cine_suggest_api::error::{AppError, AppResult};
use cine_suggest_api::models::MovieYear;
use cine_suggest_api::services::{PlaceholderImages, PosterProvider};
use cine_suggest_api::storage::{FileStore, KeyValueStore, MemoryStore, StorageKey};

/// Knows posters for a fixed set of titles and fails for "Broken"
struct StaticPosters;

#[async_trait::async_trait]
impl PosterProvider for StaticPosters {
    async fn lookup_poster(&self, title: &str, _year: &MovieYear) -> AppResult<Option<String>> {
        match title {
            "Dune" => Ok(Some("https://img.example/dune.jpg".to_string())),
            "Broken" => Err(AppError::ExternalApi("upstream down".to_string())),
            _ => Ok(None),
        }
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

fn create_test_server_with(storage: Arc<dyn KeyValueStore>) -> TestServer {
    let state = AppState::new(
        storage,
        Arc::new(StaticPosters),
        PlaceholderImages::new("https://picsum.photos"),
    );
    let app = create_router(state);
    TestServer::new(app).unwrap()
}

fn create_test_server() -> TestServer {
    create_test_server_with(Arc::new(MemoryStore::new()))
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_feedback_last_write_wins() {
    let server = create_test_server();

    for feedback in ["Loved it!", "Liked it"] {
        let response = server
            .post("/api/v1/feedback")
            .json(&json!({
                "title": "Inception",
                "year": 2010,
                "feedback": feedback
            }))
            .await;
        response.assert_status(axum::http::StatusCode::NO_CONTENT);
    }

    let response = server
        .post("/api/v1/feedback/lookup")
        .json(&json!({ "title": "Inception", "year": 2010 }))
        .await;
    response.assert_status_ok();
    let entry: serde_json::Value = response.json();
    assert_eq!(
        entry,
        json!({ "title": "Inception", "year": 2010, "feedback": "Liked it" })
    );
}

#[tokio::test]
async fn test_feedback_lookup_unknown_is_null() {
    let server = create_test_server();
    let response = server
        .post("/api/v1/feedback/lookup")
        .json(&json!({ "title": "Heat", "year": 1995 }))
        .await;
    response.assert_status_ok();
    let entry: serde_json::Value = response.json();
    assert!(entry.is_null());
}

#[tokio::test]
async fn test_feedback_rejects_empty_title() {
    let server = create_test_server();
    let response = server
        .post("/api/v1/feedback")
        .json(&json!({ "title": "", "year": 2010, "feedback": "Liked it" }))
        .await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_feedback_rejects_unknown_label() {
    let server = create_test_server();
    let response = server
        .post("/api/v1/feedback")
        .json(&json!({ "title": "Dune", "year": 2021, "feedback": "Meh" }))
        .await;
    assert!(response.status_code().is_client_error());
}

#[tokio::test]
async fn test_two_movies_persisted_as_two_entries() {
    let storage = Arc::new(MemoryStore::new());
    let server = create_test_server_with(storage.clone());

    server
        .post("/api/v1/feedback")
        .json(&json!({ "title": "Dune", "year": 2021, "feedback": "Loved it!" }))
        .await
        .assert_status(axum::http::StatusCode::NO_CONTENT);
    server
        .post("/api/v1/feedback")
        .json(&json!({ "title": "Arrival", "year": 2016, "feedback": "Not my vibe" }))
        .await
        .assert_status(axum::http::StatusCode::NO_CONTENT);

    let raw = storage
        .get(StorageKey::Feedback.as_str())
        .await
        .unwrap()
        .unwrap();
    let stored: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored.len(), 2);
}

#[tokio::test]
async fn test_feedback_survives_restart_with_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cine-suggest.json");

    let server = create_test_server_with(Arc::new(FileStore::new(&path)));
    server
        .post("/api/v1/feedback")
        .json(&json!({ "title": "Arrival", "year": 2016, "feedback": "Not my vibe" }))
        .await
        .assert_status(axum::http::StatusCode::NO_CONTENT);
    drop(server);

    let server = create_test_server_with(Arc::new(FileStore::new(&path)));
    let response = server
        .post("/api/v1/feedback/lookup")
        .json(&json!({ "title": "Arrival", "year": 2016 }))
        .await;
    let entry: serde_json::Value = response.json();
    assert_eq!(entry["feedback"], "Not my vibe");
}

#[tokio::test]
async fn test_settings_default_and_update() {
    let server = create_test_server();

    let response = server.get("/api/v1/settings").await;
    response.assert_status_ok();
    let settings: serde_json::Value = response.json();
    assert_eq!(settings, json!({ "numberOfRecommendations": 3 }));

    let response = server
        .put("/api/v1/settings")
        .json(&json!({ "numberOfRecommendations": 1 }))
        .await;
    response.assert_status_ok();

    let settings: serde_json::Value = server.get("/api/v1/settings").await.json();
    assert_eq!(settings["numberOfRecommendations"], 1);
}

#[tokio::test]
async fn test_settings_out_of_range_rejected() {
    let server = create_test_server();
    let response = server
        .put("/api/v1/settings")
        .json(&json!({ "numberOfRecommendations": 7 }))
        .await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);

    let settings: serde_json::Value = server.get("/api/v1/settings").await.json();
    assert_eq!(settings["numberOfRecommendations"], 3);
}

#[tokio::test]
async fn test_negative_settings_rejected_as_bad_request() {
    let server = create_test_server();
    let response = server
        .put("/api/v1/settings")
        .json(&json!({ "numberOfRecommendations": -2 }))
        .await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);

    let settings: serde_json::Value = server.get("/api/v1/settings").await.json();
    assert_eq!(settings["numberOfRecommendations"], 3);
}

#[tokio::test]
async fn test_poster_lookup_and_fallbacks() {
    let server = create_test_server();

    let found: serde_json::Value = server
        .get("/api/v1/posters")
        .add_query_param("title", "Dune")
        .add_query_param("year", "2021")
        .await
        .json();
    assert_eq!(found["primary"], "https://img.example/dune.jpg");
    assert_eq!(found["source"], "lookup");

    let broken: serde_json::Value = server
        .get("/api/v1/posters")
        .add_query_param("title", "Broken")
        .add_query_param("year", "1999")
        .await
        .json();
    assert_eq!(
        broken["primary"],
        "https://picsum.photos/seed/Broken1999/400/300"
    );
    assert_eq!(broken["source"], "placeholder");
    assert_eq!(
        broken["fallback"],
        "https://picsum.photos/400/300?grayscale&blur=2"
    );
}

#[tokio::test]
async fn test_cards_limited_by_settings() {
    let server = create_test_server();

    server
        .put("/api/v1/settings")
        .json(&json!({ "numberOfRecommendations": 2 }))
        .await
        .assert_status_ok();
    server
        .post("/api/v1/feedback")
        .json(&json!({ "title": "Dune", "year": 2021, "feedback": "Loved it!" }))
        .await
        .assert_status(axum::http::StatusCode::NO_CONTENT);

    let response = server
        .post("/api/v1/cards")
        .json(&json!({
            "movies": [
                { "title": "Dune", "year": 2021, "matchScore": 91, "genres": ["Sci-Fi", "Adventure"] },
                { "title": "Arrival", "year": 2016, "matchScore": 55 },
                { "title": "Sicario", "year": 2015, "matchScore": 30 }
            ]
        }))
        .await;
    response.assert_status_ok();

    let cards: Vec<serde_json::Value> = response.json();
    assert_eq!(cards.len(), 2);

    assert_eq!(cards[0]["heading"], "Dune (2021)");
    assert_eq!(cards[0]["feedback"], "Loved it!");
    assert_eq!(cards[0]["showFeedbackPrompt"], false);
    assert_eq!(cards[0]["matchScore"]["tier"], "high");
    assert_eq!(cards[0]["poster"]["primary"], "https://img.example/dune.jpg");

    assert!(cards[1].get("feedback").is_none());
    assert_eq!(cards[1]["showFeedbackPrompt"], true);
    assert_eq!(cards[1]["matchScore"]["tier"], "medium");
    assert_eq!(cards[1]["poster"]["source"], "placeholder");
}

#[tokio::test]
async fn test_search_result_cards() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/cards")
        .json(&json!({
            "searchResult": true,
            "movies": [
                { "title": "Dune", "year": 2021, "matchScore": 91 },
                { "title": "Arrival", "year": 2016 },
                { "title": "Sicario", "year": 2015 },
                { "title": "Prisoners", "year": 2013 }
            ]
        }))
        .await;
    response.assert_status_ok();

    let cards: Vec<serde_json::Value> = response.json();
    assert_eq!(cards.len(), 4);
    assert!(cards[0].get("matchScore").is_none());
    assert_eq!(cards[0]["showFeedbackPrompt"], false);
    assert_eq!(cards[0]["searchResult"], true);
}
