pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::chat::handlers as chat;
use crate::journal::handlers as journal;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route("/api/mood-analysis", post(journal::handle_mood_analysis))
        // Journal history
        .route(
            "/api/entries",
            get(journal::handle_list_entries).post(journal::handle_save_entry),
        )
        .route("/api/trends", get(journal::handle_trends))
        // Chat
        .route("/api/chat", post(chat::handle_chat))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tempfile::TempDir;
    use tower::ServiceExt;

    use super::*;
    use crate::analysis::sentiment::Sentiment;
    use crate::chat::handlers::EMPTY_REPLY_FALLBACK;
    use crate::config::Config;
    use crate::errors::{CHAT_FALLBACK_MESSAGE, FALLBACK_MESSAGE};
    use crate::journal::handlers::EMPTY_ENTRY_MESSAGE;
    use crate::llm_client::testing::ScriptedCompleter;
    use crate::llm_client::Completer;
    use crate::narrative::defaults::{default_insight, default_suggestions};
    use crate::narrative::openings::FixedOpening;
    use crate::store::{FileJournalStore, STORE_FILE_NAME};

    async fn test_app(completer: impl Completer + 'static) -> (Router, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let store = FileJournalStore::open(dir.path()).await.unwrap();
        let state = AppState {
            completer: Arc::new(completer),
            openings: Arc::new(FixedOpening(0)),
            store: Arc::new(store),
            config: Config::for_tests(dir.path().to_path_buf()),
        };
        (build_router(state), dir)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    const LONG_ENTRY: &str =
        "I am very sad and really anxious about tomorrow, the presentation keeps me up at night.";

    #[tokio::test]
    async fn test_health() {
        let (app, _dir) = test_app(ScriptedCompleter::failing()).await;
        let response = app.oneshot(get_request("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_mood_analysis_end_to_end_with_fallback() {
        let (app, _dir) = test_app(ScriptedCompleter::failing()).await;
        let response = app
            .oneshot(post_json(
                "/api/mood-analysis",
                json!({ "entry": "I am very sad and really anxious about tomorrow" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["sentiment"]["emotions"], json!(["sad", "anxious"]));
        assert_eq!(body["sentiment"]["dominantEmotion"], "sad");
        assert_eq!(body["sentiment"]["intensity"], 3);
        assert_eq!(body["sentiment"]["sentiment"], "negative");
        assert_eq!(
            body["insight"],
            default_insight("sad", Sentiment::Negative, false)
        );
        assert_eq!(
            body["suggestions"],
            json!(default_suggestions("sad", Sentiment::Negative, false))
        );
        assert_eq!(body["isIncident"], false);
        assert_eq!(body["responseRole"], "close_friend");
        assert!(body["timestamp"].as_i64().unwrap() > 0);
    }

    #[tokio::test]
    async fn test_mood_analysis_uses_completion() {
        let completer = ScriptedCompleter::new(|prompt| {
            if prompt.contains("starting with a dash") {
                Ok("- Chai pi lo aur rest karo\n- Call Mummy tonight please\n- Sleep early, no phone".into())
            } else {
                Ok("Beta, sab theek ho jayega.".into())
            }
        });
        let (app, _dir) = test_app(completer).await;
        let response = app
            .oneshot(post_json(
                "/api/mood-analysis",
                json!({
                    "entry": "Worried about exams",
                    "isIncident": true,
                    "responseRole": "mom",
                    "previousEntries": [
                        { "aiSentiment": { "emotions": ["calm"], "dominantEmotion": "calm", "intensity": 1, "sentiment": "positive" } }
                    ]
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["insight"], "Beta, sab theek ho jayega.");
        assert_eq!(body["suggestions"].as_array().unwrap().len(), 3);
        assert_eq!(body["isIncident"], true);
        assert_eq!(body["responseRole"], "mom");
    }

    #[tokio::test]
    async fn test_mood_analysis_accepts_null_role() {
        let (app, _dir) = test_app(ScriptedCompleter::failing()).await;
        let response = app
            .oneshot(post_json(
                "/api/mood-analysis",
                json!({ "entry": "quiet evening", "responseRole": null }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["responseRole"], "supportive_friend");
    }

    #[tokio::test]
    async fn test_mood_analysis_rejects_empty_entry() {
        let (app, _dir) = test_app(ScriptedCompleter::failing()).await;
        let response = app
            .oneshot(post_json("/api/mood-analysis", json!({ "entry": "   " })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], EMPTY_ENTRY_MESSAGE);
    }

    #[tokio::test]
    async fn test_mood_analysis_rejects_missing_entry() {
        let (app, _dir) = test_app(ScriptedCompleter::failing()).await;
        let response = app
            .oneshot(post_json("/api/mood-analysis", json!({ "isIncident": true })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_json_is_400() {
        let (app, _dir) = test_app(ScriptedCompleter::failing()).await;
        let request = Request::builder()
            .method("POST")
            .uri("/api/mood-analysis")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn test_save_entry_persists_and_lists() {
        let (app, dir) = test_app(ScriptedCompleter::failing()).await;

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/entries",
                json!({ "entry": LONG_ENTRY, "responseRole": "brother" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let saved = body_json(response).await;
        assert_eq!(saved["text"], LONG_ENTRY);
        assert_eq!(saved["responseRole"], "sibling");
        assert_eq!(saved["sentimentResult"]["dominantEmotion"], "sad");
        assert!(!saved["narrativeInsight"].as_str().unwrap().is_empty());

        assert!(dir.path().join(STORE_FILE_NAME).exists());

        let listed = body_json(app.oneshot(get_request("/api/entries")).await.unwrap()).await;
        let listed = listed.as_array().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0]["id"], saved["id"]);
    }

    #[tokio::test]
    async fn test_save_entry_enforces_minimum_length() {
        let (app, _dir) = test_app(ScriptedCompleter::failing()).await;
        let response = app
            .clone()
            .oneshot(post_json("/api/entries", json!({ "entry": "too short" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let listed = body_json(app.oneshot(get_request("/api/entries")).await.unwrap()).await;
        assert!(listed.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_trends_on_empty_history() {
        let (app, _dir) = test_app(ScriptedCompleter::failing()).await;
        let body = body_json(app.oneshot(get_request("/api/trends")).await.unwrap()).await;
        assert_eq!(body["trend"]["weeklyTrend"], "stable");
        assert_eq!(body["trend"]["recommendations"], json!([]));
        assert_eq!(body["stats"]["totalEntries"], 0);
    }

    #[tokio::test]
    async fn test_trends_after_saves() {
        let (app, _dir) = test_app(ScriptedCompleter::failing()).await;
        for _ in 0..3 {
            let response = app
                .clone()
                .oneshot(post_json("/api/entries", json!({ "entry": LONG_ENTRY, "isIncident": true })))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let body = body_json(app.oneshot(get_request("/api/trends")).await.unwrap()).await;
        assert_eq!(body["trend"]["emotionFrequency"]["sad"], 3);
        assert_eq!(body["trend"]["emotionFrequency"]["anxious"], 3);
        assert_eq!(body["trend"]["weeklyTrend"], "stable");
        assert_eq!(
            body["trend"]["insights"],
            json!(["You've been having some challenging times lately."])
        );
        let recs = body["trend"]["recommendations"].as_array().unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!(body["stats"]["incidentEntries"], 3);
        assert_eq!(body["trend"]["topEmotions"][0]["emotion"], "sad");
    }

    #[tokio::test]
    async fn test_chat_reply() {
        let completer = ScriptedCompleter::new(|_| Ok("  You are not alone 💙 ".into()));
        let (app, _dir) = test_app(completer).await;
        let response = app
            .oneshot(post_json(
                "/api/chat",
                json!({ "message": "rough day", "context": "wellness" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["message"], "You are not alone 💙");
        assert_eq!(body["context"], "wellness");
    }

    #[tokio::test]
    async fn test_chat_empty_completion_uses_fallback_reply() {
        for completer in [
            ScriptedCompleter::empty(),
            ScriptedCompleter::new(|_| Ok("   ".into())),
        ] {
            let (app, _dir) = test_app(completer).await;
            let response = app
                .oneshot(post_json("/api/chat", json!({ "message": "hello" })))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            let body = body_json(response).await;
            assert_eq!(body["message"], EMPTY_REPLY_FALLBACK);
            assert_eq!(body["context"], "general");
        }
    }

    #[tokio::test]
    async fn test_chat_requires_message() {
        let (app, _dir) = test_app(ScriptedCompleter::failing()).await;
        let response = app
            .oneshot(post_json("/api/chat", json!({ "message": "" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "Message is required");
    }

    #[tokio::test]
    async fn test_chat_failure_is_500_with_safe_message() {
        let (app, _dir) = test_app(ScriptedCompleter::failing()).await;
        let response = app
            .oneshot(post_json("/api/chat", json!({ "message": "hello" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["message"], CHAT_FALLBACK_MESSAGE);
        assert_ne!(body["message"], FALLBACK_MESSAGE);
    }
}
