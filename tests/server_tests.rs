//! Development backend route tests
//!
//! Requests go straight into the router with `oneshot`; room creation is
//! pointed at a local stand-in for the Daily API.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;
use vaani::server::{router, DailyRooms, RoomProvider, ServerState};

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn post_empty(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Serve a fake `POST /rooms` and return its base URL
async fn spawn_fake_daily(status: StatusCode) -> String {
    let app = Router::new().route(
        "/rooms",
        post(move |headers: axum::http::HeaderMap, Json(body): Json<Value>| async move {
            let authorized = headers
                .get(header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                == Some("Bearer test-key");
            assert!(authorized, "missing bearer token");
            assert_eq!(body["properties"]["start_video_off"], true);
            assert_eq!(body["properties"]["enable_chat"], true);

            (
                status,
                Json(json!({
                    "id": "room-1",
                    "name": "quiet-fox",
                    "url": "https://example.daily.co/quiet-fox"
                })),
            )
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_root_reports_running() {
    let app = router(ServerState::new(None));
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();

    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "running");
    assert_eq!(body["sessions"], 0);
}

#[tokio::test]
async fn test_start_session_registers_config() {
    let state = ServerState::new(None);
    let registry = state.registry.clone();
    let app = router(state);

    let (status, body) = send(
        app,
        post_json(
            "/api/start-session",
            json!({ "language": "hi-IN", "stt": "sarvam", "tts": "sarvam", "llm": "sarvam" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "session_started");
    assert_eq!(body["config"]["language"], "hi-IN");
    assert_eq!(registry.session_count(), 1);

    let id: uuid::Uuid = serde_json::from_value(body["session_id"].clone()).unwrap();
    assert!(registry.session(&id).is_some());
}

#[tokio::test]
async fn test_start_session_rejects_malformed_config() {
    let state = ServerState::new(None);
    let registry = state.registry.clone();
    let app = router(state);

    let (status, _) = send(app, post_json("/api/start-session", json!({ "language": 7 }))).await;

    assert!(status.is_client_error());
    assert_eq!(registry.session_count(), 0);
}

#[tokio::test]
async fn test_create_room_without_key() {
    let app = router(ServerState::new(None));

    let (status, body) = send(app, post_empty("/api/create-room")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "error": "Daily API key not configured" }));
}

#[tokio::test]
async fn test_create_room_forwards_to_daily() {
    let daily = spawn_fake_daily(StatusCode::OK).await;
    let rooms: Arc<dyn RoomProvider> = Arc::new(DailyRooms::new(daily, "test-key"));
    let app = router(ServerState::new(Some(rooms)));

    let (status, body) = send(app, post_empty("/api/create-room")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
    assert_eq!(body["room_name"], "quiet-fox");
    assert_eq!(body["room_url"], "https://example.daily.co/quiet-fox");
}

#[tokio::test]
async fn test_create_room_reports_provider_failure() {
    let daily = spawn_fake_daily(StatusCode::UNAUTHORIZED).await;
    let rooms: Arc<dyn RoomProvider> = Arc::new(DailyRooms::new(daily, "test-key"));
    let app = router(ServerState::new(Some(rooms)));

    let (_, body) = send(app, post_empty("/api/create-room")).await;

    assert_eq!(body, json!({ "error": "Failed to create room" }));
}

#[tokio::test]
async fn test_start_agent_builds_room_url() {
    let state = ServerState::new(None);
    let registry = state.registry.clone();
    let app = router(state);

    let (status, body) = send(app, post_empty("/api/start-agent/quiet-fox")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "agent_started");
    assert_eq!(body["room_url"], "https://quiet-fox.daily.co/quiet-fox");
    assert!(registry.agent("quiet-fox").is_some());
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let app = router(ServerState::new(None));
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/start-session")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}
