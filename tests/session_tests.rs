//! Session client tests against a local mock backend
//!
//! Each test starts a small axum server on its own thread and runtime so
//! the session worker and the UI state can be driven synchronously.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use uuid::Uuid;
use vaani::config::AppConfig;
use vaani::session::SessionTransport;
use vaani::ui::AppState;
use vaani::{ConnectionState, HttpSessionTransport, SessionConfig, SessionRunner, VaaniError};

#[derive(Clone, Copy)]
enum Reply {
    Ok,
    NotJson,
    ServerErrorJson,
    Slow,
}

struct MockBackend {
    base_url: String,
    hits: Arc<AtomicUsize>,
}

impl MockBackend {
    fn start(reply: Reply) -> Self {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind mock backend");
        listener.set_nonblocking(true).expect("nonblocking listener");
        let addr = listener.local_addr().expect("local addr");
        let hits = Arc::new(AtomicUsize::new(0));

        let state = (reply, hits.clone());
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("mock runtime");
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::from_std(listener).expect("tokio listener");
                let app = Router::new()
                    .route("/api/start-session", post(start_session))
                    .with_state(state);
                let _ = axum::serve(listener, app).await;
            });
        });

        Self {
            base_url: format!("http://{}", addr),
            hits,
        }
    }

    fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    fn config(&self) -> AppConfig {
        AppConfig {
            backend_url: self.base_url.clone(),
            ..Default::default()
        }
    }
}

async fn start_session(
    State((reply, hits)): State<(Reply, Arc<AtomicUsize>)>,
    Json(body): Json<Value>,
) -> axum::response::Response {
    use axum::response::IntoResponse;

    hits.fetch_add(1, Ordering::SeqCst);
    match reply {
        Reply::Ok => Json(json!({ "status": "session_started", "echo": body })).into_response(),
        Reply::NotJson => "<html>gateway</html>".into_response(),
        Reply::ServerErrorJson => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "pipeline unavailable" })),
        )
            .into_response(),
        Reply::Slow => {
            tokio::time::sleep(Duration::from_millis(300)).await;
            Json(json!({ "status": "session_started" })).into_response()
        }
    }
}

/// An address nothing listens on
fn closed_backend() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{}", addr)
}

fn state_for(config: &AppConfig) -> AppState {
    let transport = HttpSessionTransport::from_config(config).expect("transport");
    let worker = SessionRunner::new(Arc::new(transport), SessionConfig::default())
        .start_worker()
        .expect("worker");
    AppState::from_config(config).with_worker(worker)
}

fn wait_until_settled(state: &mut AppState) {
    let deadline = Instant::now() + Duration::from_secs(10);
    while Instant::now() < deadline {
        state.poll_events();
        if !state.connection.is_pending() {
            return;
        }
        std::thread::sleep(Duration::from_millis(10));
    }
    panic!("connect attempt never resolved");
}

#[test]
fn test_transport_posts_config_as_json() {
    let backend = MockBackend::start(Reply::Ok);
    let transport = HttpSessionTransport::from_config(&backend.config()).unwrap();
    let runtime = tokio::runtime::Runtime::new().unwrap();

    let handle = runtime
        .block_on(transport.start_session(Uuid::new_v4(), &SessionConfig::default()))
        .unwrap();

    assert_eq!(backend.hits(), 1);
    assert_eq!(handle.payload["status"], "session_started");
    assert_eq!(
        handle.payload["echo"],
        json!({ "language": "hi-IN", "stt": "sarvam", "tts": "sarvam", "llm": "sarvam" })
    );
}

#[test]
fn test_connect_success_sends_exactly_one_request() {
    let backend = MockBackend::start(Reply::Ok);
    let mut state = state_for(&backend.config());

    state.connect();
    assert!(state.connection.is_pending());
    wait_until_settled(&mut state);

    assert_eq!(state.connection_state(), ConnectionState::Connected);
    assert_eq!(backend.hits(), 1);
    assert_eq!(state.status_text(), "Connected to Voice AI");
    assert!(state.connection.session().is_some());

    state.shutdown();
}

#[test]
fn test_disconnect_makes_no_request() {
    let backend = MockBackend::start(Reply::Ok);
    let mut state = state_for(&backend.config());

    state.connect();
    wait_until_settled(&mut state);
    assert_eq!(backend.hits(), 1);

    state.toggle_connection();
    std::thread::sleep(Duration::from_millis(100));
    state.poll_events();

    assert_eq!(state.connection_state(), ConnectionState::Disconnected);
    assert_eq!(backend.hits(), 1);

    state.shutdown();
}

#[test]
fn test_non_json_body_stays_disconnected() {
    let backend = MockBackend::start(Reply::NotJson);
    let mut state = state_for(&backend.config());

    state.connect();
    wait_until_settled(&mut state);

    assert_eq!(backend.hits(), 1);
    assert_eq!(state.connection_state(), ConnectionState::Disconnected);
    assert_eq!(state.connection.failures(), 1);
    assert!(matches!(
        state.connection.last_error(),
        Some(VaaniError::InvalidResponse(_))
    ));

    state.shutdown();
}

#[test]
fn test_unreachable_backend_stays_disconnected() {
    let config = AppConfig {
        backend_url: closed_backend(),
        ..Default::default()
    };
    let mut state = state_for(&config);

    state.connect();
    wait_until_settled(&mut state);

    assert_eq!(state.connection_state(), ConnectionState::Disconnected);
    assert_eq!(state.connection.failures(), 1);
    assert!(matches!(
        state.connection.last_error(),
        Some(VaaniError::Transport(_))
    ));
    assert!(state.error_message().is_some());

    state.shutdown();
}

#[test]
fn test_error_status_with_json_body_still_connects() {
    let backend = MockBackend::start(Reply::ServerErrorJson);
    let mut state = state_for(&backend.config());

    state.connect();
    wait_until_settled(&mut state);

    assert_eq!(state.connection_state(), ConnectionState::Connected);
    let payload = &state.connection.session().unwrap().payload;
    assert_eq!(payload["error"], "pipeline unavailable");

    state.shutdown();
}

#[test]
fn test_repeat_connect_while_pending_is_ignored() {
    let backend = MockBackend::start(Reply::Slow);
    let mut state = state_for(&backend.config());

    state.connect();
    state.connect();
    state.toggle_connection();
    wait_until_settled(&mut state);

    assert_eq!(state.connection_state(), ConnectionState::Connected);
    assert_eq!(backend.hits(), 1);

    state.shutdown();
}

#[test]
fn test_disconnect_while_pending_drops_late_result() {
    let backend = MockBackend::start(Reply::Slow);
    let mut state = state_for(&backend.config());

    state.connect();
    state.disconnect();
    assert!(!state.connection.is_pending());

    std::thread::sleep(Duration::from_millis(600));
    state.poll_events();

    assert_eq!(state.connection_state(), ConnectionState::Disconnected);
    assert!(state.connection.session().is_none());

    state.shutdown();
}

#[test]
fn test_request_timeout_reports_transport_error() {
    let backend = MockBackend::start(Reply::Slow);
    let config = backend.config();
    let transport = HttpSessionTransport::new(
        config.start_session_url(),
        Some(Duration::from_millis(50)),
    )
    .unwrap();
    let runtime = tokio::runtime::Runtime::new().unwrap();

    let result =
        runtime.block_on(transport.start_session(Uuid::new_v4(), &SessionConfig::default()));

    assert!(matches!(result, Err(VaaniError::Transport(_))));
}
