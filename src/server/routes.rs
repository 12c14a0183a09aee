//! HTTP handlers for the development backend

use super::ServerState;
use crate::config::SessionConfig;
use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};
use tracing::{info, warn};

/// `GET /`
pub async fn root(State(state): State<ServerState>) -> Json<Value> {
    let defaults = SessionConfig::default();
    Json(json!({
        "message": "Vaani voice agent backend",
        "status": "running",
        "sessions": state.registry.session_count(),
        "services": [
            format!("{} STT", defaults.stt),
            format!("{} LLM", defaults.llm),
            format!("{} TTS", defaults.tts),
        ],
    }))
}

/// `POST /api/start-session`
pub async fn start_session(
    State(state): State<ServerState>,
    Json(config): Json<SessionConfig>,
) -> Json<Value> {
    let record = state.registry.register_session(config);
    info!(
        "[SERVER] Session {} started: language={} stt={} tts={} llm={}",
        record.session_id,
        record.config.language,
        record.config.stt,
        record.config.tts,
        record.config.llm
    );

    Json(json!({
        "status": "session_started",
        "session_id": record.session_id,
        "config": record.config,
    }))
}

/// `POST /api/create-room`
pub async fn create_room(State(state): State<ServerState>) -> Json<Value> {
    let Some(rooms) = &state.rooms else {
        return Json(json!({ "error": "Daily API key not configured" }));
    };

    match rooms.create_room().await {
        Ok(room) => {
            info!("[SERVER] Room {} ready", room.name);
            Json(json!({
                "room_url": room.url,
                "room_name": room.name,
                "status": "ready",
            }))
        }
        Err(e) => {
            warn!("[SERVER] {}", e);
            Json(json!({ "error": "Failed to create room" }))
        }
    }
}

/// `POST /api/start-agent/{room_name}`
///
/// Records the request. The agent pipeline itself runs on the voice
/// platform.
pub async fn start_agent(
    State(state): State<ServerState>,
    Path(room_name): Path<String>,
) -> Json<Value> {
    let room_url = format!("https://{0}.daily.co/{0}", room_name);
    let record = state.registry.record_agent(&room_name, &room_url);
    info!("[SERVER] Agent requested for {}", record.room_url);

    Json(json!({
        "status": "agent_started",
        "room_url": record.room_url,
        "message": "Voice agent is now listening in the room",
    }))
}
