//! Development backend
//!
//! A small axum service with the endpoints the console talks to, so the
//! whole flow can run on one machine. Room creation is forwarded to Daily
//! when an API key is configured.

mod registry;
mod rooms;
mod routes;

pub use registry::{AgentRecord, SessionRecord, SessionRegistry};
pub use rooms::{DailyRooms, Room, RoomProvider};

use crate::config::ServerConfig;
use crate::{Result, VaaniError};
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared handler state
#[derive(Clone)]
pub struct ServerState {
    pub registry: Arc<SessionRegistry>,
    pub rooms: Option<Arc<dyn RoomProvider>>,
}

impl ServerState {
    pub fn new(rooms: Option<Arc<dyn RoomProvider>>) -> Self {
        Self {
            registry: Arc::new(SessionRegistry::new()),
            rooms,
        }
    }

    /// Daily rooms are only available with an API key
    pub fn from_config(config: &ServerConfig) -> Self {
        let rooms = config.daily_api_key.as_ref().map(|key| {
            Arc::new(DailyRooms::new(config.daily_api_url.clone(), key.clone()))
                as Arc<dyn RoomProvider>
        });
        Self::new(rooms)
    }
}

/// Builds the application router with all routes.
pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/", get(routes::root))
        .route("/api/start-session", post(routes::start_session))
        .route("/api/create-room", post(routes::create_room))
        .route("/api/start-agent/{room_name}", post(routes::start_agent))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve until SIGINT/SIGTERM
pub async fn serve(config: &ServerConfig) -> Result<()> {
    let addr = SocketAddr::new(config.host, config.port);
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| VaaniError::Server(format!("failed to bind {}: {}", addr, e)))?;

    if config.daily_api_key.is_none() {
        tracing::warn!("[SERVER] DAILY_API_KEY not set, /api/create-room will refuse");
    }
    tracing::info!(%addr, "[SERVER] starting vaani backend");

    axum::serve(listener, router(ServerState::from_config(config)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| VaaniError::Server(e.to_string()))?;

    tracing::info!("[SERVER] shut down");
    Ok(())
}

/// Waits for a SIGINT (Ctrl+C) or SIGTERM signal for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("[SERVER] failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("[SERVER] failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => { tracing::info!("[SERVER] received SIGINT, shutting down"); }
        () = terminate => { tracing::info!("[SERVER] received SIGTERM, shutting down"); }
    }
}
