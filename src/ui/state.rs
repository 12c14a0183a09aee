//! Application state management
//!
//! This module provides the central state for the Vaani UI: the fixed
//! session config, the connection toggle, the view mode and the channel to
//! the session worker.

use crate::config::{AppConfig, SessionConfig, ViewMode};
use crate::connection::{ConnectionState, ConnectionToggle};
use crate::cost::CostEstimate;
use crate::session::{SessionEvent, SessionWorker};
use crate::ui::components::VisualizerMode;
use crate::VaaniError;
use std::collections::VecDeque;
use tracing::{debug, error, info};

const MAX_LOG_LINES: usize = 100;

/// Debug information displayed in the debug panel
#[derive(Debug, Clone, Default)]
pub struct DebugInfo {
    /// Recent log messages
    pub log_messages: VecDeque<String>,
}

impl DebugInfo {
    pub fn new() -> Self {
        Self {
            log_messages: VecDeque::with_capacity(MAX_LOG_LINES),
        }
    }

    pub fn add_log(&mut self, message: String) {
        if self.log_messages.len() >= MAX_LOG_LINES {
            self.log_messages.pop_front();
        }
        self.log_messages.push_back(message);
    }
}

/// Central application state
pub struct AppState {
    /// Provider selection; fixed at construction
    session_config: SessionConfig,

    /// Connect/disconnect toggle
    pub connection: ConnectionToggle,

    /// Active tab
    pub view_mode: ViewMode,

    /// Local microphone switch shown by the audio control
    pub mic_enabled: bool,

    /// Whether to show the debug panel
    pub show_debug_panel: bool,

    /// Backend base URL, shown in the footer
    pub backend_url: String,

    /// Cost estimate card contents
    pub cost: CostEstimate,

    /// Debug information
    pub debug_info: DebugInfo,

    /// Worker running the session transport
    session_worker: Option<SessionWorker>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create a new application state with default settings and no worker
    pub fn new() -> Self {
        Self::from_config(&AppConfig::default())
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            session_config: SessionConfig::default(),
            connection: ConnectionToggle::new(),
            view_mode: config.ui.mode,
            mic_enabled: true,
            show_debug_panel: config.ui.show_debug_panel,
            backend_url: config.backend_url.clone(),
            cost: CostEstimate::default(),
            debug_info: DebugInfo::new(),
            session_worker: None,
        }
    }

    /// Attach the worker that runs connect requests
    pub fn with_worker(mut self, worker: SessionWorker) -> Self {
        self.session_worker = Some(worker);
        self
    }

    pub fn session_config(&self) -> &SessionConfig {
        &self.session_config
    }

    pub fn connection_state(&self) -> ConnectionState {
        self.connection.state()
    }

    /// Start a connect attempt; no-op when connected or already connecting
    pub fn connect(&mut self) {
        let Some(request_id) = self.connection.begin_connect() else {
            debug!("[UI] Connect ignored in state {}", self.connection.state());
            return;
        };

        let sent = match &self.session_worker {
            Some(worker) => worker.connect(request_id),
            None => Err(VaaniError::Channel("No session worker attached".to_string())),
        };

        match sent {
            Ok(()) => {
                self.debug_info.add_log(format!("Connecting ({})", request_id));
            }
            Err(e) => {
                error!("[UI] Connection failed: {}", e);
                self.debug_info.add_log(format!("Connection failed: {}", e));
                self.connection.fail_connect(request_id, e);
            }
        }
    }

    /// Go back to disconnected; no network request is made
    pub fn disconnect(&mut self) {
        let session = self.connection.disconnect();
        self.debug_info.add_log("Disconnected".to_string());
        info!("[UI] Disconnected");

        if let (Some(session), Some(worker)) = (session, &self.session_worker) {
            if let Err(e) = worker.disconnect(session) {
                debug!("[UI] Could not hand session back: {}", e);
            }
        }
    }

    /// What the main button does
    pub fn toggle_connection(&mut self) {
        if self.connection.is_connected() {
            self.disconnect();
        } else {
            self.connect();
        }
    }

    pub fn toggle_mic(&mut self) {
        self.mic_enabled = !self.mic_enabled;
        self.debug_info.add_log(format!(
            "Microphone {}",
            if self.mic_enabled { "enabled" } else { "muted" }
        ));
    }

    /// Drain worker events into the toggle
    pub fn poll_events(&mut self) {
        let Some(worker) = &self.session_worker else {
            return;
        };

        let mut events = Vec::new();
        while let Some(event) = worker.try_recv_event() {
            events.push(event);
        }

        for event in events {
            self.handle_event(event);
        }
    }

    fn handle_event(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::Connected {
                request_id,
                session,
            } => {
                if self.connection.complete_connect(request_id, session) {
                    self.debug_info.add_log(format!("Connected ({})", request_id));
                } else {
                    debug!("[UI] Dropped stale connect result {}", request_id);
                }
            }
            SessionEvent::ConnectFailed { request_id, error } => {
                // already reported by the transport
                let line = format!("Connection failed: {}", error);
                if self.connection.fail_connect(request_id, error) {
                    self.debug_info.add_log(line);
                }
            }
            SessionEvent::Disconnected { request_id } => {
                debug!("[UI] Session {} released", request_id);
            }
            SessionEvent::Shutdown => {
                self.debug_info.add_log("Session worker shut down".to_string());
                self.session_worker = None;
            }
        }
    }

    /// Banner text for the current state
    pub fn status_text(&self) -> &'static str {
        if self.connection.is_connected() {
            "Connected to Voice AI"
        } else if self.connection.is_pending() {
            "Connecting..."
        } else {
            "Ready to Connect"
        }
    }

    /// Keep frames coming while a request is in flight, or while the
    /// console visualizer is animating
    pub fn needs_periodic_repaint(&self) -> bool {
        self.connection.is_pending()
            || (self.view_mode == ViewMode::Console
                && VisualizerMode::from_state(self).is_animated())
    }

    /// Error line for the console view
    pub fn error_message(&self) -> Option<String> {
        self.connection.last_error().map(|e| e.user_message())
    }

    /// Stop the worker thread
    pub fn shutdown(&mut self) {
        if let Some(worker) = self.session_worker.take() {
            if let Err(e) = worker.shutdown() {
                error!("[UI] Session worker shutdown failed: {}", e);
            }
        }
    }
}
