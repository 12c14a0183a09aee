//! Session worker
//!
//! Runs a [`SessionTransport`] on its own thread with a tokio runtime so the
//! egui frame loop never waits on the network. The UI sends
//! [`SessionCommand`]s and drains [`SessionEvent`]s once per frame.

use super::transport::{SessionHandle, SessionTransport};
use crate::config::SessionConfig;
use crate::{Result, VaaniError};
use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

/// Commands sent to the session worker
#[derive(Clone, Debug)]
pub enum SessionCommand {
    /// Start a session tagged with this request id
    Connect { request_id: Uuid },
    /// Hand a session back to the transport
    Disconnect { session: SessionHandle },
    /// Stop the worker
    Shutdown,
}

/// Events emitted by the session worker
#[derive(Clone, Debug)]
pub enum SessionEvent {
    /// The platform accepted the session
    Connected {
        request_id: Uuid,
        session: SessionHandle,
    },
    /// The request failed; nothing changed remotely
    ConnectFailed { request_id: Uuid, error: VaaniError },
    /// The transport finished releasing a session
    Disconnected { request_id: Uuid },
    /// Worker shut down
    Shutdown,
}

/// Handle for interacting with a running session worker
pub struct SessionWorker {
    command_tx: Sender<SessionCommand>,
    event_rx: Receiver<SessionEvent>,
    worker_handle: Option<JoinHandle<()>>,
}

impl SessionWorker {
    /// Request a new session
    pub fn connect(&self, request_id: Uuid) -> Result<()> {
        self.command_tx
            .send(SessionCommand::Connect { request_id })
            .map_err(|e| VaaniError::Channel(format!("Failed to send connect command: {}", e)))
    }

    /// Release a session
    pub fn disconnect(&self, session: SessionHandle) -> Result<()> {
        self.command_tx
            .send(SessionCommand::Disconnect { session })
            .map_err(|e| VaaniError::Channel(format!("Failed to send disconnect command: {}", e)))
    }

    /// Shutdown the worker and wait for its thread
    pub fn shutdown(mut self) -> Result<()> {
        let _ = self.command_tx.send(SessionCommand::Shutdown);
        if let Some(handle) = self.worker_handle.take() {
            handle
                .join()
                .map_err(|_| VaaniError::Channel("Session worker panicked".to_string()))?;
        }
        Ok(())
    }

    /// Try to receive an event without blocking
    pub fn try_recv_event(&self) -> Option<SessionEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Receive an event, giving up after `timeout`
    pub fn recv_event_timeout(&self, timeout: Duration) -> Result<Option<SessionEvent>> {
        match self.event_rx.recv_timeout(timeout) {
            Ok(event) => Ok(Some(event)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => {
                Err(VaaniError::Channel("Session worker is gone".to_string()))
            }
        }
    }
}

/// Spawns the session worker thread
pub struct SessionRunner {
    transport: Arc<dyn SessionTransport>,
    config: SessionConfig,
}

impl SessionRunner {
    /// The config is captured once; every connect sends the same record.
    pub fn new(transport: Arc<dyn SessionTransport>, config: SessionConfig) -> Self {
        Self { transport, config }
    }

    /// Start the worker thread
    ///
    /// Each connect runs as its own task, so a request that never returns
    /// does not hold up disconnects or shutdown.
    pub fn start_worker(self) -> Result<SessionWorker> {
        let (command_tx, command_rx) = bounded::<SessionCommand>(32);
        let (event_tx, event_rx) = bounded::<SessionEvent>(32);

        let transport = self.transport;
        let config = Arc::new(self.config);

        let worker_handle = std::thread::Builder::new()
            .name("vaani-session".to_string())
            .spawn(move || {
                let runtime = match tokio::runtime::Runtime::new() {
                    Ok(rt) => rt,
                    Err(e) => {
                        error!("[SESSION] Failed to create tokio runtime: {}", e);
                        let _ = event_tx.try_send(SessionEvent::Shutdown);
                        return;
                    }
                };

                runtime.block_on(worker_loop(transport, config, command_rx, event_tx));
            })?;

        Ok(SessionWorker {
            command_tx,
            event_rx,
            worker_handle: Some(worker_handle),
        })
    }
}

async fn worker_loop(
    transport: Arc<dyn SessionTransport>,
    config: Arc<SessionConfig>,
    command_rx: Receiver<SessionCommand>,
    event_tx: Sender<SessionEvent>,
) {
    info!("[SESSION] Worker started with {} transport", transport.name());

    loop {
        let command = match command_rx.recv() {
            Ok(cmd) => cmd,
            Err(_) => {
                info!("[SESSION] Command channel closed, shutting down");
                break;
            }
        };

        match command {
            SessionCommand::Connect { request_id } => {
                debug!("[SESSION] Connect {}", request_id);
                let transport = transport.clone();
                let config = config.clone();
                let event_tx = event_tx.clone();

                tokio::spawn(async move {
                    let event = match transport.start_session(request_id, &config).await {
                        Ok(session) => SessionEvent::Connected {
                            request_id,
                            session,
                        },
                        Err(error) => SessionEvent::ConnectFailed { request_id, error },
                    };
                    if event_tx.send(event).is_err() {
                        warn!("[SESSION] Event channel closed before connect result");
                    }
                });
            }

            SessionCommand::Disconnect { session } => {
                let request_id = session.request_id;
                debug!("[SESSION] Disconnect {}", request_id);
                if let Err(e) = transport.end_session(&session).await {
                    warn!("[SESSION] end_session failed: {}", e);
                }
                if event_tx.send(SessionEvent::Disconnected { request_id }).is_err() {
                    error!("[SESSION] Event channel closed");
                    break;
                }
            }

            SessionCommand::Shutdown => {
                info!("[SESSION] Received shutdown command");
                break;
            }
        }
    }

    let _ = event_tx.try_send(SessionEvent::Shutdown);
    info!("[SESSION] Worker shutdown complete");
}
