//! Voice session establishment
//!
//! The real-time session (audio transport, STT, LLM, TTS) lives on an
//! external platform. This module only asks it to start one:
//! - [`SessionTransport`]: the narrow start/end interface
//! - [`HttpSessionTransport`]: `POST /api/start-session` over reqwest
//! - [`SessionRunner`]: runs a transport on a worker thread for the UI

pub mod runner;
pub mod transport;

pub use runner::{SessionCommand, SessionEvent, SessionRunner, SessionWorker};
pub use transport::{HttpSessionTransport, SessionHandle, SessionTransport};
