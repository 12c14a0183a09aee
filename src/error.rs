//! Error types for Vaani
//!
//! One enum covers the session client, the UI plumbing and the development
//! backend. The session client only ever surfaces `Transport` and
//! `InvalidResponse`; everything else is startup or wiring.

use thiserror::Error;

/// Vaani errors
#[derive(Error, Debug, Clone)]
pub enum VaaniError {
    /// The session-start request could not be sent or completed
    #[error("Transport error: {0}")]
    Transport(String),

    /// The session-start response body was not JSON
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Channel communication error between the UI and the session worker
    #[error("Channel error: {0}")]
    Channel(String),

    /// Configuration file or environment error
    #[error("Configuration error: {0}")]
    Config(String),

    /// File system I/O error
    #[error("IO error: {0}")]
    Io(String),

    /// Development backend failed to bind or serve
    #[error("Server error: {0}")]
    Server(String),

    /// Room provider (Daily) request failed
    #[error("Room provider error: {0}")]
    RoomProvider(String),
}

impl From<std::io::Error> for VaaniError {
    fn from(e: std::io::Error) -> Self {
        VaaniError::Io(e.to_string())
    }
}

impl From<reqwest::Error> for VaaniError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            VaaniError::InvalidResponse(e.to_string())
        } else {
            VaaniError::Transport(e.to_string())
        }
    }
}

impl VaaniError {
    /// Check if this error is recoverable
    ///
    /// A failed connect is always recoverable by trying again; wiring and
    /// configuration errors are not.
    pub fn is_recoverable(&self) -> bool {
        match self {
            VaaniError::Transport(_) => true,
            VaaniError::InvalidResponse(_) => true,
            VaaniError::RoomProvider(_) => true,
            VaaniError::Channel(_) => false,
            VaaniError::Config(_) => false,
            VaaniError::Io(_) => false,
            VaaniError::Server(_) => false,
        }
    }

    /// Get a user-friendly description of the error
    pub fn user_message(&self) -> String {
        match self {
            VaaniError::Transport(_) | VaaniError::InvalidResponse(_) => {
                "Could not start a voice session. Please try again.".to_string()
            }
            VaaniError::Channel(_) => {
                "Internal communication error. Please restart the application.".to_string()
            }
            VaaniError::Config(_) => "Configuration error. Please check settings.".to_string(),
            VaaniError::Io(_) => "File system error occurred.".to_string(),
            VaaniError::Server(_) => "Backend server error.".to_string(),
            VaaniError::RoomProvider(_) => "Failed to create room.".to_string(),
        }
    }
}

/// Result type alias for Vaani operations
pub type Result<T> = std::result::Result<T, VaaniError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_failures_are_recoverable() {
        assert!(VaaniError::Transport("refused".into()).is_recoverable());
        assert!(VaaniError::InvalidResponse("not json".into()).is_recoverable());
        assert!(!VaaniError::Config("bad toml".into()).is_recoverable());
    }

    #[test]
    fn test_user_message_is_generic_for_connect_failures() {
        let a = VaaniError::Transport("connection refused".into()).user_message();
        let b = VaaniError::InvalidResponse("expected value at line 1".into()).user_message();
        assert_eq!(a, b);
        assert!(!a.contains("refused"));
    }

    #[test]
    fn test_io_error_conversion() {
        let err: VaaniError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, VaaniError::Io(_)));
    }
}
