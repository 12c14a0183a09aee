//! Connect/disconnect toggle
//!
//! Two states, `Disconnected` and `Connected`. Moving to `Connected` only
//! happens once a session-start request resolves successfully; moving back
//! is immediate and local. The toggle itself does no I/O: callers take the
//! request id from [`ConnectionToggle::begin_connect`], run the request
//! wherever they like, and report the outcome.

use crate::session::SessionHandle;
use crate::VaaniError;
use uuid::Uuid;

/// Connection flag
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connected,
}

impl ConnectionState {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionState::Connected)
    }
}

impl std::fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConnectionState::Disconnected => write!(f, "Disconnected"),
            ConnectionState::Connected => write!(f, "Connected"),
        }
    }
}

/// Toggle state plus the bookkeeping around one in-flight request
#[derive(Debug, Default)]
pub struct ConnectionToggle {
    state: ConnectionState,
    /// Request currently awaiting a response
    pending: Option<Uuid>,
    /// Session returned by the last successful connect
    session: Option<SessionHandle>,
    last_error: Option<VaaniError>,
    failures: u32,
}

impl ConnectionToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn is_connected(&self) -> bool {
        self.state.is_connected()
    }

    /// A connect request has been issued and not yet resolved
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn session(&self) -> Option<&SessionHandle> {
        self.session.as_ref()
    }

    pub fn last_error(&self) -> Option<&VaaniError> {
        self.last_error.as_ref()
    }

    /// Number of failed connect attempts since startup
    pub fn failures(&self) -> u32 {
        self.failures
    }

    /// Start a connect attempt
    ///
    /// Returns the id to tag the request with, or `None` when already
    /// connected or a request is still in flight.
    pub fn begin_connect(&mut self) -> Option<Uuid> {
        if self.state.is_connected() || self.pending.is_some() {
            return None;
        }
        let request_id = Uuid::new_v4();
        self.pending = Some(request_id);
        Some(request_id)
    }

    /// Record a successful response
    ///
    /// Returns true if this caused the transition to `Connected`. Responses
    /// for a request that is no longer pending are dropped.
    pub fn complete_connect(&mut self, request_id: Uuid, session: SessionHandle) -> bool {
        if self.pending != Some(request_id) {
            return false;
        }
        self.pending = None;
        self.state = ConnectionState::Connected;
        self.session = Some(session);
        self.last_error = None;
        true
    }

    /// Record a failed request; the state is left as it was
    pub fn fail_connect(&mut self, request_id: Uuid, error: VaaniError) -> bool {
        if self.pending != Some(request_id) {
            return false;
        }
        self.pending = None;
        self.failures += 1;
        self.last_error = Some(error);
        true
    }

    /// Go back to `Disconnected` unconditionally
    ///
    /// Any in-flight request is forgotten. Returns the session that was
    /// active, if any, so the caller can hand it back to the transport.
    pub fn disconnect(&mut self) -> Option<SessionHandle> {
        self.state = ConnectionState::Disconnected;
        self.pending = None;
        self.session.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle(request_id: Uuid) -> SessionHandle {
        SessionHandle::new(request_id, serde_json::json!({"status": "ok"}))
    }

    #[test]
    fn test_initial_state() {
        let toggle = ConnectionToggle::new();
        assert_eq!(toggle.state(), ConnectionState::Disconnected);
        assert!(!toggle.is_pending());
        assert!(toggle.session().is_none());
        assert_eq!(toggle.failures(), 0);
    }

    #[test]
    fn test_connect_success() {
        let mut toggle = ConnectionToggle::new();
        let id = toggle.begin_connect().unwrap();
        assert!(toggle.is_pending());
        assert_eq!(toggle.state(), ConnectionState::Disconnected);

        assert!(toggle.complete_connect(id, handle(id)));
        assert_eq!(toggle.state(), ConnectionState::Connected);
        assert!(!toggle.is_pending());
        assert_eq!(toggle.session().map(|s| s.request_id), Some(id));
    }

    #[test]
    fn test_duplicate_success_transitions_once() {
        let mut toggle = ConnectionToggle::new();
        let id = toggle.begin_connect().unwrap();
        assert!(toggle.complete_connect(id, handle(id)));
        assert!(!toggle.complete_connect(id, handle(id)));
        assert!(toggle.is_connected());
    }

    #[test]
    fn test_connect_failure_keeps_state() {
        let mut toggle = ConnectionToggle::new();
        let id = toggle.begin_connect().unwrap();
        assert!(toggle.fail_connect(id, VaaniError::Transport("refused".into())));

        assert_eq!(toggle.state(), ConnectionState::Disconnected);
        assert!(!toggle.is_pending());
        assert_eq!(toggle.failures(), 1);
        assert!(matches!(toggle.last_error(), Some(VaaniError::Transport(_))));

        // user can retry
        assert!(toggle.begin_connect().is_some());
    }

    #[test]
    fn test_no_second_request_while_pending() {
        let mut toggle = ConnectionToggle::new();
        assert!(toggle.begin_connect().is_some());
        assert!(toggle.begin_connect().is_none());
    }

    #[test]
    fn test_no_connect_when_connected() {
        let mut toggle = ConnectionToggle::new();
        let id = toggle.begin_connect().unwrap();
        toggle.complete_connect(id, handle(id));
        assert!(toggle.begin_connect().is_none());
    }

    #[test]
    fn test_disconnect_is_unconditional() {
        let mut toggle = ConnectionToggle::new();
        let id = toggle.begin_connect().unwrap();
        toggle.complete_connect(id, handle(id));

        let session = toggle.disconnect();
        assert_eq!(session.map(|s| s.request_id), Some(id));
        assert_eq!(toggle.state(), ConnectionState::Disconnected);

        // already disconnected: still fine
        assert!(toggle.disconnect().is_none());
        assert_eq!(toggle.state(), ConnectionState::Disconnected);
    }

    #[test]
    fn test_late_response_after_disconnect_is_dropped() {
        let mut toggle = ConnectionToggle::new();
        let id = toggle.begin_connect().unwrap();
        toggle.disconnect();

        assert!(!toggle.complete_connect(id, handle(id)));
        assert_eq!(toggle.state(), ConnectionState::Disconnected);
    }

    #[test]
    fn test_success_clears_previous_error() {
        let mut toggle = ConnectionToggle::new();
        let first = toggle.begin_connect().unwrap();
        toggle.fail_connect(first, VaaniError::InvalidResponse("html".into()));

        let second = toggle.begin_connect().unwrap();
        toggle.complete_connect(second, handle(second));
        assert!(toggle.last_error().is_none());
        assert_eq!(toggle.failures(), 1);
    }
}
