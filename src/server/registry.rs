//! In-memory record of sessions and agent requests
//!
//! Nothing is persisted; a restart forgets everything. Only the most recent
//! records are kept, while the totals keep counting.

use crate::config::SessionConfig;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::Serialize;
use std::collections::{HashMap, VecDeque};
use std::hash::Hash;
use std::sync::atomic::{AtomicUsize, Ordering};
use uuid::Uuid;

/// Records kept per kind before the oldest is evicted
pub const MAX_RETAINED: usize = 256;

#[derive(Clone, Debug, Serialize)]
pub struct SessionRecord {
    pub session_id: Uuid,
    pub config: SessionConfig,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize)]
pub struct AgentRecord {
    pub room_name: String,
    pub room_url: String,
    pub requested_at: DateTime<Utc>,
}

/// Insertion-ordered map that drops its oldest entry past `capacity`
#[derive(Debug)]
struct Recent<K, V> {
    capacity: usize,
    entries: HashMap<K, V>,
    order: VecDeque<K>,
}

impl<K: Eq + Hash + Clone, V> Recent<K, V> {
    fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: HashMap::new(),
            order: VecDeque::new(),
        }
    }

    fn insert(&mut self, key: K, value: V) {
        if self.entries.insert(key.clone(), value).is_some() {
            self.order.retain(|k| k != &key);
        }
        self.order.push_back(key);

        while self.order.len() > self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
            }
        }
    }

    fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug)]
pub struct SessionRegistry {
    sessions: RwLock<Recent<Uuid, SessionRecord>>,
    agents: RwLock<Recent<String, AgentRecord>>,
    sessions_started: AtomicUsize,
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::with_capacity(MAX_RETAINED)
    }
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            sessions: RwLock::new(Recent::new(capacity)),
            agents: RwLock::new(Recent::new(capacity)),
            sessions_started: AtomicUsize::new(0),
        }
    }

    pub fn register_session(&self, config: SessionConfig) -> SessionRecord {
        let record = SessionRecord {
            session_id: Uuid::new_v4(),
            config,
            created_at: Utc::now(),
        };
        self.sessions
            .write()
            .insert(record.session_id, record.clone());
        self.sessions_started.fetch_add(1, Ordering::Relaxed);
        record
    }

    pub fn session(&self, id: &Uuid) -> Option<SessionRecord> {
        self.sessions.read().get(id).cloned()
    }

    /// Sessions started since launch, including evicted ones
    pub fn session_count(&self) -> usize {
        self.sessions_started.load(Ordering::Relaxed)
    }

    pub fn retained_sessions(&self) -> usize {
        self.sessions.read().len()
    }

    /// Record an agent request; a repeat for the same room replaces the old one
    pub fn record_agent(&self, room_name: &str, room_url: &str) -> AgentRecord {
        let record = AgentRecord {
            room_name: room_name.to_string(),
            room_url: room_url.to_string(),
            requested_at: Utc::now(),
        };
        self.agents
            .write()
            .insert(record.room_name.clone(), record.clone());
        record
    }

    pub fn agent(&self, room_name: &str) -> Option<AgentRecord> {
        self.agents.read().get(&room_name.to_string()).cloned()
    }

    pub fn agent_count(&self) -> usize {
        self.agents.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup_session() {
        let registry = SessionRegistry::new();
        let record = registry.register_session(SessionConfig::default());

        assert_eq!(registry.session_count(), 1);
        let found = registry.session(&record.session_id).unwrap();
        assert_eq!(found.config, SessionConfig::default());
    }

    #[test]
    fn test_session_ids_are_unique() {
        let registry = SessionRegistry::new();
        let a = registry.register_session(SessionConfig::default());
        let b = registry.register_session(SessionConfig::default());
        assert_ne!(a.session_id, b.session_id);
        assert_eq!(registry.session_count(), 2);
    }

    #[test]
    fn test_old_sessions_are_evicted() {
        let registry = SessionRegistry::with_capacity(3);
        let first = registry.register_session(SessionConfig::default());
        let ids: Vec<Uuid> = (0..4)
            .map(|_| registry.register_session(SessionConfig::default()).session_id)
            .collect();

        assert_eq!(registry.session_count(), 5);
        assert_eq!(registry.retained_sessions(), 3);
        assert!(registry.session(&first.session_id).is_none());
        assert!(registry.session(&ids[0]).is_none());
        assert!(registry.session(&ids[3]).is_some());
    }

    #[test]
    fn test_agent_requests_keyed_by_room() {
        let registry = SessionRegistry::new();
        registry.record_agent("demo", "https://demo.daily.co/demo");
        registry.record_agent("demo", "https://demo.daily.co/demo");

        assert_eq!(registry.agent_count(), 1);
        assert_eq!(
            registry.agent("demo").map(|a| a.room_url),
            Some("https://demo.daily.co/demo".to_string())
        );
        assert!(registry.agent("other").is_none());
    }

    #[test]
    fn test_repeat_agent_request_refreshes_position() {
        let registry = SessionRegistry::with_capacity(2);
        registry.record_agent("a", "https://a.daily.co/a");
        registry.record_agent("b", "https://b.daily.co/b");
        registry.record_agent("a", "https://a.daily.co/a");
        registry.record_agent("c", "https://c.daily.co/c");

        assert_eq!(registry.agent_count(), 2);
        assert!(registry.agent("a").is_some());
        assert!(registry.agent("b").is_none());
    }
}
