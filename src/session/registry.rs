//! Session registry
//!
//! Maps session ids to independent tagging sessions. Sessions never share an
//! event log; each sits behind its own lock so one session's recompute never
//! interleaves with a mutation of the same session.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tracing::info;

use crate::error::{TaggerError, TaggerResult};

use super::TaggingSession;

/// Session used when a caller does not name one
pub const DEFAULT_SESSION_ID: &str = "default";

/// Handle to one locked session
pub type SharedSession = Arc<Mutex<TaggingSession>>;

/// Registry of live sessions
#[derive(Default)]
pub struct SessionRegistry {
    sessions: RwLock<HashMap<String, SharedSession>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session under a fresh id
    pub fn create(&self) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.sessions
            .write()
            .insert(id.clone(), Arc::new(Mutex::new(TaggingSession::new())));
        info!(session = %id, "session created");
        id
    }

    /// Fetch a session, creating it if the id is new
    pub fn get_or_create(&self, id: &str) -> SharedSession {
        if let Some(session) = self.sessions.read().get(id) {
            return Arc::clone(session);
        }

        let mut sessions = self.sessions.write();
        Arc::clone(sessions.entry(id.to_string()).or_insert_with(|| {
            info!(session = %id, "session created");
            Arc::new(Mutex::new(TaggingSession::new()))
        }))
    }

    /// Fetch an existing session
    pub fn get(&self, id: &str) -> TaggerResult<SharedSession> {
        self.sessions
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| TaggerError::SessionNotFound(id.to_string()))
    }

    /// Run `f` against an existing session while holding its lock
    pub fn with_session<R>(
        &self,
        id: &str,
        f: impl FnOnce(&mut TaggingSession) -> R,
    ) -> TaggerResult<R> {
        let session = self.get(id)?;
        let mut guard = session.lock();
        Ok(f(&mut guard))
    }

    /// Drop a session; returns whether it existed
    pub fn remove(&self, id: &str) -> bool {
        let removed = self.sessions.write().remove(id).is_some();
        if removed {
            info!(session = %id, "session removed");
        }
        removed
    }

    /// Ids of all live sessions, sorted
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.sessions.read().keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::TagRequest;
    use crate::types::ShotResult;

    fn start(session: &mut TaggingSession) {
        session.set_context("Acadia", None, None).unwrap();
        session.add_play("Horns").unwrap();
        session.start_tagging().unwrap();
    }

    #[test]
    fn test_sessions_are_independent() {
        let registry = SessionRegistry::new();
        let a = registry.create();
        let b = registry.create();
        assert_ne!(a, b);

        registry
            .with_session(&a, |s| {
                start(s);
                s.tag(TagRequest::new(ShotResult::Made2).play("Horns")).unwrap();
            })
            .unwrap();

        let a_len = registry.with_session(&a, |s| s.log().len()).unwrap();
        let b_len = registry.with_session(&b, |s| s.log().len()).unwrap();
        assert_eq!((a_len, b_len), (1, 0));
    }

    #[test]
    fn test_get_or_create_returns_same_session() {
        let registry = SessionRegistry::new();
        let first = registry.get_or_create(DEFAULT_SESSION_ID);
        start(&mut first.lock());

        let second = registry.get_or_create(DEFAULT_SESSION_ID);
        assert!(second.lock().is_started());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unknown_session() {
        let registry = SessionRegistry::new();
        assert!(matches!(
            registry.get("missing"),
            Err(TaggerError::SessionNotFound(_))
        ));
        assert!(!registry.remove("missing"));
    }

    #[test]
    fn test_remove_and_ids() {
        let registry = SessionRegistry::new();
        registry.get_or_create("b");
        registry.get_or_create("a");
        assert_eq!(registry.ids(), vec!["a".to_string(), "b".to_string()]);

        assert!(registry.remove("a"));
        assert_eq!(registry.ids(), vec!["b".to_string()]);
    }
}
