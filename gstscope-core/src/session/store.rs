use crate::session::{IngestOutcome, Session, SessionId, SessionState};
use dashmap::DashMap;
use std::time::Instant;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("transition on unknown session {id}")]
    UnknownSession { id: SessionId },

    #[error("session {id} is already {state}; a second transition is rejected")]
    AlreadyTerminal { id: SessionId, state: &'static str },
}

/// Registry of upload sessions.
///
/// Implementations must make `transition` atomic with respect to `get`:
/// a reader sees either `Pending` or the complete terminal state.
pub trait SessionStore: Send + Sync {
    /// Register a new `Pending` session.
    fn create(&self) -> SessionId;

    fn get(&self, id: &SessionId) -> Option<Session>;

    /// Move a `Pending` session to its terminal state. Called exactly once.
    fn transition(&self, id: &SessionId, outcome: IngestOutcome) -> Result<(), StoreError>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

struct Entry {
    state: SessionState,
    created_at: Instant,
}

/// In-process session store.
#[derive(Default)]
pub struct MemorySessionStore {
    sessions: DashMap<SessionId, Entry>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn create(&self) -> SessionId {
        let id = SessionId::generate();
        self.sessions.insert(
            id.clone(),
            Entry {
                state: SessionState::Pending,
                created_at: Instant::now(),
            },
        );
        tracing::debug!(session_id = %id, sessions = self.sessions.len(), "session created");
        id
    }

    fn get(&self, id: &SessionId) -> Option<Session> {
        self.sessions.get(id).map(|entry| Session {
            id: id.clone(),
            state: entry.state.clone(),
        })
    }

    fn transition(&self, id: &SessionId, outcome: IngestOutcome) -> Result<(), StoreError> {
        let Some(mut entry) = self.sessions.get_mut(id) else {
            tracing::error!(session_id = %id, "transition on unknown session");
            return Err(StoreError::UnknownSession { id: id.clone() });
        };

        if entry.state.is_terminal() {
            let state = entry.state.name();
            tracing::error!(session_id = %id, state, "rejected second transition");
            return Err(StoreError::AlreadyTerminal {
                id: id.clone(),
                state,
            });
        }

        entry.state = outcome.into();
        tracing::debug!(
            session_id = %id,
            state = entry.state.name(),
            pending_ms = entry.created_at.elapsed().as_millis() as u64,
            "session transitioned"
        );
        Ok(())
    }

    fn len(&self) -> usize {
        self.sessions.len()
    }
}
