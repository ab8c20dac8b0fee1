//! Editor session registry.
//!
//! DESIGN
//! ======
//! Each open document gets its own [`Editor`], keyed by a random session id.
//! The registry is a cloneable handle over a shared map, so async hosts
//! (one handler per request or socket) can reach the same sessions. Every
//! dispatch takes the write lock, which serializes edits to a session; the
//! editor itself never sees concurrent access.

#[cfg(test)]
#[path = "sessions_test.rs"]
mod sessions_test;

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::action::Action;
use crate::config::EditorConfig;
use crate::editor::Editor;
use crate::error::SessionError;
use crate::layout::Snapshot;

/// Identifier for one open editing session.
pub type SessionId = Uuid;

/// Shared map of live editor sessions.
#[derive(Clone, Default)]
pub struct EditorSessions {
    config: EditorConfig,
    sessions: Arc<RwLock<HashMap<SessionId, Editor>>>,
}

impl EditorSessions {
    #[must_use]
    pub fn new(config: EditorConfig) -> Self {
        Self { config, sessions: Arc::new(RwLock::new(HashMap::new())) }
    }

    /// Open a new session on a persisted snapshot.
    pub async fn open(&self, snapshot: Snapshot) -> SessionId {
        let id = Uuid::new_v4();
        let editor = Editor::from_snapshot(snapshot, self.config.clone());
        let mut sessions = self.sessions.write().await;
        sessions.insert(id, editor);
        info!(%id, open = sessions.len(), "editor session opened");
        id
    }

    /// Apply `action` to a session and return its resulting snapshot.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no session has this id.
    /// - `Editor` if the editor rejects the action (strict-key `add-field`).
    pub async fn dispatch(&self, id: SessionId, action: Action) -> Result<Snapshot, SessionError> {
        let mut sessions = self.sessions.write().await;
        let editor = sessions.get_mut(&id).ok_or(SessionError::NotFound(id))?;
        editor.dispatch(action)?;
        Ok(editor.snapshot())
    }

    /// # Errors
    ///
    /// Returns `NotFound` if no session has this id.
    pub async fn snapshot(&self, id: SessionId) -> Result<Snapshot, SessionError> {
        let sessions = self.sessions.read().await;
        sessions
            .get(&id)
            .map(Editor::snapshot)
            .ok_or(SessionError::NotFound(id))
    }

    /// `(past, future)` history depths for a session, for undo/redo button state.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no session has this id.
    pub async fn history_depths(&self, id: SessionId) -> Result<(usize, usize), SessionError> {
        let sessions = self.sessions.read().await;
        sessions
            .get(&id)
            .map(Editor::history_depths)
            .ok_or(SessionError::NotFound(id))
    }

    /// Close a session, returning its final snapshot for persistence.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no session has this id.
    pub async fn close(&self, id: SessionId) -> Result<Snapshot, SessionError> {
        let mut sessions = self.sessions.write().await;
        let editor = sessions.remove(&id).ok_or(SessionError::NotFound(id))?;
        info!(%id, open = sessions.len(), "editor session closed");
        Ok(editor.snapshot())
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}
