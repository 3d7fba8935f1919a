use std::collections::HashMap;

use tracker_core::Clock;
use tracker_core::model::SessionId;

use crate::tracker::TrackerContext;

/// Hands out one independently-owned [`TrackerContext`] per hosting
/// session.
///
/// A host serving several concurrent sessions must not share mutable
/// tracker state between them; the registry makes the per-session ownership
/// explicit. Single-session hosts can construct a [`TrackerContext`]
/// directly and skip the registry.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    clock: Clock,
    sessions: HashMap<SessionId, TrackerContext>,
}

impl SessionRegistry {
    /// Creates an empty registry whose sessions share `clock`.
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            clock,
            sessions: HashMap::new(),
        }
    }

    /// Opens a fresh session and returns its id.
    pub fn open(&mut self) -> SessionId {
        let context = TrackerContext::new(self.clock);
        let id = context.id();
        self.sessions.insert(id, context);
        id
    }

    #[must_use]
    pub fn get(&self, id: SessionId) -> Option<&TrackerContext> {
        self.sessions.get(&id)
    }

    pub fn get_mut(&mut self, id: SessionId) -> Option<&mut TrackerContext> {
        self.sessions.get_mut(&id)
    }

    /// Ends a session, discarding its progress data. Returns false when the
    /// id is unknown.
    pub fn close(&mut self, id: SessionId) -> bool {
        self.sessions.remove(&id).is_some()
    }

    /// Number of open sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
