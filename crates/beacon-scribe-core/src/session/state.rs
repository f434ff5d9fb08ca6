use std::time::Instant;

use uuid::Uuid;

/// Session state, owned solely by the controller.
///
/// `Starting` covers the window between a dispatched start and the worker's
/// `Started` confirmation, so "attempt in progress" is visible immediately
/// without conflating it with "confirmed running". Only the controller's
/// transition functions mutate this; the result-channel path goes through
/// the same functions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionState {
    /// No session active.
    Idle,
    /// Start dispatched to the worker, confirmation pending.
    Starting {
        /// Id of the session being started.
        session_id: Uuid,
        /// When the start request was dispatched.
        dispatched_at: Instant,
    },
    /// Worker confirmed the recording is running.
    Recording {
        /// Id of the running session.
        session_id: Uuid,
        /// When the worker confirmed the start.
        started_at: Instant,
    },
}

impl SessionState {
    /// True between a successful start dispatch and the return to idle.
    pub fn is_active(&self) -> bool {
        !matches!(self, SessionState::Idle)
    }

    /// Id of the active session, if any.
    pub fn session_id(&self) -> Option<Uuid> {
        match self {
            SessionState::Idle => None,
            SessionState::Starting { session_id, .. }
            | SessionState::Recording { session_id, .. } => Some(*session_id),
        }
    }
}
