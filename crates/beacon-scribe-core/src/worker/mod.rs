//! Request/response contract with the background recording worker.
//!
//! The controller talks to the worker through exactly two channels: a
//! fire-and-forget request channel (controller to worker) and the result
//! channel handle embedded in each request (worker back to controller).
//! Nothing here blocks; the worker's internal scheduling is its own concern.

use crate::session::SessionParams;

use tokio::sync::mpsc;
use uuid::Uuid;

/// What the worker is being asked to do.
#[derive(Debug, Clone)]
pub enum WorkerAction {
    /// Begin recording with the given parameters.
    Start(SessionParams),
    /// Stop the running recording.
    Stop,
}

/// One-shot message to the background worker.
///
/// Owned exclusively by the dispatch call; the controller keeps no reference
/// to it after sending.
#[derive(Debug)]
pub struct WorkerRequest {
    /// Session this request belongs to.
    pub session_id: Uuid,
    /// Requested action.
    pub action: WorkerAction,
    /// Result channel handle the worker reports lifecycle events on.
    pub events: mpsc::Sender<WorkerEvent>,
}

/// Lifecycle event reported by the worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerEvent {
    /// Session the event belongs to. Events for a session that is no longer
    /// active are stale and get dropped by the controller.
    pub session_id: Uuid,
    /// What happened.
    pub kind: WorkerEventKind,
}

/// Tagged union of worker lifecycle events.
///
/// Per worker invocation: zero or more `Started`/`Error` events and at most
/// one `Finished`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerEventKind {
    /// The worker has actually begun recording. Advisory confirmation of a
    /// dispatched start.
    Started,
    /// The worker stopped on its own and the session is over.
    Finished {
        /// Name of the produced recording file, if any.
        file_name: Option<String>,
    },
    /// The worker failed.
    Error {
        /// Human-readable failure description.
        reason: String,
    },
}

impl WorkerEventKind {
    /// Wire result code for [`WorkerEventKind::Error`].
    pub const CODE_ERROR: u8 = 0;
    /// Wire result code for [`WorkerEventKind::Finished`].
    pub const CODE_FINISHED: u8 = 1;
    /// Wire result code for [`WorkerEventKind::Started`].
    pub const CODE_STARTED: u8 = 2;

    /// The platform result code for this event.
    pub fn code(&self) -> u8 {
        match self {
            WorkerEventKind::Error { .. } => Self::CODE_ERROR,
            WorkerEventKind::Finished { .. } => Self::CODE_FINISHED,
            WorkerEventKind::Started => Self::CODE_STARTED,
        }
    }

    /// Decode a platform result code and its optional payload.
    ///
    /// The payload carries the produced file name for `Finished` and the
    /// failure description for `Error`. Unknown codes yield `None`.
    pub fn from_code(code: u8, payload: Option<String>) -> Option<Self> {
        match code {
            Self::CODE_ERROR => Some(WorkerEventKind::Error {
                reason: payload.unwrap_or_else(|| "unspecified worker error".to_string()),
            }),
            Self::CODE_FINISHED => Some(WorkerEventKind::Finished { file_name: payload }),
            Self::CODE_STARTED => Some(WorkerEventKind::Started),
            _ => None,
        }
    }
}
