use crate::{
    CoreError, CoreResult, ReadinessGate, ReadinessReport,
    capability::{PositioningProvider, RadioScanningProvider, StorageProvider},
    session::{FieldError, ParamsInput, SessionParams, SessionState},
    worker::{WorkerAction, WorkerEvent, WorkerEventKind, WorkerRequest},
};

use std::{panic::Location, time::Instant};

use error_location::ErrorLocation;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// Result of a start attempt.
#[derive(Debug)]
pub enum StartOutcome {
    /// A `Start` request went out; the session is now starting.
    Dispatched {
        /// Id of the new session.
        session_id: Uuid,
    },
    /// One or more capabilities were unsatisfied; remediation was triggered,
    /// nothing was dispatched. Surfaced as a global retryable notice.
    NotReady(ReadinessReport),
    /// Input validation failed; nothing was dispatched. Each error is
    /// localized to its field.
    InvalidParams(Vec<FieldError>),
    /// A session is already starting or recording; duplicate starts are
    /// rejected by the state machine.
    AlreadyActive,
}

/// Who initiated a stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopOrigin {
    /// Explicit user action; the worker must be told to stop.
    User,
    /// The worker already stopped itself; only local state is cleared.
    Worker,
}

/// Result of a stop attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopOutcome {
    /// A `Stop` request went out and the session returned to idle.
    Dispatched {
        /// Id of the stopped session.
        session_id: Uuid,
    },
    /// The worker had already stopped; local state returned to idle without
    /// a `Stop` request.
    Cleared {
        /// Id of the stopped session.
        session_id: Uuid,
    },
    /// Nothing was active; no dispatch, no state change.
    AlreadyIdle,
}

/// Result of delivering a worker event to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    /// `Started` arrived for the starting session; now recording.
    Confirmed {
        /// Id of the confirmed session.
        session_id: Uuid,
    },
    /// `Finished` arrived; the session is over, no `Stop` was sent.
    Finished {
        /// Id of the finished session.
        session_id: Uuid,
        /// Recording file the worker produced, if any.
        file_name: Option<String>,
    },
    /// `Error` arrived; the session was reset to idle so the UI cannot
    /// desynchronize from the worker.
    Failed {
        /// Id of the failed session.
        session_id: Uuid,
        /// Worker's failure description.
        reason: String,
    },
    /// The event did not belong to the active session and was dropped.
    Stale,
}

/// Owns the session state machine and the request/response contract with
/// the background recording worker.
///
/// All methods run on the caller's single execution context; worker events
/// must be marshaled onto that context before
/// [`handle_worker_event`](Self::handle_worker_event) is invoked. The
/// binary's select loop provides that guarantee by owning both the
/// controller and the event receiver.
#[derive(Debug)]
pub struct SessionController<P, R, S> {
    state: SessionState,
    gate: ReadinessGate<P, R, S>,
    requests: mpsc::Sender<WorkerRequest>,
    events: mpsc::Sender<WorkerEvent>,
}

impl<P, R, S> SessionController<P, R, S>
where
    P: PositioningProvider,
    R: RadioScanningProvider,
    S: StorageProvider,
{
    /// Create an idle controller.
    ///
    /// `requests` feeds the background worker; `events` is the result
    /// channel handle cloned into every request so the worker can report
    /// back.
    pub fn new(
        gate: ReadinessGate<P, R, S>,
        requests: mpsc::Sender<WorkerRequest>,
        events: mpsc::Sender<WorkerEvent>,
    ) -> Self {
        Self {
            state: SessionState::Idle,
            gate,
            requests,
            events,
        }
    }

    /// Current session state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// True between a successful start dispatch and the return to idle.
    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// The readiness gate, for routing remediation results.
    pub fn gate_mut(&mut self) -> &mut ReadinessGate<P, R, S> {
        &mut self.gate
    }

    /// Attempt to start a recording session.
    ///
    /// Guards, in order: current state must be idle, all capabilities must
    /// already be satisfied, all fields must validate. A failed guard
    /// produces an outcome for the UI and leaves the state untouched. On
    /// success exactly one `Start` request is dispatched and the state moves
    /// to `Starting`; `Recording` follows only on the worker's `Started`
    /// confirmation.
    #[instrument(skip(self, input))]
    pub fn start_recording(&mut self, input: &ParamsInput) -> CoreResult<StartOutcome> {
        if self.state.is_active() {
            warn!(state = ?self.state, "Start ignored, session already active");
            return Ok(StartOutcome::AlreadyActive);
        }

        let report = self.gate.check_and_remediate();
        if !report.all_ready() {
            info!(missing = ?report.missing(), "Start blocked, capabilities unsatisfied");
            return Ok(StartOutcome::NotReady(report));
        }

        let params = match SessionParams::parse(input) {
            Ok(params) => params,
            Err(errors) => {
                info!(?errors, "Start blocked, invalid fields");
                return Ok(StartOutcome::InvalidParams(errors));
            }
        };

        let session_id = Uuid::new_v4();

        // Dispatch FIRST -- if this fails the state stays Idle, so the UI
        // never claims a session the worker was never asked for.
        self.dispatch(WorkerRequest {
            session_id,
            action: WorkerAction::Start(params),
            events: self.events.clone(),
        })?;

        self.state = SessionState::Starting {
            session_id,
            dispatched_at: Instant::now(),
        };

        info!(session_id = %session_id, "Recording start dispatched");

        Ok(StartOutcome::Dispatched { session_id })
    }

    /// Stop the active session.
    ///
    /// User-initiated stops dispatch exactly one `Stop` request before
    /// clearing the state; worker-initiated stops (the worker already
    /// stopped itself) only clear the state. Stopping while idle is a no-op.
    #[instrument(skip(self))]
    pub fn stop_recording(&mut self, origin: StopOrigin) -> CoreResult<StopOutcome> {
        let Some(session_id) = self.state.session_id() else {
            debug!("Stop ignored, no active session");
            return Ok(StopOutcome::AlreadyIdle);
        };

        if origin == StopOrigin::User {
            // Dispatch FIRST -- on failure the session stays active and the
            // user can retry, instead of the worker recording unattended.
            self.dispatch(WorkerRequest {
                session_id,
                action: WorkerAction::Stop,
                events: self.events.clone(),
            })?;
        }

        self.state = SessionState::Idle;

        info!(session_id = %session_id, ?origin, "Recording stopped");

        Ok(match origin {
            StopOrigin::User => StopOutcome::Dispatched { session_id },
            StopOrigin::Worker => StopOutcome::Cleared { session_id },
        })
    }

    /// Deliver a worker lifecycle event.
    ///
    /// Must be called on the controller's execution context. Events for
    /// anything but the active session are stale and dropped.
    #[instrument(skip(self))]
    pub fn handle_worker_event(&mut self, event: WorkerEvent) -> CoreResult<EventOutcome> {
        if self.state.session_id() != Some(event.session_id) {
            debug!(
                event_session = %event.session_id,
                state = ?self.state,
                "Stale worker event dropped"
            );
            return Ok(EventOutcome::Stale);
        }

        match event.kind {
            WorkerEventKind::Started => {
                if let SessionState::Starting { session_id, .. } = self.state {
                    self.state = SessionState::Recording {
                        session_id,
                        started_at: Instant::now(),
                    };
                    info!(session_id = %session_id, "Worker confirmed recording");
                }
                Ok(EventOutcome::Confirmed {
                    session_id: event.session_id,
                })
            }
            WorkerEventKind::Finished { file_name } => {
                // The worker stopped itself; clearing state must not send a
                // Stop request back at it.
                match self.stop_recording(StopOrigin::Worker)? {
                    StopOutcome::Cleared { session_id } | StopOutcome::Dispatched { session_id } => {
                        Ok(EventOutcome::Finished {
                            session_id,
                            file_name,
                        })
                    }
                    StopOutcome::AlreadyIdle => Ok(EventOutcome::Stale),
                }
            }
            WorkerEventKind::Error { reason } => {
                warn!(session_id = %event.session_id, %reason, "Worker reported failure");
                match self.stop_recording(StopOrigin::Worker)? {
                    StopOutcome::Cleared { session_id } | StopOutcome::Dispatched { session_id } => {
                        Ok(EventOutcome::Failed { session_id, reason })
                    }
                    StopOutcome::AlreadyIdle => Ok(EventOutcome::Stale),
                }
            }
        }
    }

    /// Fire-and-forget dispatch to the worker. Never blocks; a full or
    /// closed queue is a dispatch failure.
    #[track_caller]
    fn dispatch(&self, request: WorkerRequest) -> CoreResult<()> {
        self.requests
            .try_send(request)
            .map_err(|e| CoreError::DispatchFailed {
                reason: format!("worker request channel: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
