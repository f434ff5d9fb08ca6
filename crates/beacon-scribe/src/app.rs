use crate::{
    AppCommand, AppError, AppResult, Notice,
    providers::{CapabilitySwitchboard, HarnessPositioning, HarnessRadio, HarnessStorage},
};

use std::{panic::Location, path::PathBuf, sync::Arc};

use beacon_scribe_core::{
    CapabilityKind, EventOutcome, RECORDING_UUID, SessionController, SessionState, StartOutcome,
    StopOrigin, WorkerEvent, bundle_recordings,
};
use error_location::ErrorLocation;
use tokio::sync::mpsc;
use tracing::{error, info, instrument, warn};

/// Main application state.
///
/// Runs on the async runtime; the select loop in [`run`](Self::run) is the
/// single execution context that owns the session controller, so console
/// commands and worker events are serialized here and the controller never
/// sees concurrent mutation.
pub struct App {
    pub(crate) controller:
        SessionController<HarnessPositioning, HarnessRadio, HarnessStorage>,
    pub(crate) switchboard: Arc<CapabilitySwitchboard>,
    pub(crate) recording_dir: PathBuf,
    pub(crate) command_rx: mpsc::Receiver<AppCommand>,
    pub(crate) event_rx: mpsc::Receiver<WorkerEvent>,
}

impl App {
    /// Run the main application event loop.
    #[instrument(skip(self))]
    pub(crate) async fn run(mut self) -> AppResult<()> {
        info!("Beacon-Scribe starting");

        loop {
            tokio::select! {
                Some(cmd) = self.command_rx.recv() => {
                    if matches!(cmd, AppCommand::Shutdown) {
                        info!("Shutdown requested");
                        break;
                    }
                    if let Err(e) = self.handle_command(cmd).await {
                        error!(error = ?e, "Failed to handle command");
                    }
                }

                Some(event) = self.event_rx.recv() => {
                    self.handle_worker_event(event);
                }

                else => {
                    info!("All channels closed, shutting down");
                    break;
                }
            }
        }

        info!("Beacon-Scribe shut down successfully");

        Ok(())
    }

    #[instrument(skip(self))]
    async fn handle_command(&mut self, cmd: AppCommand) -> AppResult<()> {
        match cmd {
            AppCommand::ToggleRecording { input } => {
                if self.controller.is_active() {
                    self.controller.stop_recording(StopOrigin::User)?;
                    self.notify(Notice::RecordingStopped);
                } else {
                    match self.controller.start_recording(&input) {
                        Ok(StartOutcome::Dispatched { .. }) => {
                            self.notify(Notice::StartDispatched);
                        }
                        Ok(StartOutcome::NotReady(report)) => {
                            self.notify(Notice::NotReady(report));
                        }
                        Ok(StartOutcome::InvalidParams(errors)) => {
                            self.notify(Notice::InvalidFields(errors));
                        }
                        Ok(StartOutcome::AlreadyActive) => {
                            // Unreachable behind the is_active branch, but the
                            // outcome exists, so surface it rather than drop it.
                            warn!("Start raced with an active session");
                        }
                        Err(e) => {
                            self.notify(Notice::DispatchFailed {
                                reason: e.to_string(),
                            });
                        }
                    }
                }
            }
            AppCommand::ExportRecordings => self.export_recordings(),
            AppCommand::CopyRecordingUuid => self.copy_recording_uuid()?,
            AppCommand::Remediation { kind, granted } => self.answer_remediation(kind, granted),
            AppCommand::Status => self.print_status(),
            AppCommand::Shutdown => {
                // Handled in the select loop before dispatch.
            }
        }

        Ok(())
    }

    /// Deliver a worker event to the controller and surface the outcome.
    #[instrument(skip(self))]
    fn handle_worker_event(&mut self, event: WorkerEvent) {
        match self.controller.handle_worker_event(event) {
            Ok(EventOutcome::Confirmed { .. }) => self.notify(Notice::RecordingConfirmed),
            Ok(EventOutcome::Finished { file_name, .. }) => {
                self.notify(Notice::RecordingFinished { file_name });
            }
            Ok(EventOutcome::Failed { reason, .. }) => {
                self.notify(Notice::WorkerFailed { reason });
            }
            Ok(EventOutcome::Stale) => {
                // Already logged by the controller.
            }
            Err(e) => error!(error = ?e, "Failed to handle worker event"),
        }
    }

    /// Route a `grant`/`deny` answer back through the readiness gate.
    fn answer_remediation(&mut self, kind: CapabilityKind, granted: bool) {
        let Some((token, remedy)) = self.switchboard.take_pending(kind) else {
            self.notify(Notice::NoPendingRemediation(kind));
            return;
        };

        if granted {
            self.switchboard.apply_grant(kind, remedy);
        }

        if self
            .controller
            .gate_mut()
            .resolve_remediation(token, granted)
            .is_none()
        {
            warn!(%kind, "Remediation token no longer pending at the gate");
        }

        self.notify(Notice::RemediationAnswered { kind, granted });
    }

    /// Bundle all recordings and hand the archive to the platform opener.
    ///
    /// Runs independently of the session state machine; failure leaves the
    /// session untouched.
    #[instrument(skip(self))]
    fn export_recordings(&mut self) {
        match bundle_recordings(&self.recording_dir) {
            Ok(archive) => {
                if let Err(e) = open::that(&archive) {
                    warn!(error = ?e, "Could not hand archive to the platform");
                }
                self.notify(Notice::ExportReady(archive));
            }
            Err(e) => {
                error!(error = ?e, "Export failed");
                self.notify(Notice::ExportFailed {
                    reason: e.to_string(),
                });
            }
        }
    }

    /// Copy the well-known recording uuid for pasting into the beacon
    /// configuration.
    #[track_caller]
    fn copy_recording_uuid(&mut self) -> AppResult<()> {
        let mut clipboard = arboard::Clipboard::new().map_err(|e| AppError::ClipboardError {
            reason: format!("Failed to initialize clipboard: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        clipboard
            .set_text(RECORDING_UUID.to_string())
            .map_err(|e| AppError::ClipboardError {
                reason: format!("Failed to set clipboard: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.notify(Notice::UuidCopied(RECORDING_UUID));

        Ok(())
    }

    fn print_status(&self) {
        match self.controller.state() {
            SessionState::Idle => println!("idle"),
            SessionState::Starting { session_id, .. } => {
                println!("starting (session {})", session_id);
            }
            SessionState::Recording { session_id, .. } => {
                println!("recording (session {})", session_id);
            }
        }
    }

    fn notify(&self, notice: Notice) {
        println!("{}", notice);
    }
}
