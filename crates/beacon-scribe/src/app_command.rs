use beacon_scribe_core::{CapabilityKind, ParamsInput};

/// Commands sent from the console forwarder to the main application.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// The record button: starts a session with the given fields, or stops
    /// the running one.
    ToggleRecording {
        /// Raw field text as the user typed it; validated by the controller.
        input: ParamsInput,
    },
    /// Bundle all recordings into an archive and hand it to the platform.
    ExportRecordings,
    /// Copy the well-known recording uuid to the clipboard.
    CopyRecordingUuid,
    /// The user answered a pending remediation prompt.
    Remediation {
        /// Capability the answer applies to.
        kind: CapabilityKind,
        /// Whether the user granted the request.
        granted: bool,
    },
    /// Print the current session state.
    Status,
    /// Request application shutdown.
    Shutdown,
}
