//! Beacon-Scribe Core Library
//!
//! Session lifecycle orchestration for a foreground sensor recording:
//! the capability readiness gate, the start/stop state machine, and the
//! request/response contract with the background recording worker.
//!
//! # Example
//!
//! ```no_run
//! use beacon_scribe_core::{
//!     CoreResult, ParamsInput, PositioningProvider, RadioScanningProvider,
//!     ReadinessGate, RemediationToken, SessionController, StorageProvider,
//! };
//! use tokio::sync::mpsc;
//!
//! struct AlwaysReady;
//!
//! impl PositioningProvider for AlwaysReady {
//!     fn has_permission(&self) -> bool { true }
//!     fn is_enabled(&self) -> bool { true }
//!     fn request_permission(&self, _token: RemediationToken) {}
//!     fn request_enable(&self, _token: RemediationToken) {}
//! }
//!
//! impl RadioScanningProvider for AlwaysReady {
//!     fn is_enabled(&self) -> bool { true }
//!     fn request_enable(&self, _token: RemediationToken) {}
//! }
//!
//! impl StorageProvider for AlwaysReady {
//!     fn has_permission(&self) -> bool { true }
//!     fn request_permission(&self, _token: RemediationToken) {}
//! }
//!
//! fn main() -> CoreResult<()> {
//!     let gate = ReadinessGate::new(AlwaysReady, AlwaysReady, AlwaysReady);
//!     let (request_tx, _request_rx) = mpsc::channel(8);
//!     let (event_tx, _event_rx) = mpsc::channel(8);
//!     let mut controller = SessionController::new(gate, request_tx, event_tx);
//!
//!     let input = ParamsInput {
//!         comment: "hallway walk".to_string(),
//!         duration: "30".to_string(),
//!         offset: "5".to_string(),
//!     };
//!     let outcome = controller.start_recording(&input)?;
//!     println!("{outcome:?}");
//!     Ok(())
//! }
//! ```

mod capability;
mod error;
mod export;
mod readiness;
mod session;
mod worker;

pub use {
    capability::{
        CapabilityKind, PositioningProvider, RadioScanningProvider, RemediationToken,
        StorageProvider,
    },
    error::{CoreError, Result as CoreResult},
    export::{ARCHIVE_FILE_NAME, bundle_recordings, json_files_in},
    readiness::{CapabilityStatus, ReadinessGate, ReadinessReport},
    session::{
        EventOutcome, Field, FieldError, FieldErrorKind, MAX_NUMERIC_DIGITS, ParamsInput,
        RECORDING_UUID, SessionController, SessionParams, SessionState, StartOutcome, StopOrigin,
        StopOutcome,
    },
    worker::{WorkerAction, WorkerEvent, WorkerEventKind, WorkerRequest},
};

#[cfg(test)]
mod tests;
