//! User-visible notices.
//!
//! The console equivalent of the snackbars and toasts a mobile shell would
//! show: every recoverable failure and every lifecycle milestone ends up
//! here, never as a propagated fault.

use std::{fmt, path::PathBuf};

use beacon_scribe_core::{CapabilityKind, FieldError, ReadinessReport};
use uuid::Uuid;

/// A notice for the user.
#[derive(Debug)]
pub enum Notice {
    /// One or more capabilities blocked the start; remediation prompts are
    /// out. Retryable.
    NotReady(ReadinessReport),
    /// Input validation failed; one entry per offending field.
    InvalidFields(Vec<FieldError>),
    /// A start request went out.
    StartDispatched,
    /// The worker confirmed the recording is running.
    RecordingConfirmed,
    /// The user stopped the recording.
    RecordingStopped,
    /// The worker finished on its own.
    RecordingFinished {
        /// Recording file the worker produced, if any.
        file_name: Option<String>,
    },
    /// The worker failed; the session was reset.
    WorkerFailed {
        /// Worker's failure description.
        reason: String,
    },
    /// The recorder could not be reached at all.
    DispatchFailed {
        /// Failure description.
        reason: String,
    },
    /// `grant`/`deny` arrived with no prompt outstanding for that capability.
    NoPendingRemediation(CapabilityKind),
    /// A remediation prompt was answered.
    RemediationAnswered {
        /// Capability the answer applied to.
        kind: CapabilityKind,
        /// Whether it was granted.
        granted: bool,
    },
    /// Export produced an archive.
    ExportReady(PathBuf),
    /// Export failed; session state is unaffected.
    ExportFailed {
        /// Failure description.
        reason: String,
    },
    /// The recording uuid landed on the clipboard.
    UuidCopied(Uuid),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::NotReady(report) => {
                let missing: Vec<String> =
                    report.missing().iter().map(|k| k.to_string()).collect();
                write!(
                    f,
                    "cannot start: {} not ready; answer the prompt (grant/deny <capability>) and try again",
                    missing.join(", ")
                )
            }
            Notice::InvalidFields(errors) => {
                let fields: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
                write!(f, "not all information was provided: {}", fields.join("; "))
            }
            Notice::StartDispatched => write!(f, "recording starting..."),
            Notice::RecordingConfirmed => write!(f, "recording"),
            Notice::RecordingStopped => write!(f, "recording stopped"),
            Notice::RecordingFinished { file_name } => match file_name {
                Some(name) => write!(f, "recording finished: {}", name),
                None => write!(f, "recording finished"),
            },
            Notice::WorkerFailed { reason } => {
                write!(f, "recording failed: {}", reason)
            }
            Notice::DispatchFailed { reason } => {
                write!(f, "could not reach the recorder: {}", reason)
            }
            Notice::NoPendingRemediation(kind) => {
                write!(f, "no pending prompt for {}", kind)
            }
            Notice::RemediationAnswered { kind, granted } => {
                if *granted {
                    write!(f, "{} granted; try again", kind)
                } else {
                    write!(f, "{} denied; recording stays blocked", kind)
                }
            }
            Notice::ExportReady(path) => write!(f, "exported {}", path.display()),
            Notice::ExportFailed { reason } => write!(f, "unable to export files: {}", reason),
            Notice::UuidCopied(uuid) => write!(f, "copied to clipboard: {}", uuid),
        }
    }
}
