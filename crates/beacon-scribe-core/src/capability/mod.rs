//! Capability provider contracts.
//!
//! Each gated platform feature (positioning, radio scanning, persistent
//! storage) sits behind a provider trait. The core only depends on these
//! contracts; platform adapters live outside this crate.
//!
//! Remediation (permission dialogs, enable prompts) is asynchronous on every
//! platform: a provider kicks off the system flow and the answer arrives
//! later through [`crate::ReadinessGate::resolve_remediation`], correlated by
//! the [`RemediationToken`] that was handed to the provider.

mod pending;

pub(crate) use pending::PendingRemediations;

use std::fmt;

use uuid::Uuid;

/// The three independently gated platform capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CapabilityKind {
    /// Location fixes from the platform positioning service.
    Positioning,
    /// Short-range radio (beacon) scanning.
    RadioScanning,
    /// Writable persistent storage for recording files.
    PersistentStorage,
}

impl fmt::Display for CapabilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CapabilityKind::Positioning => "positioning",
            CapabilityKind::RadioScanning => "radio scanning",
            CapabilityKind::PersistentStorage => "storage",
        };
        f.write_str(name)
    }
}

/// Correlation token for one in-flight remediation request.
///
/// Replaces integer request codes: the token carries the capability kind it
/// was issued for, so results route without a shared code registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemediationToken {
    kind: CapabilityKind,
    id: Uuid,
}

impl RemediationToken {
    pub(crate) fn new(kind: CapabilityKind) -> Self {
        Self {
            kind,
            id: Uuid::new_v4(),
        }
    }

    /// The capability this token was issued for.
    pub fn kind(&self) -> CapabilityKind {
        self.kind
    }

    /// Unique id of this remediation request.
    pub fn id(&self) -> Uuid {
        self.id
    }
}

/// Platform positioning service.
pub trait PositioningProvider {
    /// Whether the app holds the positioning permission.
    fn has_permission(&self) -> bool;

    /// Whether the positioning service itself is switched on.
    fn is_enabled(&self) -> bool;

    /// Kick off the system permission dialog. Must not block; the result
    /// arrives later, correlated by `token`.
    fn request_permission(&self, token: RemediationToken);

    /// Prompt the user to switch the positioning service on.
    fn request_enable(&self, token: RemediationToken);
}

/// Short-range radio scanning (beacon discovery).
pub trait RadioScanningProvider {
    /// Whether the radio is switched on.
    fn is_enabled(&self) -> bool;

    /// Prompt the user to switch the radio on. Must not block.
    fn request_enable(&self, token: RemediationToken);
}

/// Persistent storage for recording files.
pub trait StorageProvider {
    /// Whether the app may write to the recording directory.
    fn has_permission(&self) -> bool;

    /// Kick off the system permission dialog. Must not block.
    fn request_permission(&self, token: RemediationToken);
}
