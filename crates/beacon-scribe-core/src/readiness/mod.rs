//! Readiness gate: the aggregate check-and-remediate step run before a
//! session may start.

use crate::capability::{
    CapabilityKind, PendingRemediations, PositioningProvider, RadioScanningProvider,
    RemediationToken, StorageProvider,
};

use tracing::{debug, info, instrument};

/// Outcome of one capability check within a [`ReadinessReport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityStatus {
    /// Capability was satisfied at check time.
    Ready,
    /// Permission was missing; the system dialog was requested.
    PermissionRequested,
    /// The feature was switched off; an enable prompt was requested.
    EnableRequested,
    /// A previous remediation for this capability is still unanswered;
    /// no new request was issued.
    AwaitingRemediation,
}

impl CapabilityStatus {
    /// True only for [`CapabilityStatus::Ready`].
    pub fn is_ready(&self) -> bool {
        matches!(self, CapabilityStatus::Ready)
    }
}

/// Immutable snapshot of the three capability checks at one point in time.
///
/// Recomputed on every start attempt, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadinessReport {
    /// Positioning permission and service state.
    pub positioning: CapabilityStatus,
    /// Radio scanning state.
    pub radio_scanning: CapabilityStatus,
    /// Persistent storage permission state.
    pub storage: CapabilityStatus,
}

impl ReadinessReport {
    /// True iff every capability was already satisfied at check time.
    pub fn all_ready(&self) -> bool {
        self.positioning.is_ready() && self.radio_scanning.is_ready() && self.storage.is_ready()
    }

    /// Kinds that were not satisfied, in check order.
    pub fn missing(&self) -> Vec<CapabilityKind> {
        [
            (CapabilityKind::Positioning, self.positioning),
            (CapabilityKind::RadioScanning, self.radio_scanning),
            (CapabilityKind::PersistentStorage, self.storage),
        ]
        .into_iter()
        .filter(|(_, status)| !status.is_ready())
        .map(|(kind, _)| kind)
        .collect()
    }
}

/// Checks the three capability providers and triggers remediation for each
/// unsatisfied one.
///
/// Remediation is a side effect only: the gate never waits for the system
/// dialog, and a remediation triggered during a call never causes that same
/// call to report ready. The caller re-runs the full check after the user
/// has answered (typically via a retry action on a visible notice).
#[derive(Debug)]
pub struct ReadinessGate<P, R, S> {
    positioning: P,
    radio_scanning: R,
    storage: S,
    pending: PendingRemediations,
}

impl<P, R, S> ReadinessGate<P, R, S>
where
    P: PositioningProvider,
    R: RadioScanningProvider,
    S: StorageProvider,
{
    /// Create a gate over the three platform providers.
    pub fn new(positioning: P, radio_scanning: R, storage: S) -> Self {
        Self {
            positioning,
            radio_scanning,
            storage,
            pending: PendingRemediations::default(),
        }
    }

    /// Check all providers in fixed order (positioning, radio scanning,
    /// storage), triggering at most one remediation per unsatisfied provider.
    #[instrument(skip(self))]
    pub fn check_and_remediate(&mut self) -> ReadinessReport {
        let positioning = if !self.positioning.has_permission() {
            match self.pending.begin(CapabilityKind::Positioning) {
                Some(token) => {
                    info!(kind = %CapabilityKind::Positioning, "Requesting permission");
                    self.positioning.request_permission(token);
                    CapabilityStatus::PermissionRequested
                }
                None => CapabilityStatus::AwaitingRemediation,
            }
        } else if !self.positioning.is_enabled() {
            match self.pending.begin(CapabilityKind::Positioning) {
                Some(token) => {
                    info!(kind = %CapabilityKind::Positioning, "Requesting enable");
                    self.positioning.request_enable(token);
                    CapabilityStatus::EnableRequested
                }
                None => CapabilityStatus::AwaitingRemediation,
            }
        } else {
            CapabilityStatus::Ready
        };

        let radio_scanning = if !self.radio_scanning.is_enabled() {
            match self.pending.begin(CapabilityKind::RadioScanning) {
                Some(token) => {
                    info!(kind = %CapabilityKind::RadioScanning, "Requesting enable");
                    self.radio_scanning.request_enable(token);
                    CapabilityStatus::EnableRequested
                }
                None => CapabilityStatus::AwaitingRemediation,
            }
        } else {
            CapabilityStatus::Ready
        };

        let storage = if !self.storage.has_permission() {
            match self.pending.begin(CapabilityKind::PersistentStorage) {
                Some(token) => {
                    info!(kind = %CapabilityKind::PersistentStorage, "Requesting permission");
                    self.storage.request_permission(token);
                    CapabilityStatus::PermissionRequested
                }
                None => CapabilityStatus::AwaitingRemediation,
            }
        } else {
            CapabilityStatus::Ready
        };

        let report = ReadinessReport {
            positioning,
            radio_scanning,
            storage,
        };
        debug!(?report, "Readiness checked");
        report
    }

    /// Single entry point for remediation results.
    ///
    /// Routes by the capability kind carried in the token; stale or unknown
    /// tokens are logged and ignored. Returns the kind the result applied
    /// to, or `None` if the token did not match a pending request.
    #[instrument(skip(self))]
    pub fn resolve_remediation(
        &mut self,
        token: RemediationToken,
        granted: bool,
    ) -> Option<CapabilityKind> {
        if !self.pending.resolve(token) {
            return None;
        }
        info!(kind = %token.kind(), granted, "Remediation resolved");
        Some(token.kind())
    }
}
