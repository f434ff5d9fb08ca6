//! Desktop stand-ins for the platform capability adapters.
//!
//! On a phone these calls land in the location service, the radio stack and
//! the permission manager. The harness keeps the same shape: availability
//! lives on a shared switchboard, remediation "dialogs" park a token on it,
//! and the user answers via the `grant`/`deny` console commands, which route
//! the token back through the readiness gate.

use crate::config::CapabilityConfig;

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, Ordering},
};

use beacon_scribe_core::{
    CapabilityKind, PositioningProvider, RadioScanningProvider, RemediationToken, StorageProvider,
};
use tracing::{info, warn};

/// Which remediation a pending token asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Remedy {
    /// A permission dialog.
    Permission,
    /// An enable-the-feature prompt.
    Enable,
}

/// Shared state of the simulated platform capabilities.
#[derive(Debug, Default)]
pub struct CapabilitySwitchboard {
    positioning_permission: AtomicBool,
    positioning_enabled: AtomicBool,
    radio_enabled: AtomicBool,
    storage_permission: AtomicBool,
    pending: Mutex<Vec<(RemediationToken, Remedy)>>,
}

impl CapabilitySwitchboard {
    /// Seed the switchboard from the configured initial states.
    pub fn new(config: &CapabilityConfig) -> Arc<Self> {
        let board = Self::default();
        board
            .positioning_permission
            .store(config.positioning_permission, Ordering::SeqCst);
        board
            .positioning_enabled
            .store(config.positioning_enabled, Ordering::SeqCst);
        board.radio_enabled.store(config.radio_enabled, Ordering::SeqCst);
        board
            .storage_permission
            .store(config.storage_permission, Ordering::SeqCst);
        Arc::new(board)
    }

    /// Take the pending prompt for `kind`, if any.
    pub fn take_pending(&self, kind: CapabilityKind) -> Option<(RemediationToken, Remedy)> {
        let mut pending = match self.pending.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let index = pending.iter().position(|(token, _)| token.kind() == kind)?;
        Some(pending.remove(index))
    }

    /// Apply a granted remediation to the underlying switch.
    pub fn apply_grant(&self, kind: CapabilityKind, remedy: Remedy) {
        match (kind, remedy) {
            (CapabilityKind::Positioning, Remedy::Permission) => {
                self.positioning_permission.store(true, Ordering::SeqCst);
            }
            (CapabilityKind::Positioning, Remedy::Enable) => {
                self.positioning_enabled.store(true, Ordering::SeqCst);
            }
            (CapabilityKind::RadioScanning, _) => {
                self.radio_enabled.store(true, Ordering::SeqCst);
            }
            (CapabilityKind::PersistentStorage, _) => {
                self.storage_permission.store(true, Ordering::SeqCst);
            }
        }
        info!(%kind, ?remedy, "Capability granted");
    }

    fn park(&self, token: RemediationToken, remedy: Remedy) {
        let mut pending = match self.pending.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if pending.iter().any(|(t, _)| t.kind() == token.kind()) {
            // The gate already guards against this; a second park for the
            // same kind means a stale token would linger forever.
            warn!(kind = %token.kind(), "Replacing stale pending prompt");
            pending.retain(|(t, _)| t.kind() != token.kind());
        }
        println!(
            "[system dialog] {} {} requested; answer with 'grant {}' or 'deny {}'",
            token.kind(),
            match remedy {
                Remedy::Permission => "permission",
                Remedy::Enable => "enable",
            },
            console_name(token.kind()),
            console_name(token.kind()),
        );
        pending.push((token, remedy));
    }
}

fn console_name(kind: CapabilityKind) -> &'static str {
    match kind {
        CapabilityKind::Positioning => "positioning",
        CapabilityKind::RadioScanning => "radio",
        CapabilityKind::PersistentStorage => "storage",
    }
}

/// Positioning adapter over the switchboard.
pub struct HarnessPositioning(pub Arc<CapabilitySwitchboard>);

impl PositioningProvider for HarnessPositioning {
    fn has_permission(&self) -> bool {
        self.0.positioning_permission.load(Ordering::SeqCst)
    }

    fn is_enabled(&self) -> bool {
        self.0.positioning_enabled.load(Ordering::SeqCst)
    }

    fn request_permission(&self, token: RemediationToken) {
        self.0.park(token, Remedy::Permission);
    }

    fn request_enable(&self, token: RemediationToken) {
        self.0.park(token, Remedy::Enable);
    }
}

/// Radio scanning adapter over the switchboard.
pub struct HarnessRadio(pub Arc<CapabilitySwitchboard>);

impl RadioScanningProvider for HarnessRadio {
    fn is_enabled(&self) -> bool {
        self.0.radio_enabled.load(Ordering::SeqCst)
    }

    fn request_enable(&self, token: RemediationToken) {
        self.0.park(token, Remedy::Enable);
    }
}

/// Storage adapter over the switchboard.
pub struct HarnessStorage(pub Arc<CapabilitySwitchboard>);

impl StorageProvider for HarnessStorage {
    fn has_permission(&self) -> bool {
        self.0.storage_permission.load(Ordering::SeqCst)
    }

    fn request_permission(&self, token: RemediationToken) {
        self.0.park(token, Remedy::Permission);
    }
}
