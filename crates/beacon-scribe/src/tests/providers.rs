use crate::{
    config::CapabilityConfig,
    providers::{CapabilitySwitchboard, HarnessPositioning, HarnessRadio, HarnessStorage, Remedy},
};

use beacon_scribe_core::{CapabilityKind, ReadinessGate, StorageProvider};

fn gate_over(
    switchboard: &std::sync::Arc<CapabilitySwitchboard>,
) -> ReadinessGate<HarnessPositioning, HarnessRadio, HarnessStorage> {
    ReadinessGate::new(
        HarnessPositioning(switchboard.clone()),
        HarnessRadio(switchboard.clone()),
        HarnessStorage(switchboard.clone()),
    )
}

/// WHAT: Gate-triggered prompts park a token per capability on the switchboard
/// WHY: grant/deny must find the token the simulated dialog was issued with
#[test]
fn given_unready_capabilities_when_checking_then_prompts_parked() {
    // Given: Nothing granted (first-run defaults)
    let switchboard = CapabilitySwitchboard::new(&CapabilityConfig::default());
    let mut gate = gate_over(&switchboard);

    // When: The readiness gate runs
    let report = gate.check_and_remediate();

    // Then: Not ready, one pending prompt per capability
    assert!(!report.all_ready());
    assert!(switchboard.take_pending(CapabilityKind::Positioning).is_some());
    assert!(switchboard.take_pending(CapabilityKind::RadioScanning).is_some());
    assert!(switchboard.take_pending(CapabilityKind::PersistentStorage).is_some());
    // And each prompt is consumed exactly once
    assert!(switchboard.take_pending(CapabilityKind::Positioning).is_none());
}

/// WHAT: Granting a parked prompt flips the switch and resolves at the gate
/// WHY: This is the full remediation round trip the app command drives
#[test]
#[allow(clippy::unwrap_used)]
fn given_parked_prompt_when_granted_then_capability_ready() {
    // Given: Storage permission missing and prompted
    let config = CapabilityConfig {
        positioning_permission: true,
        positioning_enabled: true,
        radio_enabled: true,
        storage_permission: false,
    };
    let switchboard = CapabilitySwitchboard::new(&config);
    let mut gate = gate_over(&switchboard);
    assert!(!gate.check_and_remediate().all_ready());

    // When: The user grants the parked prompt
    let (token, remedy) = switchboard
        .take_pending(CapabilityKind::PersistentStorage)
        .unwrap();
    assert_eq!(remedy, Remedy::Permission);
    switchboard.apply_grant(CapabilityKind::PersistentStorage, remedy);
    assert_eq!(
        gate.resolve_remediation(token, true),
        Some(CapabilityKind::PersistentStorage)
    );

    // Then: The adapter reports the permission and a re-check is all ready
    assert!(HarnessStorage(switchboard.clone()).has_permission());
    assert!(gate.check_and_remediate().all_ready());
}

/// WHAT: Positioning distinguishes the permission prompt from the enable prompt
/// WHY: The same capability has two different remediations
#[test]
#[allow(clippy::unwrap_used)]
fn given_positioning_permission_granted_but_disabled_then_enable_prompt() {
    // Given: Permission present, service off
    let config = CapabilityConfig {
        positioning_permission: true,
        positioning_enabled: false,
        radio_enabled: true,
        storage_permission: true,
    };
    let switchboard = CapabilitySwitchboard::new(&config);
    let mut gate = gate_over(&switchboard);

    // When: The readiness gate runs
    let _ = gate.check_and_remediate();

    // Then: The parked prompt asks for enable, not permission
    let (_, remedy) = switchboard
        .take_pending(CapabilityKind::Positioning)
        .unwrap();
    assert_eq!(remedy, Remedy::Enable);
}
