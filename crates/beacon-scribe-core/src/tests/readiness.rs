use crate::{CapabilityKind, CapabilityStatus};

use crate::tests::fixtures::{CapabilityProbe, gate_with};

use std::sync::atomic::Ordering;

/// WHAT: All-ready providers produce an all-ready report with no side effects
/// WHY: Remediation must only fire for unsatisfied capabilities
#[test]
fn given_all_capabilities_ready_when_checking_then_all_ready_and_no_remediation() {
    // Given: Every capability satisfied
    let positioning = CapabilityProbe::ready();
    let radio = CapabilityProbe::ready();
    let storage = CapabilityProbe::ready();
    let mut gate = gate_with(&positioning, &radio, &storage);

    // When: Checking readiness
    let report = gate.check_and_remediate();

    // Then: Report is all ready and no provider was prompted
    assert!(report.all_ready());
    assert!(report.missing().is_empty());
    assert_eq!(positioning.permission_requests() + positioning.enable_requests(), 0);
    assert_eq!(radio.enable_requests(), 0);
    assert_eq!(storage.permission_requests(), 0);
}

/// WHAT: A disabled radio triggers exactly one enable prompt and an unready report
/// WHY: Remediation in the same call never flips that call to ready
#[test]
fn given_radio_disabled_when_checking_then_single_enable_prompt_and_not_ready() {
    // Given: Radio switched off, everything else satisfied
    let positioning = CapabilityProbe::ready();
    let radio = CapabilityProbe::ready();
    radio.enabled.store(false, Ordering::SeqCst);
    let storage = CapabilityProbe::ready();
    let mut gate = gate_with(&positioning, &radio, &storage);

    // When: Checking readiness
    let report = gate.check_and_remediate();

    // Then: One enable prompt, report not ready, radio the only missing kind
    assert_eq!(radio.enable_requests(), 1);
    assert!(!report.all_ready());
    assert_eq!(report.radio_scanning, CapabilityStatus::EnableRequested);
    assert_eq!(report.missing(), vec![CapabilityKind::RadioScanning]);
}

/// WHAT: Missing positioning permission requests the permission, not the enable prompt
/// WHY: Permission is checked before the service switch, in fixed order
#[test]
fn given_missing_positioning_permission_when_checking_then_permission_requested() {
    // Given: Positioning permission revoked
    let positioning = CapabilityProbe::ready();
    positioning.permission.store(false, Ordering::SeqCst);
    let radio = CapabilityProbe::ready();
    let storage = CapabilityProbe::ready();
    let mut gate = gate_with(&positioning, &radio, &storage);

    // When: Checking readiness
    let report = gate.check_and_remediate();

    // Then: The permission dialog was requested, not the enable prompt
    assert_eq!(report.positioning, CapabilityStatus::PermissionRequested);
    assert_eq!(positioning.permission_requests(), 1);
    assert_eq!(positioning.enable_requests(), 0);
}

/// WHAT: Granted permission but disabled service requests the enable prompt
/// WHY: Both halves of the positioning capability gate a start
#[test]
fn given_positioning_disabled_when_checking_then_enable_requested() {
    // Given: Permission granted, service switched off
    let positioning = CapabilityProbe::ready();
    positioning.enabled.store(false, Ordering::SeqCst);
    let radio = CapabilityProbe::ready();
    let storage = CapabilityProbe::ready();
    let mut gate = gate_with(&positioning, &radio, &storage);

    // When: Checking readiness
    let report = gate.check_and_remediate();

    // Then: The enable prompt was requested
    assert_eq!(report.positioning, CapabilityStatus::EnableRequested);
    assert_eq!(positioning.permission_requests(), 0);
    assert_eq!(positioning.enable_requests(), 1);
}

/// WHAT: Re-checking while a remediation is unanswered does not re-prompt
/// WHY: At most one remediation per capability may be in flight
#[test]
fn given_pending_remediation_when_rechecking_then_no_duplicate_prompt() {
    // Given: Storage permission missing, first check already prompted
    let positioning = CapabilityProbe::ready();
    let radio = CapabilityProbe::ready();
    let storage = CapabilityProbe::ready();
    storage.permission.store(false, Ordering::SeqCst);
    let mut gate = gate_with(&positioning, &radio, &storage);
    let first = gate.check_and_remediate();
    assert_eq!(first.storage, CapabilityStatus::PermissionRequested);

    // When: Checking again before the user answered
    let second = gate.check_and_remediate();

    // Then: Still one prompt total, status shows the wait
    assert_eq!(storage.permission_requests(), 1);
    assert_eq!(second.storage, CapabilityStatus::AwaitingRemediation);
}

/// WHAT: Resolving the pending token clears it and a later check can re-prompt
/// WHY: The retry flow after a denied dialog must issue a fresh request
#[test]
fn given_resolved_denial_when_rechecking_then_new_prompt_issued() {
    // Given: A pending storage permission request
    let positioning = CapabilityProbe::ready();
    let radio = CapabilityProbe::ready();
    let storage = CapabilityProbe::ready();
    storage.permission.store(false, Ordering::SeqCst);
    let mut gate = gate_with(&positioning, &radio, &storage);
    let _ = gate.check_and_remediate();
    let token = storage.last_token();

    // When: The user denies, then the flow is retried
    let resolved = gate.resolve_remediation(token, false);
    let report = gate.check_and_remediate();

    // Then: The denial routed to storage and a second prompt went out
    assert_eq!(resolved, Some(CapabilityKind::PersistentStorage));
    assert_eq!(report.storage, CapabilityStatus::PermissionRequested);
    assert_eq!(storage.permission_requests(), 2);
}

/// WHAT: A granted remediation leads to an all-ready re-check
/// WHY: The caller re-runs the full flow after remediation completes
#[test]
fn given_granted_remediation_when_rechecking_then_all_ready() {
    // Given: A pending radio enable request
    let positioning = CapabilityProbe::ready();
    let radio = CapabilityProbe::ready();
    radio.enabled.store(false, Ordering::SeqCst);
    let storage = CapabilityProbe::ready();
    let mut gate = gate_with(&positioning, &radio, &storage);
    let _ = gate.check_and_remediate();
    let token = radio.last_token();

    // When: The user enables the radio and the flow is retried
    assert_eq!(gate.resolve_remediation(token, true), Some(CapabilityKind::RadioScanning));
    radio.enabled.store(true, Ordering::SeqCst);
    let report = gate.check_and_remediate();

    // Then: Everything is ready, no further prompt
    assert!(report.all_ready());
    assert_eq!(radio.enable_requests(), 1);
}

/// WHAT: A token is only resolvable once; replays are ignored
/// WHY: Duplicate platform callbacks must not corrupt the pending table
#[test]
fn given_already_resolved_token_when_resolving_again_then_ignored() {
    // Given: A resolved positioning permission token
    let positioning = CapabilityProbe::ready();
    positioning.permission.store(false, Ordering::SeqCst);
    let radio = CapabilityProbe::ready();
    let storage = CapabilityProbe::ready();
    let mut gate = gate_with(&positioning, &radio, &storage);
    let _ = gate.check_and_remediate();
    let token = positioning.last_token();
    assert_eq!(gate.resolve_remediation(token, true), Some(CapabilityKind::Positioning));

    // When: The same token arrives again
    let replay = gate.resolve_remediation(token, true);

    // Then: The replay is ignored
    assert_eq!(replay, None);
}
