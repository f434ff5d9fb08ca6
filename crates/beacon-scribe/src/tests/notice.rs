use crate::Notice;

use beacon_scribe_core::{
    CapabilityKind, CapabilityStatus, Field, FieldError, FieldErrorKind, ReadinessReport,
};

/// WHAT: A not-ready notice names every missing capability
/// WHY: The user needs to know which prompts to answer before retrying
#[test]
fn given_not_ready_report_when_displayed_then_missing_capabilities_named() {
    // Given: Positioning and radio blocked, storage ready
    let report = ReadinessReport {
        positioning: CapabilityStatus::PermissionRequested,
        radio_scanning: CapabilityStatus::EnableRequested,
        storage: CapabilityStatus::Ready,
    };

    // When/Then: Both missing capabilities appear, storage does not
    let text = Notice::NotReady(report).to_string();
    assert!(text.contains("positioning"));
    assert!(text.contains("radio scanning"));
    assert!(!text.contains("storage"));
}

/// WHAT: Field errors render one clause per offending field
/// WHY: Mirrors the per-field validation messages of the record form
#[test]
fn given_invalid_fields_when_displayed_then_each_field_listed() {
    let notice = Notice::InvalidFields(vec![
        FieldError {
            field: Field::Comment,
            kind: FieldErrorKind::Empty,
        },
        FieldError {
            field: Field::Duration,
            kind: FieldErrorKind::NotANumber,
        },
    ]);

    let text = notice.to_string();
    assert!(text.contains("not all information was provided"));
    assert!(text.contains("comment"));
    assert!(text.contains("duration"));
}

/// WHAT: A finished notice includes the file name only when one exists
/// WHY: The worker may finish without producing a file
#[test]
fn given_finished_notice_when_displayed_then_file_name_optional() {
    let with_file = Notice::RecordingFinished {
        file_name: Some("recording-abc.json".to_string()),
    };
    assert!(with_file.to_string().contains("recording-abc.json"));

    let without_file = Notice::RecordingFinished { file_name: None };
    assert_eq!(without_file.to_string(), "recording finished");
}

/// WHAT: A remediation answer reads differently for grant and deny
/// WHY: A denial must tell the user recording stays blocked
#[test]
fn given_remediation_answered_when_displayed_then_grant_and_deny_differ() {
    let granted = Notice::RemediationAnswered {
        kind: CapabilityKind::PersistentStorage,
        granted: true,
    };
    assert!(granted.to_string().contains("granted"));

    let denied = Notice::RemediationAnswered {
        kind: CapabilityKind::PersistentStorage,
        granted: false,
    };
    assert!(denied.to_string().contains("blocked"));
}
