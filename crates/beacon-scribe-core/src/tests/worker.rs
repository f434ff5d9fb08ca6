#![allow(clippy::panic)]

use crate::WorkerEventKind;

/// WHAT: Event kinds map to the platform result codes
/// WHY: The wire contract with the worker uses fixed integer codes
#[test]
fn given_event_kinds_when_encoding_then_platform_codes() {
    assert_eq!(
        WorkerEventKind::Error {
            reason: "x".to_string()
        }
        .code(),
        WorkerEventKind::CODE_ERROR
    );
    assert_eq!(
        WorkerEventKind::Finished { file_name: None }.code(),
        WorkerEventKind::CODE_FINISHED
    );
    assert_eq!(WorkerEventKind::Started.code(), WorkerEventKind::CODE_STARTED);
}

/// WHAT: Result codes decode back into event kinds with their payload
/// WHY: Payloads carry the produced file name or the failure reason
#[test]
fn given_platform_codes_when_decoding_then_event_kinds() {
    assert_eq!(
        WorkerEventKind::from_code(1, Some("recording-1.json".to_string())),
        Some(WorkerEventKind::Finished {
            file_name: Some("recording-1.json".to_string())
        })
    );
    assert_eq!(
        WorkerEventKind::from_code(2, None),
        Some(WorkerEventKind::Started)
    );
    assert_eq!(
        WorkerEventKind::from_code(0, Some("disk full".to_string())),
        Some(WorkerEventKind::Error {
            reason: "disk full".to_string()
        })
    );
}

/// WHAT: An error code without payload still carries a reason
/// WHY: Error notices must never be empty
#[test]
fn given_error_code_without_payload_when_decoding_then_default_reason() {
    match WorkerEventKind::from_code(0, None) {
        Some(WorkerEventKind::Error { reason }) => assert!(!reason.is_empty()),
        other => panic!("expected an error kind, got {other:?}"),
    }
}

/// WHAT: Unknown result codes decode to nothing
/// WHY: Future codes must not be misread as a known event
#[test]
fn given_unknown_code_when_decoding_then_none() {
    assert_eq!(WorkerEventKind::from_code(9, None), None);
}
