//! In-process recording worker.
//!
//! Desktop stand-in for the platform foreground recording service. It honors
//! the worker request contract exactly -- fire-and-forget requests in, result
//! channel events out -- and keeps its internals deliberately simple: wait
//! the offset, report `Started`, run for the duration (or until a `Stop`
//! request), write one metadata JSON into the recording directory and report
//! `Finished` with the file name.

use std::{path::PathBuf, time::Duration};

use beacon_scribe_core::{
    RECORDING_UUID, SessionParams, WorkerAction, WorkerEvent, WorkerEventKind, WorkerRequest,
};
use tokio::{
    sync::{mpsc, oneshot},
    task::JoinHandle,
    time::sleep,
};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// Spawn the recorder task and return its request channel.
///
/// The task exits when the last request sender is dropped.
pub(crate) fn spawn(recording_dir: PathBuf) -> mpsc::Sender<WorkerRequest> {
    let (request_tx, request_rx) = mpsc::channel(8);
    tokio::spawn(run(recording_dir, request_rx));
    request_tx
}

#[instrument(skip(requests))]
async fn run(recording_dir: PathBuf, mut requests: mpsc::Receiver<WorkerRequest>) {
    // One recording at a time: id, stop signal and the session task.
    let mut active: Option<(Uuid, oneshot::Sender<()>, JoinHandle<()>)> = None;

    while let Some(request) = requests.recv().await {
        if let Some((_, _, handle)) = &active {
            if handle.is_finished() {
                active = None;
            }
        }

        match request.action {
            WorkerAction::Start(params) => {
                if active.is_some() {
                    warn!(session_id = %request.session_id, "Start refused, already recording");
                    let _ = request
                        .events
                        .send(WorkerEvent {
                            session_id: request.session_id,
                            kind: WorkerEventKind::Error {
                                reason: "another recording is already running".to_string(),
                            },
                        })
                        .await;
                    continue;
                }

                let (stop_tx, stop_rx) = oneshot::channel();
                let handle = tokio::spawn(record_session(
                    recording_dir.clone(),
                    request.session_id,
                    params,
                    request.events,
                    stop_rx,
                ));
                active = Some((request.session_id, stop_tx, handle));
            }
            WorkerAction::Stop => match active.take() {
                Some((session_id, stop_tx, handle)) if session_id == request.session_id => {
                    debug!(session_id = %session_id, "Stop received");
                    let _ = stop_tx.send(());
                    let _ = handle.await;
                }
                Some(other) => {
                    warn!(
                        requested = %request.session_id,
                        active = %other.0,
                        "Stop for a different session ignored"
                    );
                    active = Some(other);
                }
                None => {
                    debug!(session_id = %request.session_id, "Stop with nothing running");
                }
            },
        }
    }

    debug!("Recorder shutting down");
}

#[instrument(skip(params, events, stop_rx))]
async fn record_session(
    recording_dir: PathBuf,
    session_id: Uuid,
    params: SessionParams,
    events: mpsc::Sender<WorkerEvent>,
    mut stop_rx: oneshot::Receiver<()>,
) {
    sleep(Duration::from_secs(u64::from(params.offset_secs))).await;

    let _ = events
        .send(WorkerEvent {
            session_id,
            kind: WorkerEventKind::Started,
        })
        .await;

    let started = std::time::Instant::now();
    let completed = tokio::select! {
        _ = sleep(Duration::from_secs(u64::from(params.duration_secs))) => true,
        _ = &mut stop_rx => false,
    };
    let recorded_secs = started.elapsed().as_secs();

    let file_name = format!("recording-{}.json", session_id);
    let metadata = serde_json::json!({
        "recordingUuid": RECORDING_UUID,
        "sessionId": session_id,
        "comment": params.comment,
        "durationSeconds": params.duration_secs,
        "offsetSeconds": params.offset_secs,
        "recordedSeconds": recorded_secs,
        "completed": completed,
    });

    let contents = match serde_json::to_vec_pretty(&metadata) {
        Ok(contents) => contents,
        Err(e) => {
            let _ = events
                .send(WorkerEvent {
                    session_id,
                    kind: WorkerEventKind::Error {
                        reason: format!("failed to encode recording metadata: {}", e),
                    },
                })
                .await;
            return;
        }
    };

    if let Err(e) = tokio::fs::write(recording_dir.join(&file_name), contents).await {
        warn!(session_id = %session_id, error = ?e, "Failed to write recording");
        let _ = events
            .send(WorkerEvent {
                session_id,
                kind: WorkerEventKind::Error {
                    reason: format!("failed to write recording: {}", e),
                },
            })
            .await;
        return;
    }

    info!(
        session_id = %session_id,
        file_name = %file_name,
        recorded_secs,
        completed,
        "Recording written"
    );

    let _ = events
        .send(WorkerEvent {
            session_id,
            kind: WorkerEventKind::Finished {
                file_name: Some(file_name),
            },
        })
        .await;
}
