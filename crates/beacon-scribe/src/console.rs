//! Console command input.
//!
//! Stands in for the record screen of a mobile shell: each line is one user
//! action. A single persistent blocking task reads stdin and forwards parsed
//! commands to the main application over an async channel.

use crate::AppCommand;

use std::io::BufRead;

use beacon_scribe_core::{CapabilityKind, ParamsInput};
use tokio::{sync::mpsc, task::JoinHandle};
use tracing::debug;

/// One-line usage summary printed on unknown input.
pub(crate) const HELP: &str = "\
commands:
  record [duration] [offset] [comment...]   start or stop a recording
  grant <positioning|radio|storage>         answer a pending prompt with yes
  deny <positioning|radio|storage>          answer a pending prompt with no
  export                                    bundle all recordings and share
  uuid                                      copy the recording uuid
  status                                    show the session state
  quit                                      exit";

/// Spawn the stdin forwarder.
///
/// stdin reads are blocking, so this runs on a single persistent blocking
/// task, mirroring how platform input events are pumped into the app.
/// Shutdown: when the command receiver is dropped (main loop breaks),
/// `blocking_send` fails and the loop ends; a task still parked in
/// `read_line` is cleaned up on process exit.
pub(crate) fn spawn_forwarder(command_tx: mpsc::Sender<AppCommand>) -> JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        let stdin = std::io::stdin();
        let mut lines = stdin.lock().lines();
        while let Some(Ok(line)) = lines.next() {
            let Some(command) = parse_command(&line) else {
                if !line.trim().is_empty() {
                    println!("{}", HELP);
                }
                continue;
            };
            debug!(?command, "Console command");
            let stop = matches!(command, AppCommand::Shutdown);
            if command_tx.blocking_send(command).is_err() || stop {
                break;
            }
        }
    })
}

/// Parse one console line into a command. `None` for empty or unknown input.
pub(crate) fn parse_command(line: &str) -> Option<AppCommand> {
    let mut tokens = line.split_whitespace();
    let verb = tokens.next()?;

    match verb {
        "record" | "r" => {
            let duration = tokens.next().unwrap_or_default().to_string();
            let offset = tokens.next().unwrap_or_default().to_string();
            let comment = tokens.collect::<Vec<_>>().join(" ");
            Some(AppCommand::ToggleRecording {
                input: ParamsInput {
                    comment,
                    duration,
                    offset,
                },
            })
        }
        "grant" => Some(AppCommand::Remediation {
            kind: capability_from_name(tokens.next()?)?,
            granted: true,
        }),
        "deny" => Some(AppCommand::Remediation {
            kind: capability_from_name(tokens.next()?)?,
            granted: false,
        }),
        "export" | "e" => Some(AppCommand::ExportRecordings),
        "uuid" | "u" => Some(AppCommand::CopyRecordingUuid),
        "status" | "s" => Some(AppCommand::Status),
        "quit" | "q" | "exit" => Some(AppCommand::Shutdown),
        _ => None,
    }
}

fn capability_from_name(name: &str) -> Option<CapabilityKind> {
    match name {
        "positioning" | "location" => Some(CapabilityKind::Positioning),
        "radio" | "bluetooth" => Some(CapabilityKind::RadioScanning),
        "storage" => Some(CapabilityKind::PersistentStorage),
        _ => None,
    }
}
