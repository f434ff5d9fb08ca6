//! Beacon-Scribe: session controller for gated sensor recordings.
//!
//! Console harness around the `beacon-scribe-core` orchestration: stdin
//! lines stand in for the record screen, an in-process recorder task stands
//! in for the platform foreground service.

mod app;
mod app_command;
mod config;
mod console;
mod error;
mod notice;
mod providers;
mod recorder;
#[cfg(test)]
mod tests;

pub(crate) use {
    app::App,
    app_command::AppCommand,
    error::{AppError, Result as AppResult},
    notice::Notice,
};

use crate::config::Config;

use beacon_scribe_core::{RECORDING_UUID, ReadinessGate, SessionController};
use providers::{CapabilitySwitchboard, HarnessPositioning, HarnessRadio, HarnessStorage};
use tokio::sync::mpsc;
use tracing::error;

/// Application entry point.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "beacon_scribe=info".into()),
        )
        .init();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load config: {:?}", e);
            std::process::exit(1);
        }
    };

    let recording_dir = match config.recording.resolve_directory() {
        Ok(dir) => dir,
        Err(e) => {
            error!("Failed to resolve recording directory: {:?}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = std::fs::create_dir_all(&recording_dir) {
        error!(dir = ?recording_dir, "Failed to create recording directory: {:?}", e);
        std::process::exit(1);
    }

    let switchboard = CapabilitySwitchboard::new(&config.capabilities);
    let gate = ReadinessGate::new(
        HarnessPositioning(switchboard.clone()),
        HarnessRadio(switchboard.clone()),
        HarnessStorage(switchboard.clone()),
    );

    let request_tx = recorder::spawn(recording_dir.clone());
    let (event_tx, event_rx) = mpsc::channel(32);
    let controller = SessionController::new(gate, request_tx, event_tx);

    let (command_tx, command_rx) = mpsc::channel(32);
    let console_handle = console::spawn_forwarder(command_tx);

    println!("beacon-scribe");
    println!("recording uuid: {}", RECORDING_UUID);
    println!("recording dir:  {}", recording_dir.display());
    println!("{}", console::HELP);

    let app = App {
        controller,
        switchboard,
        recording_dir,
        command_rx,
        event_rx,
    };

    if let Err(e) = app.run().await {
        error!(error = ?e, "App error");
    }

    // The forwarder may still be parked in a blocking stdin read; it is
    // cleaned up on process exit.
    console_handle.abort();
}
