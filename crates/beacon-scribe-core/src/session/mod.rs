//! Session lifecycle: parameters, state machine and controller.

mod controller;
mod params;
mod state;

pub use {
    controller::{EventOutcome, SessionController, StartOutcome, StopOrigin, StopOutcome},
    params::{Field, FieldError, FieldErrorKind, MAX_NUMERIC_DIGITS, ParamsInput, SessionParams},
    state::SessionState,
};

use uuid::{Uuid, uuid};

/// Well-known id the beacons tag their broadcasts with so a recording can be
/// matched to the measurement campaign. Surfaced to the user for copying
/// into the beacon configuration.
pub const RECORDING_UUID: Uuid = uuid!("61a0523a-a733-4789-ae8f-4f55fcff64f2");
