mod capability_config;
#[allow(clippy::module_inception)]
mod config;
mod recording_config;

pub(crate) use {
    capability_config::CapabilityConfig, config::Config, recording_config::RecordingConfig,
};

/// Directory name for recordings under the platform data dir when no
/// override is configured.
pub(crate) const DEFAULT_RECORDING_DIR_NAME: &str = "recordings";
