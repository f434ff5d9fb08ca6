use serde::{Deserialize, Serialize};

/// Initial switch states of the simulated platform capabilities.
///
/// A fresh install mirrors first run on a device: nothing granted, nothing
/// enabled, so the first start attempt walks the full remediation flow.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CapabilityConfig {
    /// Whether the positioning permission starts granted.
    #[serde(default)]
    pub positioning_permission: bool,
    /// Whether the positioning service starts enabled.
    #[serde(default)]
    pub positioning_enabled: bool,
    /// Whether the radio starts enabled.
    #[serde(default)]
    pub radio_enabled: bool,
    /// Whether the storage permission starts granted.
    #[serde(default)]
    pub storage_permission: bool,
}
