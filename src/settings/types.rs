// Standard library
use std::path::PathBuf;
use std::sync::Arc;

// 3rd party crates
use serde::Deserialize;
use tokio::sync::RwLock;

// Project imports
use crate::metrics::MetricsConfig;
use crate::poller::PollConfig;
use crate::provisioner::ProvisionConfig;
use crate::utility::ip_detector::types::IpDetection;

#[derive(Debug, Deserialize, Clone)]
pub struct Log {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Throttle {
    /// Requests per second allowed against the polled API
    #[serde(default = "default_rate_limit")]
    pub rate_limit: u32,
    /// Per-request timeout (in milliseconds)
    #[serde(default = "default_request_timeout")]
    pub timeout: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(default)]
    pub log: Log,
    #[serde(default)]
    pub throttle: Throttle,
    pub provisioning: ProvisionConfig,
    #[serde(default)]
    pub ip_detection: IpDetection,
    pub poll: PollConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

pub(super) fn default_log_level() -> String {
    "info".to_string()
}

pub(super) fn default_rate_limit() -> u32 {
    1
}

pub(super) fn default_request_timeout() -> u64 {
    5000
}

/// Manages the application settings.
pub struct ConfigManager {
    pub settings: Arc<RwLock<Settings>>,
    pub _config_path: PathBuf,
}

/// Settings that passed validation.
pub struct ValidatedSettings(pub(super) Settings);
