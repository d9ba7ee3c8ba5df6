// Standard library
use std::sync::Arc;
use std::time::Duration;

// 3rd party crates
use reqwest::{Client, Url};
use serde::Deserialize;
use serde_json::Value;

// Project imports
use crate::metrics::LatencySink;
use crate::utility::rotator::CredentialRotator;
use crate::utility::throttle::QueueThrottler;

// Current module imports
use super::constants::{default_api_base, default_pass_interval, default_resource};

#[derive(Debug, Deserialize, Clone)]
pub struct PollConfig {
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_resource")]
    pub resource: String,
    /// Delay between passes (in milliseconds)
    #[serde(default = "default_pass_interval")]
    pub interval: u64,
    /// Resource tags polled in order on every pass
    #[serde(default)]
    pub targets: Vec<String>,
}

/// Issues throttled, authenticated fetches against the polled API.
pub struct Poller {
    pub base: Url,
    pub resource: String,
    pub client: Client,
    pub throttler: QueueThrottler,
    pub rotator: CredentialRotator,
    pub sink: Option<Arc<dyn LatencySink>>,
}

/// Normalized result of one fetch. Never an error: failures carry only the status.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub ok: bool,
    /// HTTP status, or `None` when no response arrived
    pub status_code: Option<u16>,
    /// Staleness window from `cache-control: max-age`, in milliseconds
    pub max_age: u64,
    pub body: Option<Value>,
}

#[derive(Debug, Clone)]
pub struct PollOutcome {
    pub target: String,
    pub response: ApiResponse,
    pub latency: Duration,
}

#[derive(Debug, Default, Clone)]
pub struct PassSummary {
    pub succeeded: usize,
    pub failed: usize,
    pub elapsed: Duration,
}
