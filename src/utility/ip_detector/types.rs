// 3rd party crates
use serde::Deserialize;

// Current module imports
use super::constants::{default_request_timeout, default_services};

#[derive(Debug, Deserialize, Clone)]
pub struct IpDetection {
    /// Lookup services returning the caller's address as plain text, tried in order
    #[serde(default = "default_services")]
    pub services: Vec<String>,
    /// Per-service request timeout (in seconds)
    #[serde(default = "default_request_timeout")]
    pub timeout: u64,
}

pub struct IpDetector {
    pub config: IpDetection,
    pub client: reqwest::Client,
}
