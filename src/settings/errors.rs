// 3rd party crates
use thiserror::Error;

// Project imports
use crate::metrics::errors::MetricsValidationError;
use crate::poller::errors::PollValidationError;
use crate::provisioner::errors::ProvisionValidationError;
use crate::utility::ip_detector::errors::IpDetectionValidationError;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid log level: {0}. Must be one of: error, warn, info, debug, trace")]
    InvalidLogLevel(String),
    #[error("Rate limit must be greater than 0 requests per second")]
    InvalidRateLimit,
    #[error("Request timeout must be greater than 0, got {0}")]
    InvalidTimeout(u64),
    #[error("Provisioning configuration error: {0}")]
    ProvisioningConfig(#[from] ProvisionValidationError),
    #[error("Poll configuration error: {0}")]
    PollConfig(#[from] PollValidationError),
    #[error("Metrics configuration error: {0}")]
    MetricsConfig(#[from] MetricsValidationError),
    #[error("IP detection configuration error: {0}")]
    IpDetectionConfig(#[from] IpDetectionValidationError),
}
