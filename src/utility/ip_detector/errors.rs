// 3rd party crates
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IpDetectionError {
    #[error("HTTP client error: {0}")]
    HttpClientBuild(#[from] reqwest::Error),

    #[error("Network error from {service}: {error}")]
    NetworkError {
        service: String,
        error: reqwest::Error,
    },

    #[error("Invalid response from {service}: HTTP {status}")]
    InvalidResponse { service: String, status: u16 },

    #[error("Parse error from {service}: {error}")]
    ParseError { service: String, error: String },

    #[error("No IP detection service returned a usable address")]
    NoServicesAvailable,
}

#[derive(Debug, Error)]
pub enum IpDetectionValidationError {
    #[error("At least one IP lookup service must be configured")]
    NoServices,
    #[error("Invalid timeout: {0}")]
    InvalidTimeout(String),
}
