// 3rd party crates
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PollError {
    #[error("HTTP client error: {0}")]
    HttpClientBuild(#[from] reqwest::Error),

    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

#[derive(Debug, Error)]
pub enum PollValidationError {
    #[error("No poll targets configured")]
    NoTargets,
    #[error("Poll interval must be greater than 0")]
    InvalidInterval,
    #[error("Empty poll target at position {0}")]
    EmptyTarget(usize),
}
