// 3rd party crates
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("HTTP client error: {0}")]
    HttpClientBuild(#[from] reqwest::Error),

    #[error("Failed to post metric: {0}")]
    PostFailed(String),

    #[error("Metric rejected with HTTP {status}: {body}")]
    Rejected { status: u16, body: String },
}

#[derive(Debug, Error)]
pub enum MetricsValidationError {
    #[error("Missing status page id")]
    MissingPageId,
    #[error("Missing metric id")]
    MissingMetricId,
    #[error("Missing metrics API key")]
    MissingApiKey,
}
