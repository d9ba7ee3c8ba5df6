// 3rd party crates
use thiserror::Error;

/// Custom error type for key provisioning.
#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("HTTP client error: {0}")]
    HttpClientBuild(#[from] reqwest::Error),

    #[error("Login request failed: {0}")]
    LoginFailed(String),

    #[error("Login rejected by the developer portal: {0}")]
    LoginRejected(String),

    #[error("Login response did not carry a session cookie")]
    MissingSessionCookie,

    #[error("Failed to list API keys: {0}")]
    ListFailed(String),

    #[error("Failed to revoke API key '{id}': {message}")]
    RevokeFailed { id: String, message: String },

    #[error("Failed to create API key: {0}")]
    CreateFailed(String),

    #[error("No API keys could be created ({attempted} attempted)")]
    NoKeysCreated { attempted: u32 },
}

#[derive(Debug, Error)]
pub enum ProvisionValidationError {
    #[error("Missing developer portal email")]
    MissingEmail,
    #[error("Missing developer portal password")]
    MissingPassword,
    #[error("Missing key name")]
    MissingKeyName,
    #[error("Invalid auth base URL: {0}")]
    InvalidAuthBase(String),
    #[error("key_count must be greater than 0")]
    InvalidKeyCount,
}
