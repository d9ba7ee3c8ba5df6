// 3rd party crates
use reqwest::Client;
use serde::{Deserialize, Serialize};

// Current module imports
use super::constants::{default_auth_base, default_key_count, default_key_name};

/// Developer portal credentials and key settings.
#[derive(Deserialize, Clone)]
pub struct ProvisionConfig {
    #[serde(default = "default_auth_base")]
    pub auth_base: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default = "default_key_name")]
    pub key_name: String,
    #[serde(default = "default_key_count")]
    pub key_count: u32,
}

/// HTTP client for the developer portal.
#[derive(Debug, Clone)]
pub struct DeveloperPortal {
    pub base: String,
    pub client: Client,
}

/// Logged-in portal session.
#[derive(Clone)]
pub struct Session {
    pub(crate) cookie: String,
}

/// An API key as listed or created by the portal.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKey {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub cidr_ranges: Vec<String>,
}

/// Body of a key creation request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyRequest {
    pub name: String,
    pub description: String,
    pub cidr_ranges: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub status: Option<LoginStatus>,
}

#[derive(Debug, Deserialize)]
pub struct LoginStatus {
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct KeyListResponse {
    pub keys: Vec<ApiKey>,
}

#[derive(Debug, Deserialize)]
pub struct KeyCreateResponse {
    pub key: ApiKey,
}
