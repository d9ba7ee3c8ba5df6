// Standard library
use std::fmt;
use std::net::IpAddr;
use std::time::Duration;

// 3rd party crates
use async_trait::async_trait;
use reqwest::{header, Client, RequestBuilder, StatusCode};
use serde_json::json;
use tracing::{debug, error};

// Current module imports
use super::constants::LOGIN_OK_MESSAGE;
use super::errors::{ProvisionError, ProvisionValidationError};
use super::traits::KeyPortal;
use super::types::{
    ApiKey, DeveloperPortal, KeyCreateResponse, KeyListResponse, KeyRequest, LoginResponse,
    ProvisionConfig, Session,
};

impl ProvisionConfig {
    pub fn validate(&self) -> Result<(), ProvisionValidationError> {
        if self.email.trim().is_empty() {
            return Err(ProvisionValidationError::MissingEmail);
        }

        if self.password.is_empty() {
            return Err(ProvisionValidationError::MissingPassword);
        }

        if self.key_name.trim().is_empty() {
            return Err(ProvisionValidationError::MissingKeyName);
        }

        if !self.auth_base.starts_with("http://") && !self.auth_base.starts_with("https://") {
            return Err(ProvisionValidationError::InvalidAuthBase(
                self.auth_base.clone(),
            ));
        }

        if self.key_count == 0 {
            return Err(ProvisionValidationError::InvalidKeyCount);
        }

        Ok(())
    }
}

// Keeps the password out of logs.
impl fmt::Debug for ProvisionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProvisionConfig")
            .field("auth_base", &self.auth_base)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("key_name", &self.key_name)
            .field("key_count", &self.key_count)
            .finish()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("cookie", &"<redacted>")
            .finish()
    }
}

impl KeyRequest {
    /// A request for a key named `name` usable only from `ip`.
    pub fn new(name: &str, ip: IpAddr) -> Self {
        Self {
            name: name.to_string(),
            description: name.to_string(),
            cidr_ranges: vec![ip.to_string()],
        }
    }
}

impl DeveloperPortal {
    /// Creates a portal client with a per-request timeout.
    pub fn new(config: &ProvisionConfig, timeout: Duration) -> Result<Self, ProvisionError> {
        let client: Client = Client::builder().timeout(timeout).build().map_err(|e| {
            error!("Failed to build HTTP client: {}", e);
            ProvisionError::HttpClientBuild(e)
        })?;

        Ok(Self {
            base: config.auth_base.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn session_post(&self, path: &str, session: &Session) -> RequestBuilder {
        self.client
            .post(format!("{}{}", self.base, path))
            .header(header::COOKIE, session.cookie.as_str())
    }
}

/// Joins the `name=value` part of every `Set-Cookie` header into one `Cookie` value.
pub(crate) fn session_cookie(headers: &header::HeaderMap) -> String {
    headers
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|value| value.split(';').next())
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .collect::<Vec<&str>>()
        .join("; ")
}

#[async_trait]
impl KeyPortal for DeveloperPortal {
    async fn login(&self, email: &str, password: &str) -> Result<Session, ProvisionError> {
        let url = format!("{}/login", self.base);
        debug!(url = %url, "Sending login request");

        let response = self
            .client
            .post(&url)
            .json(&json!({
                "email": email,
                "password": password,
            }))
            .send()
            .await
            .map_err(|e| ProvisionError::LoginFailed(e.to_string()))?;

        let status: StatusCode = response.status();
        let cookie: String = session_cookie(response.headers());

        let body: LoginResponse = response.json().await.map_err(|e| {
            ProvisionError::LoginRejected(format!("HTTP {} with unexpected body: {}", status, e))
        })?;

        match body.status.and_then(|s| s.message) {
            Some(message) if message == LOGIN_OK_MESSAGE => {}
            Some(message) => return Err(ProvisionError::LoginRejected(message)),
            None => {
                return Err(ProvisionError::LoginRejected(format!(
                    "HTTP {} without a status message",
                    status
                )))
            }
        }

        if cookie.is_empty() {
            return Err(ProvisionError::MissingSessionCookie);
        }

        Ok(Session { cookie })
    }

    async fn list_keys(&self, session: &Session) -> Result<Vec<ApiKey>, ProvisionError> {
        let response = self
            .session_post("/apikey/list", session)
            .json(&json!({}))
            .send()
            .await
            .map_err(|e| ProvisionError::ListFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProvisionError::ListFailed(format!("HTTP {}", status)));
        }

        let list: KeyListResponse = response
            .json()
            .await
            .map_err(|e| ProvisionError::ListFailed(format!("Failed to parse response: {}", e)))?;

        Ok(list.keys)
    }

    async fn revoke_key(&self, session: &Session, key: &ApiKey) -> Result<(), ProvisionError> {
        let response = self
            .session_post("/apikey/revoke", session)
            .json(&json!({ "id": key.id }))
            .send()
            .await
            .map_err(|e| ProvisionError::RevokeFailed {
                id: key.id.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProvisionError::RevokeFailed {
                id: key.id.clone(),
                message: format!("HTTP {}", status),
            });
        }

        Ok(())
    }

    async fn create_key(
        &self,
        session: &Session,
        request: &KeyRequest,
    ) -> Result<String, ProvisionError> {
        let response = self
            .session_post("/apikey/create", session)
            .json(request)
            .send()
            .await
            .map_err(|e| ProvisionError::CreateFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ProvisionError::CreateFailed(format!(
                "HTTP {} - {}",
                status, error_body
            )));
        }

        let created: KeyCreateResponse = response.json().await.map_err(|e| {
            ProvisionError::CreateFailed(format!("Failed to parse response: {}", e))
        })?;

        created
            .key
            .key
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ProvisionError::CreateFailed("response carried no key".to_string()))
    }
}
