// 3rd party crates
use async_trait::async_trait;

// Current module imports
use super::errors::ProvisionError;
use super::types::{ApiKey, KeyRequest, Session};

/// Remote authority that issues and revokes API keys.
#[async_trait]
pub trait KeyPortal: Send + Sync {
    /// Authenticates and returns the session used by the other calls.
    async fn login(&self, email: &str, password: &str) -> Result<Session, ProvisionError>;

    /// Lists every key registered under the session's account.
    async fn list_keys(&self, session: &Session) -> Result<Vec<ApiKey>, ProvisionError>;

    async fn revoke_key(&self, session: &Session, key: &ApiKey) -> Result<(), ProvisionError>;

    /// Creates a key and returns its bearer token.
    async fn create_key(
        &self,
        session: &Session,
        request: &KeyRequest,
    ) -> Result<String, ProvisionError>;
}
