// 3rd party crates
use tracing::debug;

// Current module imports
use super::types::{CredentialRotator, TokenPool};

impl TokenPool {
    /// Returns the token under the cursor and advances it, wrapping at the end.
    pub fn next_token(&mut self) -> Option<String> {
        let token: String = self.tokens.get(self.cursor)?.clone();
        self.cursor = (self.cursor + 1) % self.tokens.len();
        Some(token)
    }

    pub fn push(&mut self, token: String) {
        self.tokens.push(token);
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl CredentialRotator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next credential in rotation, or `None` while nothing has been provisioned.
    pub fn next_token(&self) -> Option<String> {
        self.0.lock().next_token()
    }

    pub fn push(&self, token: String) {
        let mut pool = self.0.lock();
        pool.push(token);
        debug!(pool_size = pool.len(), "Added credential to rotation");
    }

    pub fn len(&self) -> usize {
        self.0.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.lock().is_empty()
    }
}
