// Standard library
use std::sync::Arc;

// 3rd party crates
use parking_lot::Mutex;

/// Ordered credentials plus the cursor pointing at the next one to hand out.
#[derive(Debug, Default, Clone)]
pub struct TokenPool {
    pub(super) tokens: Vec<String>,
    pub(super) cursor: usize,
}

/// Shared handle over a [`TokenPool`].
#[derive(Debug, Default, Clone)]
pub struct CredentialRotator(pub(super) Arc<Mutex<TokenPool>>);
