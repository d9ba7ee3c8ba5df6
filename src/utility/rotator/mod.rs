//! Round-robin rotation over the provisioned API tokens.

pub mod impls;
pub mod types;

pub use types::CredentialRotator;
