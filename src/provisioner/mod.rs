//! API key provisioning against the developer portal.
//!
//! Runs once at startup: log in, revoke keys left behind by earlier runs under
//! the same name, then create fresh keys bound to the current egress IP and feed
//! them into the credential rotator.

pub mod constants;
pub mod errors;
pub mod functions;
pub mod impls;
pub mod traits;
pub mod types;

pub use functions::provision;
pub use types::{DeveloperPortal, ProvisionConfig};
