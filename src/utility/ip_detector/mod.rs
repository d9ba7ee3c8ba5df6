//! Egress IP Detection Module
//!
//! Discovers the public address this process egresses from, which the key
//! provisioner binds every freshly created API key to.
//!
//! # Behaviour
//!
//! - Lookup services are queried one at a time, in configured order
//! - Each query carries its own timeout
//! - The first response that parses as an IP address wins
//! - Failures are logged and the next service is tried
//!
//! # Configuration
//!
//! ```toml
//! [ip_detection]
//! services = ["https://api.ipify.org", "https://v4.ident.me"]
//! timeout = 5
//! ```

pub mod constants;
pub mod errors;
pub mod impls;
pub mod types;

#[cfg(test)]
mod tests;
