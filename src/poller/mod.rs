//! Poll driver: walks the configured targets, one throttled fetch each.

pub mod constants;
pub mod errors;
pub mod functions;
pub mod impls;
pub mod types;

pub use types::{PassSummary, PollConfig, Poller};
