pub mod constants;
pub mod errors;
pub mod reporter;
pub mod traits;

pub use reporter::{MetricsConfig, StatusPageReporter};
pub use traits::LatencySink;

#[cfg(test)]
mod tests;
