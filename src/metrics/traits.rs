// 3rd party crates
use async_trait::async_trait;

// Current module imports
use super::errors::MetricsError;

/// Destination for observed request latencies.
#[async_trait]
pub trait LatencySink: Send + Sync {
    /// Records one round-trip latency, in milliseconds.
    async fn record(&self, latency_ms: f64) -> Result<(), MetricsError>;
}
