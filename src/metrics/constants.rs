/// Status page API base URL
pub const DEFAULT_METRICS_BASE: &str = "https://api.statuspage.io/v1";

/// Seconds added to every data point's timestamp
pub const DEFAULT_TIMESTAMP_OFFSET_SECS: u64 = 300;

pub fn default_metrics_base() -> String {
    DEFAULT_METRICS_BASE.to_string()
}

pub fn default_timestamp_offset() -> u64 {
    DEFAULT_TIMESTAMP_OFFSET_SECS
}
