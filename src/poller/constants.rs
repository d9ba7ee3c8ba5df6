/// Base URL of the polled API
pub const DEFAULT_API_BASE: &str = "https://api.clashofclans.com/v1";

/// Path segment the targets live under
pub const DEFAULT_RESOURCE: &str = "clans";

/// Delay between the end of one pass and the start of the next (in milliseconds)
pub const DEFAULT_PASS_INTERVAL_MS: u64 = 1000;

pub fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

pub fn default_resource() -> String {
    DEFAULT_RESOURCE.to_string()
}

pub fn default_pass_interval() -> u64 {
    DEFAULT_PASS_INTERVAL_MS
}
