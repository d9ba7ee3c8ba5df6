/// Per-service request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 5;

/// Plain-text IPv4 lookup services, primary first
pub const DEFAULT_SERVICES: [&str; 4] = [
    "https://api.ipify.org",
    "https://v4.ident.me",
    "https://ipv4.icanhazip.com",
    "https://checkip.amazonaws.com",
];

pub fn default_services() -> Vec<String> {
    DEFAULT_SERVICES.iter().map(|s| s.to_string()).collect()
}

pub fn default_request_timeout() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}
