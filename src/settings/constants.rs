/// Environment variable overriding the configuration file location
pub const CONFIG_PATH_ENV: &str = "PROBE_CONFIG_PATH";

/// Prefix for environment overrides, e.g. `PROBE__PROVISIONING__PASSWORD`
pub const ENV_PREFIX: &str = "PROBE";

/// Example configuration
pub const DEFAULT_CONFIG: &str = r##"
# Logging configuration
[log]
# Level can be "error", "warn", "info", "debug", or "trace"
level = "info"

# Outbound request pacing
[throttle]
# Requests per second against the polled API
rate_limit = 1
# Per-request timeout in milliseconds
timeout = 5000

# Developer portal used to provision API keys.
# Credentials are best supplied through the environment:
#   PROBE__PROVISIONING__EMAIL / PROBE__PROVISIONING__PASSWORD
[provisioning]
auth_base = "https://developer.clashofclans.com/api"
email = ""
password = ""
# Keys with this name are revoked and recreated on every start
key_name = "ClashPerk_API_Status_Token"
# Number of keys to create and rotate through
key_count = 1

# Egress IP lookup, services are tried in order
[ip_detection]
services = ["https://api.ipify.org", "https://v4.ident.me"]
# Per-service timeout in seconds
timeout = 5

# Polling
[poll]
api_base = "https://api.clashofclans.com/v1"
resource = "clans"
# Delay between passes in milliseconds
interval = 1000
targets = [
    "#2P9UG82L", "#8QU8J9LP", "#L2L9PQY0", "#YVVCC92G", "#202UG8GGC", "#20Y2PP20P", "#28VLY802U",
    "#22PRJJUU", "#299URVRVQ", "#29RJU0PV2", "#29Y8PRCJR", "#2JC80JCP", "#2P0YCULVQ", "#2PP9G8GR8",
    "#2PPU0VJJ9", "#2VQPRVRU", "#2Y8LYLPL2", "#2YQ98UJVQ", "#2YQCPU0GP", "#2YY0RU90P", "#89QG2QCQ",
]

# Latency reporting to a status page metric (optional)
[metrics]
enabled = false
base_url = "https://api.statuspage.io/v1"
page_id = ""
metric_id = ""
# Supply through PROBE__METRICS__API_KEY
api_key = ""
# Seconds added to every data point's timestamp
timestamp_offset = 300
"##;
