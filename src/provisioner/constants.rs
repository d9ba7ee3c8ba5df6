/// Base URL of the developer portal's session API
pub const DEFAULT_AUTH_BASE: &str = "https://developer.clashofclans.com/api";

/// Name (and description) given to every key this process creates
pub const DEFAULT_KEY_NAME: &str = "ClashPerk_API_Status_Token";

pub const DEFAULT_KEY_COUNT: u32 = 1;

/// Status message the portal returns for a successful login
pub const LOGIN_OK_MESSAGE: &str = "ok";

pub fn default_auth_base() -> String {
    DEFAULT_AUTH_BASE.to_string()
}

pub fn default_key_name() -> String {
    DEFAULT_KEY_NAME.to_string()
}

pub fn default_key_count() -> u32 {
    DEFAULT_KEY_COUNT
}
