/// Base URL of the Cloudflare v4 REST API.
pub const CLOUDFLARE_API_BASE: &str = "https://api.cloudflare.com/client/v4";

/// Connect and request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Reported when the API says `success: false` without any error message.
pub const UNKNOWN_ERROR: &str = "Unknown error";

pub const X_AUTH_EMAIL: &str = "x-auth-email";
pub const X_AUTH_KEY: &str = "x-auth-key";

pub const USER_AGENT: &str = concat!("cloudflare-purge/", env!("CARGO_PKG_VERSION"));

pub(crate) fn default_api_base() -> String {
    CLOUDFLARE_API_BASE.to_string()
}

pub(crate) fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

pub(crate) fn default_strict() -> bool {
    true
}
