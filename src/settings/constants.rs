/// Environment variable that overrides the configuration file location.
pub const CONFIG_PATH_ENV: &str = "CFPURGE_CONFIG_PATH";

/// Prefix for environment overrides, e.g. `CFPURGE_CLOUDFLARE__API_TOKEN`.
pub const ENV_PREFIX: &str = "CFPURGE";

/// Directory under the user's config dir holding `config.toml`.
pub const CONFIG_DIR_NAME: &str = "cfpurge";

/// Example configuration
pub const DEFAULT_CONFIG: &str = r#"
# Logging configuration
[log]
# Level can be "error", "warn", "info", "debug", or "trace"
level = "info"

# Cloudflare cache purge configuration.
# Purging stays disabled until a zone and one credential scheme are set.
[cloudflare]
zone_id = ""

# Either an API token...
api_token = ""

# ...or the account email and global API key. The token wins if both are set.
auth_email = ""
auth_key = ""

# HTTP method used for purge_cache: "post" or "delete"
method = "post"

# Fail on malformed or unsuccessful API responses instead of only logging them
strict = true

# Connect and request timeout in seconds
timeout_secs = 10
"#;
