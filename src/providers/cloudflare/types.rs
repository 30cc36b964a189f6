// Standard library
use std::time::Duration;

// 3rd party crates
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// Current module imports
use super::constants::{default_api_base, default_strict, default_timeout_secs};

/// Represents a client for the Cloudflare cache purge API.
#[derive(Debug, Clone)]
pub struct Cloudflare {
    pub config: PurgeConfig,
    pub client: Client,
}

/// The `[cloudflare]` section of the settings file, as written by the user.
///
/// Every field is optional. An empty `zone_id` or a missing credential pair
/// leaves purging disabled rather than failing to load.
#[derive(Debug, Deserialize, Clone)]
pub struct CfConfig {
    #[serde(default)]
    pub zone_id: String,

    #[serde(default)]
    pub api_token: String,

    #[serde(default)]
    pub auth_email: String,

    #[serde(default)]
    pub auth_key: String,

    #[serde(default)]
    pub method: PurgeMethod,

    /// Fail on malformed or unsuccessful API responses instead of only logging them.
    #[serde(default = "default_strict")]
    pub strict: bool,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_api_base")]
    pub api_base: String,
}

/// Resolved purge configuration, built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct PurgeConfig {
    pub zone_id: String,
    pub credentials: Option<PurgeCredentials>,
    pub method: PurgeMethod,
    pub strict: bool,
    pub timeout: Duration,
    pub api_base: String,
}

/// The two credential schemes accepted by the Cloudflare API.
#[derive(Clone, PartialEq, Eq)]
pub enum PurgeCredentials {
    Token { bearer_token: String },
    Key { email: String, api_key: String },
}

/// HTTP method used against the `purge_cache` endpoint.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PurgeMethod {
    #[default]
    Post,
    Delete,
}

/// Body of a purge request.
#[derive(Debug, Serialize)]
pub struct PurgeRequest<'a> {
    pub files: [&'a str; 1],
}

/// Response envelope returned by the purge endpoint.
#[derive(Debug, Deserialize)]
pub struct PurgeResponse {
    pub success: bool,
    /// Kept untyped: only string `message` fields of array entries are read.
    #[serde(default)]
    pub errors: Option<Value>,
}

/// Outcome of a purge call as reported by the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurgeResult {
    pub success: bool,
    pub error_messages: Vec<String>,
}
