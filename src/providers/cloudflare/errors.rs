// 3rd party crates
use thiserror::Error;

/// Errors raised while purging a URL from the Cloudflare cache.
#[derive(Debug, Error)]
pub enum PurgeError {
    #[error("Failed to reach Cloudflare while purging '{url}': {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid response from Cloudflare API: {0}")]
    InvalidResponse(String),

    #[error("Cloudflare API error: {}", .0.join(", "))]
    ApiError(Vec<String>),

    #[error("HTTP client error: {0}")]
    HttpClientBuild(#[from] reqwest::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeaderValue(#[from] reqwest::header::InvalidHeaderValue),
}

/// Errors found while validating the `[cloudflare]` settings section.
#[derive(Debug, Error)]
pub enum CloudflareValidationError {
    #[error("timeout_secs must be greater than 0")]
    InvalidTimeout,

    #[error("Invalid api_base '{api_base}': {reason}")]
    InvalidApiBase { api_base: String, reason: String },
}
