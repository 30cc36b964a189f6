// 3rd party crates
use reqwest::header::HeaderMap;
use reqwest::{Client, StatusCode};
use tracing::{debug, error, info, warn};

// Current module imports
use super::constants::USER_AGENT;
use super::errors::PurgeError;
use super::types::{Cloudflare, PurgeConfig, PurgeRequest, PurgeResponse, PurgeResult};

/// Creates a reqwest client with the authentication headers and timeouts for
/// the Cloudflare API.
pub(super) fn create_reqwest_client(config: &PurgeConfig) -> Result<Client, PurgeError> {
    // A disabled config never sends a request, so its credentials are not checked.
    let headers: HeaderMap = match &config.credentials {
        Some(credentials) if config.is_enabled() => credentials.headers().map_err(|e| {
            error!(zone = %config.zone_id, "Invalid credential format: {}", e);
            e
        })?,
        _ => HeaderMap::new(),
    };

    let client: Client = Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .connect_timeout(config.timeout)
        .timeout(config.timeout)
        .build()
        .map_err(|e| {
            error!(zone = %config.zone_id, "Failed to build HTTP client: {}", e);
            PurgeError::HttpClientBuild(e)
        })?;

    Ok(client)
}

/// Purges `url` from the Cloudflare cache of the configured zone.
///
/// Returns `Ok(())` without touching the network when no zone or no
/// credentials are configured. In strict mode a malformed or unsuccessful
/// response is an error; in lenient mode it is only logged. Transport
/// failures are returned in both modes.
pub async fn purge_url(cloudflare: &Cloudflare, url: &str) -> Result<(), PurgeError> {
    let config: &PurgeConfig = &cloudflare.config;

    if !config.is_enabled() {
        debug!(url = %url, "Cloudflare purge is not configured, skipping");
        return Ok(());
    }

    let (status, body) = send_purge_request(cloudflare, url).await?;

    match (validate_response(&body), config.strict) {
        (Ok(_), _) => {
            info!(zone = %config.zone_id, url = %url, "Purged URL from Cloudflare cache");
            Ok(())
        }
        (Err(e), true) => {
            error!(
                zone = %config.zone_id,
                url = %url,
                status = %status,
                "Cloudflare purge failed: {}",
                e
            );
            Err(e)
        }
        (Err(e), false) => {
            warn!(
                zone = %config.zone_id,
                url = %url,
                status = %status,
                "Ignoring failed Cloudflare purge: {}",
                e
            );
            Ok(())
        }
    }
}

/// Sends one purge request and returns the status and raw body of the response.
async fn send_purge_request(
    cloudflare: &Cloudflare,
    url: &str,
) -> Result<(StatusCode, String), PurgeError> {
    let config: &PurgeConfig = &cloudflare.config;
    let endpoint: String = config.endpoint();

    debug!(
        zone = %config.zone_id,
        url = %url,
        method = %config.method,
        "Sending purge request"
    );

    let transport_error = |source: reqwest::Error| PurgeError::Transport {
        url: url.to_string(),
        source,
    };

    let response = cloudflare
        .client
        .request(config.method.into(), &endpoint)
        .json(&PurgeRequest::new(url))
        .send()
        .await
        .map_err(transport_error)?;

    let status: StatusCode = response.status();
    let body: String = response.text().await.map_err(transport_error)?;

    debug!(
        zone = %config.zone_id,
        url = %url,
        status = %status,
        response = %body,
        "Received purge response"
    );

    Ok((status, body))
}

/// Checks the `{"success": bool, "errors": [...]}` envelope of a purge response.
pub fn validate_response(body: &str) -> Result<PurgeResult, PurgeError> {
    let response: PurgeResponse =
        serde_json::from_str(body).map_err(|e| PurgeError::InvalidResponse(e.to_string()))?;

    let result: PurgeResult = response.into();
    if !result.success {
        return Err(PurgeError::ApiError(result.error_messages));
    }

    Ok(result)
}
