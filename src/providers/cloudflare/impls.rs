// Standard library
use std::fmt;
use std::time::Duration;

// 3rd party crates
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use reqwest::{Method, Url};
use serde_json::Value;

// Project imports
use crate::providers::CachePurger;

// Current module imports
use super::constants::{
    default_api_base, default_strict, default_timeout_secs, UNKNOWN_ERROR, X_AUTH_EMAIL, X_AUTH_KEY,
};
use super::errors::{CloudflareValidationError, PurgeError};
use super::functions::{create_reqwest_client, purge_url};
use super::types::{
    CfConfig, Cloudflare, PurgeConfig, PurgeCredentials, PurgeMethod, PurgeRequest, PurgeResponse,
    PurgeResult,
};

impl Default for CfConfig {
    fn default() -> Self {
        CfConfig {
            zone_id: String::new(),
            api_token: String::new(),
            auth_email: String::new(),
            auth_key: String::new(),
            method: PurgeMethod::default(),
            strict: default_strict(),
            timeout_secs: default_timeout_secs(),
            api_base: default_api_base(),
        }
    }
}

impl CfConfig {
    pub fn validate(&self) -> Result<(), CloudflareValidationError> {
        if self.timeout_secs == 0 {
            return Err(CloudflareValidationError::InvalidTimeout);
        }

        let api_base = Url::parse(&self.api_base).map_err(|e| {
            CloudflareValidationError::InvalidApiBase {
                api_base: self.api_base.clone(),
                reason: e.to_string(),
            }
        })?;
        if !matches!(api_base.scheme(), "http" | "https") {
            return Err(CloudflareValidationError::InvalidApiBase {
                api_base: self.api_base.clone(),
                reason: format!("unsupported scheme '{}'", api_base.scheme()),
            });
        }

        Ok(())
    }

    /// Turns the raw settings into the read-only configuration used by the client.
    pub fn resolve(&self) -> PurgeConfig {
        PurgeConfig {
            zone_id: self.zone_id.trim().to_string(),
            credentials: PurgeCredentials::from_parts(
                &self.api_token,
                &self.auth_email,
                &self.auth_key,
            ),
            method: self.method,
            strict: self.strict,
            timeout: Duration::from_secs(self.timeout_secs),
            api_base: self.api_base.trim_end_matches('/').to_string(),
        }
    }
}

impl PurgeConfig {
    /// Purging happens only with a zone and one usable credential scheme.
    pub fn is_enabled(&self) -> bool {
        !self.zone_id.is_empty() && self.credentials.is_some()
    }

    pub fn endpoint(&self) -> String {
        format!("{}/zones/{}/purge_cache", self.api_base, self.zone_id)
    }
}

impl PurgeCredentials {
    /// Picks the credential scheme. A non-empty token wins over the email/key
    /// pair; the pair is used only when both halves are present.
    pub fn from_parts(api_token: &str, auth_email: &str, auth_key: &str) -> Option<Self> {
        let (api_token, auth_email, auth_key) =
            (api_token.trim(), auth_email.trim(), auth_key.trim());

        if !api_token.is_empty() {
            Some(PurgeCredentials::Token {
                bearer_token: api_token.to_string(),
            })
        } else if !auth_email.is_empty() && !auth_key.is_empty() {
            Some(PurgeCredentials::Key {
                email: auth_email.to_string(),
                api_key: auth_key.to_string(),
            })
        } else {
            None
        }
    }

    /// Authentication headers for this scheme, marked sensitive.
    pub fn headers(&self) -> Result<HeaderMap, PurgeError> {
        let mut headers: HeaderMap = HeaderMap::new();

        match self {
            PurgeCredentials::Token { bearer_token } => {
                let mut value = HeaderValue::from_str(&format!("Bearer {}", bearer_token))?;
                value.set_sensitive(true);
                headers.insert(AUTHORIZATION, value);
            }
            PurgeCredentials::Key { email, api_key } => {
                let email = HeaderValue::from_str(email)?;
                let mut key = HeaderValue::from_str(api_key)?;
                key.set_sensitive(true);
                headers.insert(HeaderName::from_static(X_AUTH_EMAIL), email);
                headers.insert(HeaderName::from_static(X_AUTH_KEY), key);
            }
        }

        Ok(headers)
    }
}

// Secrets stay out of logs.
impl fmt::Debug for PurgeCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PurgeCredentials::Token { .. } => f
                .debug_struct("Token")
                .field("bearer_token", &"<redacted>")
                .finish(),
            PurgeCredentials::Key { email, .. } => f
                .debug_struct("Key")
                .field("email", email)
                .field("api_key", &"<redacted>")
                .finish(),
        }
    }
}

impl From<PurgeMethod> for Method {
    fn from(method: PurgeMethod) -> Self {
        match method {
            PurgeMethod::Post => Method::POST,
            PurgeMethod::Delete => Method::DELETE,
        }
    }
}

impl fmt::Display for PurgeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PurgeMethod::Post => write!(f, "POST"),
            PurgeMethod::Delete => write!(f, "DELETE"),
        }
    }
}

impl<'a> PurgeRequest<'a> {
    pub fn new(url: &'a str) -> Self {
        PurgeRequest { files: [url] }
    }
}

impl From<PurgeResponse> for PurgeResult {
    fn from(response: PurgeResponse) -> Self {
        let mut error_messages: Vec<String> = match response.errors {
            Some(Value::Array(errors)) => errors
                .iter()
                .filter_map(|error| error.get("message").and_then(Value::as_str))
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        };

        if !response.success && error_messages.is_empty() {
            error_messages.push(UNKNOWN_ERROR.to_string());
        }

        PurgeResult {
            success: response.success,
            error_messages,
        }
    }
}

impl Cloudflare {
    pub fn new(config: PurgeConfig) -> Result<Self, PurgeError> {
        let client = create_reqwest_client(&config)?;
        Ok(Cloudflare { config, client })
    }

    /// Purges a single URL from the zone's cache.
    pub async fn purge(&self, url: &str) -> Result<(), PurgeError> {
        purge_url(self, url).await
    }
}

#[async_trait]
impl CachePurger for Cloudflare {
    type Error = PurgeError;

    async fn purge(&self, url: &str) -> Result<(), Self::Error> {
        purge_url(self, url).await
    }

    fn is_enabled(&self) -> bool {
        self.config.is_enabled()
    }

    fn get_name(&self) -> &str {
        "cloudflare"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cf_config() -> CfConfig {
        CfConfig {
            zone_id: "zone".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn token_takes_precedence_over_key_pair() {
        let credentials = PurgeCredentials::from_parts("tok", "me@example.org", "key");
        assert_eq!(
            credentials,
            Some(PurgeCredentials::Token {
                bearer_token: "tok".to_string()
            })
        );
    }

    #[test]
    fn key_pair_needs_both_halves() {
        assert_eq!(PurgeCredentials::from_parts("", "me@example.org", ""), None);
        assert_eq!(PurgeCredentials::from_parts("", "", "key"), None);
        assert_eq!(
            PurgeCredentials::from_parts("  ", "me@example.org", "key"),
            Some(PurgeCredentials::Key {
                email: "me@example.org".to_string(),
                api_key: "key".to_string(),
            })
        );
    }

    #[test]
    fn token_headers_carry_only_authorization() {
        let headers = PurgeCredentials::Token {
            bearer_token: "tok".to_string(),
        }
        .headers()
        .unwrap();

        assert_eq!(headers.len(), 1);
        assert_eq!(headers[AUTHORIZATION], "Bearer tok");
        assert!(headers[AUTHORIZATION].is_sensitive());
    }

    #[test]
    fn key_headers_carry_email_and_key() {
        let headers = PurgeCredentials::Key {
            email: "me@example.org".to_string(),
            api_key: "key".to_string(),
        }
        .headers()
        .unwrap();

        assert_eq!(headers.len(), 2);
        assert_eq!(headers["x-auth-email"], "me@example.org");
        assert_eq!(headers["x-auth-key"], "key");
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn header_values_with_newlines_are_rejected() {
        let err = PurgeCredentials::Token {
            bearer_token: "tok\nX-Injected: 1".to_string(),
        }
        .headers()
        .unwrap_err();
        assert!(matches!(err, PurgeError::InvalidHeaderValue(_)));
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let credentials = PurgeCredentials::Key {
            email: "me@example.org".to_string(),
            api_key: "super-secret".to_string(),
        };
        let rendered = format!("{:?}", credentials);
        assert!(rendered.contains("me@example.org"));
        assert!(!rendered.contains("super-secret"));
    }

    #[test]
    fn resolve_disables_blank_zone() {
        let mut config = cf_config();
        config.zone_id = "   ".to_string();
        config.api_token = "tok".to_string();

        let resolved = config.resolve();
        assert!(resolved.zone_id.is_empty());
        assert!(!resolved.is_enabled());
    }

    #[test]
    fn resolve_disables_missing_credentials() {
        let resolved = cf_config().resolve();
        assert!(resolved.credentials.is_none());
        assert!(!resolved.is_enabled());
    }

    #[test]
    fn endpoint_is_scoped_to_zone() {
        let mut config = cf_config();
        config.api_base = "http://127.0.0.1:8080/client/v4/".to_string();

        assert_eq!(
            config.resolve().endpoint(),
            "http://127.0.0.1:8080/client/v4/zones/zone/purge_cache"
        );
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = cf_config();
        config.timeout_secs = 0;
        assert!(matches!(
            config.validate(),
            Err(CloudflareValidationError::InvalidTimeout)
        ));
    }

    #[test]
    fn validate_rejects_non_http_api_base() {
        let mut config = cf_config();
        config.api_base = "ftp://api.cloudflare.com".to_string();
        assert!(matches!(
            config.validate(),
            Err(CloudflareValidationError::InvalidApiBase { .. })
        ));

        config.api_base = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn request_serializes_single_file() {
        let body = serde_json::to_string(&PurgeRequest::new("https://example.org/wiki/Foo")).unwrap();
        assert_eq!(body, r#"{"files":["https://example.org/wiki/Foo"]}"#);
    }

    #[test]
    fn failed_response_collects_messages() {
        let response: PurgeResponse = serde_json::from_str(
            r#"{"success":false,"errors":[{"code":1049,"message":"bad zone"},{"message":"retry later"}]}"#,
        )
        .unwrap();

        let result = PurgeResult::from(response);
        assert!(!result.success);
        assert_eq!(result.error_messages, vec!["bad zone", "retry later"]);
    }

    #[test]
    fn failed_response_without_messages_is_unknown() {
        for body in [
            r#"{"success":false}"#,
            r#"{"success":false,"errors":[]}"#,
            r#"{"success":false,"errors":null}"#,
            r#"{"success":false,"errors":[{"code":7003}]}"#,
            r#"{"success":false,"errors":[{"message":5}]}"#,
            r#"{"success":false,"errors":["bad zone"]}"#,
            r#"{"success":false,"errors":"oops"}"#,
            r#"{"success":false,"errors":{}}"#,
        ] {
            let response: PurgeResponse = serde_json::from_str(body).unwrap();
            assert_eq!(
                PurgeResult::from(response).error_messages,
                vec![UNKNOWN_ERROR],
                "body: {}",
                body
            );
        }
    }

    #[test]
    fn method_maps_to_http_verb() {
        assert_eq!(Method::from(PurgeMethod::Post), Method::POST);
        assert_eq!(Method::from(PurgeMethod::Delete), Method::DELETE);
        assert_eq!(PurgeMethod::default(), PurgeMethod::Post);
    }
}
