//! High-level client: `DashboardClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, configuration and accessor methods.

use crate::auth::client::Auth;
use crate::auth::Credentials;
use crate::domain::order::client::Orders;
use crate::domain::post::client::Posts;
use crate::error::ConfigError;
use crate::http::{DashboardHttp, RetryPolicy};
use crate::network;

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::auth::client::Auth as AuthClient;
pub use crate::domain::order::client::Orders as OrdersClient;
pub use crate::domain::post::client::Posts as PostsClient;

/// Default request timeout (native only).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The resource client: typed access to the dashboard backend.
///
/// Holds no mutable state of its own. The only shared state is the injected
/// [`Credentials`] provider. Cheap to clone.
#[derive(Clone)]
pub struct DashboardClient {
    pub(crate) http: DashboardHttp,
    pub(crate) credentials: Credentials,
}

impl DashboardClient {
    pub fn builder() -> DashboardClientBuilder {
        DashboardClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn orders(&self) -> Orders<'_> {
        Orders { client: self }
    }

    pub fn posts(&self) -> Posts<'_> {
        Posts { client: self }
    }

    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }

    /// The injected credential provider.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    pub fn auth_url(&self) -> &str {
        self.http.auth_url()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct DashboardClientBuilder {
    base_url: String,
    auth_url: String,
    timeout: Option<Duration>,
    retry: RetryPolicy,
    credentials: Option<Credentials>,
}

impl Default for DashboardClientBuilder {
    fn default() -> Self {
        Self {
            base_url: network::DEFAULT_API_URL.to_string(),
            auth_url: network::DEFAULT_AUTH_URL.to_string(),
            timeout: Some(DEFAULT_TIMEOUT),
            retry: RetryPolicy::None,
            credentials: None,
        }
    }
}

impl DashboardClientBuilder {
    /// Start from defaults overridden by `ORDER_DASHBOARD_*` environment variables.
    ///
    /// An unset API URL keeps the default; an unset auth URL follows the API URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut builder = Self::default();

        if let Some(url) = lookup(network::API_URL_ENV).filter(|v| !v.is_empty()) {
            builder.auth_url = url.clone();
            builder.base_url = url;
        }
        if let Some(url) = lookup(network::AUTH_URL_ENV).filter(|v| !v.is_empty()) {
            builder.auth_url = url;
        }
        if let Some(raw) = lookup(network::TIMEOUT_SECS_ENV).filter(|v| !v.is_empty()) {
            let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: network::TIMEOUT_SECS_ENV,
                value: raw.clone(),
            })?;
            builder.timeout = (secs > 0).then(|| Duration::from_secs(secs));
        }

        Ok(builder)
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn auth_url(mut self, url: &str) -> Self {
        self.auth_url = url.to_string();
        self
    }

    /// Request timeout; `None` disables it. Ignored on WASM.
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Opt into retries for GET requests. Defaults to `RetryPolicy::None`.
    pub fn retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Inject the credential provider. Defaults to [`Credentials::default`].
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn build(self) -> Result<DashboardClient, ConfigError> {
        validate_url(&self.base_url)?;
        validate_url(&self.auth_url)?;

        Ok(DashboardClient {
            http: DashboardHttp::new(&self.base_url, &self.auth_url, self.timeout, self.retry)?,
            credentials: self.credentials.unwrap_or_default(),
        })
    }
}

fn validate_url(url: &str) -> Result<(), ConfigError> {
    let parsed = reqwest::Url::parse(url).map_err(|e| ConfigError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::InvalidUrl {
            url: url.to_string(),
            reason: format!("unsupported scheme {other:?}"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let client = DashboardClient::builder().build().unwrap();
        assert_eq!(client.base_url(), network::DEFAULT_API_URL);
        assert_eq!(client.auth_url(), network::DEFAULT_AUTH_URL);
        assert!(!client.credentials().is_authenticated());
        assert!(matches!(client.http.retry_policy(), RetryPolicy::None));
    }

    #[test]
    fn test_env_overrides() {
        let builder = DashboardClientBuilder::from_lookup(lookup(&[
            (network::API_URL_ENV, "https://api.example.com/"),
            (network::TIMEOUT_SECS_ENV, "5"),
        ]))
        .unwrap();
        assert_eq!(builder.timeout, Some(Duration::from_secs(5)));

        let client = builder.build().unwrap();
        assert_eq!(client.base_url(), "https://api.example.com");
        assert_eq!(client.auth_url(), "https://api.example.com");
    }

    #[test]
    fn test_env_separate_auth_url() {
        let client = DashboardClientBuilder::from_lookup(lookup(&[
            (network::API_URL_ENV, "https://api.example.com"),
            (network::AUTH_URL_ENV, "https://auth.example.com"),
        ]))
        .unwrap()
        .build()
        .unwrap();
        assert_eq!(client.auth_url(), "https://auth.example.com");
    }

    #[test]
    fn test_env_zero_timeout_disables() {
        let builder =
            DashboardClientBuilder::from_lookup(lookup(&[(network::TIMEOUT_SECS_ENV, "0")]))
                .unwrap();
        assert!(builder.timeout.is_none());
    }

    #[test]
    fn test_env_bad_timeout() {
        let err = DashboardClientBuilder::from_lookup(lookup(&[(
            network::TIMEOUT_SECS_ENV,
            "soon",
        )]))
        .err()
        .unwrap();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_rejects_invalid_urls() {
        assert!(matches!(
            DashboardClient::builder().base_url("not a url").build(),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert!(matches!(
            DashboardClient::builder().auth_url("ftp://files.local").build(),
            Err(ConfigError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_injected_credentials_are_shared() {
        let creds = Credentials::in_memory();
        let client = DashboardClient::builder()
            .credentials(creds.clone())
            .build()
            .unwrap();
        creds.set_token("t".into()).unwrap();
        assert!(client.auth().is_authenticated());
    }
}
