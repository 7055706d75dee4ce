//! Low-level HTTP client: `DashboardHttp`.
//!
//! Performs one round trip per attempt, classifies the outcome into a
//! [`FetchError`], and decodes successful bodies into wire types. Conversion to
//! validated domain types happens in the domain sub-clients.

use crate::auth::AuthToken;
use crate::error::{ConfigError, FetchError};
use crate::http::retry::RetryPolicy;

use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Low-level HTTP client for the dashboard REST API.
///
/// Holds no mutable state; clones share the underlying connection pool.
#[derive(Clone)]
pub struct DashboardHttp {
    base_url: String,
    auth_url: String,
    client: Client,
    retry: RetryPolicy,
}

impl DashboardHttp {
    pub fn new(
        base_url: &str,
        auth_url: &str,
        timeout: Option<Duration>,
        retry: RetryPolicy,
    ) -> Result<Self, ConfigError> {
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Some(t) = timeout {
                builder = builder.timeout(t);
            }
            builder = builder.pool_max_idle_per_host(10);
        }
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_url: auth_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
            retry,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn auth_url(&self) -> &str {
        &self.auth_url
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    // ── Request methods ──────────────────────────────────────────────────

    /// GET and decode. Retried only if the client was built with a retry policy.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        token: Option<&AuthToken>,
    ) -> Result<T, FetchError> {
        let Some(config) = self.retry.config() else {
            return self.do_request(Method::GET, url, None::<&()>, token).await;
        };

        let mut attempt = 0;
        loop {
            match self.do_request(Method::GET, url, None::<&()>, token).await {
                Ok(resp) => return Ok(resp),
                Err(e) if attempt < config.max_retries && config.should_retry(&e) => {
                    let delay = config.delay_for_attempt(attempt);
                    tracing::debug!(
                        attempt = attempt + 1,
                        max = config.max_retries,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "Retrying request to {}",
                        url
                    );
                    futures_timer::Delay::new(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// POST and return the raw success body. Neither endpoint that POSTs
    /// (logout, delete) has a fixed reply shape. Never retried.
    pub(crate) async fn post_text<B: Serialize>(
        &self,
        url: &str,
        body: Option<&B>,
        token: Option<&AuthToken>,
    ) -> Result<String, FetchError> {
        self.send(Method::POST, url, body, token).await
    }

    async fn do_request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
        token: Option<&AuthToken>,
    ) -> Result<T, FetchError> {
        let text = self.send(method.clone(), url, body, token).await?;
        decode_body(&text).inspect_err(|e| {
            tracing::warn!(%method, url, error = %e, "Response did not match expected shape");
        })
    }

    /// One round trip. Returns the body of a 2xx response, otherwise the
    /// classified failure.
    async fn send<B: Serialize>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
        token: Option<&AuthToken>,
    ) -> Result<String, FetchError> {
        tracing::debug!(%method, url, authed = token.is_some(), "HTTP request");

        let mut req = self
            .client
            .request(method.clone(), url)
            .header(reqwest::header::ACCEPT, "application/json");

        if let Some(token) = token {
            req = req.bearer_auth(token.expose());
        }

        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        let status = resp.status();
        let body_text = resp
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !status.is_success() {
            let err = classify_status(status, body_text);
            tracing::warn!(%method, url, status = status.as_u16(), kind = %err.kind(), "HTTP request failed");
            return Err(err);
        }

        Ok(body_text)
    }
}

/// Map a non-2xx status to its failure kind.
pub(crate) fn classify_status(status: StatusCode, body: String) -> FetchError {
    match status.as_u16() {
        401 | 403 => FetchError::Unauthorized,
        404 => FetchError::NotFound(body),
        code => FetchError::HttpStatus { code, body },
    }
}

/// Decode a successful response body. An empty body decodes as JSON `null`.
pub(crate) fn decode_body<T: DeserializeOwned>(text: &str) -> Result<T, FetchError> {
    let text = if text.trim().is_empty() { "null" } else { text };
    Ok(serde_json::from_str(text)?)
}
