//! Gateway client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;
use voxdesk_core::{AuthMode, Error, HttpError, Result};

use crate::identity::{IdentityProvider, NoIdentity};

/// Default timeout for requests.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings read once when the client is built.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the gateway (e.g., `https://tts.example.com`).
    pub api_base: String,
    /// Auth strategy for protected calls.
    pub auth_mode: AuthMode,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            auth_mode: AuthMode::default(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub const fn with_auth_mode(mut self, auth_mode: AuthMode) -> Self {
        self.auth_mode = auth_mode;
        self
    }

    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Speech gateway client.
///
/// Cheap to clone. Holds no per-call state, so overlapping calls are independent.
#[derive(Clone)]
pub struct GatewayClient {
    /// HTTP client for making requests.
    http: reqwest::Client,
    /// Gateway base URL without a trailing slash.
    base: String,
    /// Auth strategy for protected calls.
    pub(crate) auth_mode: AuthMode,
    /// Source of bearer tokens in [`AuthMode::Bearer`].
    pub(crate) identity: Arc<dyn IdentityProvider>,
}

impl GatewayClient {
    /// Create a client with no identity provider.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::with_identity(config, Arc::new(NoIdentity))
    }

    /// Create a client that asks `identity` for bearer tokens.
    pub fn with_identity(
        config: ClientConfig,
        identity: Arc<dyn IdentityProvider>,
    ) -> Result<Self> {
        let base = config.api_base.trim().trim_end_matches('/').to_string();
        let parsed = Url::parse(&base)
            .map_err(|e| Error::Http(HttpError::InvalidUrl(format!("{base}: {e}"))))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::Http(HttpError::InvalidUrl(format!(
                "{base}: unsupported scheme {}",
                parsed.scheme()
            ))));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(concat!("voxdesk/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Network(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            base,
            auth_mode: config.auth_mode,
            identity,
        })
    }

    /// The configured auth strategy.
    pub const fn auth_mode(&self) -> AuthMode {
        self.auth_mode
    }

    /// The gateway base URL.
    pub fn api_base(&self) -> &str {
        &self.base
    }

    /// Absolute URL for a gateway path such as `/apis`.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.http.get(self.url(path))
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.http.post(self.url(path))
    }

    /// Send a request and fail on any non-success status.
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await.map_err(map_send_error)?;

        let status = response.status();
        debug!("{} -> {status}", response.url().path());

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::Http(HttpError::StatusError {
                status: status.as_u16(),
                message,
            }));
        }

        Ok(response)
    }

    /// Send a request and decode a JSON body.
    pub(crate) async fn send_json<R>(&self, request: RequestBuilder) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let response = self.send(request).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Network(format!("Failed to read response body: {e}")))?;

        serde_json::from_slice(&bytes)
            .map_err(|e| Error::Parse(format!("Failed to parse response: {e}")))
    }
}

impl std::fmt::Debug for GatewayClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayClient")
            .field("base", &self.base)
            .field("auth_mode", &self.auth_mode)
            .finish_non_exhaustive()
    }
}

fn map_send_error(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::Http(HttpError::Timeout)
    } else if e.is_connect() {
        Error::Http(HttpError::ConnectionFailed(e.to_string()))
    } else {
        Error::Network(e.to_string())
    }
}
