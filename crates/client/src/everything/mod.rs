//! Everything HTTP server client.
//!
//! Provides a client for the HTTP server built into the Everything file
//! indexer, with a fixed pre-request throttle, request validation, and
//! response shape validation.
//!
//! ### Protocol
//!
//! - **Endpoint**: `GET {base_url}/?search=...&json=1&...` (default `http://127.0.0.1:8011`)
//! - **Authentication**: Optional HTTP Basic, when Everything's HTTP server requires a login.
//! - **Rate Limiting**:
//!   - Fixed delay (default 100ms) before every request.
//!   - No retries; every failure is returned to the caller.
//! - **Errors**: Connection refused, timeouts, HTTP status and shape failures are
//!   classified into distinct `EverythingError` variants.

pub mod error;
pub mod request;
pub mod response;

pub use error::EverythingError;
pub use request::{DEFAULT_MAX_RESULTS, DEFAULT_SCOPE, MAX_RESULTS_LIMIT, SearchRequest, SortBy};
pub use response::{RawSearchResult, SearchResponse};

use everything_core::{AppConfig, ConfigError};
use reqwest::header;
use std::sync::Arc;
use std::time::{Duration, Instant};
use url::Url;

/// Longest slice of a response body copied into logs.
const LOG_SNIPPET_CHARS: usize = 200;

/// Everything client configuration.
#[derive(Debug, Clone)]
pub struct EverythingConfig {
    /// Base URL of Everything's HTTP server.
    pub endpoint: Url,
    /// Request timeout.
    pub timeout: Duration,
    /// Fixed delay before each request.
    pub request_delay: Duration,
    /// Scope applied when a search does not name one.
    pub default_scope: String,
    /// User-agent string.
    pub user_agent: String,
    /// HTTP Basic username.
    pub username: Option<String>,
    /// HTTP Basic password.
    pub password: Option<String>,
}

impl TryFrom<&AppConfig> for EverythingConfig {
    type Error = ConfigError;

    fn try_from(config: &AppConfig) -> Result<Self, Self::Error> {
        let credentials = config.credentials();

        Ok(Self {
            endpoint: config.endpoint()?,
            timeout: config.timeout(),
            request_delay: config.request_delay(),
            default_scope: config.default_scope.clone(),
            user_agent: config.user_agent.clone(),
            username: credentials.map(|(user, _)| user.to_string()),
            password: credentials.and_then(|(_, pass)| pass).map(str::to_string),
        })
    }
}

/// Transport used to reach Everything.
///
/// Production code uses [`HttpTransport`]; tests substitute canned bodies.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Issue one GET with the given query parameters and return the response body.
    async fn get(&self, params: &[(&'static str, String)]) -> Result<String, EverythingError>;
}

/// reqwest-backed transport for Everything's HTTP server.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    endpoint: Url,
    timeout: Duration,
    credentials: Option<(String, Option<String>)>,
}

impl HttpTransport {
    /// Create a new transport with the given configuration.
    pub fn new(config: &EverythingConfig) -> Result<Self, EverythingError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| EverythingError::Network(Arc::new(e)))?;

        let credentials = config
            .username
            .clone()
            .map(|user| (user, config.password.clone()));

        Ok(Self { http, endpoint: config.endpoint.clone(), timeout: config.timeout, credentials })
    }

    /// Build the request URL with a percent-encoded query string.
    ///
    /// Spaces are sent as `%20`; Everything does not treat `+` as a space.
    pub fn request_url(&self, params: &[(&'static str, String)]) -> Url {
        let query = params
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");

        let mut url = self.endpoint.clone();
        url.set_query(Some(&query));
        url
    }

    fn classify(&self, err: reqwest::Error) -> EverythingError {
        if err.is_timeout() {
            EverythingError::Timeout(self.timeout)
        } else if err.is_connect() {
            EverythingError::Unavailable { url: self.endpoint.to_string() }
        } else {
            EverythingError::Network(Arc::new(err))
        }
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn get(&self, params: &[(&'static str, String)]) -> Result<String, EverythingError> {
        let url = self.request_url(params);

        let mut request = self
            .http
            .get(url)
            .header(header::ACCEPT, "application/json");
        if let Some((user, pass)) = &self.credentials {
            request = request.basic_auth(user, pass.as_deref());
        }

        let http_response = request.send().await.map_err(|e| self.classify(e))?;

        let status = http_response.status();
        tracing::debug!("Everything response status: {}", status);

        if status.is_client_error() || status.is_server_error() {
            return Err(EverythingError::HttpError { status: status.as_u16() });
        }

        http_response.text().await.map_err(|e| self.classify(e))
    }
}

/// Everything search client.
#[derive(Clone)]
pub struct EverythingClient {
    transport: Arc<dyn Transport>,
    request_delay: Duration,
    default_scope: String,
}

impl EverythingClient {
    /// Create a new client that talks HTTP to the configured endpoint.
    pub fn new(config: EverythingConfig) -> Result<Self, EverythingError> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(Arc::new(transport), &config))
    }

    /// Create a client over an arbitrary transport.
    pub fn with_transport(transport: Arc<dyn Transport>, config: &EverythingConfig) -> Self {
        Self { transport, request_delay: config.request_delay, default_scope: config.default_scope.clone() }
    }

    /// Scope applied to searches that do not provide one.
    pub fn default_scope(&self) -> &str {
        &self.default_scope
    }

    /// Execute a search.
    ///
    /// Validates the request, waits the fixed throttle delay, then issues
    /// exactly one request. Failures are logged with the request parameters
    /// and returned unchanged.
    pub async fn search(&self, req: &SearchRequest) -> Result<SearchResponse, EverythingError> {
        req.validate()?;

        if !self.request_delay.is_zero() {
            tokio::time::sleep(self.request_delay).await;
        }

        let params = req.query_pairs();
        let search = req.effective_search();
        let start = Instant::now();

        tracing::debug!(
            search = %search,
            count = req.max_results,
            offset = req.offset,
            sort = %req.sort_by,
            ascending = req.ascending,
            "searching Everything"
        );

        let body = self.transport.get(&params).await.inspect_err(|e| {
            tracing::error!(
                search = %search,
                count = req.max_results,
                offset = req.offset,
                error = %e,
                "Everything request failed"
            );
        })?;

        let response = SearchResponse::parse(&body).inspect_err(|e| {
            tracing::error!(
                search = %search,
                error = %e,
                snippet = %snippet(&body),
                "unexpected Everything response"
            );
        })?;

        tracing::debug!(
            "search completed in {:?}, {} of {} results",
            start.elapsed(),
            response.result_count(),
            response.total_results
        );

        Ok(response)
    }
}

fn snippet(body: &str) -> String {
    body.chars().take(LOG_SNIPPET_CHARS).collect()
}
