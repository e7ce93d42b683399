//! HTTP client
//!
//! Wraps a [`reqwest::Client`] with the backend's base URL and the session
//! store the bearer token is read from.

use crate::request::{ApiRequest, HttpMethod};
use crate::{ApiError, Result};
use reqwest::{Client as ReqwestClient, Response as ReqwestResponse, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use storage::ModeStore;
use tracing::{debug, error, warn};

// =============================================================================
// Configuration
// =============================================================================

/// Platform the app runs on; decides how the local backend is reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Platform {
    /// Browser build
    #[default]
    Web,
    /// iOS simulator
    Ios,
    /// Android emulator, which sees the host as 10.0.2.2
    Android,
}

impl Platform {
    /// Development backend URL for this platform
    pub fn default_base_url(&self) -> &'static str {
        match self {
            Platform::Web | Platform::Ios => "http://localhost:5001/api",
            Platform::Android => "http://10.0.2.2:5001/api",
        }
    }
}

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// API base URL, including the `/api` prefix
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
    /// Headers included in all requests
    pub default_headers: HashMap<String, String>,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self::for_platform(Platform::default())
    }
}

impl ApiClientConfig {
    /// Create a new config with a base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(10),
            user_agent: format!("Rove/{}", env!("CARGO_PKG_VERSION")),
            default_headers: HashMap::from([(
                "Content-Type".to_string(),
                "application/json".to_string(),
            )]),
        }
    }

    /// Config pointing at the development backend for a platform
    pub fn for_platform(platform: Platform) -> Self {
        Self::new(platform.default_base_url())
    }

    /// Set the timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Add a default header
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Health endpoint, a sibling of the API root
    ///
    /// Only a trailing `/api` segment is replaced; a base URL without one
    /// gets `/health` appended.
    pub fn health_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let root = base.strip_suffix("/api").unwrap_or(base);
        format!("{}/health", root)
    }
}

/// Error body shapes the backend sends
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message.or(b.error))
        .unwrap_or_else(|| format!("HTTP {}: {}", status.as_u16(), body))
}

// =============================================================================
// Client
// =============================================================================

/// Client for the REST backend
///
/// # Examples
/// ```
/// use api_client::{ApiClient, ApiClientConfig, Platform};
/// use std::sync::Arc;
/// use storage::{MemoryStore, ModeStore};
///
/// async fn example() -> Result<(), Box<dyn std::error::Error>> {
///     let store = Arc::new(ModeStore::new(Arc::new(MemoryStore::new())));
///     let client = ApiClient::new(ApiClientConfig::for_platform(Platform::Android), store)?;
///
///     let feed = client.get_feed(None, None).await?;
///     println!("{}", feed);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// HTTP client
    http: ReqwestClient,
    /// Configuration
    config: ApiClientConfig,
    /// Where the auth token lives
    store: Arc<ModeStore>,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(config: ApiClientConfig, store: Arc<ModeStore>) -> Result<Self> {
        let http = ReqwestClient::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self { http, config, store })
    }

    /// Get the client configuration
    pub fn config(&self) -> &ApiClientConfig {
        &self.config
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Session store holding the auth token
    pub fn store(&self) -> &Arc<ModeStore> {
        &self.store
    }

    async fn bearer_token(&self) -> Option<String> {
        match self.store.auth_token().await {
            Ok(token) => token,
            Err(e) => {
                warn!(error = %e, "failed to read auth token, sending request unauthenticated");
                None
            }
        }
    }

    /// Send a request with the stored bearer token and decode the response
    pub async fn send<T>(&self, request: ApiRequest) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), request.path);
        debug!(method = request.method.as_str(), url = %url, "api request");

        let mut req = match request.method {
            HttpMethod::Get => self.http.get(&url),
            HttpMethod::Post => self.http.post(&url),
            HttpMethod::Put => self.http.put(&url),
            HttpMethod::Delete => self.http.delete(&url),
        };

        if !request.params.is_empty() {
            req = req.query(&request.params);
        }

        for (key, value) in &self.config.default_headers {
            req = req.header(key, value);
        }

        if let Some(token) = self.bearer_token().await {
            req = req.bearer_auth(token);
        }

        if let Some(body) = &request.body {
            req = req.json(body);
        }

        let response = req.send().await?;
        self.parse_response(response).await
    }

    /// Map status codes to errors and decode the body
    async fn parse_response<T>(&self, response: ReqwestResponse) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            let body = response.text().await.unwrap_or_default();
            warn!("request unauthorized, clearing stored auth token");
            if let Err(e) = self.store.clear_auth_token().await {
                error!(error = %e, "failed to clear auth token");
            }
            return Err(ApiError::Unauthorized(error_message(status, &body)));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Api { status: status.as_u16(), message: error_message(status, &body) });
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Ok(serde_json::from_value(Value::Null)?);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Check if the backend is up
    ///
    /// Sent without credentials. Any failure is logged and gives `None`.
    pub async fn health_check(&self) -> Option<Value> {
        let url = self.config.health_url();
        let result: std::result::Result<Value, reqwest::Error> = async {
            let response = self.http.get(&url).send().await?.error_for_status()?;
            response.json::<Value>().await
        }
        .await;

        match result {
            Ok(body) => Some(body),
            Err(e) => {
                error!(url = %url, error = %e, "backend health check failed");
                None
            }
        }
    }
}
