use serde::de::DeserializeOwned;

use crate::models::{
    error::AppError,
    history::{History, HistoryEntry},
    status::{LoadState, Snapshot, StatusResponse, ToggleRequest},
};

// CONSTANTS
const BASE_URL: &str = "http://localhost:5000/api";

// API CONFIGURATION
/// Configuration for the load-control API client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    pub fn status_url(&self) -> String {
        format!("{}/status", self.base_url)
    }

    pub fn history_url(&self) -> String {
        format!("{}/history", self.base_url)
    }

    pub fn toggle_url(&self) -> String {
        format!("{}/toggle", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with a custom base URL
/// (primarily for testing).
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
}

impl ApiConfigBuilder {
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the `ApiConfig`. Falls back to the `BLITZ_API_BASE`
    /// compile-time environment variable, then the localhost default.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self
                .base_url
                .unwrap_or_else(|| option_env!("BLITZ_API_BASE").unwrap_or(BASE_URL).to_string()),
        }
    }
}

// API CLIENT
/// HTTP client for the load-control API. No retry, backoff, or timeout
/// policy; failures surface to the caller as `AppError`.
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetches and validates the current status snapshot.
    pub async fn fetch_status(&self) -> Result<Snapshot, AppError> {
        let raw: StatusResponse = self.get_json(&self.config.status_url()).await?;
        Snapshot::try_from(raw)
    }

    /// Fetches the cost history.
    pub async fn fetch_history(&self) -> Result<History, AppError> {
        let entries: Vec<HistoryEntry> = self.get_json(&self.config.history_url()).await?;
        Ok(History::new(entries))
    }

    /// Requests a state change for the named load. The response body is
    /// discarded; only the HTTP status matters.
    pub async fn toggle_load(&self, load: &str, status: LoadState) -> Result<(), AppError> {
        let body = ToggleRequest {
            load: load.to_string(),
            status,
        };

        let response = self
            .http
            .post(self.config.toggle_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let http_status = response.status();
        if !http_status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.error_for_status(http_status, &body));
        }

        Ok(())
    }

    /// Executes a single GET and deserializes the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.error_for_status(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse response: {e}")))
    }

    /// Converts a reqwest error into an appropriate AppError.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::ApiError(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::ApiError(format!("Request error: {error}"))
        } else {
            AppError::ApiError(format!("Network error: {error}"))
        }
    }

    /// Creates an error based on HTTP status code.
    fn error_for_status(&self, status: reqwest::StatusCode, body: &str) -> AppError {
        match status.as_u16() {
            404 => AppError::NotFound(format!("Resource not found: {body}")),
            400..=499 => AppError::ApiError(format!("Client error {status}: {body}")),
            500..=599 => AppError::ApiError(format!("Server error {status}: {body}")),
            _ => AppError::ApiError(format!("Unexpected status {status}: {body}")),
        }
    }
}

// CONVENIENCE FUNCTIONS
/// Fetches the status snapshot using default configuration.
pub async fn fetch_status() -> Result<Snapshot, AppError> {
    ApiClient::new()?.fetch_status().await
}

/// Fetches the cost history using default configuration.
pub async fn fetch_history() -> Result<History, AppError> {
    ApiClient::new()?.fetch_history().await
}

/// Toggles a load using default configuration.
pub async fn toggle_load(load: &str, status: LoadState) -> Result<(), AppError> {
    ApiClient::new()?.toggle_load(load, status).await
}
