//! Retrieval of pipeline configs from the Spinnaker API (Gate).

use crate::core::error::AppError;
use crate::core::types::ErrorCategory;
use reqwest::header::COOKIE;
use reqwest::StatusCode;
use serde_json::Value;

pub const API_HOST_ENV: &str = "API_HOST";
pub const API_SESSION_ENV: &str = "API_SESSION";
pub const SESSION_COOKIE: &str = "SESSION";

/// Where to reach the API and how to authenticate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    pub host: String,
    pub session: Option<String>,
}

impl ApiSettings {
    pub fn new(host: impl Into<String>, session: Option<String>) -> Self {
        let mut host = host.into();
        if host.ends_with('/') {
            host.pop();
        }
        Self { host, session }
    }

    /// Read `API_HOST` (required) and `API_SESSION` (optional).
    pub fn from_env() -> Result<Self, AppError> {
        let host = std::env::var(API_HOST_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| {
                AppError::new(
                    ErrorCategory::ConfigurationError,
                    "API_HOST must be set to your Spinnaker API",
                )
                .with_key("env", API_HOST_ENV)
            })?;
        let session = std::env::var(API_SESSION_ENV).ok();
        Ok(Self::new(host, session))
    }

    pub fn endpoint(&self, app: &str, pipeline_config_id: &str) -> String {
        format!(
            "{}/applications/{}/pipelineConfigs/{}",
            self.host, app, pipeline_config_id
        )
    }

    /// Value of the `Cookie` header, when a session is configured.
    pub fn cookie(&self) -> Option<String> {
        self.session
            .as_ref()
            .map(|session| format!("{}={}", SESSION_COOKIE, session))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("failed getting pipeline config: {0}")]
    Status(u16),
    #[error("Deserialization error: {0}")]
    DeserializationError(String),
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        let category = match err {
            ClientError::NetworkError(_) | ClientError::Status(_) => ErrorCategory::FetchFailure,
            ClientError::DeserializationError(_) => ErrorCategory::InvalidDocumentShape,
        };
        let mut error = AppError::new(category, err.to_string());
        if let ClientError::Status(status) = &err {
            error.add_context("status", &status.to_string());
        }
        error.source = Some(anyhow::anyhow!(err));
        error
    }
}

/// HTTP client for `GET /applications/{app}/pipelineConfigs/{id}`.
pub struct PipelineConfigClient {
    settings: ApiSettings,
    client: reqwest::Client,
}

impl PipelineConfigClient {
    pub fn new(settings: ApiSettings) -> Self {
        Self {
            settings,
            client: reqwest::Client::new(),
        }
    }

    pub fn settings(&self) -> &ApiSettings {
        &self.settings
    }

    /// Fetch one pipeline config. Any status other than 200 is a failure; nothing is retried.
    pub async fn fetch(&self, app: &str, pipeline_config_id: &str) -> Result<Value, ClientError> {
        let endpoint = self.settings.endpoint(app, pipeline_config_id);
        let cookie = self.settings.cookie();
        tracing::debug!(endpoint = %endpoint, "requesting pipeline config");
        tracing::debug!(cookie = ?cookie, "request cookie");

        let mut request = self.client.get(&endpoint);
        if let Some(cookie) = cookie {
            request = request.header(COOKIE, cookie);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ClientError::NetworkError(e.to_string()))?;

        if response.status() != StatusCode::OK {
            return Err(ClientError::Status(response.status().as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ClientError::NetworkError(e.to_string()))?;
        tracing::debug!(response = %body, "raw pipeline config response");

        serde_json::from_str(&body).map_err(|e| ClientError::DeserializationError(e.to_string()))
    }
}
