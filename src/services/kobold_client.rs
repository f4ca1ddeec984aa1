use std::time::Duration;

use reqwest::Url;

use crate::{
    constants::generation::KOBOLD_GENERATE_PATH,
    errors::{AppError, AppResult},
    models::dto::kobold_dto::KoboldGenerateRequest,
};

/// A KoboldCPP generation endpoint, always ending in `api/v1/generate`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KoboldEndpoint(Url);

impl KoboldEndpoint {
    /// Validate a base URL and point it at the generation route.
    pub fn parse(base_url: &str) -> AppResult<Self> {
        let trimmed = base_url.trim();
        if trimmed.is_empty() {
            return Err(AppError::Configuration(
                "KoboldCPP API URL must not be empty".to_string(),
            ));
        }

        let base = Url::parse(trimmed)
            .map_err(|e| AppError::Configuration(format!("Invalid URL '{}': {}", trimmed, e)))?;

        if !matches!(base.scheme(), "http" | "https") || base.host_str().is_none() {
            return Err(AppError::Configuration(format!(
                "URL '{}' must be an absolute http(s) URL",
                trimmed
            )));
        }
        if base.query().is_some() || base.fragment().is_some() {
            return Err(AppError::Configuration(format!(
                "URL '{}' must not carry a query or fragment",
                trimmed
            )));
        }

        let without_slash = trimmed.trim_end_matches('/');
        let normalized = if without_slash.ends_with(&format!("/{}", KOBOLD_GENERATE_PATH)) {
            without_slash.to_string()
        } else {
            format!("{}/{}", without_slash, KOBOLD_GENERATE_PATH)
        };

        let url = Url::parse(&normalized)
            .map_err(|e| AppError::Configuration(format!("Invalid URL '{}': {}", normalized, e)))?;

        Ok(Self(url))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn url(&self) -> &Url {
        &self.0
    }
}

impl std::fmt::Display for KoboldEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// HTTP client bound to one endpoint. Cheap to clone; the underlying
/// connection pool is shared.
#[derive(Clone, Debug)]
pub struct KoboldClient {
    http: reqwest::Client,
    endpoint: KoboldEndpoint,
}

impl KoboldClient {
    pub fn new(http: reqwest::Client, endpoint: KoboldEndpoint) -> Self {
        Self { http, endpoint }
    }

    pub fn build_http_client(timeout: Duration) -> AppResult<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to build HTTP client: {}", e)))
    }

    pub fn endpoint(&self) -> &KoboldEndpoint {
        &self.endpoint
    }

    /// Send one prompt and return the raw completion text from
    /// `results[0].text`.
    pub async fn complete(&self, prompt: &str) -> AppResult<String> {
        log::debug!(
            "Dispatching generation request to {} ({} prompt bytes)",
            self.endpoint,
            prompt.len()
        );

        let response = self
            .http
            .post(self.endpoint.url().clone())
            .json(&KoboldGenerateRequest::new(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Transport(format!(
                "Generation endpoint {} responded with status {}",
                self.endpoint, status
            )));
        }

        let bytes = response.bytes().await?;
        let body: serde_json::Value = serde_json::from_slice(&bytes).map_err(|e| {
            AppError::MalformedUpstreamResponse(format!("response body is not JSON: {}", e))
        })?;

        extract_completion_text(&body)
    }
}

fn extract_completion_text(body: &serde_json::Value) -> AppResult<String> {
    body.pointer("/results/0/text")
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .ok_or_else(|| {
            AppError::MalformedUpstreamResponse(
                "expected a string at results[0].text".to_string(),
            )
        })
}
