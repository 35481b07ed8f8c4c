use std::{sync::OnceLock, time::Duration};

use anyhow::Context;
use serde::{Serialize, de::DeserializeOwned};

const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

static SHARED_BACKEND: OnceLock<ResearchBackend> = OnceLock::new();

/// HTTP client for the external research backend.
#[derive(Debug, Clone)]
pub struct ResearchBackend {
    client: reqwest::Client,
    base_url: String,
}

impl ResearchBackend {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build research backend client")?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    /// Reads `RESEARCH_BACKEND_URL` and `RESEARCH_BACKEND_TIMEOUT_SECS`.
    pub fn from_env() -> anyhow::Result<Self> {
        let base_url = std::env::var("RESEARCH_BACKEND_URL").unwrap_or(DEFAULT_BACKEND_URL.to_string());
        let timeout_secs = match std::env::var("RESEARCH_BACKEND_TIMEOUT_SECS") {
            Ok(value) => value.parse::<u64>().context("RESEARCH_BACKEND_TIMEOUT_SECS is not a number")?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };
        Self::new(base_url, Duration::from_secs(timeout_secs))
    }

    /// Process-wide client, configured from the environment on first use.
    pub fn shared() -> anyhow::Result<&'static ResearchBackend> {
        if let Some(backend) = SHARED_BACKEND.get() {
            return Ok(backend);
        }
        let backend = Self::from_env()?;
        tracing::info!("research backend at {}", backend.base_url);
        Ok(SHARED_BACKEND.get_or_init(|| backend))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> anyhow::Result<T> {
        let request = self.client.post(self.url(path)).json(body);
        self.send(path, request).await
    }

    /// POST without a request body.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> anyhow::Result<T> {
        let request = self.client.post(self.url(path));
        self.send(path, request).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send<T: DeserializeOwned>(&self, path: &str, request: reqwest::RequestBuilder) -> anyhow::Result<T> {
        let t0 = std::time::Instant::now();
        let response = request.send().await.with_context(|| format!("Request to {} failed", path))?;
        let status = response.status();
        let response_txt = response.text().await.with_context(|| format!("Reading response of {} failed", path))?;
        if status.is_client_error() || status.is_server_error() {
            anyhow::bail!("Error from {}: {}: {}", path, status, response_txt);
        }
        let dt_ms = t0.elapsed().as_millis();
        tracing::info!("research backend {}: {} bytes in {}ms", path, response_txt.len(), dt_ms);
        let parsed = serde_json::from_str::<T>(&response_txt).with_context(|| format!("Unexpected response shape from {}", path))?;
        Ok(parsed)
    }
}

/// True when the error comes from not reaching the backend at all
/// (connection refused, timeout), as opposed to a bad answer.
pub fn is_unreachable(error: &anyhow::Error) -> bool {
    error.chain().any(|cause| {
        cause
            .downcast_ref::<reqwest::Error>()
            .map(|e| e.is_connect() || e.is_timeout())
            .unwrap_or(false)
    })
}
