use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::config::BackendConfig;
use crate::errors::AppError;
use crate::models::{ChatRequest, GenerateRequest};

/// The HTTP seam between the client core and the opaque idea backend.
///
/// Implementations classify failures into the [`AppError`] taxonomy:
/// unreachable backend → `Transport`, non-success status → `BackendStatus`,
/// success status with an undecodable body → `MalformedResponse`. Payload
/// *shape* validation stays with the callers, which own the per-endpoint
/// contracts.
#[async_trait]
pub trait IdeaBackend: Send + Sync {
    async fn generate_ideas(&self, request: &GenerateRequest) -> Result<Value, AppError>;

    async fn ask(&self, request: &ChatRequest) -> Result<Value, AppError>;
}

/// [`IdeaBackend`] over reqwest. The client is built once with the configured
/// timeout; there is no retry layer, a request in flight always runs to
/// completion.
pub struct HttpBackend {
    config: BackendConfig,
    client: Client,
}

impl HttpBackend {
    pub fn new(config: BackendConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|error| {
                AppError::Configuration(format!("failed to build HTTP client: {error}"))
            })?;
        Ok(Self { config, client })
    }

    pub fn from_env() -> Result<Self, AppError> {
        Self::new(BackendConfig::from_env()?)
    }

    async fn post_json<B: Serialize + Sync>(
        &self,
        url: String,
        body: &B,
    ) -> Result<Value, AppError> {
        debug!("POST {url}");
        let response = self
            .client
            .post(url.as_str())
            .json(body)
            .send()
            .await
            .map_err(|error| AppError::transport(error.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::BackendStatus { status: status.as_u16() });
        }

        let text = response
            .text()
            .await
            .map_err(|error| AppError::transport(format!("response read failed: {error}")))?;

        serde_json::from_str(&text)
            .map_err(|error| AppError::malformed(format!("invalid JSON body: {error}")))
    }
}

#[async_trait]
impl IdeaBackend for HttpBackend {
    async fn generate_ideas(&self, request: &GenerateRequest) -> Result<Value, AppError> {
        let url = self.config.endpoint(&self.config.generate_path);
        self.post_json(url, request).await
    }

    async fn ask(&self, request: &ChatRequest) -> Result<Value, AppError> {
        let url = self.config.endpoint(&self.config.chat_path);
        self.post_json(url, request).await
    }
}
