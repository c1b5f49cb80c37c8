// SPDX-License-Identifier: MPL-2.0
//! Gemini adapter implementing the [`EnhancementService`] port trait.
//!
//! Sends the image and the mode's instruction to the `generateContent`
//! REST endpoint and classifies the answer (see [`wire::extract_image`]).
//!
//! The API key comes from the environment only. It is required when the
//! client is built, so a missing key stops the application at startup
//! instead of at the first enhancement.

pub mod wire;

use crate::app::config::EnhancementConfig;
use crate::application::port::{EnhanceError, EnhancementService};
use crate::domain::enhancement::{EnhancementRequest, ImagePayload};
use crate::error::{Error, Result};
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use wire::{extract_image, GenerateContentRequest, GenerateContentResponse};

/// Primary environment variable holding the API key.
pub const ENV_API_KEY: &str = "GEMINI_API_KEY";

/// Fallback environment variable, checked when [`ENV_API_KEY`] is unset.
pub const ENV_API_KEY_FALLBACK: &str = "API_KEY";

const USER_AGENT: &str = concat!("IcedEnhancer/", env!("CARGO_PKG_VERSION"));

/// Connection settings for the Gemini API.
#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub endpoint: String,
    pub model: String,
    pub timeout: Duration,
}

impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl GeminiConfig {
    /// Builds the config from user settings and the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCredential`] when no API key is set.
    pub fn from_env(settings: &EnhancementConfig) -> Result<Self> {
        Self::from_lookup(settings, |name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCredential`] when no API key is found.
    pub fn from_lookup(
        settings: &EnhancementConfig,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let api_key = [ENV_API_KEY, ENV_API_KEY_FALLBACK]
            .into_iter()
            .filter_map(|name| lookup(name))
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty())
            .ok_or(Error::MissingCredential(ENV_API_KEY))?;

        Ok(Self {
            api_key,
            endpoint: settings.endpoint(),
            model: settings.model(),
            timeout: settings.timeout(),
        })
    }

    /// Full URL of the `generateContent` call for the configured model.
    #[must_use]
    pub fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

/// HTTP client for the Gemini image model.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    config: Arc<GeminiConfig>,
}

impl GeminiClient {
    /// Creates the client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] if the TLS backend cannot be initialised.
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()?;

        tracing::debug!(model = %config.model, endpoint = %config.endpoint, "gemini client ready");

        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    #[must_use]
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }
}

impl EnhancementService for GeminiClient {
    fn enhance(
        &self,
        request: EnhancementRequest,
    ) -> BoxFuture<'static, std::result::Result<ImagePayload, EnhanceError>> {
        let http = self.http.clone();
        let config = Arc::clone(&self.config);

        async move {
            tracing::info!(
                mode = %request.mode,
                mime = request.payload.mime_type(),
                bytes = request.payload.len(),
                "sending enhancement request"
            );

            let result = send(&http, &config, &request).await;
            match &result {
                Ok(image) => tracing::info!(bytes = image.len(), mime = image.mime_type(), "enhanced image received"),
                Err(EnhanceError::ServiceUnavailable(detail)) => {
                    tracing::error!(%detail, "enhancement service call failed");
                }
                Err(err) => tracing::warn!(error = %err, "enhancement returned no image"),
            }
            result
        }
        .boxed()
    }
}

async fn send(
    http: &reqwest::Client,
    config: &GeminiConfig,
    request: &EnhancementRequest,
) -> std::result::Result<ImagePayload, EnhanceError> {
    let body = GenerateContentRequest::from_request(request);

    let response = http
        .post(config.generate_url())
        .header("x-goog-api-key", &config.api_key)
        .json(&body)
        .send()
        .await
        .map_err(|e| EnhanceError::ServiceUnavailable(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let detail = response.text().await.unwrap_or_default();
        return Err(EnhanceError::ServiceUnavailable(format!(
            "HTTP status: {status}: {detail}"
        )));
    }

    let parsed: GenerateContentResponse = response
        .json()
        .await
        .map_err(|e| EnhanceError::ServiceUnavailable(e.to_string()))?;

    extract_image(&parsed)
}
