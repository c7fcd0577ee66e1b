// Gemini API client
// Author: kelexine (https://github.com/kelexine)

use crate::config::GeminiConfig;
use crate::error::{CompareError, Result};
use crate::models::gemini::{GenerateContentRequest, GenerateContentResponse};
use reqwest::Client;
use tracing::{debug, error};

/// Client for the Google Gemini generative language API.
///
/// Holds the API credential and the configured model; authentication is via
/// the `x-goog-api-key` header. The comparison flow issues exactly one
/// `generateContent` call per run, so the client is deliberately plain: no
/// retry, no client-side timeout beyond reqwest defaults.
pub struct GeminiClient {
    http_client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Create a new Gemini client from explicit configuration.
    ///
    /// The API key is an explicit config value rather than process-global
    /// state, so tests can construct the client with fake credentials.
    pub fn new(config: &GeminiConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(CompareError::Config(
                "Gemini API key is not configured. Set GEMCOMPARE_GEMINI_API_KEY or add \
                 gemini.api_key to the config file."
                    .to_string(),
            ));
        }

        let http_client = Client::builder()
            .use_rustls_tls()
            .build()
            .map_err(|e| CompareError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            config: config.clone(),
        })
    }

    /// Get the configured model name
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Call Gemini `generateContent` (blocking, single attempt).
    pub async fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let url = format!(
            "{}/{}:generateContent",
            self.config.api_base_url.trim_end_matches('/'),
            self.config.model
        );
        debug!("Calling generateContent API for model: {}", self.config.model);

        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(
                "Gemini API error: HTTP {} - Response body: {}",
                status, error_text
            );
            let message = Self::extract_error_message(&error_text).unwrap_or(error_text);
            return Err(CompareError::GeminiApi(format!(
                "HTTP {}: {}",
                status, message
            )));
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| CompareError::GeminiApi(format!("Failed to read response body: {}", e)))?;

        let gemini_response: GenerateContentResponse = serde_json::from_str(&response_text)
            .map_err(|e| {
                error!("Failed to parse Gemini response: {}", e);
                CompareError::GeminiApi(format!("Response parsing error: {}", e))
            })?;

        debug!("Successfully received Gemini response");
        Ok(gemini_response)
    }

    /// Extract error message from API response JSON
    fn extract_error_message(response_text: &str) -> Option<String> {
        #[derive(serde::Deserialize)]
        struct ErrorResponse {
            error: Option<ErrorDetail>,
        }

        #[derive(serde::Deserialize)]
        struct ErrorDetail {
            message: Option<String>,
            status: Option<String>,
        }

        if let Ok(error_resp) = serde_json::from_str::<ErrorResponse>(response_text) {
            if let Some(error) = error_resp.error {
                return error.message.or(error.status);
            }
        }
        None
    }
}
