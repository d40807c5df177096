//! Bedrock `InvokeModel` client for Titan text generation.
//!
//! Builds the Titan request payload, invokes the model with bounded
//! timeouts, and extracts `results[0].outputText` from the response.

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_config::retry::RetryConfig;
use aws_config::timeout::TimeoutConfig;
use aws_sdk_bedrockruntime::{Client, error::ProvideErrorMetadata, primitives::Blob};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, info};

use super::TextGenerator;
use crate::errors::BlogError;
use crate::prompt;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const READ_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_ATTEMPTS: u32 = 3;

#[derive(Debug, Deserialize)]
struct TitanResponse {
    #[serde(default)]
    results: Vec<TitanResult>,
}

#[derive(Debug, Deserialize)]
struct TitanResult {
    #[serde(rename = "outputText", default)]
    output_text: String,
}

/// Extracts the first result's output text from a raw Titan response body.
pub fn parse_titan_response(raw: &str) -> Result<String, BlogError> {
    let response: TitanResponse = serde_json::from_str(raw)
        .map_err(|e| BlogError::BedrockError(format!("malformed model response: {e}")))?;

    response
        .results
        .into_iter()
        .next()
        .map(|result| result.output_text)
        .ok_or_else(|| BlogError::BedrockError("model response contained no results".to_string()))
}

/// Bedrock-backed text generator.
pub struct BedrockGenerator {
    client: Client,
    model_id: String,
}

impl BedrockGenerator {
    /// Builds a client from the shared AWS config with the generation
    /// timeouts and retry budget applied on top.
    #[must_use]
    pub fn new(shared_config: &SdkConfig, model_id: String) -> Self {
        let config = aws_sdk_bedrockruntime::config::Builder::from(shared_config)
            .timeout_config(
                TimeoutConfig::builder()
                    .connect_timeout(CONNECT_TIMEOUT)
                    .read_timeout(READ_TIMEOUT)
                    .build(),
            )
            .retry_config(RetryConfig::standard().with_max_attempts(MAX_ATTEMPTS))
            .build();

        Self {
            client: Client::from_conf(config),
            model_id,
        }
    }
}

#[async_trait]
impl TextGenerator for BedrockGenerator {
    async fn generate(&self, topic: &str) -> Result<String, BlogError> {
        let payload = json!({
            "inputText": prompt::build_prompt(topic),
            "textGenerationConfig": {
                "maxTokenCount": prompt::MAX_TOKEN_COUNT,
                "temperature": prompt::TEMPERATURE,
                "topP": prompt::TOP_P
            }
        });
        let request_json = serde_json::to_string(&payload)
            .map_err(|e| BlogError::BedrockError(e.to_string()))?;

        info!(model_id = %self.model_id, "Invoking model");
        debug!("Text generation request payload: {request_json}");

        let response = self
            .client
            .invoke_model()
            .model_id(&self.model_id)
            .content_type("application/json")
            .accept("application/json")
            .body(Blob::new(request_json.into_bytes()))
            .send()
            .await
            .map_err(|e| {
                if let Some(service_error) = e.as_service_error() {
                    BlogError::BedrockError(format!(
                        "{} - {}",
                        service_error.code().unwrap_or("unknown"),
                        service_error.message().unwrap_or("no message")
                    ))
                } else {
                    BlogError::BedrockError(e.to_string())
                }
            })?;

        info!("Response received from Bedrock");
        let raw = String::from_utf8(response.body.into_inner())
            .map_err(|e| BlogError::BedrockError(e.to_string()))?;

        parse_titan_response(&raw)
    }
}
