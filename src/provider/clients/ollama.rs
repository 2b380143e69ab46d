//! Ollama client (local models) over its OpenAI-compatible endpoint.

use super::openai::{ChatCompletionRequest, ChatCompletionResponse};
use crate::error::ApiError;
use crate::provider::{
    build_provider_http_client, check_status, map_http_error, ChatMessage, CompletionOptions,
    CompletionResponse, GeneratedImage, ModelProviderClient,
};
use async_trait::async_trait;
use reqwest::Client;

/// Ollama provider client (local models)
pub struct OllamaClient {
    client: Client,
    model: String,
    base_url: String,
}

impl OllamaClient {
    pub fn new(model: String, base_url: Option<String>) -> Result<Self, ApiError> {
        let base_url = base_url
            .unwrap_or_else(|| "http://localhost:11434".to_string())
            .trim_end_matches('/')
            .to_string();
        let client = build_provider_http_client()?;

        Ok(Self {
            client,
            model,
            base_url,
        })
    }
}

#[async_trait]
impl ModelProviderClient for OllamaClient {
    async fn complete(
        &self,
        messages: Vec<ChatMessage>,
        options: CompletionOptions,
    ) -> Result<CompletionResponse, ApiError> {
        let request = ChatCompletionRequest::new(&self.model, messages, options);

        let url = format!("{}/v1/chat/completions", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(map_http_error)?;
        let response = check_status(response).await?;

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ApiError::ProviderError(format!("Failed to parse response: {}", e)))?;

        completion.into_completion()
    }

    async fn generate_image(&self, _prompt: &str) -> Result<Option<GeneratedImage>, ApiError> {
        Err(ApiError::ProviderUnsupported {
            provider: "ollama".to_string(),
            capability: "image generation",
        })
    }

    fn provider_name(&self) -> &str {
        "ollama"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
