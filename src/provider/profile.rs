//! Provider profile: the configured provider, its models, and credentials.

use crate::error::ApiError;
use crate::provider::{CompletionOptions, ModelProvider};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Provider type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    OpenAI,
    Gemini,
    Ollama,
}

impl ProviderType {
    pub fn default_model(self) -> &'static str {
        match self {
            ProviderType::OpenAI => "gpt-4o-mini",
            ProviderType::Gemini => "gemini-2.5-flash",
            ProviderType::Ollama => "llama3.1",
        }
    }

    /// Environment variable consulted for the API key when none is configured.
    pub fn default_api_key_env(self) -> Option<&'static str> {
        match self {
            ProviderType::OpenAI => Some("OPENAI_API_KEY"),
            ProviderType::Gemini => Some("GEMINI_API_KEY"),
            ProviderType::Ollama => None,
        }
    }
}

impl fmt::Display for ProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ProviderType::OpenAI => "openai",
            ProviderType::Gemini => "gemini",
            ProviderType::Ollama => "ollama",
        })
    }
}

/// Provider configuration as written in config files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub provider_type: ProviderType,

    /// Text model; the provider default is used when unset
    #[serde(default)]
    pub model: Option<String>,

    /// Image model; the provider default is used when unset
    #[serde(default)]
    pub image_model: Option<String>,

    /// Inline API key. Prefer `api_key_env`.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Name of the environment variable holding the API key
    #[serde(default)]
    pub api_key_env: Option<String>,

    /// Base URL override
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Sampling defaults applied under each operation's own options
    #[serde(default)]
    pub default_options: CompletionOptions,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            provider_type: ProviderType::Gemini,
            model: None,
            image_model: None,
            api_key: None,
            api_key_env: None,
            endpoint: None,
            default_options: CompletionOptions::default(),
        }
    }
}

impl ProviderConfig {
    /// Configured text model, or the provider default.
    pub fn model(&self) -> &str {
        self.model
            .as_deref()
            .unwrap_or_else(|| self.provider_type.default_model())
    }

    /// Validate provider configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.model.as_deref().is_some_and(|m| m.trim().is_empty()) {
            return Err("Model name cannot be empty".to_string());
        }
        if self.image_model.as_deref().is_some_and(|m| m.trim().is_empty()) {
            return Err("Image model name cannot be empty".to_string());
        }

        if let Some(endpoint) = &self.endpoint {
            if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
                return Err(format!(
                    "Endpoint must start with http:// or https://: {}",
                    endpoint
                ));
            }
        }

        if let Some(temperature) = self.default_options.temperature {
            if !(0.0..=2.0).contains(&temperature) {
                return Err(format!(
                    "Temperature must be between 0.0 and 2.0, got {}",
                    temperature
                ));
            }
        }

        Ok(())
    }

    /// Resolve the API key: inline value first, then the configured or default
    /// environment variable.
    pub fn resolve_api_key(&self) -> Option<String> {
        if let Some(key) = self.api_key.as_ref().filter(|k| !k.is_empty()) {
            return Some(key.clone());
        }
        let var = self
            .api_key_env
            .as_deref()
            .or_else(|| self.provider_type.default_api_key_env())?;
        std::env::var(var).ok().filter(|k| !k.is_empty())
    }

    /// Build the runtime provider description, resolving credentials.
    pub fn to_model_provider(&self) -> Result<ModelProvider, ApiError> {
        self.validate().map_err(ApiError::ConfigError)?;

        let api_key = || {
            self.resolve_api_key().ok_or_else(|| {
                let var = self
                    .api_key_env
                    .as_deref()
                    .or_else(|| self.provider_type.default_api_key_env())
                    .unwrap_or("api_key");
                ApiError::ProviderNotConfigured(format!(
                    "No API key for {} provider (set {} or provider.api_key)",
                    self.provider_type, var
                ))
            })
        };

        Ok(match self.provider_type {
            ProviderType::OpenAI => ModelProvider::OpenAI {
                model: self.model().to_string(),
                image_model: self.image_model.clone(),
                api_key: api_key()?,
                base_url: self.endpoint.clone(),
            },
            ProviderType::Gemini => ModelProvider::Gemini {
                model: self.model().to_string(),
                image_model: self.image_model.clone(),
                api_key: api_key()?,
                base_url: self.endpoint.clone(),
            },
            ProviderType::Ollama => ModelProvider::Ollama {
                model: self.model().to_string(),
                base_url: self.endpoint.clone(),
            },
        })
    }
}
