//! Error types for Brandkit content generation.

use crate::operation::OperationKind;
use thiserror::Error;

/// A request failed one of its declared field constraints.
///
/// Carries only the first violated constraint's message; it is shown to the
/// caller verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The prompt-execution unit could not produce a conforming payload.
#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("Provider error: {0}")]
    Provider(#[from] ApiError),

    #[error("Output for {operation} does not match its schema: {reason}")]
    Schema {
        operation: OperationKind,
        reason: String,
    },
}

impl ExecutionError {
    pub fn schema(operation: OperationKind, reason: impl Into<String>) -> Self {
        ExecutionError::Schema {
            operation,
            reason: reason.into(),
        }
    }
}

/// Provider and configuration errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Provider error: {0}")]
    ProviderError(String),

    #[error("Provider not configured: {0}")]
    ProviderNotConfigured(String),

    #[error("Provider request failed: {0}")]
    ProviderRequestFailed(String),

    #[error("Provider authentication failed: {0}")]
    ProviderAuthFailed(String),

    #[error("Provider rate limit exceeded: {0}")]
    ProviderRateLimit(String),

    #[error("Provider model not found: {0}")]
    ProviderModelNotFound(String),

    #[error("Provider does not support {capability}: {provider}")]
    ProviderUnsupported {
        provider: String,
        capability: &'static str,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
