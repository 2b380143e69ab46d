//! CLI route: run context and the single route table from commands to
//! dispatcher operations.

use crate::cli::output::{
    format_captions, format_etsy_listing, format_market_trends, format_shopify_listing, render,
    render_all, CommandOutput,
};
use crate::cli::parse::Commands;
use crate::config::{BrandkitConfig, ConfigLoader};
use crate::dispatch::{Dispatcher, GenerationResult};
use crate::error::ApiError;
use crate::executor::{ModelPromptExecutor, PromptExecutor};
use crate::provider::{GeneratedImage, ProviderFactory};
use crate::request::{
    BrandStoryRequest, CaptionsRequest, EmailReplyRequest, ListingRequest, MarketTrendsRequest,
    ProductRequest, TranslationRequest,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// Runtime context for CLI execution: loaded config and the dispatcher.
pub struct RunContext {
    config: BrandkitConfig,
    dispatcher: Dispatcher,
    json: bool,
}

impl RunContext {
    /// Load configuration and build the provider-backed dispatcher.
    pub fn new(
        workspace_root: PathBuf,
        config_path: Option<PathBuf>,
        json: bool,
    ) -> Result<Self, ApiError> {
        let config = ConfigLoader::load(&workspace_root, config_path.as_deref())?;
        config.ensure_valid()?;

        let provider = config.provider.to_model_provider()?;
        let client: Arc<dyn crate::provider::ModelProviderClient> =
            Arc::from(ProviderFactory::create_client(&provider)?);
        info!(
            provider = client.provider_name(),
            model = client.model_name(),
            "Provider client ready"
        );

        let executor = ModelPromptExecutor::new(client)
            .with_default_options(config.provider.default_options.clone());
        Ok(Self::with_executor(config, Arc::new(executor), json))
    }

    /// Build a context around an existing executor.
    pub fn with_executor(
        config: BrandkitConfig,
        executor: Arc<dyn PromptExecutor>,
        json: bool,
    ) -> Self {
        Self {
            config,
            dispatcher: Dispatcher::new(executor),
            json,
        }
    }

    pub fn config(&self) -> &BrandkitConfig {
        &self.config
    }

    /// Execute a CLI command on a fresh runtime.
    pub fn execute(&self, command: &Commands) -> Result<CommandOutput, ApiError> {
        let rt = tokio::runtime::Runtime::new()
            .map_err(|e| ApiError::ProviderError(format!("Failed to create runtime: {}", e)))?;
        rt.block_on(self.execute_async(command))
    }

    /// Route a command to its dispatcher operation and render the envelope.
    pub async fn execute_async(&self, command: &Commands) -> Result<CommandOutput, ApiError> {
        let json = self.json;
        let dispatcher = &self.dispatcher;
        debug!(?command, "Routing command");

        match command {
            Commands::Description { product_name } => {
                let result = dispatcher
                    .generate_description(&ProductRequest::new(product_name.as_str()))
                    .await;
                render(&result, json, |d| d.clone())
            }
            Commands::Captions {
                product_name,
                tone,
                platform,
            } => {
                let request = CaptionsRequest {
                    product_name: product_name.clone(),
                    tone: tone.clone(),
                    platform: platform.clone(),
                };
                let result = dispatcher.generate_captions(&request).await;
                render(&result, json, |c| format_captions(c))
            }
            Commands::Image {
                product_name,
                output,
            } => {
                let result = dispatcher
                    .generate_image(&ProductRequest::new(product_name.as_str()))
                    .await;
                let result = write_image(result, output.as_deref())?;
                render(&result, json, |text| text.clone())
            }
            Commands::BrandStory {
                brand_name,
                business_type,
            } => {
                let request = BrandStoryRequest {
                    brand_name: brand_name.clone(),
                    business_type: business_type.clone(),
                };
                let result = dispatcher.generate_brand_story(&request).await;
                render(&result, json, |s| s.clone())
            }
            Commands::Trends {
                product_or_industry,
            } => {
                let request = MarketTrendsRequest {
                    product_or_industry: product_or_industry.clone(),
                };
                let result = dispatcher.analyze_market_trends(&request).await;
                render(&result, json, format_market_trends)
            }
            Commands::Translate {
                target_language,
                content,
            } => {
                let request = TranslationRequest {
                    content: content.clone(),
                    target_language: target_language.clone(),
                };
                let result = dispatcher.translate(&request).await;
                render(&result, json, |t| t.clone())
            }
            Commands::Etsy {
                product_name,
                description,
            } => {
                let request = ListingRequest {
                    product_name: product_name.clone(),
                    product_description: description.clone(),
                };
                let result = dispatcher.generate_etsy_listing(&request).await;
                render(&result, json, format_etsy_listing)
            }
            Commands::Shopify {
                product_name,
                description,
            } => {
                let request = ListingRequest {
                    product_name: product_name.clone(),
                    product_description: description.clone(),
                };
                let result = dispatcher.generate_shopify_listing(&request).await;
                render(&result, json, format_shopify_listing)
            }
            Commands::Email { topic, tone } => {
                let request = EmailReplyRequest {
                    topic: topic.clone(),
                    tone: tone.clone(),
                };
                let result = dispatcher.generate_email_reply(&request).await;
                render(&result, json, |e| e.clone())
            }
            Commands::All {
                product_name,
                tone,
                platform,
                image_output,
            } => {
                let request = CaptionsRequest {
                    product_name: product_name.clone(),
                    tone: tone.clone(),
                    platform: platform.clone(),
                };
                let mut result = dispatcher.generate_all(&request).await;
                result.image = write_image(result.image, image_output.as_deref())?;
                render_all(&result, json, |text| text.clone())
            }
        }
    }
}

/// With an output path, decode a successful image to disk and replace the
/// data URI with a short confirmation.
fn write_image(
    result: GenerationResult<String>,
    output: Option<&Path>,
) -> Result<GenerationResult<String>, ApiError> {
    let Some(path) = output else {
        return Ok(result);
    };
    let uri = match result {
        GenerationResult::Data(uri) => uri,
        error => return Ok(error),
    };
    let image = GeneratedImage::from_data_uri(&uri)?;
    std::fs::write(path, &image.bytes).map_err(|e| {
        ApiError::ConfigError(format!("Failed to write image to {}: {}", path.display(), e))
    })?;
    info!(path = %path.display(), bytes = image.bytes.len(), "Image written");
    Ok(GenerationResult::Data(format!(
        "Image written to {} ({}, {} bytes)",
        path.display(),
        image.mime_type,
        image.bytes.len()
    )))
}
