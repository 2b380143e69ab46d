//! Prompt-Execution Unit
//!
//! The boundary between the dispatcher and a hosted model. An executor takes
//! one normalized request, renders its prompt, submits it, and returns output
//! that already conforms to the operation's schema, or an error. It never
//! retries and imposes no timeout of its own.

use crate::error::ExecutionError;
use crate::operation::OperationKind;
use crate::prompt::output::{EtsyListing, MarketTrends, ShopifyListing};
use crate::prompt::{self, output};
use crate::provider::{CompletionOptions, ModelProviderClient};
use crate::request::{
    BrandStoryInput, CaptionsInput, EmailReplyInput, ListingInput, MarketTrendsInput,
    ProductInput, TranslationInput,
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, instrument};

/// A normalized request, tagged with its operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationInput {
    Description(ProductInput),
    Captions(CaptionsInput),
    Image(ProductInput),
    BrandStory(BrandStoryInput),
    MarketTrends(MarketTrendsInput),
    Translation(TranslationInput),
    EtsyListing(ListingInput),
    ShopifyListing(ListingInput),
    EmailReply(EmailReplyInput),
}

impl GenerationInput {
    pub fn operation(&self) -> OperationKind {
        match self {
            GenerationInput::Description(_) => OperationKind::Description,
            GenerationInput::Captions(_) => OperationKind::Captions,
            GenerationInput::Image(_) => OperationKind::Image,
            GenerationInput::BrandStory(_) => OperationKind::BrandStory,
            GenerationInput::MarketTrends(_) => OperationKind::MarketTrends,
            GenerationInput::Translation(_) => OperationKind::Translation,
            GenerationInput::EtsyListing(_) => OperationKind::EtsyListing,
            GenerationInput::ShopifyListing(_) => OperationKind::ShopifyListing,
            GenerationInput::EmailReply(_) => OperationKind::EmailReply,
        }
    }
}

/// Schema-conformant output, one variant per operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutput {
    Description(String),
    Captions(Vec<String>),
    /// Data URI; empty when the model produced no image.
    Image(String),
    BrandStory(String),
    MarketTrends(MarketTrends),
    Translation(String),
    EtsyListing(EtsyListing),
    ShopifyListing(ShopifyListing),
    EmailReply(String),
}

impl GenerationOutput {
    pub fn operation(&self) -> OperationKind {
        match self {
            GenerationOutput::Description(_) => OperationKind::Description,
            GenerationOutput::Captions(_) => OperationKind::Captions,
            GenerationOutput::Image(_) => OperationKind::Image,
            GenerationOutput::BrandStory(_) => OperationKind::BrandStory,
            GenerationOutput::MarketTrends(_) => OperationKind::MarketTrends,
            GenerationOutput::Translation(_) => OperationKind::Translation,
            GenerationOutput::EtsyListing(_) => OperationKind::EtsyListing,
            GenerationOutput::ShopifyListing(_) => OperationKind::ShopifyListing,
            GenerationOutput::EmailReply(_) => OperationKind::EmailReply,
        }
    }
}

/// Executes one prompt per call.
#[async_trait]
pub trait PromptExecutor: Send + Sync {
    async fn execute(&self, input: GenerationInput) -> Result<GenerationOutput, ExecutionError>;
}

#[async_trait]
impl<T: PromptExecutor + ?Sized> PromptExecutor for Arc<T> {
    async fn execute(&self, input: GenerationInput) -> Result<GenerationOutput, ExecutionError> {
        (**self).execute(input).await
    }
}

/// Executor backed by a model provider client.
pub struct ModelPromptExecutor {
    client: Arc<dyn ModelProviderClient>,
    default_options: CompletionOptions,
}

impl ModelPromptExecutor {
    pub fn new(client: Arc<dyn ModelProviderClient>) -> Self {
        Self {
            client,
            default_options: CompletionOptions::default(),
        }
    }

    /// Sampling defaults applied beneath each operation's own options.
    pub fn with_default_options(mut self, options: CompletionOptions) -> Self {
        self.default_options = options;
        self
    }

    pub fn provider_name(&self) -> &str {
        self.client.provider_name()
    }
}

#[async_trait]
impl PromptExecutor for ModelPromptExecutor {
    #[instrument(skip_all, fields(operation = %input.operation(), provider = self.client.provider_name()))]
    async fn execute(&self, input: GenerationInput) -> Result<GenerationOutput, ExecutionError> {
        let operation = input.operation();
        let rendered = prompt::render(&input);

        if operation == OperationKind::Image {
            let image = self.client.generate_image(&rendered.user).await?;
            debug!(produced = image.is_some(), "Image generation finished");
            return Ok(GenerationOutput::Image(
                image.map(|i| i.to_data_uri()).unwrap_or_default(),
            ));
        }

        let options = rendered.options.clone().or(&self.default_options);
        let response = self.client.complete(rendered.messages(), options).await?;
        debug!(
            model = %response.model,
            total_tokens = response.usage.total_tokens,
            finish_reason = ?response.finish_reason,
            "Completion received"
        );

        output::parse(operation, &response.content)
    }
}
