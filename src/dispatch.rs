//! Generation Dispatcher
//!
//! One async operation per content type. Each validates its request, calls the
//! prompt-execution unit at most once, and folds every outcome into a
//! `GenerationResult`. Nothing escapes as an error: validation messages are
//! returned verbatim, execution failures are logged and replaced by the
//! operation's fixed fallback copy.
//!
//! The dispatcher holds no per-request state, so independent operations may
//! run concurrently on clones of the same dispatcher.

use crate::executor::{GenerationInput, GenerationOutput, PromptExecutor};
use crate::operation::{OperationKind, EMPTY_IMAGE_MESSAGE};
use crate::prompt::output::{EtsyListing, MarketTrends, ShopifyListing};
use crate::request::{
    BrandStoryRequest, CaptionsRequest, EmailReplyRequest, GenerationRequest, ListingRequest,
    MarketTrendsRequest, ProductRequest, TranslationRequest,
};
use crate::validation::{validate, Normalize};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Result envelope: exactly one of `{"data": ...}` or `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationResult<T> {
    Data(T),
    Error(String),
}

impl<T> GenerationResult<T> {
    pub fn is_data(&self) -> bool {
        matches!(self, GenerationResult::Data(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            GenerationResult::Data(data) => Some(data),
            GenerationResult::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            GenerationResult::Data(_) => None,
            GenerationResult::Error(message) => Some(message),
        }
    }

    pub fn into_result(self) -> Result<T, String> {
        match self {
            GenerationResult::Data(data) => Ok(data),
            GenerationResult::Error(message) => Err(message),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> GenerationResult<U> {
        match self {
            GenerationResult::Data(data) => GenerationResult::Data(f(data)),
            GenerationResult::Error(message) => GenerationResult::Error(message),
        }
    }
}

/// Envelopes from a concurrent description + captions + image run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateAllResult {
    pub description: GenerationResult<String>,
    pub captions: GenerationResult<Vec<String>>,
    pub image: GenerationResult<String>,
}

/// Build an extractor for one `GenerationOutput` variant.
macro_rules! variant {
    ($variant:ident) => {
        |output: GenerationOutput| match output {
            GenerationOutput::$variant(payload) => Ok(payload),
            other => Err(other),
        }
    };
}

/// Dispatches validated requests to a prompt executor.
#[derive(Clone)]
pub struct Dispatcher {
    executor: Arc<dyn PromptExecutor>,
}

impl Dispatcher {
    pub fn new(executor: Arc<dyn PromptExecutor>) -> Self {
        Self { executor }
    }

    /// Validate, execute once, and wrap the outcome.
    async fn run<R, T>(
        &self,
        operation: OperationKind,
        request: &R,
        wrap: fn(R::Normalized) -> GenerationInput,
        extract: fn(GenerationOutput) -> Result<T, GenerationOutput>,
    ) -> GenerationResult<T>
    where
        R: Normalize,
    {
        let normalized = match validate(request) {
            Ok(normalized) => normalized,
            Err(e) => {
                debug!(operation = %operation, reason = %e, "Request rejected by validation");
                return GenerationResult::Error(e.message().to_string());
            }
        };

        debug!(operation = %operation, "Dispatching to prompt executor");
        match self.executor.execute(wrap(normalized)).await {
            Ok(output) => match extract(output) {
                Ok(payload) => {
                    info!(operation = %operation, "Generation succeeded");
                    GenerationResult::Data(payload)
                }
                Err(other) => {
                    error!(
                        operation = %operation,
                        returned = %other.operation(),
                        "Executor returned output for a different operation"
                    );
                    GenerationResult::Error(operation.failure_message().to_string())
                }
            },
            Err(e) => {
                error!(operation = %operation, error = %e, "Generation failed");
                GenerationResult::Error(operation.failure_message().to_string())
            }
        }
    }

    pub async fn generate_description(&self, request: &ProductRequest) -> GenerationResult<String> {
        self.run(
            OperationKind::Description,
            request,
            GenerationInput::Description,
            variant!(Description),
        )
        .await
    }

    pub async fn generate_captions(
        &self,
        request: &CaptionsRequest,
    ) -> GenerationResult<Vec<String>> {
        self.run(
            OperationKind::Captions,
            request,
            GenerationInput::Captions,
            variant!(Captions),
        )
        .await
    }

    /// An empty data URI counts as failure, with its own message.
    pub async fn generate_image(&self, request: &ProductRequest) -> GenerationResult<String> {
        let result = self
            .run(
                OperationKind::Image,
                request,
                GenerationInput::Image,
                variant!(Image),
            )
            .await;

        match result {
            GenerationResult::Data(uri) if uri.trim().is_empty() => {
                warn!(operation = %OperationKind::Image, "Model returned no image");
                GenerationResult::Error(EMPTY_IMAGE_MESSAGE.to_string())
            }
            other => other,
        }
    }

    pub async fn generate_brand_story(
        &self,
        request: &BrandStoryRequest,
    ) -> GenerationResult<String> {
        self.run(
            OperationKind::BrandStory,
            request,
            GenerationInput::BrandStory,
            variant!(BrandStory),
        )
        .await
    }

    pub async fn analyze_market_trends(
        &self,
        request: &MarketTrendsRequest,
    ) -> GenerationResult<MarketTrends> {
        self.run(
            OperationKind::MarketTrends,
            request,
            GenerationInput::MarketTrends,
            variant!(MarketTrends),
        )
        .await
    }

    pub async fn translate(&self, request: &TranslationRequest) -> GenerationResult<String> {
        self.run(
            OperationKind::Translation,
            request,
            GenerationInput::Translation,
            variant!(Translation),
        )
        .await
    }

    pub async fn generate_etsy_listing(
        &self,
        request: &ListingRequest,
    ) -> GenerationResult<EtsyListing> {
        self.run(
            OperationKind::EtsyListing,
            request,
            GenerationInput::EtsyListing,
            variant!(EtsyListing),
        )
        .await
    }

    pub async fn generate_shopify_listing(
        &self,
        request: &ListingRequest,
    ) -> GenerationResult<ShopifyListing> {
        self.run(
            OperationKind::ShopifyListing,
            request,
            GenerationInput::ShopifyListing,
            variant!(ShopifyListing),
        )
        .await
    }

    pub async fn generate_email_reply(
        &self,
        request: &EmailReplyRequest,
    ) -> GenerationResult<String> {
        self.run(
            OperationKind::EmailReply,
            request,
            GenerationInput::EmailReply,
            variant!(EmailReply),
        )
        .await
    }

    /// Run description, captions and image concurrently for one product.
    /// Each envelope is independent: a bad tone fails only the captions.
    pub async fn generate_all(&self, request: &CaptionsRequest) -> GenerateAllResult {
        let product = ProductRequest::new(request.product_name.as_str());

        let (description, captions, image) = futures::join!(
            self.generate_description(&product),
            self.generate_captions(request),
            self.generate_image(&product),
        );

        GenerateAllResult {
            description,
            captions,
            image,
        }
    }

    /// Dispatch any tagged request, returning the payload as JSON.
    pub async fn dispatch(&self, request: &GenerationRequest) -> GenerationResult<serde_json::Value> {
        let operation = request.operation();
        let result = match request {
            GenerationRequest::Description(r) => to_json(self.generate_description(r).await),
            GenerationRequest::Captions(r) => to_json(self.generate_captions(r).await),
            GenerationRequest::Image(r) => to_json(self.generate_image(r).await),
            GenerationRequest::BrandStory(r) => to_json(self.generate_brand_story(r).await),
            GenerationRequest::MarketTrends(r) => to_json(self.analyze_market_trends(r).await),
            GenerationRequest::Translation(r) => to_json(self.translate(r).await),
            GenerationRequest::EtsyListing(r) => to_json(self.generate_etsy_listing(r).await),
            GenerationRequest::ShopifyListing(r) => {
                to_json(self.generate_shopify_listing(r).await)
            }
            GenerationRequest::EmailReply(r) => to_json(self.generate_email_reply(r).await),
        };

        result.unwrap_or_else(|e| {
            error!(operation = %operation, error = %e, "Failed to encode payload");
            GenerationResult::Error(operation.failure_message().to_string())
        })
    }
}

fn to_json<T: Serialize>(
    result: GenerationResult<T>,
) -> Result<GenerationResult<serde_json::Value>, serde_json::Error> {
    Ok(match result {
        GenerationResult::Data(data) => GenerationResult::Data(serde_json::to_value(data)?),
        GenerationResult::Error(message) => GenerationResult::Error(message),
    })
}
