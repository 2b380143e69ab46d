//! brandkit: validated dispatch for AI marketing-content generation
//!
//! Nine content operations (descriptions, captions, images, brand stories,
//! market trends, translations, Etsy and Shopify listings, emails). Each one
//! validates its request, runs a single prompt against a hosted model, and
//! answers with a `{data}` / `{error}` envelope.

pub mod cli;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod executor;
pub mod logging;
pub mod operation;
pub mod prompt;
pub mod provider;
pub mod request;
pub mod validation;

pub use dispatch::{Dispatcher, GenerateAllResult, GenerationResult};
pub use error::{ApiError, ExecutionError, ValidationError};
pub use executor::{GenerationInput, GenerationOutput, ModelPromptExecutor, PromptExecutor};
pub use operation::OperationKind;
