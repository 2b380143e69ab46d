//! Output schemas
//!
//! Typed records for what each text operation's model answer must contain,
//! the payload records handed back to callers, and the conformance checks
//! that turn a non-conforming answer into `ExecutionError::Schema`.

use crate::error::ExecutionError;
use crate::executor::GenerationOutput;
use crate::operation::OperationKind;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub const CAPTION_COUNT: usize = 3;
pub const ETSY_TAG_COUNT: usize = 13;

/// A named palette color, `hex` formatted `#RRGGBB`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSwatch {
    pub name: String,
    pub hex: String,
}

/// Market trend summary payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketTrends {
    pub keywords: Vec<String>,
    pub color_palette: Vec<ColorSwatch>,
    pub style_suggestions: Vec<String>,
}

/// Etsy listing payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EtsyListing {
    pub title: String,
    pub tags: Vec<String>,
}

/// Shopify listing payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopifyListing {
    pub title: String,
    pub meta_description: String,
    pub tags: Vec<String>,
}

// Model answer records

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DescriptionAnswer {
    product_description: String,
}

#[derive(Deserialize)]
struct CaptionsAnswer {
    captions: Vec<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BrandStoryAnswer {
    brand_story: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslationAnswer {
    translated_content: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EtsyAnswer {
    etsy_title: String,
    etsy_tags: Vec<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ShopifyAnswer {
    shopify_title: String,
    shopify_meta_description: String,
    shopify_tags: Vec<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EmailAnswer {
    email_body: String,
}

/// Strip a surrounding Markdown code fence, if any.
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.trim_end();
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    // Drop the info string (e.g. "json") before the body.
    match rest.split_once('\n') {
        Some((_, body)) => body.trim(),
        None => rest
            .trim_start_matches(|c: char| c.is_ascii_alphanumeric())
            .trim(),
    }
}

fn decode<T: DeserializeOwned>(operation: OperationKind, raw: &str) -> Result<T, ExecutionError> {
    serde_json::from_str(strip_code_fence(raw))
        .map_err(|e| ExecutionError::schema(operation, format!("invalid JSON answer: {}", e)))
}

fn expect_len<T>(
    operation: OperationKind,
    field: &str,
    items: &[T],
    expected: usize,
) -> Result<(), ExecutionError> {
    if items.len() != expected {
        return Err(ExecutionError::schema(
            operation,
            format!("expected {} {}, got {}", expected, field, items.len()),
        ));
    }
    Ok(())
}

fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .filter(|digits| digits.len() == 6)
        .is_some_and(|digits| hex::decode(digits).is_ok())
}

/// Parse and check a text operation's model answer.
pub fn parse(operation: OperationKind, raw: &str) -> Result<GenerationOutput, ExecutionError> {
    match operation {
        OperationKind::Description => {
            let answer: DescriptionAnswer = decode(operation, raw)?;
            Ok(GenerationOutput::Description(answer.product_description))
        }
        OperationKind::Captions => {
            let answer: CaptionsAnswer = decode(operation, raw)?;
            expect_len(operation, "captions", &answer.captions, CAPTION_COUNT)?;
            Ok(GenerationOutput::Captions(answer.captions))
        }
        OperationKind::BrandStory => {
            let answer: BrandStoryAnswer = decode(operation, raw)?;
            Ok(GenerationOutput::BrandStory(answer.brand_story))
        }
        OperationKind::MarketTrends => {
            let trends: MarketTrends = decode(operation, raw)?;
            if let Some(bad) = trends.color_palette.iter().find(|c| !is_hex_color(&c.hex)) {
                return Err(ExecutionError::schema(
                    operation,
                    format!("color '{}' has invalid hex '{}'", bad.name, bad.hex),
                ));
            }
            Ok(GenerationOutput::MarketTrends(trends))
        }
        OperationKind::Translation => {
            let answer: TranslationAnswer = decode(operation, raw)?;
            Ok(GenerationOutput::Translation(answer.translated_content))
        }
        OperationKind::EtsyListing => {
            let answer: EtsyAnswer = decode(operation, raw)?;
            expect_len(operation, "tags", &answer.etsy_tags, ETSY_TAG_COUNT)?;
            Ok(GenerationOutput::EtsyListing(EtsyListing {
                title: answer.etsy_title,
                tags: answer.etsy_tags,
            }))
        }
        OperationKind::ShopifyListing => {
            let answer: ShopifyAnswer = decode(operation, raw)?;
            Ok(GenerationOutput::ShopifyListing(ShopifyListing {
                title: answer.shopify_title,
                meta_description: answer.shopify_meta_description,
                tags: answer.shopify_tags,
            }))
        }
        OperationKind::EmailReply => {
            let answer: EmailAnswer = decode(operation, raw)?;
            Ok(GenerationOutput::EmailReply(answer.email_body))
        }
        OperationKind::Image => Err(ExecutionError::schema(
            operation,
            "image output is not produced from a text answer",
        )),
    }
}
