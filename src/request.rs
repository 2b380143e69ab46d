//! Generation requests
//!
//! Raw request records as submitted by a caller (one per operation, camelCase
//! field names), the normalized records handed to the execution unit, and the
//! closed vocabularies for tone and platform.

use crate::error::ValidationError;
use crate::operation::OperationKind;
use crate::validation::{normalize_text, rules, Normalize};
use garde::Validate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Caption tone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    Persuasive,
    Creative,
    Professional,
}

impl Tone {
    pub const ALL: [Tone; 3] = [Tone::Persuasive, Tone::Creative, Tone::Professional];

    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Persuasive => "Persuasive",
            Tone::Creative => "Creative",
            Tone::Professional => "Professional",
        }
    }
}

impl FromStr for Tone {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tone::ALL
            .into_iter()
            .find(|tone| tone.as_str() == s)
            .ok_or_else(|| {
                ValidationError::new("Tone must be one of: Persuasive, Creative, Professional.")
            })
    }
}

/// Social platform a caption set is tailored for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Platform {
    #[default]
    General,
    Instagram,
    #[serde(rename = "X (Twitter)")]
    XTwitter,
    LinkedIn,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::General,
        Platform::Instagram,
        Platform::XTwitter,
        Platform::LinkedIn,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::General => "General",
            Platform::Instagram => "Instagram",
            Platform::XTwitter => "X (Twitter)",
            Platform::LinkedIn => "LinkedIn",
        }
    }
}

impl FromStr for Platform {
    type Err = ValidationError;

    /// A blank value selects `General`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Platform::General);
        }
        Platform::ALL
            .into_iter()
            .find(|platform| platform.as_str() == s)
            .ok_or_else(|| {
                ValidationError::new(
                    "Platform must be one of: General, Instagram, X (Twitter), LinkedIn.",
                )
            })
    }
}

/// Email draft tone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmailTone {
    Formal,
    Friendly,
    Direct,
}

impl EmailTone {
    pub const ALL: [EmailTone; 3] = [EmailTone::Formal, EmailTone::Friendly, EmailTone::Direct];

    pub fn as_str(self) -> &'static str {
        match self {
            EmailTone::Formal => "Formal",
            EmailTone::Friendly => "Friendly",
            EmailTone::Direct => "Direct",
        }
    }
}

impl FromStr for EmailTone {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EmailTone::ALL
            .into_iter()
            .find(|tone| tone.as_str() == s)
            .ok_or_else(|| ValidationError::new("Tone must be one of: Formal, Friendly, Direct."))
    }
}

macro_rules! impl_display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

impl_display_as_str!(Tone, Platform, EmailTone);

// Raw requests. `Normalize::FIELD_ORDER` lists fields in rule order: the
// first violated field wins.
// Absent fields deserialize as empty strings and fail their length rule.

/// Request naming a single product (description, image).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductRequest {
    #[garde(custom(rules::product_name))]
    pub product_name: String,
}

impl ProductRequest {
    pub fn new(product_name: impl Into<String>) -> Self {
        Self {
            product_name: product_name.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct CaptionsRequest {
    #[garde(custom(rules::product_name))]
    pub product_name: String,
    #[garde(custom(rules::tone))]
    pub tone: String,
    /// Blank or absent selects `General`.
    #[garde(custom(rules::platform))]
    pub platform: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct BrandStoryRequest {
    #[garde(custom(rules::brand_name))]
    pub brand_name: String,
    #[garde(custom(rules::business_type))]
    pub business_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct MarketTrendsRequest {
    #[garde(custom(rules::product_or_industry))]
    pub product_or_industry: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslationRequest {
    #[garde(custom(rules::content))]
    pub content: String,
    #[garde(custom(rules::target_language))]
    pub target_language: String,
}

/// Marketplace listing request (Etsy, Shopify).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ListingRequest {
    #[garde(custom(rules::product_name))]
    pub product_name: String,
    #[garde(custom(rules::product_description))]
    pub product_description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct EmailReplyRequest {
    #[garde(custom(rules::email_topic))]
    pub topic: String,
    #[garde(custom(rules::email_tone))]
    pub tone: String,
}

/// Any raw request, tagged by operation: `{"operation": "captions", "productName": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum GenerationRequest {
    Description(ProductRequest),
    Captions(CaptionsRequest),
    Image(ProductRequest),
    BrandStory(BrandStoryRequest),
    MarketTrends(MarketTrendsRequest),
    Translation(TranslationRequest),
    EtsyListing(ListingRequest),
    ShopifyListing(ListingRequest),
    EmailReply(EmailReplyRequest),
}

impl GenerationRequest {
    pub fn operation(&self) -> OperationKind {
        match self {
            GenerationRequest::Description(_) => OperationKind::Description,
            GenerationRequest::Captions(_) => OperationKind::Captions,
            GenerationRequest::Image(_) => OperationKind::Image,
            GenerationRequest::BrandStory(_) => OperationKind::BrandStory,
            GenerationRequest::MarketTrends(_) => OperationKind::MarketTrends,
            GenerationRequest::Translation(_) => OperationKind::Translation,
            GenerationRequest::EtsyListing(_) => OperationKind::EtsyListing,
            GenerationRequest::ShopifyListing(_) => OperationKind::ShopifyListing,
            GenerationRequest::EmailReply(_) => OperationKind::EmailReply,
        }
    }
}

// Normalized requests

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub product_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionsInput {
    pub product_name: String,
    pub tone: Tone,
    pub platform: Platform,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandStoryInput {
    pub brand_name: String,
    pub business_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketTrendsInput {
    pub product_or_industry: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationInput {
    pub content: String,
    pub target_language: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingInput {
    pub product_name: String,
    pub product_description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailReplyInput {
    pub topic: String,
    pub tone: EmailTone,
}

impl Normalize for ProductRequest {
    const FIELD_ORDER: &'static [&'static str] = &["product_name"];
    type Normalized = ProductInput;

    fn normalize(&self) -> Result<ProductInput, ValidationError> {
        Ok(ProductInput {
            product_name: normalize_text(&self.product_name),
        })
    }
}

impl Normalize for CaptionsRequest {
    const FIELD_ORDER: &'static [&'static str] = &["product_name", "tone", "platform"];
    type Normalized = CaptionsInput;

    fn normalize(&self) -> Result<CaptionsInput, ValidationError> {
        Ok(CaptionsInput {
            product_name: normalize_text(&self.product_name),
            tone: self.tone.trim().parse()?,
            platform: self.platform.trim().parse()?,
        })
    }
}

impl Normalize for BrandStoryRequest {
    const FIELD_ORDER: &'static [&'static str] = &["brand_name", "business_type"];
    type Normalized = BrandStoryInput;

    fn normalize(&self) -> Result<BrandStoryInput, ValidationError> {
        Ok(BrandStoryInput {
            brand_name: normalize_text(&self.brand_name),
            business_type: normalize_text(&self.business_type),
        })
    }
}

impl Normalize for MarketTrendsRequest {
    const FIELD_ORDER: &'static [&'static str] = &["product_or_industry"];
    type Normalized = MarketTrendsInput;

    fn normalize(&self) -> Result<MarketTrendsInput, ValidationError> {
        Ok(MarketTrendsInput {
            product_or_industry: normalize_text(&self.product_or_industry),
        })
    }
}

impl Normalize for TranslationRequest {
    const FIELD_ORDER: &'static [&'static str] = &["content", "target_language"];
    type Normalized = TranslationInput;

    fn normalize(&self) -> Result<TranslationInput, ValidationError> {
        Ok(TranslationInput {
            content: normalize_text(&self.content),
            target_language: normalize_text(&self.target_language),
        })
    }
}

impl Normalize for ListingRequest {
    const FIELD_ORDER: &'static [&'static str] = &["product_name", "product_description"];
    type Normalized = ListingInput;

    fn normalize(&self) -> Result<ListingInput, ValidationError> {
        Ok(ListingInput {
            product_name: normalize_text(&self.product_name),
            product_description: normalize_text(&self.product_description),
        })
    }
}

impl Normalize for EmailReplyRequest {
    const FIELD_ORDER: &'static [&'static str] = &["topic", "tone"];
    type Normalized = EmailReplyInput;

    fn normalize(&self) -> Result<EmailReplyInput, ValidationError> {
        Ok(EmailReplyInput {
            topic: normalize_text(&self.topic),
            tone: self.tone.trim().parse()?,
        })
    }
}
