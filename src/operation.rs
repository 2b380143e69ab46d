//! Operation catalogue
//!
//! The nine content-generation capabilities, their stable identifiers, and the
//! user-facing copy shown when the model fails. Fallback strings differ per
//! operation on purpose and must not be unified.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One named content-generation capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    Description,
    Captions,
    Image,
    BrandStory,
    MarketTrends,
    Translation,
    EtsyListing,
    ShopifyListing,
    EmailReply,
}

impl OperationKind {
    pub const ALL: [OperationKind; 9] = [
        OperationKind::Description,
        OperationKind::Captions,
        OperationKind::Image,
        OperationKind::BrandStory,
        OperationKind::MarketTrends,
        OperationKind::Translation,
        OperationKind::EtsyListing,
        OperationKind::ShopifyListing,
        OperationKind::EmailReply,
    ];

    /// Stable identifier used in logs and by the execution unit.
    pub fn id(self) -> &'static str {
        match self {
            OperationKind::Description => "generate_product_description",
            OperationKind::Captions => "generate_social_media_captions",
            OperationKind::Image => "generate_image",
            OperationKind::BrandStory => "generate_brand_story",
            OperationKind::MarketTrends => "analyze_market_trends",
            OperationKind::Translation => "translate_content",
            OperationKind::EtsyListing => "generate_etsy_listing",
            OperationKind::ShopifyListing => "generate_shopify_listing",
            OperationKind::EmailReply => "generate_email_reply",
        }
    }

    /// Message returned in place of any execution failure.
    pub fn failure_message(self) -> &'static str {
        match self {
            OperationKind::Description => "Failed to generate description. Please try again.",
            OperationKind::Captions => "Failed to generate captions. Please try again.",
            OperationKind::Image => "Failed to generate image. Please try again.",
            OperationKind::BrandStory => "Failed to generate brand story. Please try again.",
            OperationKind::MarketTrends => "Failed to analyze market trends. Please try again.",
            OperationKind::Translation => "Failed to translate content. Please try again.",
            OperationKind::EtsyListing => "Failed to generate Etsy listing. Please try again.",
            OperationKind::ShopifyListing => {
                "Failed to generate Shopify listing. Please try again."
            }
            OperationKind::EmailReply => "Failed to generate email. Please try again.",
        }
    }
}

/// Returned when image generation completes but yields no image.
pub const EMPTY_IMAGE_MESSAGE: &str =
    "Failed to generate image. Please try a different product name.";

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
