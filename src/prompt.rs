//! Prompt templates
//!
//! One template per operation. Placeholders are written `{name}` and filled
//! from the normalized request; text operations also state the JSON object the
//! model must answer with, which `output` then parses and checks.

use crate::executor::GenerationInput;
use crate::provider::{ChatMessage, CompletionOptions};

pub mod output;

/// A prompt ready for submission.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPrompt {
    pub system: String,
    pub user: String,
    pub options: CompletionOptions,
}

impl RenderedPrompt {
    pub fn messages(&self) -> Vec<ChatMessage> {
        vec![
            ChatMessage::system(self.system.clone()),
            ChatMessage::user(self.user.clone()),
        ]
    }
}

const JSON_RULES: &str = "Respond with a single JSON object and nothing else. Do not wrap it in Markdown.";

const DESCRIPTION_SYSTEM: &str = "You are a copywriter who writes product and service descriptions that sell: clear benefits, vivid language, a confident call to action.";
const DESCRIPTION_USER: &str = r#"Write a compelling description of 150 to 200 words for this product or service: {product_name}

Answer as {"productDescription": "<description>"}."#;

const CAPTIONS_SYSTEM: &str = "You are a social media marketer who writes short captions that stop the scroll.";
const CAPTIONS_USER: &str = r#"Write exactly three captions promoting the product below, each under 70 words.

Platform: {platform}
- Instagram: add relevant hashtags and emojis.
- X (Twitter): concise and punchy.
- LinkedIn: professional and informative.
- General: versatile enough for any platform.

Tone: {tone}
Product name: {product_name}

Answer as {"captions": ["<caption 1>", "<caption 2>", "<caption 3>"]}."#;

const BRAND_STORY_SYSTEM: &str = "You are a storyteller for founders and small businesses. You write warm, personal narratives that connect readers with the people behind a brand.";
const BRAND_STORY_USER: &str = r#"Write a brand story of 250 to 300 words.

Brand or founder: {brand_name}
Business: {business_type}

Cover who they are, the mission of the business, the founder's journey and passion, and the value customers get. Close with a sentence that stays with the reader. Tell a story rather than list facts.

Answer as {"brandStory": "<story>"}."#;

const MARKET_TRENDS_SYSTEM: &str = "You are an e-commerce trend analyst for independent makers and small brands. You give concrete, current advice.";
const MARKET_TRENDS_USER: &str = r##"Analyze current online market trends for: {product_or_industry}

Provide:
- 5 to 7 SEO keywords shoppers use when searching for this kind of product.
- A trending palette of 4 colors, each with a name and a hex code such as "#A1B2C3".
- 2 or 3 short suggestions for styles or variations that are selling well.

Answer as {"keywords": ["..."], "colorPalette": [{"name": "...", "hex": "#RRGGBB"}], "styleSuggestions": ["..."]}."##;

const TRANSLATION_SYSTEM: &str = "You are a professional translator. You return only the translation, without commentary.";
const TRANSLATION_USER: &str = r#"Translate the text below into {target_language}.

Text:
{content}

Answer as {"translatedContent": "<translation>"}."#;

const ETSY_SYSTEM: &str = "You are an Etsy SEO specialist who helps makers get found in search.";
const ETSY_USER: &str = r#"Create an Etsy title and tags for this listing.

Product name: {product_name}
Product description: {product_description}

Title: engaging, descriptive, keyword rich, at most 140 characters.
Tags: exactly 13 tags, each at most 20 characters, covering materials, style, occasion, technique and recipient. Multi-word phrases are welcome.

Answer as {"etsyTitle": "<title>", "etsyTags": ["<tag>", "... 13 in total"]}."#;

const SHOPIFY_SYSTEM: &str = "You are a Shopify SEO specialist.";
const SHOPIFY_USER: &str = r#"Create SEO metadata for this Shopify product.

Product name: {product_name}
Product description: {product_description}

Title: clear and descriptive, under 70 characters.
Meta description: a summary that earns the click, under 160 characters.
Tags: 5 to 10 tags for filtering and organizing the store, covering product type, materials, style, color and audience.

Answer as {"shopifyTitle": "<title>", "shopifyMetaDescription": "<meta description>", "shopifyTags": ["<tag>"]}."#;

const EMAIL_SYSTEM: &str = "You are a business communication assistant who drafts complete, ready-to-send emails.";
const EMAIL_USER: &str = r#"Draft an email about the topic below. Include a subject line, a greeting, a well-structured body and a closing.

Topic: {topic}
Tone: {tone}

Answer as {"emailBody": "<full email including the subject line>"}."#;

const IMAGE_PROMPT: &str = "Professional studio product photograph of a single \"{product_name}\", centered on a clean, light, neutral background, with bright and even lighting and sharp focus.";

const CAPTIONS_TEMPERATURE: f32 = 0.7;
const CAPTIONS_MAX_TOKENS: u32 = 500;

/// Replace each `{key}` in `template` with its value in a single pass.
/// Substituted text is never rescanned; unknown braces are copied as-is.
fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let bound = after.find('}').and_then(|end| {
            let key = &after[..end];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, value)| (*value, end))
        });
        match bound {
            Some((value, end)) => {
                out.push_str(value);
                rest = &after[end + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

fn text_prompt(system: &str, user: String) -> RenderedPrompt {
    RenderedPrompt {
        system: format!("{} {}", system, JSON_RULES),
        user,
        options: CompletionOptions {
            json_output: true,
            ..Default::default()
        },
    }
}

/// Render the prompt for one operation.
pub fn render(input: &GenerationInput) -> RenderedPrompt {
    match input {
        GenerationInput::Description(req) => text_prompt(
            DESCRIPTION_SYSTEM,
            fill(DESCRIPTION_USER, &[("product_name", req.product_name.as_str())]),
        ),
        GenerationInput::Captions(req) => {
            let mut prompt = text_prompt(
                CAPTIONS_SYSTEM,
                fill(
                    CAPTIONS_USER,
                    &[
                        ("platform", req.platform.as_str()),
                        ("tone", req.tone.as_str()),
                        ("product_name", req.product_name.as_str()),
                    ],
                ),
            );
            prompt.options.temperature = Some(CAPTIONS_TEMPERATURE);
            prompt.options.max_tokens = Some(CAPTIONS_MAX_TOKENS);
            prompt
        }
        GenerationInput::Image(req) => RenderedPrompt {
            system: String::new(),
            user: fill(IMAGE_PROMPT, &[("product_name", req.product_name.as_str())]),
            options: CompletionOptions::default(),
        },
        GenerationInput::BrandStory(req) => text_prompt(
            BRAND_STORY_SYSTEM,
            fill(
                BRAND_STORY_USER,
                &[
                    ("brand_name", req.brand_name.as_str()),
                    ("business_type", req.business_type.as_str()),
                ],
            ),
        ),
        GenerationInput::MarketTrends(req) => text_prompt(
            MARKET_TRENDS_SYSTEM,
            fill(
                MARKET_TRENDS_USER,
                &[("product_or_industry", req.product_or_industry.as_str())],
            ),
        ),
        GenerationInput::Translation(req) => text_prompt(
            TRANSLATION_SYSTEM,
            fill(
                TRANSLATION_USER,
                &[
                    ("target_language", req.target_language.as_str()),
                    ("content", req.content.as_str()),
                ],
            ),
        ),
        GenerationInput::EtsyListing(req) => text_prompt(
            ETSY_SYSTEM,
            fill(
                ETSY_USER,
                &[
                    ("product_name", req.product_name.as_str()),
                    ("product_description", req.product_description.as_str()),
                ],
            ),
        ),
        GenerationInput::ShopifyListing(req) => text_prompt(
            SHOPIFY_SYSTEM,
            fill(
                SHOPIFY_USER,
                &[
                    ("product_name", req.product_name.as_str()),
                    ("product_description", req.product_description.as_str()),
                ],
            ),
        ),
        GenerationInput::EmailReply(req) => text_prompt(
            EMAIL_SYSTEM,
            fill(
                EMAIL_USER,
                &[("topic", req.topic.as_str()), ("tone", req.tone.as_str())],
            ),
        ),
    }
}
