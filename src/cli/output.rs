//! CLI output: text and JSON renderings of result envelopes, and error mapping.

use crate::dispatch::{GenerateAllResult, GenerationResult};
use crate::error::ApiError;
use crate::prompt::output::{EtsyListing, MarketTrends, ShopifyListing};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde::Serialize;

/// What a command printed, and whether its envelope carried an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    pub success: bool,
}

impl CommandOutput {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            success: true,
        }
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            success: false,
        }
    }
}

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &ApiError) -> String {
    format!("{} {}", "error:".red().bold(), e)
}

fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ApiError::ConfigError(format!("Failed to encode output: {}", e)))
}

/// Render one envelope: JSON when asked, otherwise the payload via `text`.
pub fn render<T: Serialize>(
    result: &GenerationResult<T>,
    json: bool,
    text: impl FnOnce(&T) -> String,
) -> Result<CommandOutput, ApiError> {
    let rendered = if json {
        to_json(result)?
    } else {
        match result {
            GenerationResult::Data(data) => text(data),
            GenerationResult::Error(message) => message.clone(),
        }
    };
    Ok(CommandOutput {
        text: rendered,
        success: result.is_data(),
    })
}

pub fn format_captions(captions: &[String]) -> String {
    captions
        .iter()
        .enumerate()
        .map(|(i, caption)| format!("{}. {}", i + 1, caption))
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn format_market_trends(trends: &MarketTrends) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Keywords")));
    out.push_str(&format!("{}\n\n", trends.keywords.join(", ")));

    out.push_str(&format!("{}\n\n", format_section_heading("Color palette")));
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Name", "Hex"]);
    for swatch in &trends.color_palette {
        table.add_row(vec![swatch.name.clone(), swatch.hex.clone()]);
    }
    out.push_str(&format!("{}\n\n", table));

    out.push_str(&format!("{}\n\n", format_section_heading("Style suggestions")));
    for suggestion in &trends.style_suggestions {
        out.push_str(&format!("- {}\n", suggestion));
    }
    out
}

pub fn format_etsy_listing(listing: &EtsyListing) -> String {
    format!(
        "{}\n{}\n\n{}\n{}",
        format_section_heading("Title"),
        listing.title,
        format_section_heading("Tags"),
        listing.tags.join(", ")
    )
}

pub fn format_shopify_listing(listing: &ShopifyListing) -> String {
    format!(
        "{}\n{}\n\n{}\n{}\n\n{}\n{}",
        format_section_heading("Title"),
        listing.title,
        format_section_heading("Meta description"),
        listing.meta_description,
        format_section_heading("Tags"),
        listing.tags.join(", ")
    )
}

/// Render a generate-all run. Succeeds only when every part succeeded.
pub fn render_all(
    result: &GenerateAllResult,
    json: bool,
    image_text: impl FnOnce(&String) -> String,
) -> Result<CommandOutput, ApiError> {
    let success =
        result.description.is_data() && result.captions.is_data() && result.image.is_data();
    if json {
        return Ok(CommandOutput {
            text: to_json(result)?,
            success,
        });
    }

    let section = |title: &str, body: String| format!("{}\n\n{}", format_section_heading(title), body);
    let text = [
        section(
            "Description",
            render(&result.description, false, |d| d.clone())?.text,
        ),
        section(
            "Captions",
            render(&result.captions, false, |c| format_captions(c))?.text,
        ),
        section("Image", render(&result.image, false, image_text)?.text),
    ]
    .join("\n\n");

    Ok(CommandOutput { text, success })
}
