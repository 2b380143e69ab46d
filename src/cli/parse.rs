//! CLI parse: clap types for brandkit. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// brandkit CLI - AI-assisted marketing content for small businesses
#[derive(Parser, Debug)]
#[command(name = "brandkit")]
#[command(about = "Generate product descriptions, captions, images and listings with a hosted model")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (searched for brandkit.toml)
    #[arg(long, global = true, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (layered over global and workspace files)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print the result envelope as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

// Tone and platform stay free text here; the dispatcher owns their validation.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Write a product description
    Description {
        /// Product or service name
        product_name: String,
    },
    /// Write three social media captions
    Captions {
        /// Product or service name
        product_name: String,
        /// Persuasive, Creative or Professional
        #[arg(long, default_value = "Persuasive")]
        tone: String,
        /// General, Instagram, "X (Twitter)" or LinkedIn
        #[arg(long, default_value = "General")]
        platform: String,
    },
    /// Generate a studio product image
    Image {
        /// Product name
        product_name: String,
        /// Write the decoded image here instead of printing the data URI
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Write a brand story
    BrandStory {
        /// Brand or founder name
        #[arg(long)]
        brand_name: String,
        /// What the business does
        #[arg(long)]
        business_type: String,
    },
    /// Summarize market trends: keywords, palette, styles
    Trends {
        /// Product or industry to analyze
        product_or_industry: String,
    },
    /// Translate marketing copy
    Translate {
        /// Target language
        #[arg(long = "to")]
        target_language: String,
        /// Text to translate
        content: String,
    },
    /// Etsy title and 13 tags
    Etsy {
        #[arg(long)]
        product_name: String,
        #[arg(long)]
        description: String,
    },
    /// Shopify SEO title, meta description and tags
    Shopify {
        #[arg(long)]
        product_name: String,
        #[arg(long)]
        description: String,
    },
    /// Draft an email
    Email {
        /// What the email is about
        topic: String,
        /// Formal, Friendly or Direct
        #[arg(long, default_value = "Friendly")]
        tone: String,
    },
    /// Description, captions and image in one concurrent run
    All {
        /// Product name
        product_name: String,
        #[arg(long, default_value = "Persuasive")]
        tone: String,
        #[arg(long, default_value = "General")]
        platform: String,
        /// Write the decoded image here
        #[arg(long)]
        image_output: Option<PathBuf>,
    },
}
