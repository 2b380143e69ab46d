//! Schema Validator
//!
//! Each raw request declares its field constraints with `garde` attributes.
//! garde reports violations sorted by field path, so each request also lists
//! its fields in rule order and only the earliest violated field is
//! reported; callers show that one message verbatim. Values are trimmed and
//! NFC-normalized before length is measured, and length counts Unicode scalar
//! values.

use crate::error::ValidationError;
use garde::Validate;
use unicode_normalization::UnicodeNormalization;

/// Conversion from a validated raw request into its normalized form.
pub trait Normalize: Validate<Context = ()> {
    type Normalized;

    /// Field names in the order their rules apply.
    const FIELD_ORDER: &'static [&'static str];

    fn normalize(&self) -> Result<Self::Normalized, ValidationError>;
}

/// Validate a raw request and return its normalized form, or the first
/// violated constraint.
pub fn validate<R: Normalize>(request: &R) -> Result<R::Normalized, ValidationError> {
    if let Err(report) = request.validate() {
        return Err(first_violation(&report, R::FIELD_ORDER));
    }
    request.normalize()
}

fn first_violation(report: &garde::Report, field_order: &[&str]) -> ValidationError {
    report
        .iter()
        .min_by_key(|(path, _)| field_rank(&path.to_string(), field_order))
        .map(|(_, error)| ValidationError::new(error.message()))
        .unwrap_or_else(|| ValidationError::new("Invalid request."))
}

/// Position of the top-level field a report path belongs to; unknown paths
/// sort last.
fn field_rank(path: &str, field_order: &[&str]) -> usize {
    let field = path.split(['.', '[']).next().unwrap_or(path);
    field_order
        .iter()
        .position(|name| *name == field)
        .unwrap_or(field_order.len())
}

/// Trim and NFC-normalize a free-text field.
pub fn normalize_text(value: &str) -> String {
    value.trim().nfc().collect()
}

/// Field rules referenced from the request records.
pub(crate) mod rules {
    use super::normalize_text;
    use crate::request::{EmailTone, Platform, Tone};

    fn min_chars(value: &str, min: usize, message: &str) -> garde::Result {
        if normalize_text(value).chars().count() < min {
            return Err(garde::Error::new(message));
        }
        Ok(())
    }

    fn parses<T: std::str::FromStr<Err = crate::error::ValidationError>>(
        value: &str,
    ) -> garde::Result {
        value
            .trim()
            .parse::<T>()
            .map(|_| ())
            .map_err(|e| garde::Error::new(e.message()))
    }

    pub fn product_name(value: &str, _ctx: &()) -> garde::Result {
        min_chars(value, 2, "Product name must be at least 2 characters.")
    }

    pub fn product_description(value: &str, _ctx: &()) -> garde::Result {
        min_chars(value, 1, "Product description cannot be empty.")
    }

    pub fn brand_name(value: &str, _ctx: &()) -> garde::Result {
        min_chars(value, 2, "Brand name must be at least 2 characters.")
    }

    pub fn business_type(value: &str, _ctx: &()) -> garde::Result {
        min_chars(value, 2, "Business type must be at least 2 characters.")
    }

    pub fn product_or_industry(value: &str, _ctx: &()) -> garde::Result {
        min_chars(value, 2, "Product or industry must be at least 2 characters.")
    }

    pub fn content(value: &str, _ctx: &()) -> garde::Result {
        min_chars(value, 1, "Content to translate cannot be empty.")
    }

    pub fn target_language(value: &str, _ctx: &()) -> garde::Result {
        min_chars(value, 2, "Target language must be at least 2 characters.")
    }

    pub fn email_topic(value: &str, _ctx: &()) -> garde::Result {
        min_chars(value, 5, "Email topic must be at least 5 characters.")
    }

    pub fn tone(value: &str, _ctx: &()) -> garde::Result {
        parses::<Tone>(value)
    }

    pub fn platform(value: &str, _ctx: &()) -> garde::Result {
        parses::<Platform>(value)
    }

    pub fn email_tone(value: &str, _ctx: &()) -> garde::Result {
        parses::<EmailTone>(value)
    }
}
