//! Markup stripping and whitespace normalization

use crate::encoder::HtmlEncoder;
use ammonia::Builder;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Field value sanitizer.
///
/// The policy is fixed: markup is stripped (the content of `script` and
/// `style` elements is dropped entirely), `<`, `>` and `&` left in the text
/// are entity-escaped, quotes are encoded, runs of whitespace collapse to a
/// single space and the result is trimmed.
#[derive(Debug, Clone, Default)]
pub struct FieldSanitizer;

impl FieldSanitizer {
    /// Create a new sanitizer
    pub fn new() -> Self {
        Self
    }

    /// Sanitize a single value
    pub fn sanitize(&self, input: &str) -> String {
        if input.is_empty() {
            return String::new();
        }

        let stripped = strip_markup(input);
        let collapsed = WHITESPACE_RUN.replace_all(&stripped, " ");

        HtmlEncoder::encode_quotes(collapsed.trim())
    }
}

/// Sanitize a single value with the default policy
pub fn sanitize(input: &str) -> String {
    FieldSanitizer::new().sanitize(input)
}

fn strip_markup(input: &str) -> String {
    let mut builder = Builder::default();

    // No element or attribute survives; text content is kept
    builder.tags(HashSet::new());
    builder.generic_attributes(HashSet::new());
    builder.strip_comments(true);

    builder.clean(input).to_string()
}
