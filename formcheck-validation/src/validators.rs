//! Built-in validators
//!
//! Validators receive sanitized values, so `&`, `<`, `>` and quotes arrive
//! entity-encoded. Length rules measure the decoded text and `OneOf`
//! sanitizes its allowed values before comparing.

use crate::ValidationError;
use crate::config::LengthUnit;
use formcheck_xss::{HtmlEncoder, sanitize};
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

// Common regex patterns
static ALPHA_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z.]+$").unwrap());

static NUMERIC_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$").unwrap());

static INTEGER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?(?:0|[1-9][0-9]*)$").unwrap());

const BOOLEAN_WORDS: [&str; 8] = ["true", "false", "1", "0", "yes", "no", "on", "off"];

const HOST_SCHEMES: [&str; 5] = ["http", "https", "ftp", "ws", "wss"];

// String validators

/// Validates letters and dots only
pub struct IsAlpha;

impl IsAlpha {
    pub fn validate(value: &str, field: &str) -> Result<(), ValidationError> {
        if ALPHA_REGEX.is_match(value) {
            Ok(())
        } else {
            Err(ValidationError::format(
                field,
                "alpha",
                "should contain only alphabetical characters",
            ))
        }
    }
}

/// Validates letters and spaces only
pub struct IsAlphaSpace;

impl IsAlphaSpace {
    pub fn validate(value: &str, field: &str) -> Result<(), ValidationError> {
        let mut letters = value.chars().filter(|c| *c != ' ').peekable();
        let valid = letters.peek().is_some() && letters.all(|c| c.is_ascii_alphabetic());

        if valid {
            Ok(())
        } else {
            Err(ValidationError::format(
                field,
                "alpha_space",
                "must contain letters and spaces only",
            ))
        }
    }
}

// Number validators

/// Validates a signed integer or decimal number
pub struct IsNumeric;

impl IsNumeric {
    pub fn validate(value: &str, field: &str) -> Result<(), ValidationError> {
        if NUMERIC_REGEX.is_match(value) {
            Ok(())
        } else {
            Err(ValidationError::format(field, "numeric", "should be a numeric value"))
        }
    }
}

/// Validates a 64-bit integer without leading zeros
pub struct IsInteger;

impl IsInteger {
    pub fn validate(value: &str, field: &str) -> Result<(), ValidationError> {
        if INTEGER_REGEX.is_match(value) && value.parse::<i64>().is_ok() {
            Ok(())
        } else {
            Err(ValidationError::format(
                field,
                "validate_int",
                "should be an integer value",
            ))
        }
    }
}

/// Validates a finite floating-point number
pub struct IsFloat;

impl IsFloat {
    pub fn validate(value: &str, field: &str) -> Result<(), ValidationError> {
        let finite = NUMERIC_REGEX.is_match(value)
            && value.parse::<f64>().map(f64::is_finite).unwrap_or(false);

        if finite {
            Ok(())
        } else {
            Err(ValidationError::format(
                field,
                "validate_float",
                "should be a float value",
            ))
        }
    }
}

/// Validates a boolean spelling (`true`, `off`, `1`, ...)
pub struct IsBoolean;

impl IsBoolean {
    pub fn validate(value: &str, field: &str) -> Result<(), ValidationError> {
        if BOOLEAN_WORDS.iter().any(|w| value.eq_ignore_ascii_case(w)) {
            Ok(())
        } else {
            Err(ValidationError::format(
                field,
                "validate_bool",
                "should be a true or false value",
            ))
        }
    }
}

/// Validates an absolute URL
pub struct IsUrl;

impl IsUrl {
    pub fn validate(value: &str, field: &str) -> Result<(), ValidationError> {
        if Self::is_valid(value) {
            Ok(())
        } else {
            Err(ValidationError::format(field, "validate_url", "is not a valid url"))
        }
    }

    fn is_valid(value: &str) -> bool {
        if value.is_empty() || value.chars().any(char::is_whitespace) {
            return false;
        }

        match Url::parse(value) {
            Ok(url) => url.has_host() || !HOST_SCHEMES.iter().any(|s| *s == url.scheme()),
            Err(_) => false,
        }
    }
}

// Length validators

fn text_length(unit: LengthUnit, value: &str) -> usize {
    unit.measure(&HtmlEncoder::decode_html(value))
}

/// Validates minimum length
pub struct MinLength {
    pub min: usize,
    pub unit: LengthUnit,
}

impl MinLength {
    /// Minimum length in characters
    pub fn chars(min: usize) -> Self {
        Self {
            min,
            unit: LengthUnit::Chars,
        }
    }

    pub fn validate(&self, value: &str, field: &str) -> Result<(), ValidationError> {
        if text_length(self.unit, value) < self.min {
            Err(ValidationError::length(
                field,
                "min_length",
                self.min,
                &format!("should be {} characters or longer", self.min),
            ))
        } else {
            Ok(())
        }
    }
}

/// Validates maximum length
pub struct MaxLength {
    pub max: usize,
    pub unit: LengthUnit,
}

impl MaxLength {
    /// Maximum length in characters
    pub fn chars(max: usize) -> Self {
        Self {
            max,
            unit: LengthUnit::Chars,
        }
    }

    pub fn validate(&self, value: &str, field: &str) -> Result<(), ValidationError> {
        if text_length(self.unit, value) > self.max {
            Err(ValidationError::length(
                field,
                "max_length",
                self.max,
                &format!("should be {} characters or shorter", self.max),
            ))
        } else {
            Ok(())
        }
    }
}

// Membership validators

/// Validates membership in a list of allowed values.
///
/// Allowed values are raw text; each is sanitized before the exact match.
pub struct OneOf<'a>(pub &'a [String]);

impl OneOf<'_> {
    pub fn validate(&self, value: &str, field: &str) -> Result<(), ValidationError> {
        if self.0.iter().any(|allowed| sanitize(allowed) == value) {
            Ok(())
        } else {
            Err(ValidationError::membership(field))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_alpha() {
        assert!(IsAlpha::validate("abcXYZ", "field").is_ok());
        assert!(IsAlpha::validate("J.R.R", "field").is_ok());
        assert!(IsAlpha::validate("abc123", "field").is_err());
        assert!(IsAlpha::validate("abc xyz", "field").is_err());
        assert!(IsAlpha::validate("", "field").is_err());
    }

    #[test]
    fn test_is_alpha_message() {
        let error = IsAlpha::validate("r2d2", "first_name").unwrap_err();
        assert_eq!(
            error.to_string(),
            "First name should contain only alphabetical characters"
        );
    }

    #[test]
    fn test_is_alpha_space() {
        assert!(IsAlphaSpace::validate("Mary Ann", "field").is_ok());
        assert!(IsAlphaSpace::validate("  padded  ", "field").is_ok());
        assert!(IsAlphaSpace::validate("Mary-Ann", "field").is_err());
        assert!(IsAlphaSpace::validate("J.R.R", "field").is_err());
        assert!(IsAlphaSpace::validate("   ", "field").is_err());
        assert!(IsAlphaSpace::validate("", "field").is_err());
    }

    #[test]
    fn test_is_numeric() {
        for ok in ["12345", "-1", "+3.14", ".5", "5.", "1e10", "2.5E-3", "0"] {
            assert!(IsNumeric::validate(ok, "field").is_ok(), "{ok}");
        }
        for bad in ["abc", "", "1.2.3", "0x1A", "inf", "NaN", "1e", "--1", "1 000"] {
            assert!(IsNumeric::validate(bad, "field").is_err(), "{bad}");
        }
    }

    #[test]
    fn test_is_integer() {
        for ok in ["0", "42", "-17", "+8", "9223372036854775807"] {
            assert!(IsInteger::validate(ok, "field").is_ok(), "{ok}");
        }
        for bad in ["17abc", "007", "1.0", "", "9223372036854775808", "-"] {
            assert!(IsInteger::validate(bad, "field").is_err(), "{bad}");
        }
    }

    #[test]
    fn test_is_integer_message() {
        let error = IsInteger::validate("17abc", "age").unwrap_err();
        assert_eq!(error.to_string(), "Age should be an integer value");
        assert_eq!(error.constraint(), "validate_int");
    }

    #[test]
    fn test_is_float() {
        for ok in ["0", "1.5", "-0.25", "3", "6.02e23"] {
            assert!(IsFloat::validate(ok, "field").is_ok(), "{ok}");
        }
        for bad in ["1,5", "abc", "", "inf", "1e999"] {
            assert!(IsFloat::validate(bad, "field").is_err(), "{bad}");
        }
    }

    #[test]
    fn test_is_boolean() {
        for ok in ["true", "FALSE", "1", "0", "yes", "No", "on", "off"] {
            assert!(IsBoolean::validate(ok, "field").is_ok(), "{ok}");
        }
        for bad in ["", "maybe", "2", "y"] {
            assert!(IsBoolean::validate(bad, "field").is_err(), "{bad}");
        }
    }

    #[test]
    fn test_is_url() {
        assert!(IsUrl::validate("https://example.com", "url").is_ok());
        assert!(IsUrl::validate("http://localhost:8080/path?q=1", "url").is_ok());
        assert!(IsUrl::validate("mailto:someone@example.com", "url").is_ok());
        assert!(IsUrl::validate("ftp://files.example.org/a.txt", "url").is_ok());
    }

    #[test]
    fn test_is_url_rejects() {
        for bad in ["not-a-url", "", "//example.com", "http://", "https://exa mple.com", "example.com"] {
            assert!(IsUrl::validate(bad, "url").is_err(), "{bad}");
        }

        let error = IsUrl::validate("not-a-url", "site").unwrap_err();
        assert_eq!(error.to_string(), "Site is not a valid url");
    }

    #[test]
    fn test_min_length() {
        let validator = MinLength::chars(5);
        assert!(validator.validate("hello", "field").is_ok());
        assert!(validator.validate("héllo", "field").is_ok());
        assert!(validator.validate("four", "field").is_err());

        let error = validator.validate("bob", "username").unwrap_err();
        assert_eq!(error.to_string(), "Username should be 5 characters or longer");
    }

    #[test]
    fn test_min_length_bytes() {
        let validator = MinLength {
            min: 6,
            unit: LengthUnit::Bytes,
        };
        assert!(validator.validate("héllo", "field").is_ok());
        assert!(validator.validate("hello", "field").is_err());
    }

    #[test]
    fn test_max_length() {
        let validator = MaxLength::chars(5);
        assert!(validator.validate("exact", "field").is_ok());
        assert!(validator.validate("", "field").is_ok());

        let error = validator.validate("sixsix", "nick_name").unwrap_err();
        assert_eq!(error.to_string(), "Nick name should be 5 characters or shorter");
        assert!(matches!(error, ValidationError::Length { limit: 5, .. }));
    }

    #[test]
    fn test_one_of() {
        let allowed = vec!["red".to_string(), "green".to_string(), "blue".to_string()];
        let validator = OneOf(&allowed);

        assert!(validator.validate("blue", "color").is_ok());
        assert!(validator.validate("Blue", "color").is_err());

        let error = validator.validate("pink", "color").unwrap_err();
        assert_eq!(error.to_string(), "Color is not part of the allowed list");
    }

    #[test]
    fn test_one_of_matches_encoded_values() {
        let allowed = vec!["AT&T".to_string(), "O'Brien".to_string(), "Verizon".to_string()];
        let validator = OneOf(&allowed);

        assert!(validator.validate(&sanitize("AT&T"), "carrier").is_ok());
        assert!(validator.validate(&sanitize("O'Brien"), "carrier").is_ok());
        assert!(validator.validate("AT&T", "carrier").is_err());
    }

    #[test]
    fn test_length_counts_decoded_text() {
        assert!(MaxLength::chars(3).validate(&sanitize("A&B"), "name").is_ok());
        assert!(MaxLength::chars(7).validate(&sanitize("O'Brien"), "name").is_ok());
        assert!(MinLength::chars(3).validate(&sanitize("1<2"), "name").is_ok());
        assert!(MaxLength::chars(2).validate(&sanitize("A&B"), "name").is_err());

        let bytes = MaxLength {
            max: 3,
            unit: LengthUnit::Bytes,
        };
        assert!(bytes.validate("&quot;x&quot;", "name").is_ok());
    }

    #[test]
    fn test_one_of_empty_set() {
        assert!(OneOf(&[]).validate("anything", "field").is_err());
    }
}
