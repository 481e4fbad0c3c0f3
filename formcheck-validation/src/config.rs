//! Engine configuration

use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable enabling the loose "0 is blank" rule
pub const ENV_ZERO_IS_BLANK: &str = "FORMCHECK_ZERO_IS_BLANK";

/// Environment variable selecting the length unit (`chars` or `bytes`)
pub const ENV_LENGTH_UNIT: &str = "FORMCHECK_LENGTH_UNIT";

/// How `min_length` and `max_length` measure a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthUnit {
    /// Unicode scalar values
    #[default]
    Chars,
    /// UTF-8 bytes
    Bytes,
}

impl LengthUnit {
    /// Get unit from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "chars" | "char" | "characters" => Some(LengthUnit::Chars),
            "bytes" | "byte" => Some(LengthUnit::Bytes),
            _ => None,
        }
    }

    /// Measure a value in this unit
    pub fn measure(&self, value: &str) -> usize {
        match self {
            LengthUnit::Chars => value.chars().count(),
            LengthUnit::Bytes => value.len(),
        }
    }
}

/// Configuration for [`FormValidator`](crate::FormValidator)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Treat the literal `"0"` as blank when checking `required`
    pub zero_is_blank: bool,
    /// Unit used by the length rules
    pub length_unit: LengthUnit,
}

impl ValidatorConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Create config from an arbitrary variable lookup
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let zero_is_blank = lookup(ENV_ZERO_IS_BLANK)
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let length_unit = lookup(ENV_LENGTH_UNIT)
            .and_then(|v| LengthUnit::parse(&v))
            .unwrap_or_default();

        Self {
            zero_is_blank,
            length_unit,
        }
    }

    /// Set whether `"0"` counts as blank
    pub fn zero_is_blank(mut self, enabled: bool) -> Self {
        self.zero_is_blank = enabled;
        self
    }

    /// Set the length unit
    pub fn length_unit(mut self, unit: LengthUnit) -> Self {
        self.length_unit = unit;
        self
    }

    /// Check whether a sanitized value is blank under this configuration
    pub fn is_blank(&self, value: &str) -> bool {
        value.is_empty() || (self.zero_is_blank && value == "0")
    }
}
