//! Validation errors

use thiserror::Error;

/// Message reported when there is no field mapping to validate
pub const NO_DATA_MESSAGE: &str = "There was no data to process";

/// Message reported for a rule name with no registered check
pub const UNKNOWN_RULE_MESSAGE: &str = "Invalid validation rule";

/// The first violation found by a validation pass
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The field data is empty or is not a mapping
    #[error("There was no data to process")]
    NoData,

    /// A required field is blank
    #[error("{message}")]
    RequiredField { field: String, message: String },

    /// A format rule rejected the value
    #[error("{message}")]
    Format {
        field: String,
        rule: &'static str,
        message: String,
    },

    /// A length rule rejected the value
    #[error("{message}")]
    Length {
        field: String,
        rule: &'static str,
        limit: usize,
        message: String,
    },

    /// The value is not one of the allowed values
    #[error("{message}")]
    Membership { field: String, message: String },

    /// A declared rule has no registered check
    #[error("Invalid validation rule")]
    UnknownRule { field: String, rule: String },

    /// A rule was declared with a parameter of the wrong shape
    #[error("{message}")]
    InvalidParameter {
        field: String,
        rule: String,
        message: String,
    },
}

impl ValidationError {
    /// Create a blank-required-field error
    pub fn required(field: &str) -> Self {
        Self::RequiredField {
            field: field.to_string(),
            message: format_message(field, "cannot be blank"),
        }
    }

    /// Create a format error for `rule`
    pub fn format(field: &str, rule: &'static str, msg: &str) -> Self {
        Self::Format {
            field: field.to_string(),
            rule,
            message: format_message(field, msg),
        }
    }

    /// Create a length error for `rule`
    pub fn length(field: &str, rule: &'static str, limit: usize, msg: &str) -> Self {
        Self::Length {
            field: field.to_string(),
            rule,
            limit,
            message: format_message(field, msg),
        }
    }

    /// Create a membership error
    pub fn membership(field: &str) -> Self {
        Self::Membership {
            field: field.to_string(),
            message: format_message(field, "is not part of the allowed list"),
        }
    }

    /// Create an unknown-rule error
    pub fn unknown_rule(field: &str, rule: &str) -> Self {
        Self::UnknownRule {
            field: field.to_string(),
            rule: rule.to_string(),
        }
    }

    /// Create an invalid-parameter error
    pub fn invalid_parameter(field: &str, rule: &str) -> Self {
        Self::InvalidParameter {
            field: field.to_string(),
            rule: rule.to_string(),
            message: format!("Invalid parameter for validation rule {}", rule),
        }
    }

    /// The human-readable message
    pub fn message(&self) -> &str {
        match self {
            Self::NoData => NO_DATA_MESSAGE,
            Self::UnknownRule { .. } => UNKNOWN_RULE_MESSAGE,
            Self::RequiredField { message, .. }
            | Self::Format { message, .. }
            | Self::Length { message, .. }
            | Self::Membership { message, .. }
            | Self::InvalidParameter { message, .. } => message,
        }
    }

    /// Field the error belongs to, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::NoData => None,
            Self::RequiredField { field, .. }
            | Self::Format { field, .. }
            | Self::Length { field, .. }
            | Self::Membership { field, .. }
            | Self::UnknownRule { field, .. }
            | Self::InvalidParameter { field, .. } => Some(field),
        }
    }

    /// Name of the constraint that failed
    pub fn constraint(&self) -> &str {
        match self {
            Self::NoData => "no_data",
            Self::RequiredField { .. } => "required",
            Self::Format { rule, .. } | Self::Length { rule, .. } => rule,
            Self::Membership { .. } => "from_array",
            Self::UnknownRule { rule, .. } | Self::InvalidParameter { rule, .. } => rule,
        }
    }

    /// Convert to JSON representation
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "field": self.field(),
            "message": self.message(),
            "constraint": self.constraint(),
        })
    }
}

/// Format a field name for display.
///
/// Underscores become spaces and the first letter is capitalized.
pub fn field_label(field: &str) -> String {
    let spaced = field.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn format_message(field: &str, msg: &str) -> String {
    let label = field_label(field);
    if label.is_empty() {
        msg.to_string()
    } else {
        format!("{} {}", label, msg)
    }
}
