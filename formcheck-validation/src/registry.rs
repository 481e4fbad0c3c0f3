//! Named rule registry
//!
//! Maps the rule names used in a [`RuleSpec`](crate::RuleSpec) to the
//! built-in validators. The table is built once, on first lookup.

use crate::config::ValidatorConfig;
use crate::rules::RuleParam;
use crate::validators::*;
use crate::ValidationError;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

static RULES: Lazy<HashMap<&'static str, Rule>> =
    Lazy::new(|| Rule::all().iter().map(|rule| (rule.name(), *rule)).collect());

/// Shape of the parameter a rule expects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Presence flag only
    Flag,
    /// Non-negative integer
    Limit,
    /// List of allowed values
    Set,
}

impl ParamKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamKind::Flag => "flag",
            ParamKind::Limit => "integer",
            ParamKind::Set => "list",
        }
    }
}

/// A registered validation rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Alpha,
    AlphaSpace,
    Numeric,
    Integer,
    Boolean,
    Float,
    Url,
    MinLength,
    MaxLength,
    FromArray,
}

impl Rule {
    /// Every registered rule, in documentation order
    pub fn all() -> &'static [Rule] {
        &[
            Rule::Alpha,
            Rule::AlphaSpace,
            Rule::Numeric,
            Rule::Integer,
            Rule::Boolean,
            Rule::Float,
            Rule::Url,
            Rule::MinLength,
            Rule::MaxLength,
            Rule::FromArray,
        ]
    }

    /// Look up a rule by the name used in rule specifications
    pub fn from_name(name: &str) -> Option<Rule> {
        RULES.get(name).copied()
    }

    /// Name used in rule specifications
    pub fn name(&self) -> &'static str {
        match self {
            Rule::Alpha => "alpha",
            Rule::AlphaSpace => "alpha_space",
            Rule::Numeric => "numeric",
            Rule::Integer => "validate_int",
            Rule::Boolean => "validate_bool",
            Rule::Float => "validate_float",
            Rule::Url => "validate_url",
            Rule::MinLength => "min_length",
            Rule::MaxLength => "max_length",
            Rule::FromArray => "from_array",
        }
    }

    /// Parameter shape the rule expects
    pub fn parameter_kind(&self) -> ParamKind {
        match self {
            Rule::MinLength | Rule::MaxLength => ParamKind::Limit,
            Rule::FromArray => ParamKind::Set,
            _ => ParamKind::Flag,
        }
    }

    /// Failure message, without the field label
    pub fn description(&self) -> &'static str {
        match self {
            Rule::Alpha => "should contain only alphabetical characters",
            Rule::AlphaSpace => "must contain letters and spaces only",
            Rule::Numeric => "should be a numeric value",
            Rule::Integer => "should be an integer value",
            Rule::Boolean => "should be a true or false value",
            Rule::Float => "should be a float value",
            Rule::Url => "is not a valid url",
            Rule::MinLength => "should be N characters or longer",
            Rule::MaxLength => "should be N characters or shorter",
            Rule::FromArray => "is not part of the allowed list",
        }
    }

    /// Run the rule against a sanitized value.
    ///
    /// Flag rules declared with `false` are skipped. Length rules need a
    /// [`RuleParam::Limit`] and `from_array` a [`RuleParam::Set`]; any other
    /// parameter is reported as [`ValidationError::InvalidParameter`].
    pub fn check(
        &self,
        field: &str,
        value: &str,
        param: &RuleParam,
        config: &ValidatorConfig,
    ) -> Result<(), ValidationError> {
        match self.parameter_kind() {
            ParamKind::Flag if !param.is_enabled() => return Ok(()),
            ParamKind::Flag => {}
            ParamKind::Limit if param.as_limit().is_none() => {
                return Err(ValidationError::invalid_parameter(field, self.name()));
            }
            ParamKind::Set if param.as_set().is_none() => {
                return Err(ValidationError::invalid_parameter(field, self.name()));
            }
            ParamKind::Limit | ParamKind::Set => {}
        }

        match self {
            Rule::Alpha => IsAlpha::validate(value, field),
            Rule::AlphaSpace => IsAlphaSpace::validate(value, field),
            Rule::Numeric => IsNumeric::validate(value, field),
            Rule::Integer => IsInteger::validate(value, field),
            Rule::Boolean => IsBoolean::validate(value, field),
            Rule::Float => IsFloat::validate(value, field),
            Rule::Url => IsUrl::validate(value, field),
            Rule::MinLength => MinLength {
                min: param.as_limit().unwrap_or_default(),
                unit: config.length_unit,
            }
            .validate(value, field),
            Rule::MaxLength => MaxLength {
                max: param.as_limit().unwrap_or_default(),
                unit: config.length_unit,
            }
            .validate(value, field),
            Rule::FromArray => OneOf(param.as_set().unwrap_or_default()).validate(value, field),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
