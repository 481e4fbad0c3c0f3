//! Fail-fast validation engine

use crate::config::ValidatorConfig;
use crate::fields::{FieldData, sanitize_fields};
use crate::registry::Rule;
use crate::rules::RuleSpec;
use crate::ValidationError;
use tracing::{debug, trace};

/// Outcome of a validation pass: the first violation, if any
pub type ValidationResult = Result<(), ValidationError>;

/// Validates submitted fields against a [`RuleSpec`].
///
/// Fields are visited in submission order and rules in declaration order;
/// the first violation ends the pass. Field data and rules are never
/// modified, so repeated passes give the same outcome.
#[derive(Debug, Clone)]
pub struct FormValidator {
    fields: FieldData,
    rules: RuleSpec,
    config: ValidatorConfig,
    failure: Option<ValidationError>,
}

impl FormValidator {
    /// Sanitize `data` and build a validator with default settings
    pub fn new(data: impl Into<FieldData>, rules: RuleSpec) -> Self {
        Self::with_config(data, rules, ValidatorConfig::default())
    }

    /// Sanitize `data` and build a validator with `config`
    pub fn with_config(data: impl Into<FieldData>, rules: RuleSpec, config: ValidatorConfig) -> Self {
        Self::from_sanitized(sanitize_fields(data.into()), rules, config)
    }

    /// Build a validator over data that is already sanitized
    pub fn from_sanitized(fields: FieldData, rules: RuleSpec, config: ValidatorConfig) -> Self {
        Self {
            fields,
            rules,
            config,
            failure: None,
        }
    }

    /// Run a pass and record its outcome.
    ///
    /// Returns `true` when every rule holds. After a failed pass the message
    /// is available from [`error`](Self::error).
    pub fn validate(&mut self) -> bool {
        match self.run() {
            Ok(()) => {
                self.failure = None;
                true
            }
            Err(error) => {
                self.failure = Some(error);
                false
            }
        }
    }

    /// Run a pass without recording anything
    pub fn run(&self) -> ValidationResult {
        let fields = match &self.fields {
            FieldData::Map(map) if !map.is_empty() => map,
            _ => {
                debug!("validation failed: no field data");
                return Err(ValidationError::NoData);
            }
        };

        for (field, value) in fields {
            let Some(rules) = self.rules.get(field) else {
                trace!(field = %field, "no rules declared");
                continue;
            };

            if rules.is_required() && self.config.is_blank(value) {
                debug!(field = %field, "required field is blank");
                return Err(ValidationError::required(field));
            }

            for (name, param) in rules.checks() {
                let rule = Rule::from_name(name).ok_or_else(|| {
                    debug!(field = %field, rule = name, "unknown validation rule");
                    ValidationError::unknown_rule(field, name)
                })?;

                trace!(field = %field, rule = name, "checking rule");
                if let Err(error) = rule.check(field, value, param, &self.config) {
                    debug!(field = %field, rule = name, error = %error, "validation failed");
                    return Err(error);
                }
            }
        }

        debug!(fields = fields.len(), "validation passed");
        Ok(())
    }

    /// Message of the last failed pass
    pub fn error(&self) -> Option<&str> {
        self.failure.as_ref().map(ValidationError::message)
    }

    /// Error of the last failed pass
    pub fn failure(&self) -> Option<&ValidationError> {
        self.failure.as_ref()
    }

    /// Sanitized field data, as validated
    pub fn fields(&self) -> &FieldData {
        &self.fields
    }

    /// Rule specification
    pub fn rules(&self) -> &RuleSpec {
        &self.rules
    }

    /// Engine configuration
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }
}

/// Sanitize `data` and validate it against `rules` in one step
pub fn validate_fields(data: impl Into<FieldData>, rules: RuleSpec) -> ValidationResult {
    FormValidator::new(data, rules).run()
}
