//! Validate command - check field data against a rule file.

use colored::Colorize;
use formcheck_validation::{FieldData, FormValidator, RuleSpec, ValidatorConfig};
use serde_json::json;

use crate::error::CliResult;
use crate::loader;
use crate::OutputFormat;

/// Options for the validate command.
pub struct ValidateOptions<'a> {
    pub fields: &'a str,
    pub rules: &'a str,
    pub config: Option<&'a str>,
    pub format: OutputFormat,
}

/// Validate a field file and print the outcome.
///
/// Returns whether validation passed.
pub fn run(options: &ValidateOptions<'_>) -> CliResult<bool> {
    let data = FieldData::try_from(loader::load_value(options.fields)?)?;
    let rules: RuleSpec = loader::load(options.rules)?;
    let config: ValidatorConfig = match options.config {
        Some(path) => loader::load(path)?,
        None => ValidatorConfig::from_env(),
    };

    tracing::debug!(
        fields = data.len(),
        rules = rules.len(),
        ?config,
        "validating field data"
    );

    let mut validator = FormValidator::with_config(data, rules, config);
    let passed = validator.validate();

    match options.format {
        OutputFormat::Json => {
            let report = json!({
                "valid": passed,
                "error": validator.error(),
                "failure": validator.failure().map(|f| f.to_json()),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => match validator.error() {
            None => println!("{} {}", "✓".green(), "valid".green().bold()),
            Some(message) => println!("{} {}", "✗".red(), message.red()),
        },
    }

    Ok(passed)
}
