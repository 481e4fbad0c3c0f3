//! Rules command - list the registered validation rules.

use colored::Colorize;
use formcheck_validation::{REQUIRED, Rule};

use crate::OutputFormat;
use crate::error::CliResult;

/// Print every registered rule.
pub fn run(format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => {
            let mut rules: Vec<_> = Rule::all()
                .iter()
                .map(|rule| {
                    serde_json::json!({
                        "name": rule.name(),
                        "parameter": rule.parameter_kind().as_str(),
                        "message": rule.description(),
                    })
                })
                .collect();
            rules.insert(
                0,
                serde_json::json!({
                    "name": REQUIRED,
                    "parameter": "flag",
                    "message": "cannot be blank",
                }),
            );
            println!("{}", serde_json::to_string_pretty(&rules)?);
        }
        OutputFormat::Text => {
            println!();
            println!("  {}", "Validation rules".bright_cyan().bold());
            println!();
            print_row(REQUIRED, "flag", "cannot be blank");
            for rule in Rule::all() {
                print_row(rule.name(), rule.parameter_kind().as_str(), rule.description());
            }
            println!();
        }
    }

    Ok(())
}

fn print_row(name: &str, parameter: &str, message: &str) {
    println!(
        "  {:<16} {:<9} {}",
        name.bright_white().bold(),
        parameter.dimmed(),
        message
    );
}
