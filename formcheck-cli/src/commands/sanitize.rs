//! Sanitize command - print field data as the validator sees it.

use formcheck_validation::{FieldData, sanitize_fields};

use crate::error::CliResult;
use crate::loader;

/// Sanitize a field file and print it as JSON.
pub fn run(fields: &str) -> CliResult<()> {
    let data = FieldData::try_from(loader::load_value(fields)?)?;
    let clean = sanitize_fields(data);

    println!("{}", serde_json::to_string_pretty(&clean)?);
    Ok(())
}
