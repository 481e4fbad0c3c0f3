//! Error types for the formcheck CLI.

use formcheck_validation::FieldDataError;
use std::fmt;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug)]
pub enum CliError {
    /// IO error while reading an input file
    Io { path: String, source: std::io::Error },

    /// File could not be parsed as JSON or TOML
    Parse { path: String, message: String },

    /// File extension is not a supported format
    UnsupportedFormat(String),

    /// Field data has an unusable shape
    Input(FieldDataError),

    /// Output could not be rendered
    Output(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io { path, source } => write!(f, "Failed to read {}: {}", path, source),
            CliError::Parse { path, message } => write!(f, "Failed to parse {}: {}", path, message),
            CliError::UnsupportedFormat(path) => write!(
                f,
                "Unsupported file format: {} (expected .json or .toml)",
                path
            ),
            CliError::Input(e) => write!(f, "Invalid field data: {}", e),
            CliError::Output(msg) => write!(f, "Output error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io { source, .. } => Some(source),
            CliError::Input(e) => Some(e),
            _ => None,
        }
    }
}

impl From<FieldDataError> for CliError {
    fn from(e: FieldDataError) -> Self {
        CliError::Input(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Output(e.to_string())
    }
}
