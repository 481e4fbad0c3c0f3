//! Input file loading.

use crate::error::{CliError, CliResult};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Path that reads from standard input
pub const STDIN: &str = "-";

/// Supported input file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Toml,
}

impl FileFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(FileFormat::Json),
            "toml" => Some(FileFormat::Toml),
            _ => None,
        }
    }

    /// Detect format from a path; standard input is read as JSON
    pub fn detect(path: &str) -> CliResult<Self> {
        if path == STDIN {
            return Ok(FileFormat::Json);
        }

        Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(FileFormat::from_extension)
            .ok_or_else(|| CliError::UnsupportedFormat(path.to_string()))
    }
}

/// Read a file (or standard input) into a JSON value
pub fn load_value(path: &str) -> CliResult<Value> {
    load(path)
}

/// Read a file (or standard input) into any deserializable type
pub fn load<T: DeserializeOwned>(path: &str) -> CliResult<T> {
    let format = FileFormat::detect(path)?;
    let content = read_source(path)?;

    tracing::debug!(path, ?format, bytes = content.len(), "loaded input file");
    parse(path, &content, format)
}

/// Parse content in the given format
pub fn parse<T: DeserializeOwned>(path: &str, content: &str, format: FileFormat) -> CliResult<T> {
    let parse_error = |message: String| CliError::Parse {
        path: path.to_string(),
        message,
    };

    match format {
        FileFormat::Json => {
            serde_json::from_str(content).map_err(|e| parse_error(format!("JSON parse error: {}", e)))
        }
        FileFormat::Toml => {
            toml::from_str(content).map_err(|e| parse_error(format!("TOML parse error: {}", e)))
        }
    }
}

fn read_source(path: &str) -> CliResult<String> {
    let io_error = |source| CliError::Io {
        path: path.to_string(),
        source,
    };

    if path == STDIN {
        let mut content = String::new();
        io::stdin().read_to_string(&mut content).map_err(io_error)?;
        Ok(content)
    } else {
        fs::read_to_string(path).map_err(io_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formcheck_validation::RuleSpec;

    #[test]
    fn test_detect_format() {
        assert_eq!(FileFormat::detect("rules.json").unwrap(), FileFormat::Json);
        assert_eq!(FileFormat::detect("rules.TOML").unwrap(), FileFormat::Toml);
        assert_eq!(FileFormat::detect(STDIN).unwrap(), FileFormat::Json);
        assert!(matches!(
            FileFormat::detect("rules.yaml"),
            Err(CliError::UnsupportedFormat(_))
        ));
        assert!(FileFormat::detect("rules").is_err());
    }

    #[test]
    fn test_parse_json_rules() {
        let spec: RuleSpec = parse(
            "rules.json",
            r#"{"name": {"required": true}}"#,
            FileFormat::Json,
        )
        .unwrap();

        assert!(spec.get("name").unwrap().is_required());
    }

    #[test]
    fn test_parse_toml_value_keeps_order() {
        let value: Value = parse(
            "fields.toml",
            "zeta = \"z\"\nalpha = \"a\"\n",
            FileFormat::Toml,
        )
        .unwrap();

        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_parse_error_names_file() {
        let result: CliResult<Value> = parse("broken.json", "{", FileFormat::Json);
        let message = result.unwrap_err().to_string();

        assert!(message.starts_with("Failed to parse broken.json: JSON parse error"));
    }

    #[test]
    fn test_missing_file() {
        let result = load_value("/nonexistent/fields.json");
        assert!(matches!(result, Err(CliError::Io { .. })));
    }
}
