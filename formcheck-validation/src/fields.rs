//! Field data handed to the engine

use formcheck_xss::FieldSanitizer;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Input shapes that cannot be turned into field data
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldDataError {
    /// A field holds an array or object instead of a scalar
    #[error("Field '{0}' holds a nested value; only scalar fields are supported")]
    NestedValue(String),

    /// The input is neither a mapping nor a scalar
    #[error("Unsupported field data: expected an object or a string, got {0}")]
    Unsupported(&'static str),
}

/// Submitted field values.
///
/// A bare `Text` value is accepted so that callers can hand over whatever
/// they received; the engine only validates `Map` data and rejects the rest
/// as "no data".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldData {
    /// A single value rather than a mapping
    Text(String),
    /// Field name to value, in submission order
    Map(IndexMap<String, String>),
}

impl FieldData {
    /// Create an empty mapping
    pub fn new() -> Self {
        FieldData::Map(IndexMap::new())
    }

    /// Add a field, turning `Text` data into a mapping
    pub fn with(self, field: impl Into<String>, value: impl Into<String>) -> Self {
        let mut map = match self {
            FieldData::Map(map) => map,
            FieldData::Text(_) => IndexMap::new(),
        };
        map.insert(field.into(), value.into());
        FieldData::Map(map)
    }

    /// Get the mapping, if this is one
    pub fn as_map(&self) -> Option<&IndexMap<String, String>> {
        match self {
            FieldData::Map(map) => Some(map),
            FieldData::Text(_) => None,
        }
    }

    /// Get a single field value
    pub fn get(&self, field: &str) -> Option<&str> {
        self.as_map()?.get(field).map(String::as_str)
    }

    /// Check if there is nothing to validate
    pub fn is_empty(&self) -> bool {
        match self {
            FieldData::Map(map) => map.is_empty(),
            FieldData::Text(text) => text.is_empty(),
        }
    }

    /// Number of fields (zero for `Text`)
    pub fn len(&self) -> usize {
        self.as_map().map_or(0, IndexMap::len)
    }
}

impl Default for FieldData {
    fn default() -> Self {
        Self::new()
    }
}

impl From<IndexMap<String, String>> for FieldData {
    fn from(map: IndexMap<String, String>) -> Self {
        FieldData::Map(map)
    }
}

impl From<String> for FieldData {
    fn from(text: String) -> Self {
        FieldData::Text(text)
    }
}

impl From<&str> for FieldData {
    fn from(text: &str) -> Self {
        FieldData::Text(text.to_string())
    }
}

impl<K, V> FromIterator<(K, V)> for FieldData
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        FieldData::Map(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for FieldData
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl TryFrom<Value> for FieldData {
    type Error = FieldDataError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(object) => {
                let mut map = IndexMap::with_capacity(object.len());
                for (field, value) in object {
                    let text = scalar_text(value).ok_or_else(|| {
                        FieldDataError::NestedValue(field.clone())
                    })?;
                    map.insert(field, text);
                }
                Ok(FieldData::Map(map))
            }
            Value::Array(_) => Err(FieldDataError::Unsupported("array")),
            other => scalar_text(other)
                .map(FieldData::Text)
                .ok_or(FieldDataError::Unsupported("value")),
        }
    }
}

pub(crate) fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Sanitize raw field data.
///
/// Every value goes through [`FieldSanitizer`]; field names and their order
/// are kept as submitted.
pub fn sanitize_fields(raw: FieldData) -> FieldData {
    let sanitizer = FieldSanitizer::new();

    match raw {
        FieldData::Text(text) => FieldData::Text(sanitizer.sanitize(&text)),
        FieldData::Map(map) => FieldData::Map(
            map.into_iter()
                .map(|(field, value)| {
                    let clean = sanitizer.sanitize(&value);
                    (field, clean)
                })
                .collect(),
        ),
    }
}
