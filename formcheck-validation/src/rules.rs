//! Rule specification builder
//!
//! Rule files keep their declaration order when loaded from JSON. TOML
//! callers need the `preserve_order` feature of the `toml` crate, otherwise
//! tables come back sorted by key.

use crate::fields::scalar_text;
use indexmap::IndexMap;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Marker rule consumed by the engine rather than the registry
pub const REQUIRED: &str = "required";

/// A rule parameter that fits none of the [`RuleParam`] shapes
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid rule parameter {0}: expected null, a boolean, a non-negative integer or a list of values")]
pub struct RuleParamError(pub String);

/// Parameter attached to a declared rule.
///
/// Rule files are loosely typed: numeric strings are limits, boolean words
/// (`"yes"`, `"off"`, ...) are flags and list members are kept as text, so
/// `[1, 2]` allows the values `"1"` and `"2"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RuleParam {
    /// No parameter (`null`)
    None,
    /// Presence flag; `false` disables the rule
    Flag(bool),
    /// Length limit
    Limit(usize),
    /// Allowed values
    Set(Vec<String>),
}

impl RuleParam {
    /// Whether the parameter switches its rule on
    pub fn is_enabled(&self) -> bool {
        !matches!(self, RuleParam::Flag(false) | RuleParam::Limit(0))
    }

    /// Truthiness used for the `required` marker
    pub fn is_truthy(&self) -> bool {
        match self {
            RuleParam::None => false,
            RuleParam::Flag(flag) => *flag,
            RuleParam::Limit(n) => *n > 0,
            RuleParam::Set(values) => !values.is_empty(),
        }
    }

    /// Get the limit, if this is one
    pub fn as_limit(&self) -> Option<usize> {
        match self {
            RuleParam::Limit(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the allowed values, if this is a set
    pub fn as_set(&self) -> Option<&[String]> {
        match self {
            RuleParam::Set(values) => Some(values),
            _ => None,
        }
    }
}

impl TryFrom<Value> for RuleParam {
    type Error = RuleParamError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(RuleParam::None),
            Value::Bool(flag) => Ok(RuleParam::Flag(flag)),
            Value::Number(ref n) => n
                .as_u64()
                .and_then(|n| usize::try_from(n).ok())
                .map(RuleParam::Limit)
                .ok_or_else(|| RuleParamError(value.to_string())),
            Value::String(ref text) => {
                parse_text(text).ok_or_else(|| RuleParamError(value.to_string()))
            }
            Value::Array(items) => items
                .into_iter()
                .map(|item| {
                    let shown = item.to_string();
                    scalar_text(item).ok_or(RuleParamError(shown))
                })
                .collect::<Result<Vec<_>, _>>()
                .map(RuleParam::Set),
            Value::Object(_) => Err(RuleParamError(value.to_string())),
        }
    }
}

fn parse_text(text: &str) -> Option<RuleParam> {
    let text = text.trim();
    if let Ok(limit) = text.parse::<usize>() {
        return Some(RuleParam::Limit(limit));
    }

    match text.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" => Some(RuleParam::Flag(true)),
        "false" | "no" | "off" | "" => Some(RuleParam::Flag(false)),
        _ => None,
    }
}

impl<'de> Deserialize<'de> for RuleParam {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        RuleParam::try_from(value).map_err(de::Error::custom)
    }
}

impl From<bool> for RuleParam {
    fn from(flag: bool) -> Self {
        RuleParam::Flag(flag)
    }
}

impl From<usize> for RuleParam {
    fn from(limit: usize) -> Self {
        RuleParam::Limit(limit)
    }
}

impl From<Vec<String>> for RuleParam {
    fn from(values: Vec<String>) -> Self {
        RuleParam::Set(values)
    }
}

impl From<Vec<&str>> for RuleParam {
    fn from(values: Vec<&str>) -> Self {
        RuleParam::Set(values.into_iter().map(String::from).collect())
    }
}

impl<const N: usize> From<[&str; N]> for RuleParam {
    fn from(values: [&str; N]) -> Self {
        RuleParam::Set(values.into_iter().map(String::from).collect())
    }
}

/// Rules declared for one field, in declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldRules {
    rules: IndexMap<String, RuleParam>,
}

impl FieldRules {
    /// Create an empty rule set
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the field as required
    pub fn required(self) -> Self {
        self.rule(REQUIRED, true)
    }

    /// Declare a rule with a parameter
    pub fn rule(mut self, name: impl Into<String>, param: impl Into<RuleParam>) -> Self {
        self.rules.insert(name.into(), param.into());
        self
    }

    /// Declare a parameterless rule
    pub fn flag(self, name: impl Into<String>) -> Self {
        self.rule(name, true)
    }

    /// Check the `required` marker
    pub fn is_required(&self) -> bool {
        self.rules.get(REQUIRED).is_some_and(RuleParam::is_truthy)
    }

    /// Declared rules other than `required`, in order
    pub fn checks(&self) -> impl Iterator<Item = (&str, &RuleParam)> {
        self.rules
            .iter()
            .filter(|(name, _)| name.as_str() != REQUIRED)
            .map(|(name, param)| (name.as_str(), param))
    }

    /// Get the parameter of a declared rule
    pub fn get(&self, name: &str) -> Option<&RuleParam> {
        self.rules.get(name)
    }

    /// Check if no rules are declared
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Number of declared rules, `required` included
    pub fn len(&self) -> usize {
        self.rules.len()
    }
}

impl<K: Into<String>, P: Into<RuleParam>> FromIterator<(K, P)> for FieldRules {
    fn from_iter<I: IntoIterator<Item = (K, P)>>(iter: I) -> Self {
        Self {
            rules: iter
                .into_iter()
                .map(|(name, param)| (name.into(), param.into()))
                .collect(),
        }
    }
}

/// Rules for every field, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSpec {
    fields: IndexMap<String, FieldRules>,
}

impl RuleSpec {
    /// Create an empty specification
    pub fn new() -> Self {
        Self::default()
    }

    /// Add rules for a field
    pub fn field(mut self, name: impl Into<String>, rules: FieldRules) -> Self {
        self.fields.insert(name.into(), rules);
        self
    }

    /// Get the rules of a field
    pub fn get(&self, field: &str) -> Option<&FieldRules> {
        self.fields.get(field)
    }

    /// Iterate over fields and their rules
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldRules)> {
        self.fields.iter().map(|(name, rules)| (name.as_str(), rules))
    }

    /// Check if no field has rules
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of fields with rules
    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

impl<K: Into<String>> FromIterator<(K, FieldRules)> for RuleSpec {
    fn from_iter<I: IntoIterator<Item = (K, FieldRules)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(name, rules)| (name.into(), rules))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder() {
        let rules = FieldRules::new()
            .required()
            .flag("alpha")
            .rule("max_length", 10usize);

        assert!(rules.is_required());
        assert_eq!(rules.len(), 3);
        assert_eq!(
            rules.checks().collect::<Vec<_>>(),
            vec![("alpha", &RuleParam::Flag(true)), ("max_length", &RuleParam::Limit(10))]
        );
    }

    #[test]
    fn test_required_truthiness() {
        assert!(!FieldRules::new().is_required());
        assert!(!FieldRules::new().rule(REQUIRED, false).is_required());
        assert!(!FieldRules::new().rule(REQUIRED, RuleParam::None).is_required());
        assert!(FieldRules::new().rule(REQUIRED, 1usize).is_required());
    }

    #[test]
    fn test_param_from_json() {
        let rules: FieldRules = serde_json::from_value(json!({
            "required": true,
            "min_length": 5,
            "from_array": ["red", "green"],
            "validate_url": null
        }))
        .unwrap();

        assert_eq!(rules.get("required"), Some(&RuleParam::Flag(true)));
        assert_eq!(rules.get("min_length"), Some(&RuleParam::Limit(5)));
        assert_eq!(
            rules.get("from_array"),
            Some(&RuleParam::Set(vec!["red".to_string(), "green".to_string()]))
        );
        assert_eq!(rules.get("validate_url"), Some(&RuleParam::None));
    }

    #[test]
    fn test_negative_limit_rejected() {
        let result: Result<FieldRules, _> = serde_json::from_value(json!({"min_length": -1}));
        assert!(result.is_err());

        let result: Result<FieldRules, _> = serde_json::from_value(json!({"max_length": 2.5}));
        assert!(result.is_err());
    }

    #[test]
    fn test_scalar_members_become_text() {
        let spec: RuleSpec = serde_json::from_value(json!({
            "rating": {"from_array": [1, 2, 3]},
            "answer": {"from_array": ["yes", true, null]}
        }))
        .unwrap();

        assert_eq!(
            spec.get("rating").unwrap().get("from_array"),
            Some(&RuleParam::Set(vec!["1".into(), "2".into(), "3".into()]))
        );
        assert_eq!(
            spec.get("answer").unwrap().get("from_array"),
            Some(&RuleParam::Set(vec!["yes".into(), "true".into(), String::new()]))
        );
    }

    #[test]
    fn test_string_parameters() {
        let rules: FieldRules = serde_json::from_value(json!({
            "required": "1",
            "min_length": " 5 ",
            "alpha": "yes",
            "numeric": "Off"
        }))
        .unwrap();

        assert!(rules.is_required());
        assert_eq!(rules.get("min_length"), Some(&RuleParam::Limit(5)));
        assert_eq!(rules.get("alpha"), Some(&RuleParam::Flag(true)));
        assert_eq!(rules.get("numeric"), Some(&RuleParam::Flag(false)));

        let rules: FieldRules = serde_json::from_value(json!({"required": "0"})).unwrap();
        assert!(!rules.is_required());
    }

    #[test]
    fn test_unusable_parameters_rejected() {
        let error = serde_json::from_value::<FieldRules>(json!({"alpha": "maybe"})).unwrap_err();
        assert!(error.to_string().starts_with("Invalid rule parameter \"maybe\""));

        assert_eq!(
            RuleParam::try_from(json!({"min": 1})),
            Err(RuleParamError(r#"{"min":1}"#.to_string()))
        );
        assert_eq!(
            RuleParam::try_from(json!(["a", ["b"]])),
            Err(RuleParamError(r#"["b"]"#.to_string()))
        );
    }

    #[test]
    fn test_spec_keeps_declaration_order() {
        let spec: RuleSpec = serde_json::from_str(
            r#"{"zeta": {"alpha": true}, "alpha": {"numeric": true}, "mid": {}}"#,
        )
        .unwrap();

        let names: Vec<_> = spec.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_spec_from_toml() {
        let spec: RuleSpec = toml::from_str(
            r#"
            [username]
            required = true
            min_length = 3

            [color]
            from_array = ["red", "blue"]
            "#,
        )
        .unwrap();

        assert!(spec.get("username").unwrap().is_required());
        assert_eq!(
            spec.get("color").unwrap().get("from_array").and_then(RuleParam::as_set),
            Some(&["red".to_string(), "blue".to_string()][..])
        );

        let names: Vec<_> = spec.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["username", "color"]);
    }

    #[test]
    fn test_toml_rules_keep_declaration_order() {
        let spec: RuleSpec = toml::from_str(
            r#"
            [code]
            min_length = 5
            alpha = true
            "#,
        )
        .unwrap();

        let checks: Vec<_> = spec.get("code").unwrap().checks().map(|(name, _)| name).collect();
        assert_eq!(checks, vec!["min_length", "alpha"]);
    }

    #[test]
    fn test_is_enabled() {
        assert!(RuleParam::Flag(true).is_enabled());
        assert!(RuleParam::None.is_enabled());
        assert!(!RuleParam::Flag(false).is_enabled());
        assert!(RuleParam::Limit(1).is_enabled());
        assert!(!RuleParam::Limit(0).is_enabled());
    }
}
