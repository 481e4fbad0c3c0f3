//! Declarative field validation for formcheck
//!
//! Validates a mapping of submitted field values against per-field rules and
//! reports the first violation as a single human-readable message.
//!
//! # Examples
//!
//! ## Validating a Submission
//!
//! ```
//! use formcheck_validation::{FieldData, FieldRules, FormValidator, RuleSpec};
//!
//! let data = FieldData::from([("name", "john"), ("age", "17abc")]);
//! let rules = RuleSpec::new()
//!     .field("name", FieldRules::new().required().flag("alpha"))
//!     .field("age", FieldRules::new().required().flag("validate_int"));
//!
//! let mut validator = FormValidator::new(data, rules);
//! assert!(!validator.validate());
//! assert_eq!(validator.error(), Some("Age should be an integer value"));
//! ```
//!
//! ## Rules From JSON
//!
//! ```
//! use formcheck_validation::{validate_fields, FieldData, RuleSpec};
//!
//! let rules: RuleSpec = serde_json::from_str(
//!     r#"{"color": {"required": true, "from_array": ["red", "green", "blue"]}}"#,
//! )
//! .unwrap();
//!
//! assert!(validate_fields(FieldData::from([("color", "blue")]), rules).is_ok());
//! ```
//!
//! ## Individual Validators
//!
//! ```
//! use formcheck_validation::{IsUrl, MinLength};
//!
//! assert!(IsUrl::validate("https://example.com", "site").is_ok());
//!
//! let error = MinLength::chars(5).validate("bob", "username").unwrap_err();
//! assert_eq!(error.to_string(), "Username should be 5 characters or longer");
//! ```

mod config;
mod engine;
mod errors;
mod fields;
mod registry;
mod rules;
mod validators;

pub use config::*;
pub use engine::*;
pub use errors::*;
pub use fields::*;
pub use registry::*;
pub use rules::*;
pub use validators::*;
