// formcheck - declarative validation of submitted form fields
//
// Raw field values are sanitized once, then checked field by field against
// named rules; the first violation is reported as a single message.

// Re-export the validation engine
pub use formcheck_validation::*;

// Re-export the sanitizer crate
pub use formcheck_xss;

pub use formcheck_xss::{FieldSanitizer, HtmlEncoder, sanitize};

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        FieldData,
        FieldRules,
        FormValidator,
        RuleParam,
        RuleSpec,
        ValidationError,
        ValidationResult,
        ValidatorConfig,
        sanitize_fields,
        validate_fields,
    };
}
