//! # Formcheck XSS
//!
//! Sanitization of raw field values before they reach the validation engine.
//!
//! ## Features
//!
//! - ✅ **Markup Stripping** - Remove tags, drop `script`/`style` content
//! - ✅ **Entity Escaping** - Neutralize `<`, `>`, `&` and quotes
//! - ✅ **Whitespace Normalization** - Collapse runs, trim both ends
//!
//! ## Quick Start
//!
//! ```rust
//! use formcheck_xss::{sanitize, FieldSanitizer, HtmlEncoder};
//!
//! assert_eq!(sanitize("  <b>John</b>   Doe "), "John Doe");
//!
//! let sanitizer = FieldSanitizer::new();
//! let clean = sanitizer.sanitize("<script>alert('XSS')</script>hello");
//! assert_eq!(clean, "hello");
//!
//! let encoded = HtmlEncoder::encode_html("<i>");
//! assert_eq!(encoded, "&lt;i&gt;");
//! ```
//!
//! The sanitizer is deterministic and has no configuration: running it twice
//! yields the same value as running it once.
//!
//! ```rust
//! use formcheck_xss::sanitize;
//!
//! let once = sanitize(r#"Tom's "cat" & <em>dog</em>"#);
//! assert_eq!(sanitize(&once), once);
//! ```

pub mod encoder;
pub mod sanitizer;

pub use encoder::HtmlEncoder;
pub use sanitizer::{FieldSanitizer, sanitize};
