//! CLI command implementations.

pub mod rules;
pub mod sanitize;
pub mod validate;
