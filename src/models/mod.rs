//! Typed data model of a rule database.
//!
//! Documents arrive from the loader as untyped YAML trees ([`Document`]). Each
//! category has one entity type with a `from_document` conversion that checks
//! the document's shape once and records any shape problem as a [`Finding`]
//! inside the entity, at the position where it occurred:
//!
//! - [`RegexPattern`] - a name plus opaque payload
//! - [`CustomFormat`] / [`Condition`] - conditions and optional tests
//! - [`Profile`] / [`FormatRef`] - three reference lists of custom formats
//! - [`MediaManagementConfig`] - an opaque non-empty mapping
//!
//! Cross-document checks (does this name exist?) live in
//! [`crate::resolver`]; ordering and aggregation live in [`crate::validation`].

mod custom_format;
mod document;
mod finding;
mod media_management;
mod profile;
mod regex_pattern;

pub use custom_format::{Condition, CustomFormat};
pub use document::Document;
pub use finding::{Checked, Finding};
pub use media_management::MediaManagementConfig;
pub use profile::{FormatRef, Profile, ProfileField, ReferenceList};
pub use regex_pattern::RegexPattern;

use serde_yaml::Value;

/// Textual form of a scalar used as a name or reference.
///
/// Strings are taken as-is, numbers and booleans by their YAML text, so
/// `name: 2160` and `pattern: "2160"` refer to the same thing. Falsy scalars
/// (`''`, `0`, `0.0`, `false`), null, and collections yield `None`.
#[must_use]
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Bool(false) => None,
        other => scalar_label(other).filter(|text| !text.is_empty()),
    }
}

/// Textual form of any scalar, including falsy ones, for use in messages.
#[must_use]
pub fn scalar_label(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
