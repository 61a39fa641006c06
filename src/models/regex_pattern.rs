//! Regex pattern documents.

use serde_yaml::Value;

use super::Document;

/// A named, reusable regex pattern.
///
/// Only the name matters to validation; everything else is carried opaquely.
/// A pattern without a usable name cannot be referenced but is not invalid.
#[derive(Debug, Clone, PartialEq)]
pub struct RegexPattern {
    /// Source document identity
    pub file: String,
    /// Reference target, if present
    pub name: Option<String>,
    /// The whole document
    pub payload: Value,
}

impl RegexPattern {
    /// Convert a regex pattern document. This never fails.
    #[must_use]
    pub fn from_document(document: &Document) -> Self {
        Self {
            file: document.file.clone(),
            name: document.name(),
            payload: document.content.clone(),
        }
    }

    /// Whether other documents can refer to this pattern.
    #[must_use]
    pub fn is_referenceable(&self) -> bool {
        self.name.is_some()
    }
}
