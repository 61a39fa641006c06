//! Parsed rule documents.

use serde_yaml::Value;

use crate::core::Category;

/// One successfully parsed document, tagged with the category it was loaded from.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Category decided by the source directory
    pub category: Category,
    /// Identity relative to the database root, `/`-separated
    pub file: String,
    /// Untyped YAML tree; an empty file is an empty mapping
    pub content: Value,
}

impl Document {
    /// Create a document.
    pub fn new(category: Category, file: impl Into<String>, content: Value) -> Self {
        Self {
            category,
            file: file.into(),
            content,
        }
    }

    /// Top-level `name`, when it is usable as a reference target.
    #[must_use]
    pub fn name(&self) -> Option<String> {
        self.content.get("name").and_then(super::scalar_text)
    }
}
