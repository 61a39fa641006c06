//! Custom format documents and their conditions.

use serde_yaml::Value;

use super::{Checked, Document, Finding, scalar_label, scalar_text};

/// Field holding the condition list.
pub const CONDITIONS_FIELD: &str = "conditions";

/// One clause of a custom format.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Condition {
    /// Condition kind, e.g. `release_title` or `resolution`
    pub condition_type: Option<String>,
    /// Display name, used only in messages; empty names are kept
    pub name: Option<String>,
    /// Regex pattern reference; meaningful only for pattern-bearing kinds
    pub pattern: Option<String>,
}

impl Condition {
    fn from_value(file: &str, position: usize, value: &Value) -> Checked<Self> {
        if !value.is_mapping() {
            return Err(Finding::MalformedCondition {
                file: file.to_string(),
                position,
            });
        }

        Ok(Self {
            condition_type: value.get("type").and_then(Value::as_str).map(str::to_string),
            name: value.get("name").and_then(scalar_label),
            pattern: value.get("pattern").and_then(scalar_text),
        })
    }
}

/// A named rule built from conditions.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomFormat {
    /// Source document identity
    pub file: String,
    /// Reference target, if present
    pub name: Option<String>,
    /// Conditions in document order; `Err` when `conditions` is not a list
    pub conditions: Checked<Vec<Checked<Condition>>>,
    /// Optional test cases; `Err` when `tests` is present but not a list
    pub tests: Checked<Option<Vec<Value>>>,
}

impl CustomFormat {
    /// Convert a custom format document.
    ///
    /// # Errors
    ///
    /// Returns [`Finding::NonMappingDocument`] when the document is not a mapping.
    pub fn from_document(document: &Document) -> Checked<Self> {
        let file = &document.file;
        let content = &document.content;
        if !(content.is_mapping() || content.is_null()) {
            return Err(Finding::NonMappingDocument { file: file.clone() });
        }

        let conditions = match content.get(CONDITIONS_FIELD) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Sequence(items)) => Ok(items
                .iter()
                .enumerate()
                .map(|(i, item)| Condition::from_value(file, i + 1, item))
                .collect()),
            Some(_) => Err(Finding::InvalidFieldType {
                file: file.clone(),
                field: CONDITIONS_FIELD.to_string(),
            }),
        };

        let tests = match content.get("tests") {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Sequence(items)) => Ok(Some(items.clone())),
            Some(_) => Err(Finding::InvalidTestsType { file: file.clone() }),
        };

        Ok(Self {
            file: file.clone(),
            name: document.name(),
            conditions,
            tests,
        })
    }

    /// True when `conditions` is a list with no entries (or absent).
    #[must_use]
    pub fn has_no_conditions(&self) -> bool {
        matches!(&self.conditions, Ok(conditions) if conditions.is_empty())
    }
}
