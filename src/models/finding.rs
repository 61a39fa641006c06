//! Validation findings.
//!
//! A [`Finding`] is one structured problem in the rule database. Findings are
//! data: validators return them, the aggregator orders them, and the reporter
//! renders them. They never travel as `Err`.

use serde::Serialize;
use std::fmt;

use crate::core::Category;

/// Shape-checked value: either the typed entity or the finding explaining why
/// the raw document could not be converted.
pub type Checked<T> = Result<T, Finding>;

/// One validation problem, identified by the file it was found in.
///
/// `file` is always the document identity relative to the database root,
/// with `/` separators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Finding {
    /// The file could not be deserialized at all.
    ParseFailure {
        /// Document identity
        file: String,
        /// Parser message
        detail: String,
    },

    /// A custom format with an absent or empty `conditions` list.
    EmptyConditions {
        /// Document identity
        file: String,
    },

    /// A pattern-bearing condition without a `pattern` value.
    MissingPatternReference {
        /// Document identity
        file: String,
        /// Condition `name`, if it had one
        condition: Option<String>,
    },

    /// A pattern-bearing condition naming a regex pattern that does not exist.
    UnknownPatternReference {
        /// Document identity
        file: String,
        /// Condition `name`, if it had one
        condition: Option<String>,
        /// The dangling pattern name
        pattern: String,
    },

    /// A custom format whose `tests` value is present but not a list.
    InvalidTestsType {
        /// Document identity
        file: String,
    },

    /// A list-valued field holding something other than a list.
    InvalidFieldType {
        /// Document identity
        file: String,
        /// Field name as written in the document
        field: String,
    },

    /// A profile reference entry that is not a mapping with a non-empty `name`.
    InvalidFormatEntry {
        /// Document identity
        file: String,
        /// Reference-list field the entry sits in
        field: String,
    },

    /// A profile reference naming a custom format that does not exist.
    UnknownFormatReference {
        /// Document identity
        file: String,
        /// Reference-list field the entry sits in
        field: String,
        /// The dangling custom format name
        name: String,
    },

    /// A media management document that is not a non-empty mapping.
    InvalidMediaManagementDocument {
        /// Document identity
        file: String,
    },

    /// A custom format or profile document that is not a mapping.
    NonMappingDocument {
        /// Document identity
        file: String,
    },

    /// A custom format condition entry that is not a mapping.
    MalformedCondition {
        /// Document identity
        file: String,
        /// 1-based position in `conditions`
        position: usize,
    },

    /// Two documents of one category share a name; the first one loaded is kept.
    DuplicateName {
        /// Category both documents belong to
        category: Category,
        /// The shared name
        name: String,
        /// Document that owns the name
        first: String,
        /// Document shadowed by `first`
        duplicate: String,
    },
}

impl Finding {
    /// Document identity the finding is attributed to.
    #[must_use]
    pub fn file(&self) -> &str {
        match self {
            Finding::ParseFailure { file, .. }
            | Finding::EmptyConditions { file }
            | Finding::MissingPatternReference { file, .. }
            | Finding::UnknownPatternReference { file, .. }
            | Finding::InvalidTestsType { file }
            | Finding::InvalidFieldType { file, .. }
            | Finding::InvalidFormatEntry { file, .. }
            | Finding::UnknownFormatReference { file, .. }
            | Finding::InvalidMediaManagementDocument { file }
            | Finding::NonMappingDocument { file }
            | Finding::MalformedCondition { file, .. } => file,
            Finding::DuplicateName { duplicate, .. } => duplicate,
        }
    }
}

fn condition_label(condition: &Option<String>) -> &str {
    condition.as_deref().unwrap_or("<unnamed>")
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::ParseFailure { file, detail } => {
                write!(f, "YAML parse error in {file}: {detail}")
            }
            Finding::EmptyConditions { file } => write!(f, "{file} has no conditions"),
            Finding::MissingPatternReference { file, condition } => write!(
                f,
                "{file} condition '{}' missing pattern reference",
                condition_label(condition)
            ),
            Finding::UnknownPatternReference {
                file,
                condition,
                pattern,
            } => write!(
                f,
                "{file} condition '{}' references missing regex pattern '{pattern}'",
                condition_label(condition)
            ),
            Finding::InvalidTestsType { file } => write!(f, "{file} tests must be a list"),
            Finding::InvalidFieldType { file, field } => {
                write!(f, "{file} field '{field}' must be a list")
            }
            Finding::InvalidFormatEntry { file, field } => {
                write!(f, "{file} field '{field}' has invalid format entry")
            }
            Finding::UnknownFormatReference { file, field, name } => write!(
                f,
                "{file} field '{field}' references missing custom format '{name}'"
            ),
            Finding::InvalidMediaManagementDocument { file }
            | Finding::NonMappingDocument { file } => {
                write!(f, "{file} must contain a YAML object")
            }
            Finding::MalformedCondition { file, position } => {
                write!(f, "{file} condition #{position} must be a YAML object")
            }
            Finding::DuplicateName {
                category,
                name,
                first,
                duplicate,
            } => write!(
                f,
                "duplicate {category} name '{name}' in {duplicate} (first defined in {first})"
            ),
        }
    }
}
