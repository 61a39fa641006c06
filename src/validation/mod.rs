//! Structural validation and aggregation.
//!
//! One validator per category, each a pure function of
//! `(document, index, config)` returning its findings in document order:
//!
//! - [`validate_custom_format`] - conditions, pattern references, tests
//! - [`validate_profile`] - reference-list shapes and custom format references
//! - [`validate_media_management`] - non-empty mapping
//! - [`validate_regex_pattern`] - no structural constraints
//!
//! [`aggregate`] runs the two-stage gate over a [`LoadOutcome`] and
//! [`validate_database`] wires loader, index, validators, and aggregator
//! together for a database root.

mod aggregator;
mod custom_format;
mod media_management;
mod profile;
mod regex_pattern;

pub use aggregator::{FindingAggregator, Stage, Summary, ValidationReport, Verdict, aggregate};
pub use custom_format::validate_custom_format;
pub use media_management::validate_media_management;
pub use profile::validate_profile;
pub use regex_pattern::validate_regex_pattern;

use anyhow::Result;
use std::path::Path;

use crate::config::{DatabaseConfig, ValidationConfig};
use crate::core::Category;
use crate::index::CategoryIndex;
use crate::loader::{LoadOutcome, load_database};
use crate::models::{Document, Finding};

/// Run the validator for `document`'s category.
#[must_use]
pub fn validate_document(document: &Document, index: &CategoryIndex, config: &ValidationConfig) -> Vec<Finding> {
    match document.category {
        Category::CustomFormat => validate_custom_format(document, index, config),
        Category::Profile => validate_profile(document, index),
        Category::MediaManagement => validate_media_management(document),
        Category::RegexPattern => validate_regex_pattern(document),
    }
}

/// Load and validate the database rooted at `root`.
///
/// # Errors
///
/// Only environment faults are returned as errors; every problem inside the
/// documents is part of the returned report.
pub async fn validate_database(root: &Path, config: &DatabaseConfig) -> Result<ValidationReport> {
    let outcome: LoadOutcome = load_database(root, &config.layout).await?;
    tracing::debug!(
        "Loaded {} documents with {} parse failures from {}",
        outcome.documents.len(),
        outcome.failures.len(),
        root.display()
    );
    Ok(aggregate(outcome, &config.validation))
}
