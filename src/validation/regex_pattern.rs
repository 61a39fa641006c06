//! Regex pattern validation.

use tracing::trace;

use crate::models::{Document, Finding, RegexPattern};

/// Validate one regex pattern document.
///
/// Regex patterns carry no structural constraints: any parsed document is
/// valid, named or not. Whether the pattern compiles is left to the consumer.
pub fn validate_regex_pattern(document: &Document) -> Vec<Finding> {
    let pattern = RegexPattern::from_document(document);
    if pattern.is_referenceable() {
        trace!("Regex pattern {} defines '{}'", pattern.file, pattern.name.as_deref().unwrap_or_default());
    }
    Vec::new()
}
