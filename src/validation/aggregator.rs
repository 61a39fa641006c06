//! Two-stage aggregation of findings into a [`ValidationReport`].
//!
//! ```text
//! Start -> ParseCheck -> Failed(Parse)                 (any parse failure)
//!                     -> SemanticCheck -> Failed(Semantic)  (any finding)
//!                                      -> Passed
//! ```
//!
//! Parse failures suppress the semantic stage entirely: an unparsed file is
//! not in the index, so reference findings computed without it could be wrong.

use serde::Serialize;
use tracing::debug;

use crate::config::ValidationConfig;
use crate::core::Category;
use crate::index::CategoryIndex;
use crate::loader::LoadOutcome;
use crate::models::Finding;

use super::validate_document;

/// Stage at which a run failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// At least one file did not deserialize
    Parse,
    /// All files parsed but structural or reference checks failed
    Semantic,
}

/// Terminal state of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// No findings
    Passed,
    /// Findings present
    Failed(Stage),
}

/// Database size counters, available whenever the semantic stage ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Summary {
    /// Distinct referenceable regex pattern names
    pub regex_patterns: usize,
    /// Distinct referenceable custom format names
    pub custom_formats: usize,
    /// Profile files
    pub profiles: usize,
    /// Media management files
    pub media_management_files: usize,
}

impl Summary {
    fn from_index(index: &CategoryIndex) -> Self {
        Self {
            regex_patterns: index.regex_pattern_count(),
            custom_formats: index.custom_format_count(),
            profiles: index.documents(Category::Profile).len(),
            media_management_files: index.documents(Category::MediaManagement).len(),
        }
    }
}

/// Everything a reporter needs to render one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Terminal state
    pub verdict: Verdict,
    /// Findings in deterministic order
    pub findings: Vec<Finding>,
    /// Non-fatal observations (duplicate names) when not in strict mode
    pub warnings: Vec<Finding>,
    /// Counters; `None` when the parse stage failed
    pub summary: Option<Summary>,
}

impl ValidationReport {
    /// Whether the run passed.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.verdict == Verdict::Passed
    }
}

/// Ordered collector of findings.
///
/// Findings are kept in the order they are recorded; callers record whole
/// documents in reporting order, so the final list is deterministic.
#[derive(Debug, Default)]
pub struct FindingAggregator {
    findings: Vec<Finding>,
}

impl FindingAggregator {
    /// Create an empty aggregator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append findings, preserving their order.
    pub fn record(&mut self, findings: impl IntoIterator<Item = Finding>) {
        self.findings.extend(findings);
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// Number of findings recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.findings.len()
    }

    /// Consume the aggregator.
    #[must_use]
    pub fn into_findings(self) -> Vec<Finding> {
        self.findings
    }
}

/// Run both stages over a load outcome.
#[must_use]
pub fn aggregate(outcome: LoadOutcome, config: &ValidationConfig) -> ValidationReport {
    if !outcome.failures.is_empty() {
        debug!("Parse stage failed for {} files; skipping semantic checks", outcome.failures.len());
        return ValidationReport {
            verdict: Verdict::Failed(Stage::Parse),
            findings: outcome.failures,
            warnings: Vec::new(),
            summary: None,
        };
    }

    let index = CategoryIndex::build(outcome.documents);
    let mut aggregator = FindingAggregator::new();

    for category in Category::LOAD_ORDER {
        for document in index.documents(category) {
            aggregator.record(validate_document(document, &index, config));
        }
        debug!("{} findings after {} documents", aggregator.len(), category);
    }

    let mut warnings = index.duplicates().to_vec();
    if config.strict {
        aggregator.record(warnings.drain(..));
    }

    let verdict = if aggregator.is_empty() {
        Verdict::Passed
    } else {
        Verdict::Failed(Stage::Semantic)
    };

    ValidationReport {
        verdict,
        findings: aggregator.into_findings(),
        warnings,
        summary: Some(Summary::from_index(&index)),
    }
}
