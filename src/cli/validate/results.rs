//! Rendering of a [`ValidationReport`] as text or JSON.
//!
//! The text form is a stable contract consumed by CI logs:
//!
//! ```text
//! VALIDATION FAILED
//! - profiles/p.yml field 'custom_formats' references missing custom format 'fmt-missing'
//! ```
//!
//! ```text
//! VALIDATION PASSED
//! - Regex patterns: 1
//! - Custom formats: 1
//! - Profiles: 1
//! - Media management files: 1
//! ```

use serde::Serialize;

use crate::models::Finding;
use crate::validation::{Summary, ValidationReport};

/// Header printed when the run has no findings.
pub const PASSED_HEADER: &str = "VALIDATION PASSED";
/// Header printed when the run has findings.
pub const FAILED_HEADER: &str = "VALIDATION FAILED";

/// Render the text report, including the trailing newline.
#[must_use]
pub fn render_text(report: &ValidationReport) -> String {
    let mut lines = Vec::new();

    if report.passed() {
        lines.push(PASSED_HEADER.to_string());
        let summary = report.summary.unwrap_or_default();
        lines.push(format!("- Regex patterns: {}", summary.regex_patterns));
        lines.push(format!("- Custom formats: {}", summary.custom_formats));
        lines.push(format!("- Profiles: {}", summary.profiles));
        lines.push(format!("- Media management files: {}", summary.media_management_files));
    } else {
        lines.push(FAILED_HEADER.to_string());
        lines.extend(report.findings.iter().map(|finding| format!("- {finding}")));
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// One finding in JSON output: its structured fields plus the rendered message.
#[derive(Serialize)]
pub struct FindingRecord<'a> {
    /// Text rendering, identical to the text report line without `- `
    pub message: String,
    /// Structured fields, tagged with `kind`
    #[serde(flatten)]
    pub finding: &'a Finding,
}

impl<'a> From<&'a Finding> for FindingRecord<'a> {
    fn from(finding: &'a Finding) -> Self {
        Self {
            message: finding.to_string(),
            finding,
        }
    }
}

/// Results structure for validation operations, used for JSON output.
///
/// # JSON Output Example
///
/// ```json
/// {
///   "valid": false,
///   "findings": [
///     {
///       "message": "custom_formats/x.yml has no conditions",
///       "kind": "empty_conditions",
///       "file": "custom_formats/x.yml"
///     }
///   ],
///   "warnings": [],
///   "summary": {
///     "regex_patterns": 3,
///     "custom_formats": 1,
///     "profiles": 0,
///     "media_management_files": 0
///   }
/// }
/// ```
#[derive(Serialize)]
pub struct ValidationResults<'a> {
    /// Overall validation status
    pub valid: bool,
    /// Findings that failed the run
    pub findings: Vec<FindingRecord<'a>>,
    /// Non-fatal findings
    pub warnings: Vec<FindingRecord<'a>>,
    /// Database counters, omitted when the parse stage failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<Summary>,
}

impl<'a> From<&'a ValidationReport> for ValidationResults<'a> {
    fn from(report: &'a ValidationReport) -> Self {
        Self {
            valid: report.passed(),
            findings: report.findings.iter().map(FindingRecord::from).collect(),
            warnings: report.warnings.iter().map(FindingRecord::from).collect(),
            summary: report.summary,
        }
    }
}
