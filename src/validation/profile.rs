//! Profile validation.

use crate::index::CategoryIndex;
use crate::models::{Document, Finding, Profile};
use crate::resolver::resolve_format_ref;

/// Validate one profile document.
///
/// Reference-list fields are checked in fixed order (`custom_formats`,
/// `custom_formats_radarr`, `custom_formats_sonarr`). A field that is not a
/// list yields one [`Finding::InvalidFieldType`] and its entries are skipped;
/// otherwise every entry is checked in document order.
pub fn validate_profile(document: &Document, index: &CategoryIndex) -> Vec<Finding> {
    let profile = match Profile::from_document(document) {
        Ok(profile) => profile,
        Err(finding) => return vec![finding],
    };

    let mut findings = Vec::new();
    for list in &profile.reference_lists {
        let entries = match &list.entries {
            Ok(entries) => entries,
            Err(finding) => {
                findings.push(finding.clone());
                continue;
            }
        };

        for entry in entries {
            match entry {
                Ok(format_ref) => findings.extend(resolve_format_ref(&profile.file, list.field, format_ref, index)),
                Err(finding) => findings.push(finding.clone()),
            }
        }
    }

    findings
}
