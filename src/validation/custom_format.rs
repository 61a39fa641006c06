//! Custom format validation.

use crate::config::ValidationConfig;
use crate::index::CategoryIndex;
use crate::models::{CustomFormat, Document, Finding};
use crate::resolver::resolve_condition;

/// Validate one custom format document.
///
/// Checks, in order:
/// 1. the document is a mapping
/// 2. `conditions` is non-empty; an empty list yields exactly one
///    [`Finding::EmptyConditions`] and nothing else for this file
/// 3. every condition, in document order (shape, then pattern reference)
/// 4. `tests`, if present, is a list
pub fn validate_custom_format(
    document: &Document,
    index: &CategoryIndex,
    config: &ValidationConfig,
) -> Vec<Finding> {
    let format = match CustomFormat::from_document(document) {
        Ok(format) => format,
        Err(finding) => return vec![finding],
    };

    if format.has_no_conditions() {
        return vec![Finding::EmptyConditions {
            file: format.file,
        }];
    }

    let mut findings = Vec::new();
    match &format.conditions {
        Ok(conditions) => {
            for condition in conditions {
                match condition {
                    Ok(condition) => findings.extend(resolve_condition(&format.file, condition, index, config)),
                    Err(finding) => findings.push(finding.clone()),
                }
            }
        }
        Err(finding) => findings.push(finding.clone()),
    }

    if let Err(finding) = &format.tests {
        findings.push(finding.clone());
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Category;

    fn index() -> CategoryIndex {
        CategoryIndex::build(vec![Document::new(
            Category::RegexPattern,
            "regex_patterns/year.yml",
            serde_yaml::from_str("name: year-pattern").unwrap(),
        )])
    }

    fn check(yaml: &str) -> Vec<Finding> {
        let doc = Document::new(Category::CustomFormat, "custom_formats/f.yml", serde_yaml::from_str(yaml).unwrap());
        validate_custom_format(&doc, &index(), &ValidationConfig::default())
    }

    #[test]
    fn test_valid_format() {
        let findings = check(
            r"
name: fmt-a
conditions:
  - type: release_title
    name: c1
    pattern: year-pattern
  - type: resolution
    name: c2
tests:
  - title: Movie 2020
    expected: true
",
        );
        assert!(findings.is_empty(), "{findings:?}");
    }

    #[test]
    fn test_empty_conditions_yields_exactly_one_finding() {
        for yaml in ["name: x\nconditions: []\ntests: bad", "name: x", "{}"] {
            assert_eq!(
                check(yaml),
                [Finding::EmptyConditions {
                    file: "custom_formats/f.yml".into()
                }],
                "{yaml}"
            );
        }
    }

    #[test]
    fn test_all_condition_findings_collected_in_order() {
        let findings = check(
            r"
name: fmt-b
conditions:
  - type: release_group
    name: first
    pattern: missing-one
  - type: edition
    name: second
  - 17
  - type: release_title
    pattern: missing-two
tests: not-a-list
",
        );

        let file = "custom_formats/f.yml".to_string();
        assert_eq!(
            findings,
            [
                Finding::UnknownPatternReference {
                    file: file.clone(),
                    condition: Some("first".into()),
                    pattern: "missing-one".into(),
                },
                Finding::MissingPatternReference {
                    file: file.clone(),
                    condition: Some("second".into()),
                },
                Finding::MalformedCondition {
                    file: file.clone(),
                    position: 3,
                },
                Finding::UnknownPatternReference {
                    file: file.clone(),
                    condition: None,
                    pattern: "missing-two".into(),
                },
                Finding::InvalidTestsType { file },
            ]
        );
    }

    #[test]
    fn test_empty_pattern_is_missing() {
        let findings = check("conditions:\n  - type: release_title\n    name: c\n    pattern: ''\n");
        assert!(matches!(findings.as_slice(), [Finding::MissingPatternReference { .. }]));
    }

    #[test]
    fn test_non_list_conditions_still_checks_tests() {
        let findings = check("conditions: release_title\ntests: 3");
        assert_eq!(findings.len(), 2);
        assert!(matches!(findings[0], Finding::InvalidFieldType { .. }));
        assert!(matches!(findings[1], Finding::InvalidTestsType { .. }));
    }

    #[test]
    fn test_falsy_pattern_is_missing_and_empty_name_is_shown() {
        let findings = check("conditions:\n  - {type: release_title, name: '', pattern: 0}\n  - {type: edition, name: e, pattern: false}\n");
        assert_eq!(
            findings.iter().map(ToString::to_string).collect::<Vec<_>>(),
            [
                "custom_formats/f.yml condition '' missing pattern reference",
                "custom_formats/f.yml condition 'e' missing pattern reference",
            ]
        );
    }
}
