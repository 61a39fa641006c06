//! Cross-document reference resolution.
//!
//! Two rules, both exact string equality against the [`CategoryIndex`]:
//!
//! 1. **condition → regex pattern**, only for condition types listed in
//!    [`ValidationConfig::pattern_condition_types`]
//! 2. **format ref → custom format**, for every well-formed profile entry
//!
//! No case folding, partial matching, or wildcards. Both functions are pure;
//! the validators call them while walking a document so that findings come
//! out in document order.

use crate::config::ValidationConfig;
use crate::index::CategoryIndex;
use crate::models::{Condition, Finding, FormatRef, ProfileField};

/// Resolve a condition's regex pattern reference.
///
/// Returns `None` when the condition is not pattern-bearing or its pattern
/// exists; otherwise the finding describing the missing or dangling reference.
#[must_use]
pub fn resolve_condition(
    file: &str,
    condition: &Condition,
    index: &CategoryIndex,
    config: &ValidationConfig,
) -> Option<Finding> {
    let condition_type = condition.condition_type.as_deref()?;
    if !config.is_pattern_condition(condition_type) {
        return None;
    }

    match condition.pattern.as_deref() {
        None => Some(Finding::MissingPatternReference {
            file: file.to_string(),
            condition: condition.name.clone(),
        }),
        Some(pattern) if !index.has_regex_pattern(pattern) => Some(Finding::UnknownPatternReference {
            file: file.to_string(),
            condition: condition.name.clone(),
            pattern: pattern.to_string(),
        }),
        Some(_) => None,
    }
}

/// Resolve a profile entry's custom format reference.
#[must_use]
pub fn resolve_format_ref(
    file: &str,
    field: ProfileField,
    format_ref: &FormatRef,
    index: &CategoryIndex,
) -> Option<Finding> {
    (!index.has_custom_format(&format_ref.name)).then(|| Finding::UnknownFormatReference {
        file: file.to_string(),
        field: field.to_string(),
        name: format_ref.name.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Category;
    use crate::models::Document;

    fn index() -> CategoryIndex {
        CategoryIndex::build(vec![
            Document::new(
                Category::RegexPattern,
                "regex_patterns/year.yml",
                serde_yaml::from_str("name: year-pattern").unwrap(),
            ),
            Document::new(
                Category::CustomFormat,
                "custom_formats/a.yml",
                serde_yaml::from_str("name: fmt-a").unwrap(),
            ),
        ])
    }

    fn condition(condition_type: &str, pattern: Option<&str>) -> Condition {
        Condition {
            condition_type: Some(condition_type.to_string()),
            name: Some("c1".to_string()),
            pattern: pattern.map(str::to_string),
        }
    }

    #[test]
    fn test_known_pattern_resolves() {
        let config = ValidationConfig::default();
        for kind in ["release_title", "release_group", "edition"] {
            assert_eq!(
                resolve_condition("cf.yml", &condition(kind, Some("year-pattern")), &index(), &config),
                None
            );
        }
    }

    #[test]
    fn test_unknown_pattern() {
        let finding = resolve_condition(
            "cf.yml",
            &condition("release_group", Some("nope")),
            &index(),
            &ValidationConfig::default(),
        );
        assert_eq!(
            finding,
            Some(Finding::UnknownPatternReference {
                file: "cf.yml".into(),
                condition: Some("c1".into()),
                pattern: "nope".into(),
            })
        );
    }

    #[test]
    fn test_missing_pattern() {
        let finding = resolve_condition("cf.yml", &condition("edition", None), &index(), &ValidationConfig::default());
        assert!(matches!(finding, Some(Finding::MissingPatternReference { .. })));
    }

    #[test]
    fn test_non_pattern_conditions_are_ignored() {
        let config = ValidationConfig::default();
        assert_eq!(resolve_condition("cf.yml", &condition("resolution", None), &index(), &config), None);
        assert_eq!(resolve_condition("cf.yml", &Condition::default(), &index(), &config), None);
    }

    #[test]
    fn test_configured_condition_types() {
        let config = ValidationConfig {
            pattern_condition_types: vec!["indexer_flag".to_string()],
            strict: false,
        };
        assert!(resolve_condition("cf.yml", &condition("indexer_flag", Some("x")), &index(), &config).is_some());
        assert!(resolve_condition("cf.yml", &condition("release_title", Some("x")), &index(), &config).is_none());
    }

    #[test]
    fn test_format_refs() {
        let index = index();
        let known = FormatRef { name: "fmt-a".into() };
        let unknown = FormatRef {
            name: "fmt-missing".into(),
        };
        assert_eq!(resolve_format_ref("p.yml", ProfileField::CustomFormats, &known, &index), None);
        assert_eq!(
            resolve_format_ref("p.yml", ProfileField::CustomFormatsSonarr, &unknown, &index),
            Some(Finding::UnknownFormatReference {
                file: "p.yml".into(),
                field: "custom_formats_sonarr".into(),
                name: "fmt-missing".into(),
            })
        );
    }
}
