//! Media management validation.

use crate::models::{Document, Finding, MediaManagementConfig};

/// Validate one media management document: it must be a non-empty mapping.
pub fn validate_media_management(document: &Document) -> Vec<Finding> {
    MediaManagementConfig::from_document(document).err().into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Category;

    #[test]
    fn test_media_management() {
        let good = Document::new(
            Category::MediaManagement,
            "media_management/naming.yml",
            serde_yaml::from_str("rename: true").unwrap(),
        );
        assert!(validate_media_management(&good).is_empty());

        let bad = Document::new(
            Category::MediaManagement,
            "media_management/empty.yml",
            serde_yaml::from_str("{}").unwrap(),
        );
        assert_eq!(
            validate_media_management(&bad),
            [Finding::InvalidMediaManagementDocument {
                file: "media_management/empty.yml".into()
            }]
        );
    }
}
