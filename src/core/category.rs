//! Rule database categories.
//!
//! Every document in the database belongs to exactly one [`Category`],
//! decided by the directory it was loaded from. The category never changes
//! after loading.

use serde::{Deserialize, Serialize};

/// The four document categories of a rule database.
///
/// Variant order is the load order used for discovery and reporting:
/// custom formats first, then regex patterns, profiles, and media management.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Named custom formats built from conditions.
    CustomFormat,

    /// Named regex patterns, referenced by custom format conditions.
    RegexPattern,

    /// Profiles selecting custom formats by name.
    Profile,

    /// Standalone media management settings.
    MediaManagement,
}

impl Category {
    /// All categories in load order.
    pub const LOAD_ORDER: [Category; 4] = [
        Category::CustomFormat,
        Category::RegexPattern,
        Category::Profile,
        Category::MediaManagement,
    ];

    /// Directory name used when no layout override is configured.
    #[must_use]
    pub const fn default_directory(&self) -> &'static str {
        match self {
            Category::CustomFormat => "custom_formats",
            Category::RegexPattern => "regex_patterns",
            Category::Profile => "profiles",
            Category::MediaManagement => "media_management",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::CustomFormat => write!(f, "custom format"),
            Category::RegexPattern => write!(f, "regex pattern"),
            Category::Profile => write!(f, "profile"),
            Category::MediaManagement => write!(f, "media management"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_order_matches_variant_order() {
        let mut sorted = Category::LOAD_ORDER;
        sorted.sort();
        assert_eq!(sorted, Category::LOAD_ORDER);
    }

    #[test]
    fn test_default_directories() {
        assert_eq!(Category::RegexPattern.default_directory(), "regex_patterns");
        assert_eq!(Category::CustomFormat.default_directory(), "custom_formats");
        assert_eq!(Category::Profile.default_directory(), "profiles");
        assert_eq!(Category::MediaManagement.default_directory(), "media_management");
    }

    #[test]
    fn test_display_and_serde() {
        assert_eq!(Category::CustomFormat.to_string(), "custom format");
        assert_eq!(serde_json::to_string(&Category::MediaManagement).unwrap(), "\"media_management\"");
    }
}
