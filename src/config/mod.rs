//! Database configuration for arrdb
//!
//! A rule database can carry an optional `arrdb.toml` at its root. Every key
//! has a default, so a database without the file behaves exactly like one with
//! an empty file.
//!
//! ```toml
//! [layout]
//! regex_patterns = "regex_patterns"
//! custom_formats = "custom_formats"
//! profiles = "profiles"
//! media_management = "media_management"
//! extensions = ["yml"]
//!
//! [validation]
//! pattern_condition_types = ["release_title", "release_group", "edition"]
//! strict = false
//! ```
//!
//! # Loading
//!
//! - [`DatabaseConfig::load_for_root`] looks for `arrdb.toml` in the database
//!   root and falls back to defaults when it is absent.
//! - [`DatabaseConfig::load_from`] loads an explicit file (the `--config` flag);
//!   here a missing file is an error.
//!
//! Both reject layouts that cannot work (see [`DatabaseConfig::validate`]).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::core::{ArrdbError, Category};

/// File name looked up in the database root.
pub const CONFIG_FILE_NAME: &str = "arrdb.toml";

/// Top-level contents of `arrdb.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Where each category lives and which files count as documents.
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Knobs for the semantic checks.
    #[serde(default)]
    pub validation: ValidationConfig,
}

/// Directory layout of the rule database.
///
/// Directory names are relative to the database root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Directory holding regex pattern documents
    pub regex_patterns: String,
    /// Directory holding custom format documents
    pub custom_formats: String,
    /// Directory holding profile documents
    pub profiles: String,
    /// Directory holding media management documents
    pub media_management: String,
    /// File extensions (without the dot) treated as documents
    pub extensions: Vec<String>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            regex_patterns: Category::RegexPattern.default_directory().to_string(),
            custom_formats: Category::CustomFormat.default_directory().to_string(),
            profiles: Category::Profile.default_directory().to_string(),
            media_management: Category::MediaManagement.default_directory().to_string(),
            extensions: vec!["yml".to_string()],
        }
    }
}

impl LayoutConfig {
    /// Directory name configured for `category`.
    #[must_use]
    pub fn directory(&self, category: Category) -> &str {
        match category {
            Category::RegexPattern => &self.regex_patterns,
            Category::CustomFormat => &self.custom_formats,
            Category::Profile => &self.profiles,
            Category::MediaManagement => &self.media_management,
        }
    }

    /// Whether `path` has one of the configured document extensions.
    #[must_use]
    pub fn is_document(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|wanted| wanted == ext))
    }
}

/// Settings for the semantic validation stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationConfig {
    /// Condition `type` values whose `pattern` must name a regex pattern
    pub pattern_condition_types: Vec<String>,
    /// Promote warnings (duplicate names) to findings
    pub strict: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            pattern_condition_types: vec![
                "release_title".to_string(),
                "release_group".to_string(),
                "edition".to_string(),
            ],
            strict: false,
        }
    }
}

impl ValidationConfig {
    /// Whether a condition of this type carries a regex pattern reference.
    #[must_use]
    pub fn is_pattern_condition(&self, condition_type: &str) -> bool {
        self.pattern_condition_types.iter().any(|t| t == condition_type)
    }
}

impl DatabaseConfig {
    /// Load `arrdb.toml` from the database root, or defaults if it is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed, or if
    /// it describes an unusable layout.
    pub async fn load_for_root(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE_NAME);
        if fs::try_exists(&path).await.unwrap_or(false) {
            Self::load_from(&path).await
        } else {
            tracing::debug!("No {} in {}, using defaults", CONFIG_FILE_NAME, root.display());
            Ok(Self::default())
        }
    }

    /// Load the configuration from an explicit path, or from the root when `None`.
    ///
    /// # Errors
    ///
    /// See [`Self::load_from`] and [`Self::load_for_root`].
    pub async fn load_with_optional(path: Option<PathBuf>, root: &Path) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(&path).await,
            None => Self::load_for_root(root).await,
        }
    }

    /// Load the configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The file is not valid TOML or has unknown keys
    /// - The layout fails [`Self::validate`]
    pub async fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read database config from {}", path.display()))?;

        let config = Self::parse(&content, path)?;
        tracing::debug!("Loaded database config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate configuration text. `origin` is used in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`ArrdbError::ConfigParseError`] or [`ArrdbError::InvalidConfig`].
    pub fn parse(content: &str, origin: &Path) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| ArrdbError::ConfigParseError {
            file: origin.display().to_string(),
            reason: e.message().to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject layouts that would make discovery meaningless.
    ///
    /// # Errors
    ///
    /// Returns [`ArrdbError::InvalidConfig`] when the extension list is empty or
    /// contains an empty entry, or when a category directory name is empty.
    pub fn validate(&self) -> Result<(), ArrdbError> {
        if self.layout.extensions.is_empty() {
            return Err(ArrdbError::InvalidConfig {
                reason: "layout.extensions must list at least one extension".to_string(),
            });
        }

        if let Some(bad) = self.layout.extensions.iter().find(|e| e.is_empty() || e.starts_with('.')) {
            return Err(ArrdbError::InvalidConfig {
                reason: format!("layout.extensions entry '{bad}' must be a bare extension such as 'yml'"),
            });
        }

        for category in Category::LOAD_ORDER {
            if self.layout.directory(category).trim().is_empty() {
                return Err(ArrdbError::InvalidConfig {
                    reason: format!("layout directory for {category} must not be empty"),
                });
            }
        }

        Ok(())
    }
}
