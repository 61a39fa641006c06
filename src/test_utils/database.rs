//! Temporary rule database for tests.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::config::CONFIG_FILE_NAME;
use crate::core::Category;
use crate::loader::GITKEEP;

/// A rule database rooted in a temporary directory.
///
/// Category helpers write `<default dir>/<stem>.yml`; use [`Self::write`]
/// for any other layout.
///
/// ```rust,ignore
/// let db = TestDatabase::new()?;
/// db.regex_pattern("year", "name: year-pattern")?;
/// db.profile("p", "custom_formats: [{name: fmt-a}]")?;
/// ```
pub struct TestDatabase {
    temp_dir: TempDir,
}

impl TestDatabase {
    /// Create an empty database (no category directories).
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    /// Create a database with all four category directories, each holding
    /// only a `.gitkeep`.
    pub fn with_empty_categories() -> Result<Self> {
        let db = Self::new()?;
        for category in Category::LOAD_ORDER {
            db.gitkeep(category)?;
        }
        Ok(db)
    }

    /// Database root.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `content` to `relative` under the root, creating parent directories.
    pub fn write(&self, relative: &str, content: impl AsRef<[u8]>) -> Result<PathBuf> {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    /// Write a document into `category`'s default directory.
    pub fn document(&self, category: Category, stem: &str, yaml: &str) -> Result<PathBuf> {
        self.write(&format!("{}/{stem}.yml", category.default_directory()), yaml)
    }

    /// Write a regex pattern document.
    pub fn regex_pattern(&self, stem: &str, yaml: &str) -> Result<PathBuf> {
        self.document(Category::RegexPattern, stem, yaml)
    }

    /// Write a custom format document.
    pub fn custom_format(&self, stem: &str, yaml: &str) -> Result<PathBuf> {
        self.document(Category::CustomFormat, stem, yaml)
    }

    /// Write a profile document.
    pub fn profile(&self, stem: &str, yaml: &str) -> Result<PathBuf> {
        self.document(Category::Profile, stem, yaml)
    }

    /// Write a media management document.
    pub fn media_management(&self, stem: &str, yaml: &str) -> Result<PathBuf> {
        self.document(Category::MediaManagement, stem, yaml)
    }

    /// Write an empty `.gitkeep` into `category`'s default directory.
    pub fn gitkeep(&self, category: Category) -> Result<PathBuf> {
        self.write(&format!("{}/{GITKEEP}", category.default_directory()), "")
    }

    /// Write `arrdb.toml` at the root.
    pub fn config(&self, toml: &str) -> Result<PathBuf> {
        self.write(CONFIG_FILE_NAME, toml)
    }
}
