//! Document discovery and parsing.
//!
//! The loader turns a database root into two lists: documents that parsed and
//! files that did not. It knows nothing about what a valid document looks
//! like; it only applies the directory layout and the YAML parser.
//!
//! # Discovery rules
//!
//! - Categories are visited in [`Category::LOAD_ORDER`]
//! - Only files directly inside a category directory are considered
//! - The file extension must be listed in [`LayoutConfig::extensions`]
//! - A file named exactly `.gitkeep` is skipped
//! - A missing category directory contributes zero files
//! - Within a category, files are sorted by their identity
//!
//! # Parsing rules
//!
//! - A YAML syntax error, or a file that is not valid UTF-8, becomes a
//!   [`Finding::ParseFailure`]
//! - An empty document (YAML null) becomes an empty mapping
//! - A repeated mapping key keeps its last value; merge keys are expanded
//! - Any other read failure is an environment fault and aborts the load

mod yaml;

use anyhow::{Context, Result};
use serde_yaml::{Mapping, Value};
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::config::LayoutConfig;
use crate::core::{ArrdbError, Category};
use crate::models::{Document, Finding};

/// Name of the placeholder file that keeps empty directories in git.
pub const GITKEEP: &str = ".gitkeep";

/// A file selected for loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredFile {
    /// Category of the directory it was found in
    pub category: Category,
    /// Absolute or root-joined path on disk
    pub path: PathBuf,
    /// Identity relative to the database root, `/`-separated
    pub file: String,
}

/// Result of loading every discovered file.
#[derive(Debug, Clone, Default)]
pub struct LoadOutcome {
    /// Successfully parsed documents, in load order
    pub documents: Vec<Document>,
    /// One [`Finding::ParseFailure`] per file that did not parse, in load order
    pub failures: Vec<Finding>,
}

impl LoadOutcome {
    /// Number of discovered files of `category` that parsed.
    #[must_use]
    pub fn count(&self, category: Category) -> usize {
        self.documents.iter().filter(|d| d.category == category).count()
    }
}

/// Render `path` relative to `root` with `/` separators.
///
/// Falls back to the full path when `path` is not under `root`.
#[must_use]
pub fn relative_identity(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// List the document files of every category under `root`.
///
/// # Errors
///
/// Returns [`ArrdbError::DirectoryReadFailed`] if a category directory exists
/// but cannot be listed.
pub fn discover(root: &Path, layout: &LayoutConfig) -> Result<Vec<DiscoveredFile>> {
    let mut discovered = Vec::new();

    for category in Category::LOAD_ORDER {
        let dir = root.join(layout.directory(category));
        if !dir.is_dir() {
            debug!("No {} directory at {}", category, dir.display());
            continue;
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&dir).min_depth(1).max_depth(1).follow_links(true) {
            let entry = entry.map_err(|e| ArrdbError::DirectoryReadFailed {
                path: dir.display().to_string(),
                reason: e.to_string(),
            })?;

            let path = entry.path();
            if !entry.file_type().is_file() || entry.file_name() == GITKEEP || !layout.is_document(path) {
                trace!("Skipping {}", path.display());
                continue;
            }

            files.push(DiscoveredFile {
                category,
                path: path.to_path_buf(),
                file: relative_identity(root, path),
            });
        }

        files.sort_by(|a, b| a.file.cmp(&b.file));
        debug!("Discovered {} {} files in {}", files.len(), category, dir.display());
        discovered.extend(files);
    }

    Ok(discovered)
}

/// Parse one document's text.
///
/// # Errors
///
/// Returns [`Finding::ParseFailure`] when the text is not a single valid YAML
/// document or a merge key cannot be applied.
pub fn parse_document(category: Category, file: &str, text: &str) -> Result<Document, Finding> {
    let content = yaml::decode(text).map_err(|e| Finding::ParseFailure {
        file: file.to_string(),
        detail: e.to_string(),
    })?;

    let content = match content {
        Value::Null => Value::Mapping(Mapping::new()),
        other => other,
    };

    Ok(Document::new(category, file, content))
}

/// Read and parse every discovered file, in the given order.
///
/// # Errors
///
/// Returns [`ArrdbError::FileReadFailed`] for read failures other than
/// invalid UTF-8 (which is reported as a parse failure instead).
pub async fn load(files: &[DiscoveredFile]) -> Result<LoadOutcome> {
    let mut outcome = LoadOutcome::default();

    for discovered in files {
        let text = match fs::read_to_string(&discovered.path).await {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                outcome.failures.push(Finding::ParseFailure {
                    file: discovered.file.clone(),
                    detail: "file is not valid UTF-8".to_string(),
                });
                continue;
            }
            Err(e) => {
                return Err(ArrdbError::FileReadFailed {
                    path: discovered.path.display().to_string(),
                    reason: e.to_string(),
                }
                .into());
            }
        };

        match parse_document(discovered.category, &discovered.file, &text) {
            Ok(document) => outcome.documents.push(document),
            Err(failure) => {
                debug!("Parse failure: {}", failure);
                outcome.failures.push(failure);
            }
        }
    }

    Ok(outcome)
}

/// Discover and load the whole database under `root`.
///
/// # Errors
///
/// Returns [`ArrdbError::DatabaseRootNotFound`] when `root` is not a directory,
/// plus the errors of [`discover`] and [`load`].
pub async fn load_database(root: &Path, layout: &LayoutConfig) -> Result<LoadOutcome> {
    if !root.is_dir() {
        return Err(ArrdbError::DatabaseRootNotFound {
            path: root.display().to_string(),
        }
        .into());
    }

    let files = discover(root, layout)
        .with_context(|| format!("Failed to scan rule database at {}", root.display()))?;
    load(&files).await
}
