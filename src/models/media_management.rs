//! Media management documents.

use serde_yaml::Mapping;

use super::{Checked, Document, Finding};

/// Standalone settings document; any non-empty mapping is accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaManagementConfig {
    /// Source document identity
    pub file: String,
    /// Settings, uninterpreted
    pub settings: Mapping,
}

impl MediaManagementConfig {
    /// Convert a media management document.
    ///
    /// # Errors
    ///
    /// Returns [`Finding::InvalidMediaManagementDocument`] for a scalar, list,
    /// null, or empty mapping.
    pub fn from_document(document: &Document) -> Checked<Self> {
        match document.content.as_mapping() {
            Some(settings) if !settings.is_empty() => Ok(Self {
                file: document.file.clone(),
                settings: settings.clone(),
            }),
            _ => Err(Finding::InvalidMediaManagementDocument {
                file: document.file.clone(),
            }),
        }
    }
}
