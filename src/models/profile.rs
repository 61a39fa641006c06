//! Profile documents and their custom format references.

use serde::Serialize;
use serde_yaml::Value;

use super::{Checked, Document, Finding, scalar_text};

/// The three reference-list fields of a profile, in checking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    /// Formats shared by every downstream consumer
    CustomFormats,
    /// Radarr-only formats
    CustomFormatsRadarr,
    /// Sonarr-only formats
    CustomFormatsSonarr,
}

impl ProfileField {
    /// All fields in the order they are checked.
    pub const ALL: [ProfileField; 3] = [
        ProfileField::CustomFormats,
        ProfileField::CustomFormatsRadarr,
        ProfileField::CustomFormatsSonarr,
    ];

    /// Key as written in the document.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ProfileField::CustomFormats => "custom_formats",
            ProfileField::CustomFormatsRadarr => "custom_formats_radarr",
            ProfileField::CustomFormatsSonarr => "custom_formats_sonarr",
        }
    }
}

impl std::fmt::Display for ProfileField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reference to a custom format by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatRef {
    /// Custom format name; never empty
    pub name: String,
}

impl FormatRef {
    fn from_value(file: &str, field: ProfileField, value: &Value) -> Checked<Self> {
        let name = value
            .is_mapping()
            .then(|| value.get("name").and_then(scalar_text))
            .flatten();

        name.map(|name| Self { name }).ok_or_else(|| Finding::InvalidFormatEntry {
            file: file.to_string(),
            field: field.to_string(),
        })
    }
}

/// One reference-list field of a profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceList {
    /// Which field this is
    pub field: ProfileField,
    /// Entries in document order; `Err` when the field is not a list
    pub entries: Checked<Vec<Checked<FormatRef>>>,
}

impl ReferenceList {
    fn from_document(file: &str, content: &Value, field: ProfileField) -> Self {
        let entries = match content.get(field.as_str()) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Sequence(items)) => Ok(items
                .iter()
                .map(|item| FormatRef::from_value(file, field, item))
                .collect()),
            Some(_) => Err(Finding::InvalidFieldType {
                file: file.to_string(),
                field: field.to_string(),
            }),
        };

        Self { field, entries }
    }
}

/// A named selection of custom formats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// Source document identity
    pub file: String,
    /// Profile name; informational only
    pub name: Option<String>,
    /// The three reference lists, in [`ProfileField::ALL`] order
    pub reference_lists: [ReferenceList; 3],
}

impl Profile {
    /// Convert a profile document. Absent fields become empty lists.
    ///
    /// # Errors
    ///
    /// Returns [`Finding::NonMappingDocument`] when the document is not a mapping.
    pub fn from_document(document: &Document) -> Checked<Self> {
        let file = &document.file;
        let content = &document.content;
        if !(content.is_mapping() || content.is_null()) {
            return Err(Finding::NonMappingDocument { file: file.clone() });
        }

        Ok(Self {
            file: file.clone(),
            name: document.name(),
            reference_lists: ProfileField::ALL.map(|field| ReferenceList::from_document(file, content, field)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Category;

    fn profile(yaml: &str) -> Checked<Profile> {
        let doc = Document::new(Category::Profile, "profiles/p.yml", serde_yaml::from_str(yaml).unwrap());
        Profile::from_document(&doc)
    }

    #[test]
    fn test_reference_lists_in_fixed_order() {
        let p = profile(
            r"
name: prof-1
custom_formats_sonarr:
  - name: s1
custom_formats:
  - name: a
  - name: b
",
        )
        .unwrap();

        assert_eq!(p.name.as_deref(), Some("prof-1"));
        let fields: Vec<_> = p.reference_lists.iter().map(|l| l.field).collect();
        assert_eq!(fields, ProfileField::ALL);

        let shared = p.reference_lists[0].entries.as_ref().unwrap();
        assert_eq!(shared.len(), 2);
        assert_eq!(shared[1], Ok(FormatRef { name: "b".into() }));
        assert_eq!(p.reference_lists[1].entries, Ok(vec![]));
        assert_eq!(p.reference_lists[2].entries.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn test_absent_field_equals_empty_list() {
        let absent = profile("name: p").unwrap();
        let empty = profile("name: p\ncustom_formats: []\ncustom_formats_radarr: []\ncustom_formats_sonarr: []")
            .unwrap();
        assert_eq!(absent.reference_lists, empty.reference_lists);
    }

    #[test]
    fn test_invalid_field_type() {
        let p = profile("custom_formats_radarr: fmt-a").unwrap();
        assert_eq!(
            p.reference_lists[1].entries,
            Err(Finding::InvalidFieldType {
                file: "profiles/p.yml".into(),
                field: "custom_formats_radarr".into(),
            })
        );
    }

    #[test]
    fn test_invalid_entries() {
        let p = profile("custom_formats:\n  - fmt-a\n  - {score: 10}\n  - {name: ''}\n  - {name: ok}").unwrap();
        let entries = p.reference_lists[0].entries.as_ref().unwrap();
        let invalid = Err(Finding::InvalidFormatEntry {
            file: "profiles/p.yml".into(),
            field: "custom_formats".into(),
        });
        assert_eq!(entries[0], invalid);
        assert_eq!(entries[1], invalid);
        assert_eq!(entries[2], invalid);
        assert_eq!(entries[3], Ok(FormatRef { name: "ok".into() }));
    }
}
