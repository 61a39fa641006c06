//! Category index over the loaded documents.
//!
//! [`CategoryIndex::build`] groups documents by [`Category`], sorts each group
//! by file identity, and builds name lookups for the two categories that are
//! referenced by name: regex patterns and custom formats.
//!
//! # Name collisions
//!
//! Names are not unique by construction. The first document in sorted-path
//! order owns a name; every later document with the same name is recorded as
//! a [`Finding::DuplicateName`] warning and stays unreachable by reference.
//! Documents without a usable `name` are still indexed by category (and so
//! still validated) but are absent from the lookup.
//!
//! The index is built once and never mutated afterwards.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use tracing::{debug, trace};

use crate::core::Category;
use crate::models::{Document, Finding};

/// Read-only view of one run's documents.
#[derive(Debug, Clone, Default)]
pub struct CategoryIndex {
    documents: BTreeMap<Category, Vec<Document>>,
    regex_patterns: BTreeMap<String, usize>,
    custom_formats: BTreeMap<String, usize>,
    duplicates: Vec<Finding>,
}

impl CategoryIndex {
    /// Build the index from successfully parsed documents.
    ///
    /// Pure function of its input: the order of `documents` does not matter.
    #[must_use]
    pub fn build(documents: Vec<Document>) -> Self {
        let mut grouped: BTreeMap<Category, Vec<Document>> = BTreeMap::new();
        for document in documents {
            grouped.entry(document.category).or_default().push(document);
        }
        for group in grouped.values_mut() {
            group.sort_by(|a, b| a.file.cmp(&b.file));
        }

        let mut duplicates = Vec::new();
        let regex_patterns = name_lookup(&grouped, Category::RegexPattern, &mut duplicates);
        let custom_formats = name_lookup(&grouped, Category::CustomFormat, &mut duplicates);

        debug!(
            "Indexed {} regex pattern names, {} custom format names, {} duplicates",
            regex_patterns.len(),
            custom_formats.len(),
            duplicates.len()
        );

        Self {
            documents: grouped,
            regex_patterns,
            custom_formats,
            duplicates,
        }
    }

    /// Documents of one category, sorted by file identity.
    #[must_use]
    pub fn documents(&self, category: Category) -> &[Document] {
        self.documents.get(&category).map(Vec::as_slice).unwrap_or_default()
    }

    /// Regex pattern document owning `name`.
    #[must_use]
    pub fn regex_pattern(&self, name: &str) -> Option<&Document> {
        self.regex_patterns
            .get(name)
            .map(|&i| &self.documents(Category::RegexPattern)[i])
    }

    /// Custom format document owning `name`.
    #[must_use]
    pub fn custom_format(&self, name: &str) -> Option<&Document> {
        self.custom_formats
            .get(name)
            .map(|&i| &self.documents(Category::CustomFormat)[i])
    }

    /// Whether a regex pattern named exactly `name` exists.
    #[must_use]
    pub fn has_regex_pattern(&self, name: &str) -> bool {
        self.regex_patterns.contains_key(name)
    }

    /// Whether a custom format named exactly `name` exists.
    #[must_use]
    pub fn has_custom_format(&self, name: &str) -> bool {
        self.custom_formats.contains_key(name)
    }

    /// Number of distinct referenceable regex pattern names.
    #[must_use]
    pub fn regex_pattern_count(&self) -> usize {
        self.regex_patterns.len()
    }

    /// Number of distinct referenceable custom format names.
    #[must_use]
    pub fn custom_format_count(&self) -> usize {
        self.custom_formats.len()
    }

    /// Name collisions found while building, in sorted-path order.
    #[must_use]
    pub fn duplicates(&self) -> &[Finding] {
        &self.duplicates
    }
}

fn name_lookup(
    grouped: &BTreeMap<Category, Vec<Document>>,
    category: Category,
    duplicates: &mut Vec<Finding>,
) -> BTreeMap<String, usize> {
    let mut lookup = BTreeMap::new();
    let Some(documents) = grouped.get(&category) else {
        return lookup;
    };

    for (i, document) in documents.iter().enumerate() {
        let Some(name) = document.name() else {
            debug!("{} {} has no name and cannot be referenced", category, document.file);
            continue;
        };

        match lookup.entry(name) {
            Entry::Vacant(slot) => {
                trace!("{} '{}' -> {}", category, slot.key(), document.file);
                slot.insert(i);
            }
            Entry::Occupied(slot) => duplicates.push(Finding::DuplicateName {
                category,
                name: slot.key().clone(),
                first: documents[*slot.get()].file.clone(),
                duplicate: document.file.clone(),
            }),
        }
    }

    lookup
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(category: Category, file: &str, yaml: &str) -> Document {
        Document::new(category, file, serde_yaml::from_str(yaml).unwrap())
    }

    #[test]
    fn test_lookup_contains_exactly_named_patterns() {
        let index = CategoryIndex::build(vec![
            doc(Category::RegexPattern, "regex_patterns/b.yml", "name: beta"),
            doc(Category::RegexPattern, "regex_patterns/a.yml", "name: alpha"),
            doc(Category::RegexPattern, "regex_patterns/c.yml", "pattern: x"),
            doc(Category::RegexPattern, "regex_patterns/d.yml", "name: ''"),
        ]);

        assert_eq!(index.regex_pattern_count(), 2);
        assert!(index.has_regex_pattern("alpha"));
        assert!(index.has_regex_pattern("beta"));
        assert!(!index.has_regex_pattern(""));
        assert_eq!(index.documents(Category::RegexPattern).len(), 4);
        assert_eq!(index.regex_pattern("beta").unwrap().file, "regex_patterns/b.yml");
    }

    #[test]
    fn test_documents_sorted_by_file() {
        let index = CategoryIndex::build(vec![
            doc(Category::Profile, "profiles/z.yml", "name: z"),
            doc(Category::Profile, "profiles/a.yml", "name: a"),
            doc(Category::Profile, "profiles/m.yml", "name: m"),
        ]);
        let files: Vec<_> = index.documents(Category::Profile).iter().map(|d| d.file.as_str()).collect();
        assert_eq!(files, ["profiles/a.yml", "profiles/m.yml", "profiles/z.yml"]);
        assert!(index.documents(Category::MediaManagement).is_empty());
    }

    #[test]
    fn test_first_loaded_name_wins() {
        crate::test_utils::init_test_logging(None);
        let index = CategoryIndex::build(vec![
            doc(Category::CustomFormat, "custom_formats/b.yml", "name: fmt-a"),
            doc(Category::CustomFormat, "custom_formats/a.yml", "name: fmt-a"),
        ]);

        assert_eq!(index.custom_format_count(), 1);
        assert_eq!(index.custom_format("fmt-a").unwrap().file, "custom_formats/a.yml");
        assert_eq!(
            index.duplicates(),
            [Finding::DuplicateName {
                category: Category::CustomFormat,
                name: "fmt-a".into(),
                first: "custom_formats/a.yml".into(),
                duplicate: "custom_formats/b.yml".into(),
            }]
        );
    }

    #[test]
    fn test_names_are_exact() {
        let index = CategoryIndex::build(vec![doc(Category::CustomFormat, "custom_formats/a.yml", "name: x265")]);
        assert!(index.has_custom_format("x265"));
        assert!(!index.has_custom_format("X265"));
        assert!(!index.has_custom_format("x26"));
    }

    #[test]
    fn test_categories_do_not_share_names() {
        let index = CategoryIndex::build(vec![doc(Category::RegexPattern, "regex_patterns/a.yml", "name: shared")]);
        assert!(index.has_regex_pattern("shared"));
        assert!(!index.has_custom_format("shared"));
    }
}
