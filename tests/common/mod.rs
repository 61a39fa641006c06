//! Shared helpers for binary-level tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

pub use arrdb_cli::test_utils::TestDatabase;

/// `arrdb` command with color disabled and `RUST_LOG` cleared, run from `root`.
pub fn arrdb(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("arrdb").unwrap();
    cmd.current_dir(root).env_remove("RUST_LOG").env("NO_COLOR", "1");
    cmd
}

/// A consistent database: one of each category, all references resolving.
pub fn seeded_database() -> TestDatabase {
    let db = TestDatabase::with_empty_categories().unwrap();
    db.regex_pattern("year", "name: year-pattern\npattern: '\\b(19|20)\\d{2}\\b'\n").unwrap();
    db.custom_format(
        "fmt-a",
        r#"name: fmt-a
conditions:
  - type: release_title
    name: c1
    pattern: year-pattern
tests:
  - title: Movie.2024.1080p
    expected: true
"#,
    )
    .unwrap();
    db.profile("prof-1", "name: prof-1\ncustom_formats:\n  - name: fmt-a\n    score: 10\n").unwrap();
    db.media_management("naming", "rename: true\nformat: '{Movie Title} ({Release Year})'\n").unwrap();
    db
}
