//! Validation execution logic and orchestration.

use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::config::DatabaseConfig;
use crate::validation::{ValidationReport, validate_database};

use super::command::{OutputFormat, ValidateCommand};
use super::results::{ValidationResults, render_text};

impl ValidateCommand {
    /// Validate the database at `root` (current directory when `None`).
    ///
    /// The configuration comes from `config_path` when given, otherwise from
    /// `arrdb.toml` in the root, otherwise defaults. `--strict` is OR-ed with
    /// `validation.strict`.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if validation passed
    /// - `Ok(false)` if the report contains findings
    ///
    /// # Errors
    ///
    /// Environment faults only: a missing root, an unreadable file or
    /// directory, or an invalid configuration file.
    pub async fn execute_with_root(self, root: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<bool> {
        let root = root.unwrap_or_else(|| PathBuf::from("."));
        let report = self.run(&root, config_path).await?;

        for warning in &report.warnings {
            eprintln!("{} {}", "warning:".yellow(), warning);
        }

        match self.format {
            OutputFormat::Text => print!("{}", render_text(&report)),
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&ValidationResults::from(&report))?);
            }
        }

        Ok(report.passed())
    }

    /// Produce the report without printing it.
    ///
    /// # Errors
    ///
    /// Same as [`Self::execute_with_root`].
    pub async fn run(&self, root: &Path, config_path: Option<PathBuf>) -> Result<ValidationReport> {
        let mut config = DatabaseConfig::load_with_optional(config_path, root).await?;
        config.validation.strict |= self.strict;
        tracing::debug!("Validating {} (strict: {})", root.display(), config.validation.strict);

        validate_database(root, &config).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ArrdbError;
    use crate::models::Finding;
    use crate::test_utils::TestDatabase;

    #[tokio::test]
    async fn test_run_reports_missing_format() {
        let db = TestDatabase::new().unwrap();
        db.regex_pattern("year", "name: year-pattern").unwrap();
        db.custom_format(
            "a",
            "name: fmt-a\nconditions:\n  - type: release_title\n    name: c1\n    pattern: year-pattern\n",
        )
        .unwrap();
        db.profile("p", "name: prof-1\ncustom_formats:\n  - name: fmt-a\n  - name: fmt-missing\n").unwrap();

        let report = ValidateCommand::default().run(db.root(), None).await.unwrap();
        assert!(!report.passed());
        assert_eq!(
            report.findings,
            [Finding::UnknownFormatReference {
                file: "profiles/p.yml".into(),
                field: "custom_formats".into(),
                name: "fmt-missing".into(),
            }]
        );
    }

    #[tokio::test]
    async fn test_strict_flag_promotes_duplicates() {
        let db = TestDatabase::new().unwrap();
        db.regex_pattern("a", "name: same").unwrap();
        db.regex_pattern("b", "name: same").unwrap();

        let lenient = ValidateCommand::default().run(db.root(), None).await.unwrap();
        assert!(lenient.passed());
        assert_eq!(lenient.warnings.len(), 1);

        let strict = ValidateCommand {
            strict: true,
            ..ValidateCommand::default()
        };
        let report = strict.run(db.root(), None).await.unwrap();
        assert!(!report.passed());
        assert!(report.warnings.is_empty());
    }

    #[tokio::test]
    async fn test_explicit_config_path() {
        let db = TestDatabase::new().unwrap();
        db.write("rules/a.yml", "name: fmt-a\nconditions: [{type: edition, name: c1, pattern: nope}]").unwrap();
        let config = db.write("alt.toml", "[layout]\ncustom_formats = \"rules\"\n").unwrap();

        let report = ValidateCommand::default().run(db.root(), Some(config)).await.unwrap();
        assert_eq!(report.findings.len(), 1);
        assert!(matches!(report.findings[0], Finding::UnknownPatternReference { .. }));
    }

    #[tokio::test]
    async fn test_missing_root_is_an_error() {
        let db = TestDatabase::new().unwrap();
        let err = ValidateCommand::default().run(&db.root().join("absent"), None).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ArrdbError>(),
            Some(ArrdbError::DatabaseRootNotFound { .. })
        ));
    }
}
