//! Command structure and output format definitions for validation.

use clap::Args;

/// Command to validate a layered YAML rule database.
///
/// Validation runs in two stages:
/// 1. **Parse**: every document must be valid YAML. Any failure stops here.
/// 2. **Semantic**: structural checks per category and name references
///    (condition → regex pattern, profile → custom format).
///
/// # Examples
///
/// ```rust,ignore
/// use arrdb_cli::cli::validate::{OutputFormat, ValidateCommand};
///
/// // What `arrdb` runs with no subcommand
/// let cmd = ValidateCommand::default();
///
/// // CI validation with machine-readable output
/// let cmd = ValidateCommand {
///     format: OutputFormat::Json,
///     strict: true,
/// };
/// ```
#[derive(Args, Debug, Clone, Default)]
pub struct ValidateCommand {
    /// Output format: text or json
    ///
    /// - `text`: `VALIDATION PASSED` / `VALIDATION FAILED` report
    /// - `json`: Structured JSON output suitable for automation
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Strict mode (treat warnings as errors)
    ///
    /// Duplicate regex pattern or custom format names are warnings by
    /// default. In strict mode they fail the run. Also enabled by
    /// `validation.strict = true` in `arrdb.toml`.
    #[arg(long)]
    pub strict: bool,
}

/// Output format options for validation results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text report, one finding per line.
    #[default]
    Text,

    /// Structured JSON output for automation.
    Json,
}
