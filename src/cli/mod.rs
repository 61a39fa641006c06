//! Command-line interface for arrdb.
//!
//! arrdb validates a layered YAML rule database: regex patterns, custom
//! formats built from conditions that reference those patterns, profiles that
//! select custom formats, and standalone media management settings.
//!
//! # Commands
//!
//! - `validate` - Validate the database (the default when no command is given)
//!
//! # Global Options
//!
//! - `--verbose/-v` - Debug logging on stderr
//! - `--quiet/-q` - Only error logs on stderr
//! - `--root <DIR>` - Database root (default: current directory)
//! - `--config <FILE>` - Configuration file (default: `<root>/arrdb.toml`)
//! - `--no-color` - Disable colored output
//!
//! # Examples
//!
//! ```bash
//! # Validate the database in the current directory
//! arrdb
//!
//! # Validate another checkout with JSON output
//! arrdb --root ../database validate --format json
//!
//! # Debug discovery and indexing
//! arrdb -v validate
//! ```
//!
//! Logging goes to stderr only; stdout carries nothing but the report.

pub mod validate;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Runtime configuration for CLI execution.
///
/// Built once from the parsed flags and applied before dispatch, so tests can
/// construct one directly instead of going through argument parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Default log filter, used when `RUST_LOG` is unset.
    ///
    /// - `"error"` with `--quiet`
    /// - `"warn"` by default
    /// - `"debug"` with `--verbose`
    pub log_level: String,

    /// Whether colored output is allowed.
    ///
    /// Even when `true`, color is only emitted when stdout is a terminal.
    pub color: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            color: true,
        }
    }
}

impl CliConfig {
    /// Create a CLI configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Log filter to install: `RUST_LOG` when set, otherwise [`Self::log_level`].
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.log_level))
    }

    /// Install the stderr log subscriber and the color override.
    ///
    /// Call once at the start of execution. A subscriber that is already
    /// installed (e.g. by tests) is left in place.
    pub fn apply(&self) {
        if !self.color || !std::io::stdout().is_terminal() {
            colored::control::set_override(false);
        }

        let _ = tracing_subscriber::fmt()
            .with_env_filter(self.env_filter())
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_ansi(self.color && std::io::stderr().is_terminal())
            .try_init();
    }
}

/// Main CLI structure for arrdb.
#[derive(Parser, Debug)]
#[command(
    name = "arrdb",
    about = "Validate a layered YAML rule database",
    version,
    long_about = "arrdb checks that every document in a regex pattern / custom format / profile / \
                  media management database parses, has the required shape, and only references \
                  names that exist."
)]
pub struct Cli {
    /// The subcommand to execute; `validate` when omitted.
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose output (debug logging on stderr).
    ///
    /// Mutually exclusive with `--quiet`. `RUST_LOG` takes precedence.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors.
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Root directory of the rule database.
    ///
    /// Category directories (`regex_patterns/`, `custom_formats/`,
    /// `profiles/`, `media_management/`) are looked up directly under it.
    #[arg(long, global = true, value_name = "DIR")]
    root: Option<PathBuf>,

    /// Path to the database configuration file.
    ///
    /// Defaults to `arrdb.toml` in the database root; a missing default file
    /// means built-in defaults, a missing explicit file is an error.
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate the rule database.
    ///
    /// See [`validate::ValidateCommand`] for options.
    Validate(validate::ValidateCommand),
}

impl Cli {
    /// Execute the parsed command line.
    ///
    /// # Returns
    ///
    /// `Ok(true)` when validation passed, `Ok(false)` when it found problems.
    ///
    /// # Errors
    ///
    /// Environment faults (unreadable database, bad configuration).
    pub async fn execute(self) -> Result<bool> {
        let config = self.build_config();
        self.execute_with_config(config).await
    }

    /// Build a [`CliConfig`] from the parsed CLI arguments.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use arrdb_cli::cli::Cli;
    /// use clap::Parser;
    ///
    /// let cli = Cli::parse_from(["arrdb", "--verbose"]);
    /// assert_eq!(cli.build_config().log_level, "debug");
    /// ```
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        };

        CliConfig {
            log_level: log_level.to_string(),
            color: !self.no_color,
        }
    }

    /// Execute with an explicit configuration.
    ///
    /// # Errors
    ///
    /// See [`Self::execute`].
    pub async fn execute_with_config(self, config: CliConfig) -> Result<bool> {
        config.apply();

        match self.command.unwrap_or_else(|| Commands::Validate(validate::ValidateCommand::default())) {
            Commands::Validate(cmd) => cmd.execute_with_root(self.root, self.config).await,
        }
    }
}
