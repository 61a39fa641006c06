//! Validate a layered YAML rule database.
//!
//! This module provides the `validate` command, which is also what `arrdb`
//! runs when no subcommand is given.
//!
//! # Examples
//!
//! Basic validation of the database in the current directory:
//! ```bash
//! arrdb
//! arrdb validate
//! ```
//!
//! JSON output for automation:
//! ```bash
//! arrdb validate --format json
//! ```
//!
//! Strict mode for CI (duplicate names fail the run):
//! ```bash
//! arrdb --root ./database validate --strict
//! ```
//!
//! # Exit Status
//!
//! - `0`: no findings
//! - `1`: at least one finding
//! - `2`: the database or its configuration could not be read

mod command;
mod executor;
mod results;

// Re-export public API
pub use command::{OutputFormat, ValidateCommand};
pub use results::{FAILED_HEADER, FindingRecord, PASSED_HEADER, ValidationResults, render_text};
