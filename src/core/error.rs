//! Error handling for arrdb
//!
//! This module separates the two kinds of failure the validator can meet:
//!
//! 1. **Validation findings** are ordinary data ([`crate::validation::Finding`])
//!    and never travel through this module.
//! 2. **Environment faults** (unreadable database root, broken config file,
//!    filesystem errors) are [`ArrdbError`] values. They abort the run and are
//!    reported with a distinct exit status.
//!
//! Use [`user_friendly_error`] to turn any [`anyhow::Error`] into an
//! [`ErrorContext`] with a suggestion suitable for CLI display.
//!
//! # Examples
//!
//! ```rust,no_run
//! use arrdb_cli::core::{ArrdbError, ErrorContext, user_friendly_error};
//!
//! let error = ArrdbError::DatabaseRootNotFound {
//!     path: "/tmp/missing".to_string(),
//! };
//! let ctx = user_friendly_error(anyhow::Error::from(error));
//! ctx.display();
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// Environment faults that stop a validation run before or while loading.
///
/// None of these describe a problem *inside* a rule document; those are
/// reported as findings. These describe a problem reaching the documents.
#[derive(Error, Debug)]
pub enum ArrdbError {
    /// The database root passed via `--root` (or the working directory) does not exist
    #[error("Database root not found: {path}")]
    DatabaseRootNotFound {
        /// Path that was looked up
        path: String,
    },

    /// A category directory exists but its entries could not be listed
    #[error("Failed to read directory {path}: {reason}")]
    DirectoryReadFailed {
        /// Directory being listed
        path: String,
        /// Underlying reason
        reason: String,
    },

    /// A document exists but could not be read from disk
    #[error("Failed to read file {path}: {reason}")]
    FileReadFailed {
        /// File being read
        path: String,
        /// Underlying reason
        reason: String,
    },

    /// The `arrdb.toml` configuration file has invalid TOML syntax or schema
    #[error("Invalid configuration in {file}: {reason}")]
    ConfigParseError {
        /// Configuration file path
        file: String,
        /// Parser message
        reason: String,
    },

    /// The configuration parsed but describes an unusable layout
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// What is wrong with it
        reason: String,
    },

    /// Raw I/O error not attributable to a specific file
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// An [`ArrdbError`] paired with optional details and a suggested fix.
///
/// This is what the binary prints to stderr when a run aborts.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: ArrdbError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: ArrdbError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details explaining the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error to stderr: error in red, details in yellow, suggestion in green.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into a user-friendly [`ErrorContext`].
///
/// The error chain is walked so that an [`ArrdbError`] wrapped by
/// `anyhow::Context` is still recognized. I/O errors get filesystem hints;
/// anything else is reported verbatim with its full context chain.
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    for cause in error.chain() {
        if let Some(arrdb_error) = cause.downcast_ref::<ArrdbError>() {
            return create_error_context(arrdb_error, &error);
        }
    }

    for cause in error.chain() {
        if let Some(io_error) = cause.downcast_ref::<std::io::Error>() {
            let ctx = ErrorContext::new(ArrdbError::IoError(std::io::Error::new(
                io_error.kind(),
                error.to_string(),
            )));
            return match io_error.kind() {
                std::io::ErrorKind::PermissionDenied => ctx
                    .with_suggestion("Check read permissions on the database directories")
                    .with_details(format!("{error:#}")),
                std::io::ErrorKind::NotFound => ctx
                    .with_suggestion("Check that the path exists and is spelled correctly")
                    .with_details(format!("{error:#}")),
                _ => ctx.with_details(format!("{error:#}")),
            };
        }
    }

    ErrorContext::new(ArrdbError::IoError(std::io::Error::other(error.to_string())))
        .with_details(format!("{error:#}"))
}

fn create_error_context(error: &ArrdbError, chain: &anyhow::Error) -> ErrorContext {
    match error {
        ArrdbError::DatabaseRootNotFound { path } => {
            ErrorContext::new(ArrdbError::DatabaseRootNotFound { path: path.clone() })
                .with_suggestion("Run arrdb from the database checkout or pass --root <DIR>")
                .with_details(
                    "The database root is the directory containing regex_patterns/, custom_formats/, profiles/ and media_management/",
                )
        }
        ArrdbError::DirectoryReadFailed { path, reason } => {
            ErrorContext::new(ArrdbError::DirectoryReadFailed {
                path: path.clone(),
                reason: reason.clone(),
            })
            .with_suggestion("Check that the directory is readable by the current user")
        }
        ArrdbError::FileReadFailed { path, reason } => ErrorContext::new(ArrdbError::FileReadFailed {
            path: path.clone(),
            reason: reason.clone(),
        })
        .with_suggestion("Check file permissions and that the file is not locked by another process"),
        ArrdbError::ConfigParseError { file, reason } => {
            ErrorContext::new(ArrdbError::ConfigParseError {
                file: file.clone(),
                reason: reason.clone(),
            })
            .with_suggestion("Check the TOML syntax in arrdb.toml. Verify quotes, brackets, and key names")
            .with_details("Only the [layout] and [validation] tables are recognized")
        }
        ArrdbError::InvalidConfig { reason } => ErrorContext::new(ArrdbError::InvalidConfig {
            reason: reason.clone(),
        })
        .with_suggestion("Remove the offending key from arrdb.toml to fall back to the default"),
        ArrdbError::IoError(io_error) => ErrorContext::new(ArrdbError::IoError(
            std::io::Error::new(io_error.kind(), io_error.to_string()),
        ))
        .with_details(format!("{chain:#}")),
    }
}
