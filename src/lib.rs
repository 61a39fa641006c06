//! arrdb - validator for layered YAML rule databases
//!
//! A rule database is a directory of YAML documents in four categories:
//!
//! | Category | Directory | Referenced by |
//! |---|---|---|
//! | Regex pattern | `regex_patterns/` | custom format conditions |
//! | Custom format | `custom_formats/` | profiles |
//! | Profile | `profiles/` | - |
//! | Media management | `media_management/` | - |
//!
//! Validation checks that every document parses, has the shape its category
//! requires, and only references names that exist. Problems are reported as
//! [`models::Finding`] values, never as errors.
//!
//! # Pipeline
//!
//! ```text
//! loader ──► LoadOutcome ──► index::CategoryIndex ──► validation ──► ValidationReport
//!   │            (documents + parse failures)      ▲        │
//!   └ config::LayoutConfig             resolver ───┘        └► cli::validate (text / json)
//! ```
//!
//! 1. [`loader`] discovers `*.yml` files per category and parses them
//! 2. Any parse failure ends the run with only parse findings
//! 3. [`index`] groups documents and builds the name lookups
//! 4. [`validation`] checks each custom format, profile, and media
//!    management document, using [`resolver`] for name references
//! 5. [`cli`] renders the report and sets the exit status
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface
//! - [`config`] - Optional `arrdb.toml` (layout and validation settings)
//! - [`core`] - Categories and error handling
//! - [`index`] - Category index and name lookups
//! - [`loader`] - Document discovery and YAML parsing
//! - [`models`] - Typed documents and findings
//! - [`resolver`] - Cross-document reference resolution
//! - [`validation`] - Per-category validators and aggregation

pub mod cli;
pub mod config;
pub mod core;
pub mod index;
pub mod loader;
pub mod models;
pub mod resolver;
pub mod validation;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
