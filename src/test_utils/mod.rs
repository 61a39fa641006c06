//! Test utilities for arrdb
//!
//! Available to unit tests and, through the `test-utils` feature, to the
//! integration tests under `tests/`.
//!
//! - [`TestDatabase`] builds a rule database in a temporary directory
//! - [`init_test_logging`] wires `tracing` output into the test harness
//!
//! # Example
//!
//! ```rust,no_run
//! use arrdb_cli::test_utils::TestDatabase;
//!
//! let db = TestDatabase::new().unwrap();
//! db.custom_format("a", "name: fmt-a\nconditions: [{type: size}]").unwrap();
//! assert!(db.root().join("custom_formats/a.yml").exists());
//! ```

mod database;

pub use database::TestDatabase;

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has any effect. Uses `level` when given, otherwise
/// `RUST_LOG`; with neither, logging stays off.
///
/// ```bash
/// RUST_LOG=arrdb_cli=trace cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}
