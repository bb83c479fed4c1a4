//! Test utilities for i18n-typegen
//!
//! Helpers for tests that need locale files on disk or log output:
//! - [`TestProject`] - a temporary project with `typegen.toml` and locale files
//! - [`init_test_logging`] - once-only tracing setup writing to the test output
//!
//! # Example
//!
//! ```rust,no_run
//! use i18n_typegen::test_utils::TestProject;
//!
//! let project = TestProject::new()
//!     .unwrap()
//!     .with_locale("app", "en.json", r#"{"greet": "Hi {0:name}"}"#)
//!     .unwrap()
//!     .with_config(&["app"])
//!     .unwrap();
//! assert!(project.path().join("typegen.toml").exists());
//! ```

pub mod project;

pub use project::TestProject;

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has an effect. Uses `level` if given, otherwise
/// `RUST_LOG`; with neither, logging stays off.
///
/// ```bash
/// RUST_LOG=debug cargo test
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
