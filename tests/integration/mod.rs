//! Integration test suite for i18n-typegen
//!
//! Drives the compiled binary against temporary projects.
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! - **generate**: writing, printing and overriding the output file
//! - **check**: staleness detection
//! - **errors**: exit codes and messages for broken projects
//! - **watch**: `generate --watch` regenerating on change

mod check;
mod errors;
mod generate;
mod watch;

use assert_cmd::Command;

/// A command for the binary with colors disabled and logging quiet by default.
pub fn typegen() -> Command {
    let mut cmd = Command::cargo_bin("i18n-typegen").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG").env_remove("I18N_TYPEGEN_CONFIG");
    cmd
}
