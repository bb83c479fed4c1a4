//! Utilities shared by the CLI and library entry points.
//!
//! - [`fs`] - atomic writes and configuration discovery

pub mod fs;

pub use fs::{atomic_write, ensure_dir, find_config_file, safe_write};
