//! File system helpers for reading and writing declaration files.
//!
//! - [`atomic`] - write-then-rename output so a failed run never leaves a
//!   truncated declaration file behind
//! - [`paths`] - locating `typegen.toml` from a working directory
//!
//! # Examples
//!
//! ```rust,no_run
//! use i18n_typegen::utils::fs::{find_config_file, safe_write};
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = find_config_file(Path::new("."))?;
//! safe_write(Path::new("i18n.d.ts"), "export {};\n")?;
//! # Ok(())
//! # }
//! ```

pub mod atomic;
pub mod paths;

pub use atomic::{atomic_write, ensure_dir, read_if_exists, safe_write};
pub use paths::find_config_file;
