//! Core types shared by every layer of i18n-typegen.
//!
//! Currently this is the error system:
//! - [`TypegenError`] - enumerated failure cases of a generation run
//! - [`ErrorContext`] - user-friendly wrapper with details and suggestions
//! - [`user_friendly_error`] - converts any [`anyhow::Error`] for CLI display

pub mod error;

pub use error::{user_friendly_error, ErrorContext, TypegenError};
