//! Error handling for i18n-typegen
//!
//! The generation core (placeholder parsing, merging, emission) is total and
//! never fails. Everything around it can: sources may be missing or malformed,
//! the configuration may be invalid, and the output file may not be writable.
//! Those failures are reported through two types:
//!
//! - [`TypegenError`] - enumerated failure cases for precise handling in code
//! - [`ErrorContext`] - wrapper adding user-facing details and a suggestion
//!
//! Application code propagates [`anyhow::Error`] with `.context(...)`; the CLI
//! turns whatever reaches `main` into an [`ErrorContext`] with
//! [`user_friendly_error`] and prints it.
//!
//! # Examples
//!
//! ```rust,no_run
//! use i18n_typegen::core::{ErrorContext, TypegenError};
//!
//! let context = ErrorContext::new(TypegenError::NoSources)
//!     .with_suggestion("Add a [[sources]] entry to typegen.toml")
//!     .with_details("Every run needs at least one locale source");
//!
//! context.display();
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// Failure cases of a generation run.
///
/// All of these abort the run before any declaration text is written.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypegenError {
    /// A configured source path does not exist.
    #[error("Locale source not found: {path}")]
    SourceNotFound {
        /// The path that was looked up
        path: String,
    },

    /// A source directory exists but holds no recognizable locale file.
    #[error("No locale files found in source: {path}")]
    NoLocaleFiles {
        /// The directory that was scanned
        path: String,
    },

    /// A locale file could not be parsed.
    #[error("Failed to parse locale file {path}: {reason}")]
    LocaleParseError {
        /// The offending file
        path: String,
        /// Parser message
        reason: String,
    },

    /// The run was started without any source.
    #[error("No locale sources configured")]
    NoSources,

    /// The configuration file does not exist.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was looked up
        path: String,
    },

    /// The configuration file parsed but holds unusable values.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// What is wrong with it
        message: String,
    },

    /// `check` found that the generated file differs from a fresh run.
    #[error("Declaration file is out of date: {path}")]
    StaleOutput {
        /// The checked output file
        path: String,
    },

    /// File system failure outside of source parsing.
    #[error("I/O error during {operation} on {path}: {reason}")]
    Io {
        /// What was being done, e.g. "reading" or "writing"
        operation: String,
        /// The affected path
        path: String,
        /// The underlying error message
        reason: String,
    },

    /// Anything else.
    #[error("{message}")]
    Other {
        /// Error message
        message: String,
    },
}

/// A [`TypegenError`] with optional details and a suggested fix.
#[derive(Debug)]
pub struct ErrorContext {
    pub error: TypegenError,
    pub suggestion: Option<String>,
    pub details: Option<String>,
}

impl ErrorContext {
    #[must_use]
    pub const fn new(error: TypegenError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add an actionable suggestion, shown in green.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add background details, shown in yellow.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error, details, and suggestion to stderr with colors.
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

/// Convert any error reaching the CLI boundary into a displayable context.
///
/// Known [`TypegenError`]s anywhere in the chain get tailored suggestions;
/// I/O and TOML errors get generic ones; everything else is reported with its
/// full cause chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(typed) = error.chain().find_map(|cause| cause.downcast_ref::<TypegenError>()) {
        return create_error_context(typed.clone());
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(TypegenError::Io {
                    operation: "file access".to_string(),
                    path: "unknown".to_string(),
                    reason: io_error.to_string(),
                })
                .with_suggestion("Check file ownership and permissions of the output location");
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(TypegenError::Io {
                    operation: "file access".to_string(),
                    path: "unknown".to_string(),
                    reason: io_error.to_string(),
                })
                .with_suggestion("Check that the file or directory exists and the path is correct");
            }
            _ => {}
        }
    }

    if let Some(toml_error) = error.downcast_ref::<toml::de::Error>() {
        return ErrorContext::new(TypegenError::InvalidConfig {
            message: toml_error.to_string(),
        })
        .with_suggestion("Check the TOML syntax of your typegen.toml");
    }

    let mut message = error.to_string();
    let chain: Vec<String> =
        error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(TypegenError::Other {
        message,
    })
}

fn create_error_context(error: TypegenError) -> ErrorContext {
    match &error {
        TypegenError::SourceNotFound {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Check the `path` of each [[sources]] entry in typegen.toml")
            .with_details("Relative source paths are resolved against the configuration file's directory"),
        TypegenError::NoLocaleFiles {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Add files named like `en.json`, `de.yaml` or `fr.toml` to the source directory")
            .with_details("Recognized extensions: json, yaml, yml, toml"),
        TypegenError::LocaleParseError {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Fix the syntax of the locale file; no output was written"),
        TypegenError::NoSources => ErrorContext::new(error)
            .with_suggestion("Add at least one [[sources]] entry with a `path` to typegen.toml"),
        TypegenError::ConfigNotFound {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Create typegen.toml or pass --config <path>"),
        TypegenError::InvalidConfig {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Namespace and interface names must be plain identifiers"),
        TypegenError::StaleOutput {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Run `i18n-typegen generate` and commit the result"),
        TypegenError::Io {
            ..
        }
        | TypegenError::Other {
            ..
        } => ErrorContext::new(error),
    }
}
