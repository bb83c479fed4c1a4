//! i18n-typegen - TypeScript declarations for localization messages
//!
//! Reads locale message catalogs and emits an ambient TypeScript declaration
//! file describing every message as a typed function, so that a call like
//! `t.greeting(name)` is checked by the compiler against the catalogs.
//!
//! # Pipeline
//!
//! For each configured source (one per client):
//!
//! 1. [`source`] loads every locale of the source and normalizes it into a
//!    [`shape::ShapeNode`] tree of message templates.
//! 2. [`merge`] folds the locale trees into one (last writer wins, first-seen
//!    key order).
//! 3. [`placeholder`] extracts the parameters of each template and
//!    [`signature`] renders them as `(name: string) => string`.
//! 4. [`emit`] wraps each client's members in a `declare global` block.
//!
//! [`generator`] drives these steps and assembles the final file.
//!
//! ```text
//! en.json  { "greet": "Hello {0:name}", "auth": { "logout": "Bye" } }
//!
//! declare global {
//!   namespace Localization {
//!     interface Messages {
//!       greet: (name: string) => string;
//!       auth: {
//!         logout: () => string;
//!       };
//!     }
//!   }
//! }
//!
//! export {};
//! ```
//!
//! # Core Modules
//!
//! - [`placeholder`] - placeholder grammar `{index}` / `{index:label}`
//! - [`signature`] - function signatures and identifier hygiene
//! - [`shape`] - the ordered message tree
//! - [`merge`] - tree merging across locales
//! - [`emit`] - declaration text
//! - [`source`] - locale sources (in-memory, directories of json/yaml/toml)
//! - [`generator`] - the end-to-end pipeline, sequential or concurrent
//!
//! # Supporting Modules
//!
//! - [`cache`] - per-run source cache with fingerprint-based invalidation
//! - [`config`] - `typegen.toml` parsing and validation
//! - [`core`] - error types and user-facing error formatting
//! - [`cli`] - the `i18n-typegen` command line
//! - [`utils`] - atomic writes and configuration discovery
//!
//! # Library Usage
//!
//! ```rust,no_run
//! use i18n_typegen::generator::Generator;
//! use i18n_typegen::source::{Content, StaticSource};
//!
//! # fn example() -> anyhow::Result<()> {
//! let source = StaticSource::new("app")
//!     .with_entry("en", Content::namespace([("greet", Content::template("Hi {0:name}"))]));
//!
//! let declarations = Generator::default().generate(&[&source])?;
//! assert!(declarations.contains("greet: (name: string) => string;"));
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod emit;
pub mod generator;
pub mod merge;
pub mod placeholder;
pub mod shape;
pub mod signature;
pub mod source;
pub mod utils;

// Test utilities (only compiled in test mode or with test-utils feature)
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
