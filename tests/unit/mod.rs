//! Unit test suite for i18n-typegen
//!
//! Exercises the public library API without touching the binary.
//!
//! ```bash
//! cargo test --test unit
//! ```
//!
//! - **properties**: placeholder parsing, signatures, merging and ordering
//! - **pipeline**: end-to-end generation from in-memory and on-disk sources

mod pipeline;
mod properties;
