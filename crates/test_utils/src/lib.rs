//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! claims analytics test suite.
//!
//! # Modules
//!
//! - `fixtures`: A small hand-computed sample dataset
//! - `builders`: Builder patterns for records
//! - `files`: Writes datasets to temporary JSON data directories
//! - `assertions`: Custom assertion helpers for decimal results
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod files;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use files::*;
pub use assertions::*;
pub use generators::*;
