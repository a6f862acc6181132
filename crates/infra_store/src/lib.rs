//! Data Store Infrastructure
//!
//! This crate turns the four static JSON files into a [`Dataset`]
//! snapshot, and provides field filters for listing records.
//!
//! # Loading
//!
//! Each file must hold a JSON array. Elements are deserialized and validated
//! one by one; an element that fails either step is logged and skipped, so
//! one bad record never hides the rest of the file. A missing file or a
//! document that is not an array fails the whole load.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_store::{DataFiles, DatasetLoader};
//!
//! let files = DataFiles::in_dir("data");
//! let dataset = DatasetLoader::load(&files)?;
//! ```
//!
//! [`Dataset`]: domain_claims::Dataset

pub mod error;
pub mod files;
pub mod loader;
pub mod filter;

pub use error::StoreError;
pub use files::DataFiles;
pub use loader::{DatasetLoader, LoadReport, LoadedRecords};
pub use filter::RecordFilter;
