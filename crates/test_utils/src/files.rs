//! Temporary data directories
//!
//! Writes record collections to JSON files laid out the way the loader
//! expects, inside a directory that is removed when dropped.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tempfile::TempDir;

use crate::fixtures::SampleData;

pub const AGENTS_FILE: &str = "sfcc_2023_agents.json";
pub const CLAIM_HANDLERS_FILE: &str = "sfcc_2023_claim_handlers.json";
pub const CLAIMS_FILE: &str = "sfcc_2023_claims.json";
pub const DISASTERS_FILE: &str = "sfcc_2023_disasters.json";

/// A temporary directory holding the four data files
pub struct DataDir {
    dir: TempDir,
}

impl DataDir {
    /// Creates an empty temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    /// A directory populated with [`SampleData`]
    pub fn sample() -> Self {
        let dir = Self::new();
        dir.write_records(AGENTS_FILE, &SampleData::agents());
        dir.write_records(CLAIM_HANDLERS_FILE, &SampleData::claim_handlers());
        dir.write_records(CLAIMS_FILE, &SampleData::claims());
        dir.write_records(DISASTERS_FILE, &SampleData::disasters());
        dir
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Serializes records as a JSON array into `name`
    pub fn write_records<T: Serialize>(&self, name: &str, records: &[T]) {
        let json = serde_json::to_string_pretty(records).expect("serialize records");
        self.write_raw(name, &json);
    }

    /// Writes raw text into `name`, e.g. to exercise malformed input
    pub fn write_raw(&self, name: &str, contents: &str) {
        fs::write(self.file(name), contents).expect("write data file");
    }

    pub fn remove(&self, name: &str) {
        fs::remove_file(self.file(name)).expect("remove data file");
    }
}

impl Default for DataDir {
    fn default() -> Self {
        Self::new()
    }
}
