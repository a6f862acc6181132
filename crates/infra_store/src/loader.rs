//! JSON data file loader
//!
//! Parses each data file into typed records, validating every element and
//! skipping the ones that are malformed.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::{error, info, warn};

use domain_claims::{Agent, Claim, ClaimHandler, Dataset, DatasetError, Disaster, Record};

use crate::error::StoreError;
use crate::files::DataFiles;

/// Outcome of loading one data file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    /// Record kind, e.g. "claim"
    pub kind: &'static str,
    /// Elements accepted into the collection
    pub accepted: usize,
    /// Elements skipped as malformed or invalid
    pub rejected: usize,
}

/// Records parsed from one file together with its report
#[derive(Debug, Clone)]
pub struct LoadedRecords<R> {
    pub records: Vec<R>,
    pub report: LoadReport,
}

/// Loads the four data files into a [`Dataset`]
pub struct DatasetLoader;

impl DatasetLoader {
    /// Loads all four files
    ///
    /// # Arguments
    ///
    /// * `files` - Locations of the data files
    ///
    /// # Returns
    ///
    /// The de-duplicated dataset, or the first file-level error
    pub fn load(files: &DataFiles) -> Result<Dataset, StoreError> {
        let agents = Self::load_records::<Agent>(&files.agents)?;
        let handlers = Self::load_records::<ClaimHandler>(&files.claim_handlers)?;
        let claims = Self::load_records::<Claim>(&files.claims)?;
        let disasters = Self::load_records::<Disaster>(&files.disasters)?;

        let dataset = Dataset::new(agents.records, handlers.records, claims.records, disasters.records);

        info!(
            agents = dataset.agents().len(),
            claim_handlers = dataset.claim_handlers().len(),
            claims = dataset.claims().len(),
            disasters = dataset.disasters().len(),
            "Dataset loaded"
        );
        Ok(dataset)
    }

    /// Loads all four files, falling back to an empty dataset on failure
    pub fn load_or_empty(files: &DataFiles) -> Dataset {
        Self::load(files).unwrap_or_else(|err| {
            error!(error = %err, "Failed to load dataset, continuing with empty collections");
            Dataset::empty()
        })
    }

    /// Loads one file of records of kind `R`
    ///
    /// # Arguments
    ///
    /// * `path` - Path of a file holding a JSON array
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not JSON, or is not an
    /// array. Invalid elements are skipped, not reported as errors.
    pub fn load_records<R: Record>(path: &Path) -> Result<LoadedRecords<R>, StoreError> {
        let text = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_records(path, &text)
    }

    /// Parses the text of one data file
    pub fn parse_records<R: Record>(path: &Path, text: &str) -> Result<LoadedRecords<R>, StoreError> {
        let document: Value = serde_json::from_str(text).map_err(|source| StoreError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        let Value::Array(elements) = document else {
            return Err(StoreError::NotAnArray {
                path: path.to_path_buf(),
            });
        };

        let total = elements.len();
        let mut records = Vec::with_capacity(total);
        for (index, element) in elements.into_iter().enumerate() {
            match parse_record::<R>(element) {
                Ok(record) => records.push(record),
                Err(err) => warn!(
                    file = %path.display(),
                    index,
                    error = %err,
                    "Skipping {} record",
                    R::KIND
                ),
            }
        }

        let report = LoadReport {
            kind: R::KIND,
            accepted: records.len(),
            rejected: total - records.len(),
        };
        info!(
            file = %path.display(),
            accepted = report.accepted,
            rejected = report.rejected,
            "Loaded {} records",
            R::KIND
        );
        Ok(LoadedRecords { records, report })
    }
}

fn parse_record<R: Record>(element: Value) -> Result<R, DatasetError> {
    let record: R = serde_json::from_value(element)
        .map_err(|err| DatasetError::malformed(R::KIND, err.to_string()))?;
    record.check()?;
    Ok(record)
}
