//! Query engine construction

use domain_claims::Dataset;

/// Read-only analytics over one immutable dataset snapshot
///
/// The engine owns its dataset and never mutates it, so a single instance
/// can be shared freely (e.g. behind an `Arc`) between callers.
#[derive(Debug, Clone, Default)]
pub struct QueryEngine {
    dataset: Dataset,
}

impl QueryEngine {
    /// Creates an engine over a loaded dataset
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }

    /// The underlying dataset
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }
}

impl From<Dataset> for QueryEngine {
    fn from(dataset: Dataset) -> Self {
        Self::new(dataset)
    }
}
