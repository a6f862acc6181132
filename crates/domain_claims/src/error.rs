//! Claims domain errors

use thiserror::Error;

/// Errors raised while accepting records into a dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Invalid {kind} record {id}: {reason}")]
    InvalidRecord {
        kind: &'static str,
        id: String,
        reason: String,
    },

    #[error("Malformed {kind} record: {reason}")]
    Malformed { kind: &'static str, reason: String },
}

impl DatasetError {
    pub fn malformed(kind: &'static str, reason: impl Into<String>) -> Self {
        DatasetError::Malformed {
            kind,
            reason: reason.into(),
        }
    }
}
