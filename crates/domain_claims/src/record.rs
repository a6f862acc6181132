//! Common behaviour of the four record kinds

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Display;
use std::hash::Hash;
use validator::Validate;

use crate::error::DatasetError;

/// A keyed, validatable record loaded from one of the source files
pub trait Record: DeserializeOwned + Serialize + Validate + Clone {
    /// Primary key type
    type Id: Copy + Ord + Hash + Display;

    /// Human readable record kind used in logs and errors
    const KIND: &'static str;

    fn id(&self) -> Self::Id;

    /// Runs field validation, converting failures into a [`DatasetError`]
    fn check(&self) -> Result<(), DatasetError> {
        self.validate().map_err(|errors| DatasetError::InvalidRecord {
            kind: Self::KIND,
            id: self.id().to_string(),
            reason: errors.to_string(),
        })
    }
}
