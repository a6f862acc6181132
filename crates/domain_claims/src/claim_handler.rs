//! Claim handlers

use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::ClaimHandlerId;
use crate::record::Record;

/// A claim handler (adjuster) that claims are assigned to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ClaimHandler {
    pub id: ClaimHandlerId,
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
}

impl Record for ClaimHandler {
    type Id = ClaimHandlerId;
    const KIND: &'static str = "claim handler";

    fn id(&self) -> ClaimHandlerId {
        self.id
    }
}
