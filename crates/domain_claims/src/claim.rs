//! Claims filed against disasters

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::{Validate, ValidationError};

use core_kernel::{AgentId, ClaimHandlerId, ClaimId, DisasterId, Money};
use crate::record::Record;

/// Lowest valid severity rating
pub const MIN_SEVERITY: i32 = 1;
/// Highest valid severity rating
pub const MAX_SEVERITY: i32 = 10;

/// Claim status
///
/// Matching is exact and case-sensitive: only the literal `"Closed"` is
/// [`ClaimStatus::Closed`]. Statuses outside the known set are preserved
/// verbatim rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ClaimStatus {
    Open,
    Closed,
    Received,
    Other(String),
}

impl ClaimStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ClaimStatus::Open => "Open",
            ClaimStatus::Closed => "Closed",
            ClaimStatus::Received => "Received",
            ClaimStatus::Other(s) => s,
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, ClaimStatus::Closed)
    }
}

impl From<String> for ClaimStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Open" => ClaimStatus::Open,
            "Closed" => ClaimStatus::Closed,
            "Received" => ClaimStatus::Received,
            _ => ClaimStatus::Other(s),
        }
    }
}

impl From<ClaimStatus> for String {
    fn from(status: ClaimStatus) -> String {
        match status {
            ClaimStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A claim filed for damage caused by a disaster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Claim {
    pub id: ClaimId,
    pub disaster_id: DisasterId,
    pub status: ClaimStatus,
    #[serde(default)]
    pub total_loss: bool,
    #[serde(default)]
    pub loss_of_life: bool,
    #[serde(rename = "type", default)]
    pub claim_type: String,
    /// Expected to be 1..=10 but not guaranteed by the source data
    pub severity_rating: i32,
    #[validate(custom(function = "non_negative_cost"))]
    pub estimate_cost: Money,
    pub agent_assigned_id: AgentId,
    pub claim_handler_assigned_id: ClaimHandlerId,
}

impl Claim {
    pub fn is_open(&self) -> bool {
        !self.status.is_closed()
    }
}

impl Record for Claim {
    type Id = ClaimId;
    const KIND: &'static str = "claim";

    fn id(&self) -> ClaimId {
        self.id
    }
}

fn non_negative_cost(cost: &Money) -> Result<(), ValidationError> {
    if cost.is_negative() {
        return Err(ValidationError::new("negative_estimate_cost"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_is_case_sensitive() {
        assert!(ClaimStatus::from("Closed".to_string()).is_closed());
        assert!(!ClaimStatus::from("closed".to_string()).is_closed());
        assert_eq!(
            ClaimStatus::from("closed".to_string()),
            ClaimStatus::Other("closed".to_string())
        );
    }

    #[test]
    fn test_unknown_status_round_trips() {
        let status: ClaimStatus = serde_json::from_str("\"In Review\"").unwrap();
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"In Review\"");
    }

    #[test]
    fn test_deserialize_claim() {
        let json = r#"{
            "id": 1,
            "disaster_id": 5,
            "status": "Open",
            "total_loss": false,
            "loss_of_life": false,
            "type": "Fire",
            "severity_rating": 7,
            "estimate_cost": 12345.67,
            "agent_assigned_id": 24,
            "claim_handler_assigned_id": 93
        }"#;
        let claim: Claim = serde_json::from_str(json).unwrap();
        assert_eq!(claim.disaster_id, DisasterId::new(5));
        assert_eq!(claim.claim_type, "Fire");
        assert!(claim.is_open());
        assert!(claim.check().is_ok());
    }
}
