//! Open claim counts per agent and severity

use serde::{Serialize, Serializer};

use core_kernel::AgentId;
use domain_claims::claim::{MAX_SEVERITY, MIN_SEVERITY};

use crate::engine::QueryEngine;

/// Outcome of [`QueryEngine::num_open_claims_for_agent_and_severity`]
///
/// Keeps "the agent has no claim data" apart from "claims exist but none
/// qualify", which is a real zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenClaimCount {
    /// Minimum severity outside 1..=10
    SeverityOutOfRange,
    /// Unknown agent, or an agent with no claims at all
    NoClaims,
    /// Open claims at or above the minimum severity
    Count(usize),
}

impl OpenClaimCount {
    /// Sentinel form: `-1` when out of range, `None` when absent
    pub fn as_sentinel(&self) -> Option<i64> {
        match self {
            OpenClaimCount::SeverityOutOfRange => Some(-1),
            OpenClaimCount::NoClaims => None,
            OpenClaimCount::Count(n) => Some(*n as i64),
        }
    }

    pub fn count(&self) -> Option<usize> {
        match self {
            OpenClaimCount::Count(n) => Some(*n),
            _ => None,
        }
    }
}

impl Serialize for OpenClaimCount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_sentinel().serialize(serializer)
    }
}

impl QueryEngine {
    /// Counts an agent's claims that are not "Closed" and have a severity
    /// rating of at least `min_severity`
    ///
    /// The severity range is checked before anything else, so an invalid
    /// severity yields [`OpenClaimCount::SeverityOutOfRange`] for any agent.
    pub fn num_open_claims_for_agent_and_severity(
        &self,
        agent_id: AgentId,
        min_severity: i32,
    ) -> OpenClaimCount {
        if !(MIN_SEVERITY..=MAX_SEVERITY).contains(&min_severity) {
            return OpenClaimCount::SeverityOutOfRange;
        }
        if !self.dataset().contains_agent(agent_id) {
            return OpenClaimCount::NoClaims;
        }

        let (total, qualifying) = self
            .dataset()
            .claims()
            .iter()
            .filter(|claim| claim.agent_assigned_id == agent_id)
            .fold((0usize, 0usize), |(total, qualifying), claim| {
                let qualifies = claim.is_open() && claim.severity_rating >= min_severity;
                (total + 1, qualifying + usize::from(qualifies))
            });

        if total == 0 {
            OpenClaimCount::NoClaims
        } else {
            OpenClaimCount::Count(qualifying)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_mapping() {
        assert_eq!(OpenClaimCount::SeverityOutOfRange.as_sentinel(), Some(-1));
        assert_eq!(OpenClaimCount::NoClaims.as_sentinel(), None);
        assert_eq!(OpenClaimCount::Count(0).as_sentinel(), Some(0));
    }

    #[test]
    fn test_serializes_as_sentinel() {
        assert_eq!(serde_json::to_string(&OpenClaimCount::NoClaims).unwrap(), "null");
        assert_eq!(serde_json::to_string(&OpenClaimCount::Count(16)).unwrap(), "16");
        assert_eq!(serde_json::to_string(&OpenClaimCount::SeverityOutOfRange).unwrap(), "-1");
    }
}
