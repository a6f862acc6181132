//! Counting queries

use core_kernel::ClaimHandlerId;

use crate::engine::QueryEngine;

impl QueryEngine {
    /// Number of claims whose status is exactly "Closed"
    pub fn count_closed_claims(&self) -> usize {
        self.dataset()
            .claims()
            .iter()
            .filter(|claim| claim.status.is_closed())
            .count()
    }

    /// Number of claims assigned to a claim handler; 0 for unknown handlers
    pub fn count_claims_for_handler(&self, handler_id: ClaimHandlerId) -> usize {
        self.dataset()
            .claims()
            .iter()
            .filter(|claim| claim.claim_handler_assigned_id == handler_id)
            .count()
    }

    /// Number of disasters in a state (exact, case-sensitive name match)
    pub fn count_disasters_for_state(&self, state: &str) -> usize {
        self.dataset()
            .disasters()
            .iter()
            .filter(|disaster| disaster.state == state)
            .count()
    }

    /// Number of disasters declared strictly after their end date
    pub fn count_disasters_declared_after_end_date(&self) -> usize {
        self.dataset()
            .disasters()
            .iter()
            .filter(|disaster| disaster.declared_after_end())
            .count()
    }
}
