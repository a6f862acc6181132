//! Cost aggregation queries
//!
//! Sums are accumulated exactly as [`Money`] and rounded half-up to cents
//! only when the result is returned.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tracing::debug;

use core_kernel::{AgentId, ClaimHandlerId, DisasterId, Money};

use crate::engine::QueryEngine;

impl QueryEngine {
    /// Total estimated cost of the claims filed for a disaster
    ///
    /// Returns `None` when no claim references the disaster, whether or not
    /// the disaster itself exists.
    pub fn total_claim_cost_for_disaster(&self, disaster_id: DisasterId) -> Option<Decimal> {
        let mut matched = false;
        let total: Money = self
            .dataset()
            .claims()
            .iter()
            .filter(|claim| claim.disaster_id == disaster_id)
            .inspect(|_| matched = true)
            .map(|claim| claim.estimate_cost)
            .sum();

        if !matched {
            debug!(%disaster_id, "No claims for disaster");
            return None;
        }
        Some(total.to_cents())
    }

    /// Mean estimated cost of the claims assigned to a claim handler
    ///
    /// Returns `None` when the handler has no claims.
    pub fn average_claim_cost_for_handler(&self, handler_id: ClaimHandlerId) -> Option<Decimal> {
        let (count, total) = self
            .dataset()
            .claims()
            .iter()
            .filter(|claim| claim.claim_handler_assigned_id == handler_id)
            .fold((0usize, Money::zero()), |(count, total), claim| {
                (count + 1, total + claim.estimate_cost)
            });

        // mean_over rejects a zero count, which is the "no claims" case
        total.mean_over(count).ok().map(|mean| mean.to_cents())
    }

    /// Total estimated claim cost per agent
    ///
    /// The map has exactly one entry per known agent. Agents without claims
    /// map to zero; claims assigned to unknown agents are ignored.
    pub fn total_claim_cost_by_agent(&self) -> BTreeMap<AgentId, Decimal> {
        let mut totals: BTreeMap<AgentId, Money> = self
            .dataset()
            .agents()
            .iter()
            .map(|agent| (agent.id, Money::zero()))
            .collect();

        for claim in self.dataset().claims() {
            match totals.get_mut(&claim.agent_assigned_id) {
                Some(total) => *total += claim.estimate_cost,
                None => debug!(
                    claim_id = %claim.id,
                    agent_id = %claim.agent_assigned_id,
                    "Claim assigned to unknown agent"
                ),
            }
        }

        totals
            .into_iter()
            .map(|(agent_id, total)| (agent_id, total.to_cents()))
            .collect()
    }
}
