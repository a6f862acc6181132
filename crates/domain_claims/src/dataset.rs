//! The immutable snapshot of all four collections
//!
//! A `Dataset` is built once, by the loader, and handed to the query engine.
//! Nothing mutates it afterwards.

use std::collections::{BTreeMap, HashSet};

use tracing::warn;

use core_kernel::{AgentId, DisasterId};
use crate::agent::Agent;
use crate::claim::Claim;
use crate::claim_handler::ClaimHandler;
use crate::disaster::Disaster;
use crate::record::Record;
use crate::region::Region;

/// All agents, claim handlers, claims and disasters, de-duplicated by id
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    agents: Vec<Agent>,
    claim_handlers: Vec<ClaimHandler>,
    claims: Vec<Claim>,
    disasters: Vec<Disaster>,
    agent_index: BTreeMap<AgentId, usize>,
    disaster_index: BTreeMap<DisasterId, usize>,
}

impl Dataset {
    /// Builds a snapshot from the four collections
    ///
    /// Records are sorted by id. When an id occurs more than once the first
    /// occurrence is kept and the rest are dropped with a warning. Agents
    /// without a region get the census region of their state.
    pub fn new(
        agents: Vec<Agent>,
        claim_handlers: Vec<ClaimHandler>,
        claims: Vec<Claim>,
        disasters: Vec<Disaster>,
    ) -> Self {
        let agents: Vec<Agent> = dedup_by_id(agents).into_iter().map(fill_region).collect();
        let claim_handlers = dedup_by_id(claim_handlers);
        let claims = dedup_by_id(claims);
        let disasters = dedup_by_id(disasters);

        let agent_index = index_by_id(&agents);
        let disaster_index = index_by_id(&disasters);

        Self {
            agents,
            claim_handlers,
            claims,
            disasters,
            agent_index,
            disaster_index,
        }
    }

    /// The shape handed over when loading fails
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn claim_handlers(&self) -> &[ClaimHandler] {
        &self.claim_handlers
    }

    pub fn claims(&self) -> &[Claim] {
        &self.claims
    }

    pub fn disasters(&self) -> &[Disaster] {
        &self.disasters
    }

    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agent_index.get(&id).map(|&i| &self.agents[i])
    }

    pub fn contains_agent(&self, id: AgentId) -> bool {
        self.agent_index.contains_key(&id)
    }

    pub fn disaster(&self, id: DisasterId) -> Option<&Disaster> {
        self.disaster_index.get(&id).map(|&i| &self.disasters[i])
    }

    /// Region of a state name, if it is one of the 50 states or DC
    pub fn region_of(&self, state: &str) -> Option<Region> {
        Region::for_state(state)
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
            && self.claim_handlers.is_empty()
            && self.claims.is_empty()
            && self.disasters.is_empty()
    }
}

fn dedup_by_id<R: Record>(records: Vec<R>) -> Vec<R> {
    let mut seen = HashSet::with_capacity(records.len());
    let mut kept: Vec<R> = records
        .into_iter()
        .filter(|record| {
            let fresh = seen.insert(record.id());
            if !fresh {
                warn!(kind = R::KIND, id = %record.id(), "Dropping duplicate record");
            }
            fresh
        })
        .collect();
    kept.sort_by_key(|record| record.id());
    kept
}

fn fill_region(mut agent: Agent) -> Agent {
    let missing = agent.region.as_deref().map_or(true, |r| r.trim().is_empty());
    if missing {
        agent.region = Region::for_state(&agent.state).map(|region| region.as_str().to_string());
    }
    agent
}

fn index_by_id<R: Record>(records: &[R]) -> BTreeMap<R::Id, usize> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| (record.id(), i))
        .collect()
}
