//! Property-Based Test Generators
//!
//! Provides proptest strategies that produce datasets with realistic
//! imperfections: dangling references, out-of-range severities and
//! assorted statuses.

use chrono::{Duration, NaiveDate};
use domain_claims::{Agent, Claim, Dataset, Disaster};
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::builders::{claim_handler, AgentBuilder, ClaimBuilder, DisasterBuilder};

const STATES: &[&str] = &["Alaska", "California", "District of Columbia", "Texas", "Wisconsin"];
const LANGUAGES: &[&str] = &["English", "Spanish", "Arabic", "French", "english"];
const STATUSES: &[&str] = &["Open", "Closed", "Received", "closed", "In Review"];

/// Strategy for state names
pub fn state_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(STATES).prop_map(str::to_string)
}

/// Strategy for claim statuses, including near-miss spellings of "Closed"
pub fn status_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(STATUSES).prop_map(str::to_string)
}

/// Strategy for estimate costs with up to 3 decimal places
pub fn cost_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|m| Decimal::new(m, 3))
}

/// Strategy for severities, deliberately wider than 1..=10
pub fn severity_strategy() -> impl Strategy<Value = i32> {
    -2i32..14i32
}

/// Strategy for dates in 2020-2024
pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    let base = NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid base date");
    (0i64..1800i64).prop_map(move |days| base + Duration::days(days))
}

fn agent_strategy(id: i64) -> impl Strategy<Value = Agent> {
    (
        state_strategy(),
        prop::sample::select(LANGUAGES),
        prop::option::of(prop::sample::select(LANGUAGES)),
    )
        .prop_map(move |(state, primary, secondary)| {
            let builder = AgentBuilder::new(id).state(state).primary_language(primary);
            match secondary {
                Some(lang) => builder.secondary_language(lang).build(),
                None => builder.build(),
            }
        })
}

fn disaster_strategy(id: i64) -> impl Strategy<Value = Disaster> {
    (state_strategy(), date_strategy(), -30i64..30i64, 1i64..200i64).prop_map(
        move |(state, end, declared_offset, radius)| {
            let declared = end + Duration::days(declared_offset);
            let end = end.format("%Y-%m-%d").to_string();
            DisasterBuilder::new(id)
                .state(state)
                .period(&end, &end)
                .declared(&declared.format("%Y-%m-%d").to_string())
                .radius(Decimal::from(radius))
                .build()
        },
    )
}

/// Claims referencing ids in `0..=max_ref`, so some references dangle
fn claim_strategy(id: i64, max_ref: i64) -> impl Strategy<Value = Claim> {
    (
        0..=max_ref,
        0..=max_ref,
        0..=max_ref,
        cost_strategy(),
        severity_strategy(),
        status_strategy(),
    )
        .prop_map(move |(disaster, agent, handler, cost, severity, status)| {
            ClaimBuilder::new(id)
                .disaster(disaster)
                .agent(agent)
                .handler(handler)
                .cost(cost)
                .severity(severity)
                .status(&status)
                .build()
        })
}

/// Strategy for whole datasets of up to `max_records` records per kind
pub fn dataset_strategy(max_records: usize) -> impl Strategy<Value = Dataset> {
    (0..=max_records, 0..=max_records, 0..=max_records).prop_flat_map(
        move |(agent_count, disaster_count, claim_count)| {
            let max_ref = (max_records as i64) + 2;
            let agents: Vec<_> = (1..=agent_count as i64).map(agent_strategy).collect();
            let disasters: Vec<_> = (1..=disaster_count as i64).map(disaster_strategy).collect();
            let claims: Vec<_> = (1..=claim_count as i64)
                .map(|id| claim_strategy(id, max_ref))
                .collect();
            (agents, disasters, claims).prop_map(|(agents, disasters, claims)| {
                let handlers = (1..=3).map(claim_handler).collect();
                Dataset::new(agents, handlers, claims, disasters)
            })
        },
    )
}
