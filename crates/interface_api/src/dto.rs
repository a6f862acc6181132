//! Response bodies
//!
//! Absent results serialize as `null` so clients can tell "no data" from a
//! zero. Decimal amounts serialize as JSON numbers that keep every digit,
//! so `1166.70` is written as `1166.70` rather than `"1166.70"`.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

use core_kernel::{AgentId, ClaimHandlerId, DisasterId};
use domain_analytics::OpenClaimCount;

#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct HandlerCountResponse {
    pub claim_handler_id: ClaimHandlerId,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct HandlerAverageResponse {
    pub claim_handler_id: ClaimHandlerId,
    #[serde(with = "rust_decimal::serde::arbitrary_precision_option")]
    pub average_cost: Option<Decimal>,
}

#[derive(Debug, Serialize)]
pub struct StateCountResponse {
    pub state: String,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct StateResponse {
    pub state: Option<String>,
}

/// An empty `language` means no non-English language was found
#[derive(Debug, Serialize)]
pub struct LanguageResponse {
    pub state: String,
    pub language: String,
}

#[derive(Debug, Serialize)]
pub struct DisasterCostResponse {
    pub disaster_id: DisasterId,
    #[serde(with = "rust_decimal::serde::arbitrary_precision_option")]
    pub total_cost: Option<Decimal>,
}

#[derive(Debug, Serialize)]
pub struct DensityResponse {
    pub disaster_id: DisasterId,
    #[serde(with = "rust_decimal::serde::arbitrary_precision_option")]
    pub density: Option<Decimal>,
}

/// `open_claims` is `-1` for an out-of-range severity and `null` when the
/// agent has no claims
#[derive(Debug, Serialize)]
pub struct OpenClaimsResponse {
    pub agent_id: AgentId,
    pub min_severity: i32,
    pub open_claims: OpenClaimCount,
}

#[derive(Debug, Serialize)]
pub struct AgentCostsResponse {
    #[serde(serialize_with = "serialize_amounts")]
    pub totals: BTreeMap<AgentId, Decimal>,
}

#[derive(Serialize)]
struct Amount(#[serde(with = "rust_decimal::serde::arbitrary_precision")] Decimal);

fn serialize_amounts<S>(totals: &BTreeMap<AgentId, Decimal>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_map(totals.iter().map(|(id, total)| (id, Amount(*total))))
}

#[derive(Debug, Serialize)]
pub struct TopMonthsResponse {
    pub months: Vec<String>,
}

/// A filtered record listing
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub count: usize,
    pub items: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            count: items.len(),
            items,
        }
    }
}
