//! Agent handlers

use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use core_kernel::AgentId;
use domain_claims::Agent;

use crate::dto::{AgentCostsResponse, ListResponse, OpenClaimsResponse};
use crate::error::ApiError;
use crate::handlers::filtered;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct OpenClaimsQuery {
    pub min_severity: Option<String>,
}

/// Lists agents matching the query-string criteria
pub async fn list_agents(
    State(state): State<AppState>,
    Query(params): Query<BTreeMap<String, String>>,
) -> Json<ListResponse<Agent>> {
    Json(filtered(state.engine.dataset().agents(), params))
}

/// Open claims of an agent at or above `min_severity`
pub async fn open_claims(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<OpenClaimsQuery>,
) -> Result<Json<OpenClaimsResponse>, ApiError> {
    let agent_id: AgentId = id.parse()?;
    let raw = query
        .min_severity
        .ok_or_else(|| ApiError::BadRequest("min_severity is required".to_string()))?;
    let min_severity: i32 = raw
        .trim()
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("invalid min_severity: {:?}", raw)))?;

    Ok(Json(OpenClaimsResponse {
        agent_id,
        min_severity,
        open_claims: state
            .engine
            .num_open_claims_for_agent_and_severity(agent_id, min_severity),
    }))
}

/// Total estimated claim cost per agent
pub async fn claim_costs(State(state): State<AppState>) -> Json<AgentCostsResponse> {
    Json(AgentCostsResponse {
        totals: state.engine.total_claim_cost_by_agent(),
    })
}
