//! Claim handler handlers

use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use core_kernel::ClaimHandlerId;
use domain_claims::ClaimHandler;

use crate::dto::{HandlerAverageResponse, HandlerCountResponse, ListResponse};
use crate::error::ApiError;
use crate::handlers::filtered;
use crate::AppState;

/// Lists claim handlers matching the query-string criteria
pub async fn list_claim_handlers(
    State(state): State<AppState>,
    Query(params): Query<BTreeMap<String, String>>,
) -> Json<ListResponse<ClaimHandler>> {
    Json(filtered(state.engine.dataset().claim_handlers(), params))
}

/// Number of claims assigned to a handler
pub async fn claim_count(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<HandlerCountResponse>, ApiError> {
    let claim_handler_id: ClaimHandlerId = id.parse()?;
    Ok(Json(HandlerCountResponse {
        claim_handler_id,
        count: state.engine.count_claims_for_handler(claim_handler_id),
    }))
}

/// Average estimated cost of a handler's claims
pub async fn average_cost(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<HandlerAverageResponse>, ApiError> {
    let claim_handler_id: ClaimHandlerId = id.parse()?;
    Ok(Json(HandlerAverageResponse {
        claim_handler_id,
        average_cost: state.engine.average_claim_cost_for_handler(claim_handler_id),
    }))
}
