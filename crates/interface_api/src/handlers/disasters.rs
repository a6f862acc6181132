//! Disaster handlers

use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use core_kernel::DisasterId;
use domain_claims::Disaster;

use crate::dto::{CountResponse, DensityResponse, DisasterCostResponse, ListResponse};
use crate::error::ApiError;
use crate::handlers::filtered;
use crate::AppState;

/// Lists disasters matching the query-string criteria
pub async fn list_disasters(
    State(state): State<AppState>,
    Query(params): Query<BTreeMap<String, String>>,
) -> Json<ListResponse<Disaster>> {
    Json(filtered(state.engine.dataset().disasters(), params))
}

/// Number of disasters declared after they ended
pub async fn declared_after_end_count(State(state): State<AppState>) -> Json<CountResponse> {
    Json(CountResponse {
        count: state.engine.count_disasters_declared_after_end_date(),
    })
}

/// Total estimated cost of a disaster's claims
pub async fn total_cost(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DisasterCostResponse>, ApiError> {
    let disaster_id: DisasterId = id.parse()?;
    Ok(Json(DisasterCostResponse {
        disaster_id,
        total_cost: state.engine.total_claim_cost_for_disaster(disaster_id),
    }))
}

/// Claims per square mile of a disaster's impact area
pub async fn claim_density(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DensityResponse>, ApiError> {
    let disaster_id: DisasterId = id.parse()?;
    Ok(Json(DensityResponse {
        disaster_id,
        density: state.engine.disaster_claim_density(disaster_id),
    }))
}
