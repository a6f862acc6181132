//! Claims handlers

use std::collections::BTreeMap;

use axum::{
    extract::{Query, State},
    Json,
};
use tracing::debug;

use domain_claims::Claim;

use crate::dto::{CountResponse, ListResponse, TopMonthsResponse};
use crate::handlers::filtered;
use crate::AppState;

/// Lists claims matching the query-string criteria
pub async fn list_claims(
    State(state): State<AppState>,
    Query(params): Query<BTreeMap<String, String>>,
) -> Json<ListResponse<Claim>> {
    Json(filtered(state.engine.dataset().claims(), params))
}

/// Counts closed claims
pub async fn closed_count(State(state): State<AppState>) -> Json<CountResponse> {
    let count = state.engine.count_closed_claims();
    debug!(count, "Closed claims counted");
    Json(CountResponse { count })
}

/// The three months with the highest claim cost
pub async fn top_months(State(state): State<AppState>) -> Json<TopMonthsResponse> {
    Json(TopMonthsResponse {
        months: state.engine.top_three_months_by_claim_cost(),
    })
}
