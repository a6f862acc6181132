//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub agents: usize,
    pub claim_handlers: usize,
    pub claims: usize,
    pub disasters: usize,
}

/// Health check endpoint, with the size of the loaded dataset
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let dataset = state.engine.dataset();
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        agents: dataset.agents().len(),
        claim_handlers: dataset.claim_handlers().len(),
        claims: dataset.claims().len(),
        disasters: dataset.disasters().len(),
    })
}
