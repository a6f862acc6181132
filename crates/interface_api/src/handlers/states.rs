//! State handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::dto::{LanguageResponse, StateCountResponse, StateResponse};
use crate::AppState;

/// Number of disasters in a state
pub async fn disaster_count(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Json<StateCountResponse> {
    let count = state.engine.count_disasters_for_state(&name);
    Json(StateCountResponse { state: name, count })
}

/// State with the most disasters, `null` when there are none
pub async fn most_disasters(State(state): State<AppState>) -> Json<StateResponse> {
    Json(StateResponse {
        state: state.engine.state_with_most_disasters(),
    })
}

/// State with the fewest disasters, `null` when there are none
pub async fn least_disasters(State(state): State<AppState>) -> Json<StateResponse> {
    Json(StateResponse {
        state: state.engine.state_with_least_disasters(),
    })
}

/// Most spoken non-English language among a state's agents
pub async fn agent_language(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Json<LanguageResponse> {
    let language = state.engine.most_spoken_agent_language_by_state(&name);
    Json(LanguageResponse {
        state: name,
        language,
    })
}
