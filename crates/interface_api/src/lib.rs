//! HTTP API Layer
//!
//! This crate exposes the claims analytics [`QueryEngine`] over a read-only
//! REST API using Axum, and ships the `analytics-cli` front end.
//!
//! # Architecture
//!
//! - **Handlers**: One module per resource, each a thin wrapper over a query
//! - **Middleware**: Request logging
//! - **DTOs**: Response bodies
//! - **Error Handling**: Consistent JSON error responses
//!
//! The dataset is loaded once at start-up; handlers share the engine
//! through an [`Arc`] and never mutate it.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(Arc::new(engine), config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{middleware as axum_middleware, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_analytics::QueryEngine;

use crate::config::ApiConfig;
use crate::handlers::{agents, claim_handlers, claims, disasters, health, states};
use crate::middleware::request_logging_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<QueryEngine>,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `engine` - Query engine over the loaded dataset
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(engine: Arc<QueryEngine>, config: ApiConfig) -> Router {
    let state = AppState { engine, config };

    let public_routes = Router::new().route("/health", get(health::health_check));

    let claims_routes = Router::new()
        .route("/", get(claims::list_claims))
        .route("/closed/count", get(claims::closed_count))
        .route("/top-months", get(claims::top_months));

    let handler_routes = Router::new()
        .route("/", get(claim_handlers::list_claim_handlers))
        .route("/:id/claims/count", get(claim_handlers::claim_count))
        .route("/:id/claims/average-cost", get(claim_handlers::average_cost));

    let state_routes = Router::new()
        .route("/most-disasters", get(states::most_disasters))
        .route("/least-disasters", get(states::least_disasters))
        .route("/:state/disasters/count", get(states::disaster_count))
        .route("/:state/agent-language", get(states::agent_language));

    let disaster_routes = Router::new()
        .route("/", get(disasters::list_disasters))
        .route("/declared-after-end/count", get(disasters::declared_after_end_count))
        .route("/:id/claims/total-cost", get(disasters::total_cost))
        .route("/:id/claim-density", get(disasters::claim_density));

    let agent_routes = Router::new()
        .route("/", get(agents::list_agents))
        .route("/claim-costs", get(agents::claim_costs))
        .route("/:id/open-claims", get(agents::open_claims));

    let api_routes = Router::new()
        .nest("/claims", claims_routes)
        .nest("/claim-handlers", handler_routes)
        .nest("/states", state_routes)
        .nest("/disasters", disaster_routes)
        .nest("/agents", agent_routes);

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(axum_middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
