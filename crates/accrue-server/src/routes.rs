//! Route definitions.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Create the API router with fresh state.
pub fn create_router() -> Router {
    create_router_with_state(Arc::new(AppState::new()))
}

/// Create the API router around existing state.
///
/// # Arguments
/// * `state` - Request counter and uptime clock
pub fn create_router_with_state(state: Arc<AppState>) -> Router {
    Router::new()
        // Service
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/metrics", get(handlers::metrics))
        // Calculators
        .route("/api/calculate", post(handlers::calculate_any))
        .route("/api/calculate/emi", post(handlers::calculate_emi))
        .route(
            "/api/calculate/simple-interest",
            post(handlers::calculate_simple_interest),
        )
        .route(
            "/api/calculate/compound-interest",
            post(handlers::calculate_compound_interest),
        )
        .fallback(handlers::not_found)
        .layer(middleware::from_fn_with_state(state.clone(), count_requests))
        // State
        .with_state(state)
}

async fn count_requests(State(state): State<Arc<AppState>>, request: Request, next: Next) -> Response {
    state.record_request();
    next.run(request).await
}
