pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::breakdown::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/taxonomy", get(handlers::handle_get_taxonomy))
        .route("/api/v1/breakdown", post(handlers::handle_breakdown))
        .with_state(state)
}
