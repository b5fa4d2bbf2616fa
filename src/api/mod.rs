pub mod health;
pub mod transport;

use axum::{routing::get, Router};

use crate::infrastructure::AppState;

pub fn api_router_with_state(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Transport accessibility
        .route("/transport/nearby", get(transport::nearby_transport))
        .with_state(state)
}
