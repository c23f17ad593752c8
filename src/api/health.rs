//! Health check endpoint.
//!
//! `GET /health` — "healthy" + version + ward occupancy (for probes).

use axum::extract::State;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde::Serialize;

use super::game::GameState;

/// Simple health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// Admitted patients still awaiting treatment
    pub patients_waiting: usize,
}

async fn health_check(State(state): State<GameState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        patients_waiting: state.store().waiting(),
    })
}

/// Create health routes
pub fn health_routes(state: GameState) -> Router {
    Router::new().route("/health", get(health_check)).with_state(state)
}
