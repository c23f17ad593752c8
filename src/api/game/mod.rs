//! Quiz game endpoints
//!
//! GET  /patient - admit a new virtual patient
//! POST /treat   - evaluate the player's chosen treatment

pub mod types;


use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use axum::Router;
use tracing::info;
use wardround_core::{Error, PatientStore, RngPicker};

pub use types::{ErrorResponse, PatientResponse, TreatRequest, TreatResponse};

/// Shared game state handed to every request handler.
#[derive(Clone)]
pub struct GameState {
    store: Arc<PatientStore>,
}

impl GameState {
    /// Create game state over a shared patient store.
    pub fn new(store: Arc<PatientStore>) -> Self {
        Self { store }
    }

    /// The shared patient store.
    pub fn store(&self) -> &PatientStore {
        &self.store
    }
}

/// Create game routes
pub fn game_routes(state: GameState) -> Router {
    Router::new()
        .route("/patient", get(new_patient))
        .route("/treat", post(treat_patient))
        .with_state(state)
}

/// Admit a new virtual patient and return its presentation bundle.
async fn new_patient(State(state): State<GameState>) -> Json<PatientResponse> {
    let mut picker = RngPicker;
    let admitted = state.store.admit(&mut picker);
    Json(PatientResponse::from(admitted))
}

/// Evaluate the chosen treatment. One-shot per patient: the id is consumed
/// whether or not the choice was correct.
async fn treat_patient(
    State(state): State<GameState>,
    Json(request): Json<TreatRequest>,
) -> Response {
    match state.store.treat(request.id, request.medication.as_deref()) {
        Ok(verdict) => Json(TreatResponse::from(verdict)).into_response(),
        Err(e @ Error::UnknownPatient(_)) => {
            info!(id = request.id, "rejected treatment: {e}");
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Invalid patient ID".to_string(),
                }),
            )
                .into_response()
        }
    }
}
