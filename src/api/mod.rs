//! Web API module for Wardround
//!
//! Provides the quiz endpoints used by the game client:
//! - `GET  /patient` — admit a new virtual patient
//! - `POST /treat`   — evaluate the player's chosen treatment
//! - `GET  /health`  — liveness probe

pub mod game;
pub mod health;

pub use game::{game_routes, GameState};
pub use health::health_routes;
