pub mod game;
pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(game::handle_root))
        .route("/health", get(health::health_handler))
        .route("/game/rules", get(game::handle_rules))
        .route("/game/start", post(game::handle_start))
        .route("/game/play", post(game::handle_play))
        .route("/game/sessions", get(game::handle_sessions))
        .route("/game/state/:session_id", get(game::handle_state))
        .route("/game/:session_id", delete(game::handle_delete))
        .with_state(state)
}
