//! Game endpoints — session lifecycle and the judge → engine pipeline.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::game::bot::RandomBot;
use crate::game::{GameStateView, RoundOutcome, Winner};
use crate::judge::MoveInterpretation;
use crate::presenter;
use crate::state::AppState;
use crate::store::PlayedRound;

const MAX_ROUNDS_LIMIT: u32 = 20;

#[derive(Debug, Deserialize)]
pub struct StartGameRequest {
    /// Defaults to the configured round limit.
    pub max_rounds: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct StartGameResponse {
    pub session_id: Uuid,
    pub message: String,
    pub rules: &'static str,
    pub game_state: GameStateView,
}

#[derive(Debug, Deserialize)]
pub struct PlayMoveRequest {
    pub session_id: Uuid,
    pub user_input: String,
}

#[derive(Debug, Serialize)]
pub struct SessionStateResponse {
    pub session_id: Uuid,
    pub game_state: GameStateView,
    pub history: Vec<RoundOutcome>,
}

#[derive(Debug, Serialize)]
pub struct SessionListResponse {
    pub active_sessions: Vec<Uuid>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct EndGameResponse {
    pub message: String,
    pub final_winner: Winner,
    pub final_score: FinalScore,
}

#[derive(Debug, Serialize)]
pub struct FinalScore {
    pub player: u32,
    pub bot: u32,
}

#[derive(Debug, Serialize)]
pub struct PlayMoveResponse {
    pub session_id: Uuid,
    pub round_number: u32,
    pub interpretation: MoveInterpretation,
    pub result: RoundOutcome,
    pub game_state: GameStateView,
    pub game_over: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_winner: Option<Winner>,
}

/// GET / — service info.
pub async fn handle_root() -> Json<Value> {
    Json(json!({
        "name": "Rock-Paper-Scissors Plus AI Judge",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "start_game": "POST /game/start",
            "play_move": "POST /game/play",
            "get_state": "GET /game/state/{session_id}",
            "get_rules": "GET /game/rules",
            "list_sessions": "GET /game/sessions",
            "end_game": "DELETE /game/{session_id}"
        }
    }))
}

/// GET /game/rules
pub async fn handle_rules() -> Json<Value> {
    Json(json!({
        "rules": presenter::GAME_RULES,
        "valid_moves": ["rock", "paper", "scissors", "bomb"],
        "special_rules": [
            "Bomb beats everything but can only be used once",
            "Bomb vs bomb results in a draw",
            "Invalid or unclear moves waste your turn"
        ]
    }))
}

/// POST /game/start
pub async fn handle_start(
    State(state): State<AppState>,
    Json(req): Json<StartGameRequest>,
) -> Result<Json<StartGameResponse>, AppError> {
    let max_rounds = req.max_rounds.unwrap_or(state.config.max_rounds);
    if max_rounds == 0 || max_rounds > MAX_ROUNDS_LIMIT {
        return Err(AppError::Validation(format!(
            "max_rounds must be between 1 and {MAX_ROUNDS_LIMIT}"
        )));
    }

    let (session_id, game_state) = state
        .sessions
        .create(max_rounds, Box::new(RandomBot::new()))
        .await;
    info!(%session_id, max_rounds, "game started");

    Ok(Json(StartGameResponse {
        session_id,
        message: format!("Game started! Best of {max_rounds} rounds."),
        rules: presenter::GAME_RULES,
        game_state,
    }))
}

/// POST /game/play
pub async fn handle_play(
    State(state): State<AppState>,
    Json(req): Json<PlayMoveRequest>,
) -> Result<Json<PlayMoveResponse>, AppError> {
    if req.user_input.trim().is_empty() {
        return Err(AppError::Validation("user_input must not be empty".to_string()));
    }

    // Snapshot the judge context, run the judge without holding the store
    // lock, then commit the round.
    let ctx = state.sessions.judge_context(req.session_id).await?;
    let interpretation = state.judge.judge(&req.user_input, &ctx).await?;
    let PlayedRound {
        outcome,
        state: game_state,
        game_over,
        final_winner,
    } = state
        .sessions
        .play(req.session_id, interpretation.clone().into_classification())
        .await?;

    info!(
        session_id = %req.session_id,
        round = outcome.round_number,
        winner = ?outcome.winner,
        "round resolved"
    );

    Ok(Json(PlayMoveResponse {
        session_id: req.session_id,
        round_number: outcome.round_number,
        interpretation,
        result: outcome,
        game_state,
        game_over,
        final_winner,
    }))
}

/// GET /game/state/:session_id
pub async fn handle_state(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionStateResponse>, AppError> {
    let (game_state, history) = state.sessions.snapshot(session_id).await?;
    Ok(Json(SessionStateResponse {
        session_id,
        game_state,
        history,
    }))
}

/// GET /game/sessions
pub async fn handle_sessions(State(state): State<AppState>) -> Json<SessionListResponse> {
    let active_sessions = state.sessions.ids().await;
    let count = active_sessions.len();
    Json(SessionListResponse {
        active_sessions,
        count,
    })
}

/// DELETE /game/:session_id
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<EndGameResponse>, AppError> {
    let (final_winner, final_state) = state.sessions.delete(session_id).await?;
    info!(%session_id, ?final_winner, "game ended");
    Ok(Json(EndGameResponse {
        message: format!("Game session {session_id} ended"),
        final_winner,
        final_score: FinalScore {
            player: final_state.player_score,
            bot: final_state.bot_score,
        },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::judge::KeywordIntentJudge;
    use crate::store::SessionStore;
    use std::sync::Arc;

    fn test_state() -> AppState {
        AppState {
            sessions: SessionStore::new(),
            judge: Arc::new(KeywordIntentJudge),
            config: Config {
                gemini_api_key: None,
                port: 0,
                max_rounds: 5,
                rust_log: "info".to_string(),
            },
        }
    }

    async fn start(state: &AppState, max_rounds: Option<u32>) -> StartGameResponse {
        handle_start(State(state.clone()), Json(StartGameRequest { max_rounds }))
            .await
            .unwrap()
            .0
    }

    #[tokio::test]
    async fn test_start_uses_the_configured_default_limit() {
        let state = test_state();
        let started = start(&state, None).await;
        assert_eq!(started.game_state.max_rounds, 5);
        assert_eq!(started.game_state.round_number, 0);
        assert_eq!(state.sessions.count().await, 1);
    }

    #[tokio::test]
    async fn test_start_rejects_out_of_range_limits() {
        let state = test_state();
        for bad in [0, 21, 100] {
            let err = handle_start(
                State(state.clone()),
                Json(StartGameRequest { max_rounds: Some(bad) }),
            )
            .await
            .unwrap_err();
            assert!(matches!(err, AppError::Validation(_)), "max_rounds={bad}");
        }
    }

    #[tokio::test]
    async fn test_play_resolves_a_round_through_the_keyword_judge() {
        let state = test_state();
        let started = start(&state, Some(5)).await;

        let response = handle_play(
            State(state.clone()),
            Json(PlayMoveRequest {
                session_id: started.session_id,
                user_input: "I choose rock".to_string(),
            }),
        )
        .await
        .unwrap()
        .0;

        assert_eq!(response.round_number, 1);
        assert_eq!(response.result.player_move, Some(crate::game::Move::Rock));
        assert!(!response.game_over);
        assert_eq!(response.game_state.round_number, 1);
    }

    #[tokio::test]
    async fn test_play_with_gibberish_wastes_the_turn() {
        let state = test_state();
        let started = start(&state, Some(5)).await;

        let response = handle_play(
            State(state.clone()),
            Json(PlayMoveRequest {
                session_id: started.session_id,
                user_input: "xyzzy".to_string(),
            }),
        )
        .await
        .unwrap()
        .0;

        assert_eq!(response.result.winner, Winner::NoContest);
        assert_eq!(
            (response.game_state.player_score, response.game_state.bot_score),
            (0, 0)
        );
        assert!(!response.game_state.player_bomb_used);
    }

    #[tokio::test]
    async fn test_play_validates_input_and_session() {
        let state = test_state();
        let started = start(&state, Some(5)).await;

        let err = handle_play(
            State(state.clone()),
            Json(PlayMoveRequest {
                session_id: started.session_id,
                user_input: "   ".to_string(),
            }),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let err = handle_play(
            State(state.clone()),
            Json(PlayMoveRequest {
                session_id: Uuid::new_v4(),
                user_input: "rock".to_string(),
            }),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_session_finishes_with_a_final_winner() {
        let state = test_state();
        let started = start(&state, Some(1)).await;

        let response = handle_play(
            State(state.clone()),
            Json(PlayMoveRequest {
                session_id: started.session_id,
                user_input: "bomb".to_string(),
            }),
        )
        .await
        .unwrap()
        .0;

        assert!(response.game_over);
        // The bot never bombs on round one, so a fresh bomb always wins.
        assert_eq!(response.final_winner, Some(Winner::Player));

        let err = handle_play(
            State(state.clone()),
            Json(PlayMoveRequest {
                session_id: started.session_id,
                user_input: "rock".to_string(),
            }),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::GameOver(_)));
    }

    #[tokio::test]
    async fn test_state_includes_the_round_history() {
        let state = test_state();
        let started = start(&state, Some(5)).await;

        for input in ["rock", "xyzzy"] {
            handle_play(
                State(state.clone()),
                Json(PlayMoveRequest {
                    session_id: started.session_id,
                    user_input: input.to_string(),
                }),
            )
            .await
            .unwrap();
        }

        let response = handle_state(State(state.clone()), Path(started.session_id))
            .await
            .unwrap()
            .0;

        assert_eq!(response.session_id, started.session_id);
        assert_eq!(response.game_state.round_number, 2);
        assert_eq!(response.history.len(), 2);
        assert_eq!(response.history[0].round_number, 1);
        assert_eq!(response.history[0].player_move, Some(crate::game::Move::Rock));
        assert_eq!(response.history[1].winner, Winner::NoContest);
    }

    #[tokio::test]
    async fn test_sessions_listing_tracks_active_games() {
        let state = test_state();
        let first = start(&state, Some(5)).await;
        let second = start(&state, Some(5)).await;

        let listing = handle_sessions(State(state.clone())).await.0;
        assert_eq!(listing.count, 2);
        assert!(listing.active_sessions.contains(&first.session_id));
        assert!(listing.active_sessions.contains(&second.session_id));

        handle_delete(State(state.clone()), Path(first.session_id))
            .await
            .unwrap();
        let listing = handle_sessions(State(state.clone())).await.0;
        assert_eq!(listing.count, 1);
        assert_eq!(listing.active_sessions, vec![second.session_id]);
    }

    #[tokio::test]
    async fn test_delete_reports_the_final_standing() {
        let state = test_state();
        let started = start(&state, Some(5)).await;

        handle_play(
            State(state.clone()),
            Json(PlayMoveRequest {
                session_id: started.session_id,
                user_input: "bomb".to_string(),
            }),
        )
        .await
        .unwrap();

        let response = handle_delete(State(state.clone()), Path(started.session_id))
            .await
            .unwrap()
            .0;
        // A fresh bomb on round one always wins: the bot never bombs that early.
        assert_eq!(response.final_winner, Winner::Player);
        assert_eq!((response.final_score.player, response.final_score.bot), (1, 0));
        assert!(response.message.contains(&started.session_id.to_string()));
        assert_eq!(state.sessions.count().await, 0);

        let err = handle_state(State(state.clone()), Path(started.session_id))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
