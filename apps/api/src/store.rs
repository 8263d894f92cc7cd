//! In-memory session store. Each session is an exclusively-owned map
//! entry; the judge call happens between locks, never under one, so a
//! slow LLM round-trip cannot block other sessions.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use uuid::Uuid;

use crate::errors::AppError;
use crate::game::bot::BotStrategy;
use crate::game::{Classification, GameSession, GameStateView, RoundOutcome, Winner};
use crate::judge::JudgeContext;

#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<Uuid, GameSession>>>,
}

/// What `/game/play` needs back from one resolved round.
#[derive(Debug)]
pub struct PlayedRound {
    pub outcome: RoundOutcome,
    pub state: GameStateView,
    pub game_over: bool,
    pub final_winner: Option<Winner>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(
        &self,
        max_rounds: u32,
        strategy: Box<dyn BotStrategy>,
    ) -> (Uuid, GameStateView) {
        let session = GameSession::new(max_rounds, strategy);
        let view = session.view();
        let id = Uuid::new_v4();
        self.sessions.lock().await.insert(id, session);
        (id, view)
    }

    pub async fn view(&self, id: Uuid) -> Result<GameStateView, AppError> {
        let sessions = self.sessions.lock().await;
        sessions.get(&id).map(GameSession::view).ok_or_else(|| not_found(id))
    }

    /// State view plus the append-only round history, read under one lock.
    pub async fn snapshot(
        &self,
        id: Uuid,
    ) -> Result<(GameStateView, Vec<RoundOutcome>), AppError> {
        let sessions = self.sessions.lock().await;
        let session = sessions.get(&id).ok_or_else(|| not_found(id))?;
        Ok((session.view(), session.history().to_vec()))
    }

    pub async fn ids(&self) -> Vec<Uuid> {
        self.sessions.lock().await.keys().copied().collect()
    }

    /// Judge context for the round about to be played. Rejects sessions
    /// that already hit their round limit.
    pub async fn judge_context(&self, id: Uuid) -> Result<JudgeContext, AppError> {
        let sessions = self.sessions.lock().await;
        let session = sessions.get(&id).ok_or_else(|| not_found(id))?;
        if session.is_over() {
            return Err(game_over());
        }
        Ok(session.judge_context())
    }

    /// Commits one round. Rounds within a session resolve strictly
    /// sequentially under the store lock.
    pub async fn play(
        &self,
        id: Uuid,
        classification: Classification,
    ) -> Result<PlayedRound, AppError> {
        let mut sessions = self.sessions.lock().await;
        let session = sessions.get_mut(&id).ok_or_else(|| not_found(id))?;
        if session.is_over() {
            return Err(game_over());
        }

        let outcome = session.play_round(classification);
        let game_over = session.is_over();
        let final_winner = game_over.then(|| session.final_result());

        Ok(PlayedRound {
            outcome,
            state: session.view(),
            game_over,
            final_winner,
        })
    }

    /// Removes the session, returning its final standing so the caller can
    /// report the game result.
    pub async fn delete(&self, id: Uuid) -> Result<(Winner, GameStateView), AppError> {
        let session = self
            .sessions
            .lock()
            .await
            .remove(&id)
            .ok_or_else(|| not_found(id))?;
        Ok((session.final_result(), session.view()))
    }

    pub async fn count(&self) -> usize {
        self.sessions.lock().await.len()
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("session {id} not found"))
}

fn game_over() -> AppError {
    AppError::GameOver("game is already over; start a new one".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::bot::ScriptedBot;
    use crate::game::Move;

    fn scripted(moves: Vec<Move>) -> Box<dyn BotStrategy> {
        Box::new(ScriptedBot::new(moves))
    }

    #[tokio::test]
    async fn test_full_session_through_the_store() {
        let store = SessionStore::new();
        let (id, view) = store
            .create(2, scripted(vec![Move::Scissors, Move::Rock]))
            .await;
        assert_eq!(view.round_number, 0);
        assert_eq!(store.count().await, 1);

        let first = store
            .play(id, Classification::Valid(Move::Rock))
            .await
            .unwrap();
        assert_eq!(first.outcome.winner, Winner::Player);
        assert!(!first.game_over);
        assert_eq!(first.final_winner, None);

        let second = store
            .play(id, Classification::Valid(Move::Bomb))
            .await
            .unwrap();
        assert_eq!(second.outcome.winner, Winner::Player);
        assert!(second.game_over);
        assert_eq!(second.final_winner, Some(Winner::Player));
        assert!(second.state.player_bomb_used);
        assert_eq!((second.state.player_score, second.state.bot_score), (2, 0));
    }

    #[tokio::test]
    async fn test_playing_a_finished_session_is_rejected() {
        let store = SessionStore::new();
        let (id, _) = store.create(1, scripted(vec![Move::Rock])).await;
        store
            .play(id, Classification::Valid(Move::Paper))
            .await
            .unwrap();

        let err = store
            .play(id, Classification::Valid(Move::Rock))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::GameOver(_)));

        let err = store.judge_context(id).await.unwrap_err();
        assert!(matches!(err, AppError::GameOver(_)));
    }

    #[tokio::test]
    async fn test_judge_context_reflects_committed_rounds() {
        let store = SessionStore::new();
        let (id, _) = store
            .create(5, scripted(vec![Move::Paper, Move::Paper]))
            .await;

        let ctx = store.judge_context(id).await.unwrap();
        assert_eq!(ctx.round_number, 1);
        assert!(!ctx.bomb_used);

        store
            .play(id, Classification::Valid(Move::Bomb))
            .await
            .unwrap();

        let ctx = store.judge_context(id).await.unwrap();
        assert_eq!(ctx.round_number, 2);
        assert!(ctx.bomb_used);
        assert_eq!(ctx.last_player_move, Some(Move::Bomb));
    }

    #[tokio::test]
    async fn test_ids_list_the_live_sessions() {
        let store = SessionStore::new();
        assert!(store.ids().await.is_empty());

        let (first, _) = store.create(5, scripted(vec![])).await;
        let (second, _) = store.create(5, scripted(vec![])).await;
        let mut ids = store.ids().await;
        ids.sort();
        let mut expected = vec![first, second];
        expected.sort();
        assert_eq!(ids, expected);

        store.delete(first).await.unwrap();
        assert_eq!(store.ids().await, vec![second]);
    }

    #[tokio::test]
    async fn test_snapshot_carries_the_round_history() {
        let store = SessionStore::new();
        let (id, _) = store
            .create(5, scripted(vec![Move::Scissors, Move::Rock]))
            .await;

        store
            .play(id, Classification::Valid(Move::Rock))
            .await
            .unwrap();
        store
            .play(id, Classification::Invalid("gibberish".to_string()))
            .await
            .unwrap();

        let (view, history) = store.snapshot(id).await.unwrap();
        assert_eq!(view.round_number, 2);
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].round_number, 1);
        assert_eq!(history[0].winner, Winner::Player);
        assert_eq!(history[1].round_number, 2);
        assert_eq!(history[1].winner, Winner::NoContest);
    }

    #[tokio::test]
    async fn test_unknown_and_deleted_sessions_are_not_found() {
        let store = SessionStore::new();
        let missing = Uuid::new_v4();
        assert!(matches!(
            store.view(missing).await.unwrap_err(),
            AppError::NotFound(_)
        ));

        let (id, _) = store.create(5, scripted(vec![])).await;
        let (winner, final_state) = store.delete(id).await.unwrap();
        assert_eq!(winner, Winner::Draw); // no rounds played
        assert_eq!((final_state.player_score, final_state.bot_score), (0, 0));
        assert_eq!(store.count().await, 0);
        assert!(matches!(
            store.view(id).await.unwrap_err(),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            store.delete(id).await.unwrap_err(),
            AppError::NotFound(_)
        ));
    }
}
