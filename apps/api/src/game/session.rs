//! Session state — an accumulator of resolved rounds plus the two
//! per-side states. One session is exclusively owned by one player
//! (a store entry over HTTP, or the CLI loop).

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::game::bot::BotStrategy;
use crate::game::engine::{resolve_round, Classification, PlayerState, RoundOutcome};
use crate::game::moves::{Move, Winner};
use crate::judge::JudgeContext;

pub const DEFAULT_MAX_ROUNDS: u32 = 5;

pub struct GameSession {
    round_number: u32,
    player: PlayerState,
    bot: PlayerState,
    history: Vec<RoundOutcome>,
    max_rounds: u32,
    created_at: DateTime<Utc>,
    strategy: Box<dyn BotStrategy>,
}

/// Serializable snapshot of session state for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct GameStateView {
    pub round_number: u32,
    pub player_score: u32,
    pub bot_score: u32,
    pub player_bomb_used: bool,
    pub bot_bomb_used: bool,
    pub max_rounds: u32,
    pub last_player_move: Option<Move>,
    pub created_at: DateTime<Utc>,
}

impl GameSession {
    /// `max_rounds == 0` means unlimited (the CLI's play-until-quit mode).
    pub fn new(max_rounds: u32, strategy: Box<dyn BotStrategy>) -> Self {
        Self {
            round_number: 0,
            player: PlayerState::default(),
            bot: PlayerState::default(),
            history: Vec::new(),
            max_rounds,
            created_at: Utc::now(),
            strategy,
        }
    }

    /// Resolves the next round. The state mutation is committed before this
    /// returns, so round N+1 always sees round N's bomb flags.
    pub fn play_round(&mut self, classification: Classification) -> RoundOutcome {
        self.round_number += 1;
        let bot_move = self.strategy.draw(self.round_number, self.bot.bomb_used);
        let outcome = resolve_round(
            self.round_number,
            classification,
            bot_move,
            &mut self.player,
            &mut self.bot,
        );
        self.history.push(outcome.clone());
        outcome
    }

    pub fn view(&self) -> GameStateView {
        GameStateView {
            round_number: self.round_number,
            player_score: self.player.score,
            bot_score: self.bot.score,
            player_bomb_used: self.player.bomb_used,
            bot_bomb_used: self.bot.bomb_used,
            max_rounds: self.max_rounds,
            last_player_move: self.last_player_move(),
            created_at: self.created_at,
        }
    }

    /// Context for judging the round about to be played.
    pub fn judge_context(&self) -> JudgeContext {
        JudgeContext {
            round_number: self.round_number + 1,
            bomb_used: self.player.bomb_used,
            last_player_move: self.last_player_move(),
        }
    }

    /// The player's move in the latest round, `None` if it was wasted or
    /// no round has been played yet.
    fn last_player_move(&self) -> Option<Move> {
        self.history.last().and_then(|outcome| outcome.player_move)
    }

    pub fn rounds_played(&self) -> u32 {
        self.round_number
    }

    pub fn history(&self) -> &[RoundOutcome] {
        &self.history
    }

    pub fn is_over(&self) -> bool {
        self.max_rounds > 0 && self.round_number >= self.max_rounds
    }

    /// Session winner by cumulative score. Never returns `NoContest`.
    pub fn final_result(&self) -> Winner {
        match self.player.score.cmp(&self.bot.score) {
            std::cmp::Ordering::Greater => Winner::Player,
            std::cmp::Ordering::Less => Winner::Bot,
            std::cmp::Ordering::Equal => Winner::Draw,
        }
    }
}
