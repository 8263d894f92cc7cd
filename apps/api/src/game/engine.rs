//! Round resolution — the one pure function at the heart of the game.
//!
//! Given a classification from the intent judge and an already-drawn bot
//! move, resolves one round and commits the score / bomb-flag mutations.
//! Wasted turns (invalid or unclear input) are outcomes, never errors.

use serde::Serialize;
use tracing::warn;

use crate::game::moves::{Move, Winner};

/// The three-way judgment handed down by the intent judge. Closed by the
/// type system: no fourth tag is representable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Valid(Move),
    Invalid(String),
    Unclear(String),
}

/// Per-side session state. `bomb_used` transitions false -> true at most
/// once per session and never resets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PlayerState {
    pub score: u32,
    pub bomb_used: bool,
}

/// Everything downstream consumers need about one resolved round.
#[derive(Debug, Clone, Serialize)]
pub struct RoundOutcome {
    pub round_number: u32,
    /// `None` marks a wasted turn.
    pub player_move: Option<Move>,
    pub bot_move: Move,
    pub winner: Winner,
    pub explanation: String,
    pub player_score: u32,
    pub bot_score: u32,
}

/// Resolves one round. Total over its domain: every classification maps to
/// an outcome, and the two states are mutated before this returns.
pub fn resolve_round(
    round_number: u32,
    classification: Classification,
    bot_move: Move,
    player: &mut PlayerState,
    bot: &mut PlayerState,
) -> RoundOutcome {
    // Upstream judges are required to reject bomb reuse as INVALID. If a
    // Valid(bomb) slips through after the bomb is spent, downgrade it to a
    // wasted turn instead of crashing the session.
    let classification = match classification {
        Classification::Valid(Move::Bomb) if player.bomb_used => {
            warn!(round_number, "judge issued Valid(bomb) after the bomb was spent");
            Classification::Invalid("bomb already used".to_string())
        }
        other => other,
    };

    // The bot's draw stands even on a wasted turn.
    if bot_move == Move::Bomb {
        bot.bomb_used = true;
    }

    let (player_move, winner, explanation) = match classification {
        Classification::Valid(mv) => {
            if mv == Move::Bomb {
                player.bomb_used = true;
            }
            let winner = decide(mv, bot_move);
            match winner {
                Winner::Player => player.score += 1,
                Winner::Bot => bot.score += 1,
                Winner::Draw | Winner::NoContest => {}
            }
            (Some(mv), winner, explain(mv, bot_move, winner))
        }
        Classification::Invalid(reason) => {
            (None, Winner::NoContest, wasted_turn("INVALID", &reason, bot_move))
        }
        Classification::Unclear(reason) => {
            (None, Winner::NoContest, wasted_turn("UNCLEAR", &reason, bot_move))
        }
    };

    RoundOutcome {
        round_number,
        player_move,
        bot_move,
        winner,
        explanation,
        player_score: player.score,
        bot_score: bot.score,
    }
}

fn decide(player: Move, bot: Move) -> Winner {
    if player == bot {
        return Winner::Draw; // includes bomb vs bomb
    }
    if player == Move::Bomb {
        return Winner::Player;
    }
    if bot == Move::Bomb {
        return Winner::Bot;
    }
    if player.beats(bot) {
        Winner::Player
    } else {
        Winner::Bot
    }
}

/// Fixed explanation string keyed by the (player move, bot move, winner)
/// triple. Deterministic by construction.
fn explain(player: Move, bot: Move, winner: Winner) -> String {
    match winner {
        Winner::Draw => format!("Both played {}. It's a draw!", upper(player)),
        Winner::Player if player == Move::Bomb => {
            format!("Your BOMB destroys {}. You win!", upper(bot))
        }
        Winner::Bot if bot == Move::Bomb => {
            format!("Bot's BOMB destroys your {}. Bot wins!", upper(player))
        }
        Winner::Player => format!("{}. You win!", dominance(player, bot)),
        Winner::Bot => format!("{}. Bot wins!", dominance(bot, player)),
        Winner::NoContest => unreachable!("wasted turns never reach the explanation table"),
    }
}

fn dominance(winning: Move, losing: Move) -> &'static str {
    match (winning, losing) {
        (Move::Rock, Move::Scissors) => "Rock crushes scissors",
        (Move::Scissors, Move::Paper) => "Scissors cuts paper",
        (Move::Paper, Move::Rock) => "Paper covers rock",
        _ => unreachable!("decisive non-bomb rounds always match a dominance pair"),
    }
}

fn wasted_turn(tag: &str, reason: &str, bot_move: Move) -> String {
    format!(
        "Your move was {tag}: {reason}. Turn wasted. (Bot played {})",
        upper(bot_move)
    )
}

fn upper(mv: Move) -> String {
    mv.as_str().to_uppercase()
}
