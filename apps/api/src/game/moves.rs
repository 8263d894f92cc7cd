use serde::{Deserialize, Serialize};
use std::fmt;

/// A playable move. `Bomb` beats every other move but may be used at most
/// once per side per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
    Bomb,
}

impl Move {
    /// The three standard moves, bomb excluded.
    pub const STANDARD: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Standard rock-paper-scissors dominance. Bomb is resolved separately
    /// by the engine and never wins through this relation.
    pub fn beats(self, other: Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors)
                | (Move::Scissors, Move::Paper)
                | (Move::Paper, Move::Rock)
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
            Move::Bomb => "bomb",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome tag for a single round. `NoContest` marks a wasted turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    Player,
    Bot,
    Draw,
    NoContest,
}
