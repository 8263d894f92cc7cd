//! Bot move generation behind a strategy seam.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::moves::Move;

/// Supplies the bot's move each round. Implementations must never return
/// `Move::Bomb` once `bomb_used` is true; the engine trusts this contract.
pub trait BotStrategy: Send {
    fn draw(&mut self, round_number: u32, bomb_used: bool) -> Move;
}

/// The production strategy, carried over from the original bot: hold the
/// bomb for the first two rounds, then a 20% chance per round until spent.
pub struct RandomBot {
    rng: StdRng,
}

impl RandomBot {
    pub fn new() -> Self {
        Self { rng: StdRng::from_entropy() }
    }

    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl Default for RandomBot {
    fn default() -> Self {
        Self::new()
    }
}

impl BotStrategy for RandomBot {
    fn draw(&mut self, round_number: u32, bomb_used: bool) -> Move {
        if !bomb_used && round_number > 2 && self.rng.gen_bool(0.2) {
            return Move::Bomb;
        }
        Move::STANDARD[self.rng.gen_range(0..Move::STANDARD.len())]
    }
}

/// Plays a fixed script of moves. Test double for deterministic rounds.
#[cfg(test)]
pub struct ScriptedBot {
    moves: std::vec::IntoIter<Move>,
}

#[cfg(test)]
impl ScriptedBot {
    pub fn new(moves: Vec<Move>) -> Self {
        Self { moves: moves.into_iter() }
    }
}

#[cfg(test)]
impl BotStrategy for ScriptedBot {
    fn draw(&mut self, _round_number: u32, bomb_used: bool) -> Move {
        let mv = self.moves.next().expect("bot script exhausted");
        assert!(
            !(mv == Move::Bomb && bomb_used),
            "bot script violates the bomb-once contract"
        );
        mv
    }
}
