//! The round resolution engine and session bookkeeping.
//!
//! Everything in this module is synchronous and free of I/O. The only
//! randomness is the bot's move draw, which lives behind the
//! [`bot::BotStrategy`] seam so tests can script it.

pub mod bot;
pub mod engine;
pub mod moves;
pub mod session;

pub use engine::{resolve_round, Classification, PlayerState, RoundOutcome};
pub use moves::{Move, Winner};
pub use session::{GameSession, GameStateView, DEFAULT_MAX_ROUNDS};
