//! Intent understanding — classifies free-text player input.
//!
//! The game depends on this layer only through the [`IntentJudge`] trait:
//! one async function from (input text, game context) to a structured
//! [`MoveInterpretation`]. Backends: [`LlmIntentJudge`] (Gemini) and
//! [`KeywordIntentJudge`] (offline lexicon fallback and test double).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::game::{Classification, Move};

pub mod keyword;
pub mod llm;
pub mod prompts;

pub use keyword::KeywordIntentJudge;
pub use llm::LlmIntentJudge;

/// Wire-level judgment tag. The LLM is instructed to emit exactly these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Valid,
    Invalid,
    Unclear,
}

/// Structured interpretation of one player input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveInterpretation {
    pub classification: Verdict,
    /// The normalized move when the verdict is VALID, `None` otherwise.
    #[serde(default)]
    pub interpreted_move: Option<Move>,
    pub reasoning: String,
    /// The original input, echoed for reference.
    #[serde(default)]
    pub raw_input: String,
}

impl MoveInterpretation {
    /// Converts to the engine's classification. A VALID verdict without a
    /// move is malformed judge output and is demoted to Invalid here so it
    /// never reaches the engine.
    pub fn into_classification(self) -> Classification {
        let MoveInterpretation {
            classification,
            interpreted_move,
            reasoning,
            ..
        } = self;
        match (classification, interpreted_move) {
            (Verdict::Valid, Some(mv)) => Classification::Valid(mv),
            (Verdict::Valid, None) => {
                Classification::Invalid("judge returned VALID without a move".to_string())
            }
            (Verdict::Invalid, _) => Classification::Invalid(reasoning),
            (Verdict::Unclear, _) => Classification::Unclear(reasoning),
        }
    }
}

/// Game context the judge needs for constraint enforcement.
#[derive(Debug, Clone)]
pub struct JudgeContext {
    /// The round about to be played (1-based).
    pub round_number: u32,
    /// The player's bomb flag; the judge must reject bomb reuse as INVALID.
    pub bomb_used: bool,
    pub last_player_move: Option<Move>,
}

/// The narrow seam between the game and whatever interprets player input.
/// Carried in `AppState` as `Arc<dyn IntentJudge>`.
#[async_trait]
pub trait IntentJudge: Send + Sync {
    async fn judge(&self, input: &str, ctx: &JudgeContext)
        -> Result<MoveInterpretation, AppError>;

    /// Backend label surfaced by `/health`.
    fn backend(&self) -> &'static str;
}
