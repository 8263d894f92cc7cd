//! Deterministic fallback judge — lexicon matching, no network.
//!
//! Used when no API key is configured and as the test double for the HTTP
//! layer. Mirrors the ambiguity rules the LLM judge is prompted with.

use async_trait::async_trait;

use super::{IntentJudge, JudgeContext, MoveInterpretation, Verdict};
use crate::errors::AppError;
use crate::game::Move;

/// Accepted spellings and synonyms per move.
const LEXICON: [(Move, &[&str]); 4] = [
    (Move::Rock, &["rock", "rok", "stone"]),
    (Move::Paper, &["paper", "papper"]),
    (Move::Scissors, &["scissors", "scissor", "scisors"]),
    (Move::Bomb, &["bomb", "dynamite", "explosion", "blast"]),
];

pub struct KeywordIntentJudge;

impl KeywordIntentJudge {
    /// Distinct moves named anywhere in the input, in lexicon order.
    fn matched_moves(input: &str) -> Vec<Move> {
        let lowered = input.to_lowercase();
        let tokens: Vec<&str> = lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|token| !token.is_empty())
            .collect();
        LEXICON
            .iter()
            .filter(|(_, words)| words.iter().any(|word| tokens.contains(word)))
            .map(|(mv, _)| *mv)
            .collect()
    }
}

#[async_trait]
impl IntentJudge for KeywordIntentJudge {
    async fn judge(
        &self,
        input: &str,
        ctx: &JudgeContext,
    ) -> Result<MoveInterpretation, AppError> {
        let (classification, interpreted_move, reasoning) =
            match Self::matched_moves(input).as_slice() {
                [] => (
                    Verdict::Invalid,
                    None,
                    format!("\"{}\" does not name a recognized move", input.trim()),
                ),
                [Move::Bomb] if ctx.bomb_used => (
                    Verdict::Invalid,
                    None,
                    "bomb already used".to_string(),
                ),
                [mv] => (
                    Verdict::Valid,
                    Some(*mv),
                    format!("input names {mv}"),
                ),
                _ => (
                    Verdict::Unclear,
                    None,
                    "multiple moves specified".to_string(),
                ),
            };

        Ok(MoveInterpretation {
            classification,
            interpreted_move,
            reasoning,
            raw_input: input.to_string(),
        })
    }

    fn backend(&self) -> &'static str {
        "keyword"
    }
}
