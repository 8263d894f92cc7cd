// All prompt constants for the intent judge.

use super::JudgeContext;

/// System prompt for move classification — game rules, ambiguity handling,
/// constraint enforcement, and the JSON output contract.
pub const INTENT_SYSTEM_PROMPT: &str = r#"You are an AI Judge for a Rock-Paper-Scissors Plus game.

GAME RULES:
1. Valid moves are: rock, paper, scissors, bomb
2. Standard rules: rock beats scissors, scissors beats paper, paper beats rock
3. Special rule: bomb beats everything (rock, paper, scissors)
4. Bomb limitation: each player can use bomb ONLY ONCE per game
5. Bomb vs bomb: results in a DRAW
6. Identical moves (rock vs rock, etc.): results in a DRAW

YOUR ROLE - INTENT UNDERSTANDING:
Interpret the user's free-text input and classify it as:
- VALID: clear intent to play rock, paper, scissors, or bomb
- INVALID: not a game move, nonsensical, or prohibited (e.g. trying to use bomb twice)
- UNCLEAR: ambiguous, could mean multiple things, or insufficient information

HANDLING AMBIGUITY:
- Accept common typos: "rok" -> rock, "papper" -> paper, "scisors" -> scissors
- Accept synonyms: "stone" -> rock, "dynamite"/"explosion"/"blast" -> bomb
- Reject multiple moves in one input: "rock and paper" -> UNCLEAR
- Reject vague inputs: "my special move" without context -> UNCLEAR
- Context matters: if the user says "same as before" and there is no history -> UNCLEAR

CONSTRAINT ENFORCEMENT:
- If the user has already used bomb and tries again -> INVALID (not UNCLEAR)
- Anything outside the valid moves -> INVALID

OUTPUT FORMAT:
Respond with valid JSON only. No markdown code fences, no text outside the JSON object:
{
  "classification": "VALID" | "INVALID" | "UNCLEAR",
  "interpreted_move": "rock" | "paper" | "scissors" | "bomb" | null,
  "reasoning": "clear explanation of why this classification was made",
  "raw_input": "echo of the user input"
}

Be strict but fair. When in doubt, mark UNCLEAR rather than guessing."#;

/// Builds the per-turn prompt with the game-state context the judge needs
/// for constraint checking.
pub fn build_intent_prompt(user_input: &str, ctx: &JudgeContext) -> String {
    let last_move = ctx
        .last_player_move
        .map(|mv| mv.to_string())
        .unwrap_or_else(|| "None".to_string());
    let bomb_note = if ctx.bomb_used {
        "CANNOT use bomb (already used)"
    } else {
        "CAN use bomb (not yet used)"
    };
    format!(
        "GAME STATE:\n\
         - Round: {}\n\
         - User has used bomb: {}\n\
         - Last user move: {}\n\n\
         USER INPUT: \"{}\"\n\n\
         Analyze this input and classify the move according to the game rules.\n\
         Remember: the user {}.",
        ctx.round_number, ctx.bomb_used, last_move, user_input, bomb_note
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Move;

    #[test]
    fn test_intent_prompt_embeds_game_state() {
        let ctx = JudgeContext {
            round_number: 3,
            bomb_used: false,
            last_player_move: Some(Move::Paper),
        };
        let prompt = build_intent_prompt("throw rock", &ctx);
        assert!(prompt.contains("Round: 3"));
        assert!(prompt.contains("Last user move: paper"));
        assert!(prompt.contains("USER INPUT: \"throw rock\""));
        assert!(prompt.contains("CAN use bomb"));
    }

    #[test]
    fn test_intent_prompt_flags_a_spent_bomb() {
        let ctx = JudgeContext {
            round_number: 4,
            bomb_used: true,
            last_player_move: None,
        };
        let prompt = build_intent_prompt("bomb", &ctx);
        assert!(prompt.contains("CANNOT use bomb (already used)"));
        assert!(prompt.contains("Last user move: None"));
    }
}
