//! Response generation — renders round and game results as terminal text.
//! The REST layer returns structured JSON instead; only the rules text is
//! shared between the two surfaces.

use crate::game::{Move, RoundOutcome, Winner};

pub const GAME_RULES: &str = "\
ROCK-PAPER-SCISSORS PLUS

Valid Moves: rock, paper, scissors, bomb

Rules:
- Rock beats scissors
- Scissors beats paper
- Paper beats rock
- Bomb beats everything (but can only be used ONCE)
- Bomb vs bomb = draw
- Same moves = draw

Tips:
- You can use natural language: \"I choose rock\", \"throw paper\"
- Typos are okay: \"rok\", \"papper\" work fine
- Invalid or unclear moves waste your turn
";

const RULE_LINE: &str = "==================================================";

pub fn welcome_banner(max_rounds: u32) -> String {
    let rounds_line = if max_rounds > 0 {
        format!("Best of {max_rounds} rounds (or play until you quit)")
    } else {
        "Play until you quit".to_string()
    };
    [
        RULE_LINE.to_string(),
        "ROCK-PAPER-SCISSORS PLUS: AI JUDGE EDITION".to_string(),
        RULE_LINE.to_string(),
        String::new(),
        "Welcome! Enter your moves in natural language.".to_string(),
        "Valid moves: rock, paper, scissors, bomb".to_string(),
        String::new(),
        "Special Rules:".to_string(),
        "- Bomb beats everything but can only be used ONCE".to_string(),
        "- Invalid or unclear moves waste your turn".to_string(),
        format!("- {rounds_line}"),
        String::new(),
        "Commands:".to_string(),
        "- Type 'rules' to see full rules".to_string(),
        "- Type 'score' to see the current score".to_string(),
        "- Type 'quit' or 'exit' to end the game".to_string(),
        String::new(),
        "Let's begin!".to_string(),
    ]
    .join("\n")
}

/// Formats a single round for display. `reasoning` is the judge's verdict
/// explanation, shown only when the turn was wasted.
pub fn format_round(outcome: &RoundOutcome, reasoning: &str) -> String {
    let mut lines = vec![
        RULE_LINE.to_string(),
        format!("ROUND {}", outcome.round_number),
        RULE_LINE.to_string(),
        format!("You played: {}", player_label(outcome.player_move)),
        format!("Bot played: {}", outcome.bot_move.as_str().to_uppercase()),
    ];

    if outcome.winner == Winner::NoContest && !reasoning.is_empty() {
        lines.push(format!("Judge: {reasoning}"));
    }

    lines.push(outcome.explanation.clone());
    lines.push(
        match outcome.winner {
            Winner::Player => "You win this round!",
            Winner::Bot => "Bot wins this round!",
            Winner::Draw => "Draw!",
            Winner::NoContest => "Turn wasted!",
        }
        .to_string(),
    );
    lines.push(format!(
        "SCORE: You {} - {} Bot",
        outcome.player_score, outcome.bot_score
    ));

    lines.join("\n")
}

/// Formats the final game result.
pub fn format_final(winner: Winner, player_score: u32, bot_score: u32, rounds: u32) -> String {
    let verdict = match winner {
        Winner::Player => "CONGRATULATIONS! YOU WIN!",
        Winner::Bot => "Bot wins this time! Better luck next time!",
        Winner::Draw | Winner::NoContest => "It's a DRAW! Well played!",
    };
    [
        RULE_LINE.to_string(),
        "GAME OVER".to_string(),
        RULE_LINE.to_string(),
        format!("Total Rounds: {rounds}"),
        format!("Final Score: You {player_score} - {bot_score} Bot"),
        verdict.to_string(),
    ]
    .join("\n")
}

fn player_label(mv: Option<Move>) -> String {
    match mv {
        Some(mv) => mv.as_str().to_uppercase(),
        None => "INVALID/UNCLEAR".to_string(),
    }
}
