//! Interactive terminal game — the same judge → engine → presenter
//! pipeline the API serves, driven by a read-line loop.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use rps_judge::config::Config;
use rps_judge::game::bot::RandomBot;
use rps_judge::game::GameSession;
use rps_judge::judge::{IntentJudge, KeywordIntentJudge, LlmIntentJudge};
use rps_judge::llm_client::LlmClient;
use rps_judge::presenter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Keep the terminal quiet unless RUST_LOG asks for more.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let judge: Arc<dyn IntentJudge> = match &config.gemini_api_key {
        Some(key) => Arc::new(LlmIntentJudge::new(LlmClient::new(key.clone()))),
        None => {
            eprintln!("GEMINI_API_KEY not set; using the offline keyword judge.\n");
            Arc::new(KeywordIntentJudge)
        }
    };

    let mut session = GameSession::new(config.max_rounds, Box::new(RandomBot::new()));

    println!("{}\n", presenter::welcome_banner(config.max_rounds));

    let stdin = io::stdin();
    loop {
        print!("Your move: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match input.to_lowercase().as_str() {
            "quit" | "exit" | "q" => break,
            "rules" | "help" | "r" => {
                println!("\n{}", presenter::GAME_RULES);
                continue;
            }
            "score" | "s" => {
                let view = session.view();
                println!(
                    "\nCurrent Score: You {} - {} Bot",
                    view.player_score, view.bot_score
                );
                println!("Round: {}", view.round_number);
                println!("Your bomb used: {}\n", view.player_bomb_used);
                continue;
            }
            _ => {}
        }

        let ctx = session.judge_context();
        let interpretation = match judge.judge(input, &ctx).await {
            Ok(interpretation) => interpretation,
            Err(e) => {
                eprintln!("\nJudging failed: {e}. Please try again.\n");
                continue;
            }
        };

        let reasoning = interpretation.reasoning.clone();
        let outcome = session.play_round(interpretation.into_classification());
        println!("\n{}\n", presenter::format_round(&outcome, &reasoning));

        if session.is_over() {
            break;
        }
    }

    if session.rounds_played() > 0 {
        let view = session.view();
        println!(
            "\n{}\n",
            presenter::format_final(
                session.final_result(),
                view.player_score,
                view.bot_score,
                session.rounds_played()
            )
        );
    } else {
        println!("\nNo rounds played. Thanks for trying!");
    }

    Ok(())
}
