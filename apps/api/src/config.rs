use anyhow::{Context, Result};

use crate::game::DEFAULT_MAX_ROUNDS;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// When absent the service falls back to the offline keyword judge.
    pub gemini_api_key: Option<String>,
    pub port: u16,
    /// Default round limit for new sessions. 0 means unlimited (CLI only).
    pub max_rounds: u32,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            max_rounds: match std::env::var("MAX_ROUNDS") {
                Ok(value) => value
                    .parse::<u32>()
                    .context("MAX_ROUNDS must be a non-negative integer")?,
                Err(_) => DEFAULT_MAX_ROUNDS,
            },
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}
