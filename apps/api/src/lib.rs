//! Rock-Paper-Scissors Plus with an AI judge.
//!
//! Three layers: an intent judge turns free-text input into a structured
//! move judgment (Gemini-backed, with an offline keyword fallback), the
//! round resolution engine applies the game rules deterministically, and
//! the presenter formats the result. The layers are served over HTTP by
//! the `api` binary and driven interactively by the `cli` binary.

pub mod config;
pub mod errors;
pub mod game;
pub mod judge;
pub mod llm_client;
pub mod presenter;
pub mod routes;
pub mod state;
pub mod store;
