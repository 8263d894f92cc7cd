use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use rps_judge::config::Config;
use rps_judge::judge::{IntentJudge, KeywordIntentJudge, LlmIntentJudge};
use rps_judge::llm_client::{self, LlmClient};
use rps_judge::routes::build_router;
use rps_judge::state::AppState;
use rps_judge::store::SessionStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.rust_log.clone())),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting RPS Plus AI Judge API v{}", env!("CARGO_PKG_VERSION"));

    // Select the intent judge backend
    let judge: Arc<dyn IntentJudge> = match &config.gemini_api_key {
        Some(key) => {
            info!("Intent judge: Gemini (model: {})", llm_client::MODEL);
            Arc::new(LlmIntentJudge::new(LlmClient::new(key.clone())))
        }
        None => {
            warn!("GEMINI_API_KEY not set; falling back to the offline keyword judge");
            Arc::new(KeywordIntentJudge)
        }
    };

    // Build app state
    let state = AppState {
        sessions: SessionStore::new(),
        judge,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
