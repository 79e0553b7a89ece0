mod analysis;
mod chat;
mod config;
mod errors;
mod journal;
mod llm_client;
mod models;
mod narrative;
mod routes;
mod state;
mod store;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{Completer, LlmClient, UnconfiguredCompleter};
use crate::narrative::openings::RandomOpenings;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::FileJournalStore;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Mood Journal API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize completion backend
    let completer: Arc<dyn Completer> = match &config.groq_api_key {
        Some(key) => {
            let llm = LlmClient::new(
                config.groq_api_url.clone(),
                key.clone(),
                config.groq_model.clone(),
                config.llm_timeout,
            )?;
            info!("LLM client initialized (model: {})", llm.model());
            Arc::new(llm)
        }
        None => {
            warn!("GROQ_API_KEY not set; narratives will use default copy");
            Arc::new(UnconfiguredCompleter)
        }
    };

    // Initialize journal store
    let store = FileJournalStore::open(&config.data_dir).await?;
    info!("Journal store ready at {}", store.path().display());

    let state = AppState {
        completer,
        openings: Arc::new(RandomOpenings),
        store: Arc::new(store),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
