//! Service entry point: configuration, logging, wiring, serve.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use murmur_gemini::{GeminiClient, GeminiConfig};
use murmur_server::{AppState, build_router};
use murmur_settings::Settings;

/// Resilient audio transcription gateway.
#[derive(Debug, Parser)]
#[command(name = "murmur", version, about)]
struct Args {
    /// Listen address, e.g. 0.0.0.0:8000 (overrides MURMUR_BIND).
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let settings = Settings::from_env().context("loading configuration")?;

    tracing::info!(
        primary = %settings.primary_model,
        secondary = %settings.secondary_model,
        tertiary = %settings.tertiary_model,
        security = settings.security_enabled(),
        "model tiers configured"
    );

    let mut config = GeminiConfig::new(settings.api_key.clone());
    if let Some(ref base_url) = settings.base_url {
        config = config.with_base_url(base_url.clone());
    }
    let backend = Arc::new(GeminiClient::new(config));

    let bind = args.bind.unwrap_or_else(|| settings.bind_addr.clone());
    let state = AppState::new(Arc::new(settings), backend);
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .with_context(|| format!("binding {bind}"))?;
    tracing::info!(addr = %bind, "listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutting down");
        })
        .await
        .context("server error")?;

    Ok(())
}
