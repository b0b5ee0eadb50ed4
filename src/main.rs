use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use youdao_translate_proxy::{
    client::YoudaoClient,
    config::AppConfig,
    handler::{AppState, router},
    pipeline::TranslatePipeline,
    state::{SharedValves, Valves},
    taxonomy::Taxonomy,
};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to a TOML config file; environment variables are used otherwise
    #[arg(short, long)]
    config: Option<String>,

    /// Override the listen address
    #[arg(short, long)]
    listen: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();

    // Load configuration
    let mut config = match &args.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::from_env()?,
    };
    if let Some(listen) = args.listen {
        config.server.listen_addr = listen;
    }
    config.validate()?;

    let valves = SharedValves::new(Valves::from(&config.youdao));
    let provider = YoudaoClient::new(config.youdao.endpoint.clone(), valves.clone())?;
    let pipeline =
        TranslatePipeline::new(Arc::new(Taxonomy::builtin()), Arc::new(provider), valves);
    let app = router(Arc::new(AppState { pipeline }));

    info!("Starting Youdao translation proxy...");
    info!("  Listen: {}", config.server.listen_addr);
    info!("  Endpoint: {}", config.youdao.endpoint);
    info!("  Default target language: {}", config.youdao.target_lang);

    let listener = tokio::net::TcpListener::bind(&config.server.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.listen_addr))?;

    info!("Proxy ready!");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Proxy stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
