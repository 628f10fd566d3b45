use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use deepchart::analyst::Analyst;
use deepchart::config::Config;
use deepchart::llm::{ClientConfig, DeepSeekClient};
use deepchart::server::{AppState, build_app};

#[derive(Parser)]
#[command(name = "deepchart", about = "BI question gateway for DeepSeek chart analyses")]
struct Args {
    /// Path to the configuration file.
    #[arg(long, default_value = "deepchart.yaml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = Config::load(&args.config).await?;

    let api_key = config
        .deepseek
        .resolve_api_key()
        .context("no DeepSeek API key configured; set DEEPSEEK_API_KEY or deepseek.api_key")?;

    let client = DeepSeekClient::new(ClientConfig {
        endpoint: config.deepseek.endpoint.clone(),
        api_key,
        model: config.deepseek.model.clone(),
        connect_timeout: Duration::from_millis(config.deepseek.connect_timeout_ms),
        request_timeout: Duration::from_millis(config.deepseek.request_timeout_ms),
    })?;

    let state = AppState {
        analyst: Arc::new(Analyst::new(client)),
    };
    let app = build_app(state, config.server.request_timeout_seconds);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutting down");
}
