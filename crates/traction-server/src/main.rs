use anyhow::Context;
use chrono::Utc;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use traction_ai::OpenAiClient;
use traction_server::app;
use traction_server::config::ServerConfig;
use traction_server::state::AppState;
use traction_storage::ReportStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("traction=info,tower_http=warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    traction_common::id::init(1, 1);

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config/server.toml".to_string());
    let config = ServerConfig::load(&config_path)
        .with_context(|| format!("Failed to load config from {config_path}"))?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        http_port = config.http_port,
        database = %config.database.redacted_url(),
        model = %config.openai.model,
        "Starting traction server"
    );

    // SQLite 文件所在目录需要先存在
    std::fs::create_dir_all(&config.database.data_dir)
        .with_context(|| format!("Failed to create data dir {}", config.database.data_dir))?;

    let report_store = ReportStore::new(&config.database.url)
        .await
        .context("Failed to initialize report store")?;

    let api_key = config.openai.resolve_api_key()?;
    let completion = OpenAiClient::new(
        api_key,
        config.openai.base_url.clone(),
        Some(config.openai.timeout_secs),
    )
    .context("Failed to build completion client")?;

    let state = AppState {
        report_store: Arc::new(report_store),
        completion: Arc::new(completion),
        start_time: Utc::now(),
        config: Arc::new(config.clone()),
    };

    let app = app::build_http_app(state);
    let addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!(addr = %addr, "HTTP server listening, docs at /docs");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received shutdown signal"),
        Err(e) => tracing::error!(error = %e, "Failed to listen for shutdown signal"),
    }
}
