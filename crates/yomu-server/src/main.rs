use std::sync::Arc;

use clap::Parser;
use tokio::signal;
use tracing_subscriber::EnvFilter;
use yomu_config::{Config, LogFormat};
use yomu_lang_japanese::load_dictionary;

mod error;
mod handlers;
mod routes;
mod state;

#[cfg(test)]
mod tests;

use self::state::AppState;

const DEFAULT_LOG_FILTER: &str = "yomu=info,tower_http=info";

/// Manga OCR and Japanese dictionary backend
#[derive(Debug, Parser)]
#[command(name = "yomu-server", version, about)]
struct Args {
    /// Interface to bind, overrides HOST
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on, overrides PORT
    #[arg(long)]
    port: Option<u16>,

    /// `pretty` or `json`, overrides LOG_FORMAT
    #[arg(long)]
    log_format: Option<LogFormat>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let mut config = Config::new()?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(format) = args.log_format {
        config.server.log_format = format;
    }
    config.validate()?;

    init_tracing(config.server.log_format);

    let dictionary_config = config.dictionary.clone();
    let dictionary =
        tokio::task::spawn_blocking(move || load_dictionary(&dictionary_config)).await??;
    let state = AppState::new(&config, Arc::new(dictionary));

    let app = routes::create_router(state, &config.server)?;

    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server starting on http://{addr}");
    tracing::info!(
        ocr_enabled = config.ocr.enabled,
        ocr_endpoint = %config.ocr.endpoint,
        "OCR recognizer will initialize on first scan"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl+c: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
}
