//! Server binary for invoice2json.
//!
//! A thin shim over the library crate: parse flags, build the config from
//! the environment (failing fast on a missing API key), and serve the
//! router.

use anyhow::{Context, Result};
use clap::Parser;
use invoice2json::{router, AppState, ExtractionConfig};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "invoice2json",
    version,
    about = "Extract structured invoice data from PDFs using Vision Language Models"
)]
struct Cli {
    /// Address to bind.
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on.
    #[arg(short, long, env = "PORT", default_value_t = 5050)]
    port: u16,

    /// Model identifier override, e.g. "gpt-4o-mini".
    #[arg(long, env = "INVOICE2JSON_MODEL")]
    model: Option<String>,

    /// Per-request timeout for the model API call, in seconds.
    #[arg(long)]
    api_timeout_secs: Option<u64>,

    /// Increase log verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "invoice2json=info,tower_http=info",
        1 => "invoice2json=debug,tower_http=debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    // Credential check happens here, not on the first request.
    let mut config = ExtractionConfig::from_env().context("Failed to build configuration")?;
    if let Some(model) = cli.model {
        config.model = model;
    }
    if let Some(secs) = cli.api_timeout_secs {
        config.api_timeout_secs = secs.max(1);
    }
    info!("Configuration: {:?}", config);

    let state = Arc::new(AppState::new(config)?);
    let app = router(state);

    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port)
        .parse()
        .with_context(|| format!("Invalid bind address {}:{}", cli.host, cli.port))?;
    info!("Starting invoice2json on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
