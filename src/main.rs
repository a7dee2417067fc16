//! Tutorboard Server
//!
//! Run with: cargo run --bin tutorboard
//!
//! # Configuration
//!
//! Config file (first found): `~/.config/tutorboard/config.toml`,
//! `/etc/tutorboard/config.toml`, `./config.toml`, or `--config <path>`.
//!
//! Environment variables:
//! - `TUTORBOARD_HOST`: Host to bind to (default: 0.0.0.0)
//! - `TUTORBOARD_PORT`: Port to listen on (default: 8086)
//! - `TUTORBOARD_UI_DIST`: Compiled WASM client served under `/app`
//! - `TUTORBOARD_LOG_LEVEL`: Log level (default: info)
//! - `TUTORBOARD_LOG_FORMAT`: `pretty` or `json`
//! - `RUST_LOG`: Full filter directive, overrides the level above

use clap::Parser;
use std::path::PathBuf;

use tutorboard::api::{serve, AppState};
use tutorboard::config::Config;
use tutorboard::telemetry;

#[derive(Parser)]
#[command(name = "tutorboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Serve the tutoring dashboard")]
struct Args {
    /// Config file (default: search the standard locations)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listen port
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(port) = args.port {
        config.server.port = port;
    }

    telemetry::init(&config.logging)?;

    tracing::info!("Starting Tutorboard v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState::new(config.server.clone())?;
    tracing::info!(
        cards = state.page.cards.len(),
        charts = state.page.charts.len(),
        summaries = state.page.summaries.len(),
        "Dashboard composed"
    );

    serve(state, &config.server).await?;

    tracing::info!("Tutorboard stopped");
    Ok(())
}
