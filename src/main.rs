//! SpaceX data facade (v1)
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌──────────────────────────────────────────────┐
//!                     │                SPACEX FACADE                 │
//!   Client Request    │  ┌────────┐    ┌──────────┐    ┌──────────┐  │
//!   ──────────────────┼─▶│  http  │───▶│  query   │───▶│ upstream │──┼──▶ SpaceX API
//!                     │  │handlers│    │ services │    │  client  │  │
//!   Client Response   │  └────────┘    └──────────┘    └──────────┘  │
//!   ◀─────────────────┼── JSON views ◀── filter / sort / project     │
//!                     │                                              │
//!                     │  config · observability · lifecycle          │
//!                     └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use spacex_facade::config;
use spacex_facade::lifecycle::{signals, startup, Shutdown};
use spacex_facade::observability::logging;

#[derive(Parser)]
#[command(name = "spacex-facade")]
#[command(about = "Read-only JSON facade over the SpaceX API", long_about = None)]
struct Args {
    /// Path to a TOML config file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = config::load(args.config.as_deref())?;

    logging::init(&config.observability.log_level);
    tracing::info!("spacex-facade v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let shutdown = Arc::new(Shutdown::new());
    signals::spawn_signal_listener(shutdown.clone());

    startup::serve(config, &shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
