//! Brochure site server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ request id ─▶ trace ─▶ limits/timeout
//!                                               │
//!                                               ▼
//!                                      ┌─────────────────┐  match   308/307
//!                                      │ redirect table  │────────────────▶ Client
//!                                      └────────┬────────┘
//!                                               │ no match
//!                                               ▼
//!                                      ┌─────────────────┐
//!                                      │  page handlers  │  service pages, privacy,
//!                                      │  + renderer     │  index, legacy fallback, 404
//!                                      └────────┬────────┘
//!     Client Response ◀─────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use services_site::config::{load_config, SiteConfig};
use services_site::lifecycle::startup::launch;
use services_site::observability::logging::init_logging;

#[derive(Parser)]
#[command(name = "services-site")]
#[command(about = "Serve the IT services brochure site", long_about = None)]
struct Args {
    /// TOML configuration file. Built-in defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => SiteConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }

    init_logging(&config.observability)?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = ?args.config,
        "services-site starting"
    );

    launch(config).await?;
    Ok(())
}
