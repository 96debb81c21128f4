//! Startup orchestration.
//!
//! # Responsibilities
//! - Initialize subsystems in dependency order
//! - Start the metrics endpoint when enabled
//! - Bind the listener and begin accepting traffic
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listeners start last (traffic only when ready)

use std::net::SocketAddr;

use crate::config::SiteConfig;
use crate::http::server::ServerError;
use crate::http::HttpServer;
use crate::lifecycle::shutdown::Shutdown;
use crate::lifecycle::signals::shutdown_signal;
use crate::observability::metrics;

/// Start every subsystem and serve until a shutdown signal arrives.
///
/// Logging must already be initialized.
pub async fn launch(config: SiteConfig) -> Result<(), ServerError> {
    tracing::info!(
        bind_address = %config.listener.bind_address,
        tls = config.listener.tls.is_some(),
        redirects_enabled = config.redirects.enabled,
        redirect_rules = config.redirects.rules.len(),
        legacy_page = config.legacy.enabled,
        "Configuration loaded"
    );

    let server = HttpServer::new(config)?;

    if server.config().observability.metrics_enabled {
        let address = &server.config().observability.metrics_address;
        match address.parse::<SocketAddr>() {
            Ok(addr) => {
                if let Err(e) = metrics::init_metrics(addr) {
                    tracing::error!(error = %e, "Failed to start metrics endpoint");
                }
            }
            Err(_) => {
                tracing::error!(metrics_address = %address, "Failed to parse metrics address");
            }
        }
    }

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        shutdown_signal().await;
        shutdown.trigger();
    });

    server.serve(server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
