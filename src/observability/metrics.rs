//! Metrics collection and exposition.
//!
//! # Metrics
//! - `site_requests_total` (counter): requests by method, status, route
//! - `site_request_duration_seconds` (histogram): latency distribution
//! - `site_redirects_total` (counter): redirects by rule and kind
//! - `site_fallback_navigations_total` (counter): legacy page navigations
//!
//! # Design Decisions
//! - Recording without an installed exporter is a no-op
//! - Labels use the matched route template, never the raw path

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Start the Prometheus scrape endpoint.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

pub fn record_request(method: &str, status: u16, route: &str, start: Instant) {
    let status = status.to_string();
    metrics::counter!(
        "site_requests_total",
        "method" => method.to_string(),
        "status" => status.clone(),
        "route" => route.to_string()
    )
    .increment(1);
    metrics::histogram!(
        "site_request_duration_seconds",
        "method" => method.to_string(),
        "status" => status,
        "route" => route.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}

pub fn record_redirect(rule: &str, permanent: bool) {
    let kind = if permanent { "permanent" } else { "temporary" };
    metrics::counter!("site_redirects_total", "rule" => rule.to_string(), "kind" => kind)
        .increment(1);
}

pub fn record_fallback_navigation() {
    metrics::counter!("site_fallback_navigations_total").increment(1);
}
