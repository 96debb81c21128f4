//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the site.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the site server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SiteConfig {
    /// Listener configuration (bind address, TLS).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Security hardening settings.
    pub security: SecurityConfig,

    /// Site identity used when rendering documents.
    pub site: SiteIdentityConfig,

    /// Redirect rule table evaluated ahead of page routing.
    pub redirects: RedirectsConfig,

    /// Legacy page kept behind the redirect table.
    pub legacy: LegacyConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Optional TLS configuration.
    pub tls: Option<TlsConfig>,

    /// Maximum concurrent in-flight requests (backpressure).
    pub max_connections: usize,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            tls: None,
            max_connections: 10_000,
        }
    }
}

/// TLS configuration for the listener.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TlsConfig {
    /// Path to certificate file (PEM).
    pub cert_path: String,

    /// Path to private key file (PEM).
    pub key_path: String,
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable output for development.
    #[default]
    Pretty,
    /// One JSON object per line for log aggregation.
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

/// Security hardening configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Enable security response headers.
    pub enable_headers: bool,
    /// Maximum request body size in bytes.
    pub max_body_size: usize,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            enable_headers: true,
            max_body_size: 64 * 1024, // no page accepts a body
        }
    }
}

/// Site identity.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteIdentityConfig {
    /// Company name shown in titles and the page header.
    pub name: String,

    /// Public origin (e.g., "https://example.com"). Enables canonical links.
    pub base_url: Option<String>,
}

impl Default for SiteIdentityConfig {
    fn default() -> Self {
        Self {
            name: "Northwind IT Services".to_string(),
            base_url: None,
        }
    }
}

/// Redirect table configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RedirectsConfig {
    /// Evaluate the redirect table before page routing.
    pub enabled: bool,

    /// `max-age` attached to permanent redirects.
    pub permanent_max_age_secs: u64,

    /// Ordered rule list. Order does not affect matching.
    pub rules: Vec<RedirectRuleConfig>,
}

impl Default for RedirectsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            permanent_max_age_secs: 31_536_000,
            rules: vec![
                RedirectRuleConfig {
                    source: "/services/software-solutions".to_string(),
                    destination: "/services".to_string(),
                    permanent: true,
                },
                RedirectRuleConfig {
                    source: "/services/software-solutions/*".to_string(),
                    destination: "/services/*".to_string(),
                    permanent: true,
                },
            ],
        }
    }
}

/// A single redirect rule.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RedirectRuleConfig {
    /// Source path. A trailing `/*` matches the path and everything beneath it.
    pub source: String,

    /// Destination path. Wildcard rules must end in `/*` to receive the capture.
    pub destination: String,

    /// Permanent (308) or temporary (307).
    #[serde(default = "default_permanent")]
    pub permanent: bool,
}

fn default_permanent() -> bool {
    true
}

/// Legacy fallback page configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LegacyConfig {
    /// Serve the fallback page at `path`.
    pub enabled: bool,

    /// Deprecated path the fallback page lives at.
    pub path: String,

    /// Canonical path the fallback navigates to.
    pub destination: String,
}

impl Default for LegacyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: "/services/software-solutions".to_string(),
            destination: "/services".to_string(),
        }
    }
}
