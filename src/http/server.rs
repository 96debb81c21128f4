//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all page handlers
//! - Wire up middleware (request ID, tracing, limits, timeout, headers)
//! - Evaluate the redirect table ahead of every route
//! - Bind plain or TLS listeners and shut down gracefully

use axum::{
    body::Body,
    extract::MatchedPath,
    http::Request,
    middleware::{self, Next},
    response::Response,
    routing::get,
    Router,
};
use axum_server::tls_rustls::RustlsConfig;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::limit::GlobalConcurrencyLimitLayer;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use url::Url;

use crate::config::schema::TlsConfig;
use crate::config::validation::validate_config;
use crate::config::{ConfigError, SiteConfig};
use crate::content::RenderContext;
use crate::http::handlers;
use crate::http::redirect::redirect_middleware;
use crate::http::request::{request_id, UuidRequestId};
use crate::http::routes;
use crate::observability::metrics;
use crate::routing::Redirector;
use crate::security::headers::with_security_headers;

/// Grace period for in-flight TLS connections on shutdown.
const TLS_DRAIN_SECS: u64 = 10;

/// Errors that stop the server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid bind address {0}")]
    BindAddress(String),

    #[error("TLS setup failed: {0}")]
    Tls(#[source] std::io::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub redirector: Arc<Redirector>,
    pub redirects_enabled: bool,
    pub permanent_max_age_secs: u64,
    pub site_name: Arc<str>,
    pub base_url: Option<Arc<Url>>,
    pub legacy_path: Arc<str>,
    pub legacy_destination: Arc<str>,
}

impl AppState {
    pub fn render_context(&self) -> RenderContext<'_> {
        RenderContext {
            site_name: &self.site_name,
            base_url: self.base_url.as_deref(),
        }
    }
}

/// HTTP server for the site.
pub struct HttpServer {
    router: Router,
    config: SiteConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    ///
    /// The configuration is validated here so that programmatic configs get
    /// the same checks as files.
    pub fn new(config: SiteConfig) -> Result<Self, ConfigError> {
        validate_config(&config).map_err(ConfigError::Validation)?;

        let redirector = if config.redirects.enabled {
            Redirector::from_config(&config.redirects.rules).map_err(ConfigError::Validation)?
        } else {
            Redirector::empty()
        };

        let base_url = config
            .site
            .base_url
            .as_deref()
            .and_then(|raw| Url::parse(raw).ok())
            .map(Arc::new);

        let state = AppState {
            redirector: Arc::new(redirector),
            redirects_enabled: config.redirects.enabled,
            permanent_max_age_secs: config.redirects.permanent_max_age_secs,
            site_name: config.site.name.as_str().into(),
            base_url,
            legacy_path: config.legacy.path.as_str().into(),
            legacy_destination: config.legacy.destination.as_str().into(),
        };

        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &SiteConfig, state: AppState) -> Router {
        let mut pages = Router::new()
            .route(routes::HOME, get(handlers::services_index))
            .route(routes::SERVICES, get(handlers::services_index))
            .route(routes::SERVICE_DETAIL, get(handlers::service_page))
            .route(routes::PRIVACY, get(handlers::privacy_policy))
            .route(routes::HEALTH, get(handlers::health));

        if config.legacy.enabled {
            pages = pages.route(&config.legacy.path, get(handlers::legacy_page));
        }

        let mut router = pages
            .fallback(handlers::not_found)
            .layer(middleware::from_fn_with_state(state.clone(), redirect_middleware))
            .layer(middleware::from_fn(track_requests))
            .with_state(state)
            .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(GlobalConcurrencyLimitLayer::new(config.listener.max_connections));

        if config.security.enable_headers {
            router = with_security_headers(router);
        }

        router
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                    tracing::info_span!(
                        "request",
                        method = %request.method(),
                        path = %request.uri().path(),
                        request_id = %request_id(request),
                    )
                }),
            )
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
    }

    /// The fully layered router. Cloning is cheap.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Bind the configured address and serve, over TLS if configured.
    pub async fn serve(self, shutdown: broadcast::Receiver<()>) -> Result<(), ServerError> {
        match self.config.listener.tls.clone() {
            Some(tls) => {
                let addr: SocketAddr = self
                    .config
                    .listener
                    .bind_address
                    .parse()
                    .map_err(|_| ServerError::BindAddress(self.config.listener.bind_address.clone()))?;
                self.run_tls(addr, &tls, shutdown).await
            }
            None => {
                let listener = TcpListener::bind(&self.config.listener.bind_address).await?;
                self.run(listener, shutdown).await
            }
        }
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            redirects = self.config.redirects.rules.len(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Run the server over TLS.
    pub async fn run_tls(
        self,
        addr: SocketAddr,
        tls: &TlsConfig,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        let rustls = RustlsConfig::from_pem_file(&tls.cert_path, &tls.key_path)
            .await
            .map_err(ServerError::Tls)?;

        let handle = axum_server::Handle::new();
        let drain = handle.clone();
        tokio::spawn(async move {
            let _ = shutdown.recv().await;
            tracing::info!("Shutdown signal received, draining TLS connections");
            drain.graceful_shutdown(Some(Duration::from_secs(TLS_DRAIN_SECS)));
        });

        tracing::info!(address = %addr, cert = %tls.cert_path, "HTTPS server starting");
        axum_server::bind_rustls(addr, rustls)
            .handle(handle)
            .serve(self.router.into_make_service())
            .await?;

        tracing::info!("HTTPS server stopped");
        Ok(())
    }
}

/// Record per-request metrics labelled by route template.
async fn track_requests(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let response = next.run(request).await;

    tracing::debug!(
        status = response.status().as_u16(),
        route = %route,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Request completed"
    );
    metrics::record_request(&method, response.status().as_u16(), &route, start);
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, StatusCode};
    use tower::ServiceExt;

    async fn send(router: Router, uri: &str) -> Response {
        router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_security_headers() {
        let server = HttpServer::new(SiteConfig::default()).unwrap();
        let res = send(server.router(), "/services").await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.headers()[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
        assert_eq!(res.headers()[header::X_FRAME_OPTIONS], "DENY");
        assert!(res.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn test_headers_can_be_disabled() {
        let mut config = SiteConfig::default();
        config.security.enable_headers = false;
        let server = HttpServer::new(config).unwrap();
        let res = send(server.router(), "/services").await;
        assert!(!res.headers().contains_key(header::X_FRAME_OPTIONS));
    }

    #[tokio::test]
    async fn test_request_id_propagated() {
        let server = HttpServer::new(SiteConfig::default()).unwrap();
        let res = server
            .router()
            .oneshot(
                Request::builder()
                    .uri("/healthz")
                    .header("x-request-id", "req-42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.headers()["x-request-id"], "req-42");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = SiteConfig::default();
        config.timeouts.request_secs = 0;
        assert!(matches!(
            HttpServer::new(config),
            Err(ConfigError::Validation(_))
        ));
    }
}
