//! Page handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{StatusCode, Uri},
    response::Response,
    Json,
};
use serde::Serialize;

use crate::content::catalog::find_service;
use crate::content::render;
use crate::fallback::{LegacyFallback, RecordingNavigator};
use crate::http::response::html;
use crate::http::server::AppState;

#[derive(Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
    pub redirect_rules: usize,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        redirect_rules: state.redirector.len(),
    })
}

pub async fn services_index(State(state): State<AppState>) -> Response {
    html(StatusCode::OK, render::render_services_index(state.render_context()))
}

pub async fn service_page(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    match find_service(&slug) {
        Some(page) => html(
            StatusCode::OK,
            render::render_service_page(state.render_context(), page),
        ),
        None => {
            tracing::debug!(slug = %slug, "Unknown service slug");
            let path = format!("/services/{}", slug);
            html(
                StatusCode::NOT_FOUND,
                render::render_not_found(state.render_context(), &path),
            )
        }
    }
}

pub async fn privacy_policy(State(state): State<AppState>) -> Response {
    html(StatusCode::OK, render::render_privacy_policy(state.render_context()))
}

/// Deprecated page still reachable when the redirect table lets it through.
///
/// Mounts the fallback, lets its effect run once, and renders the loading
/// indicator together with the navigation it requested.
pub async fn legacy_page(State(state): State<AppState>) -> Response {
    let navigator = Arc::new(RecordingNavigator::new());
    let mut page = LegacyFallback::mount(&*state.legacy_destination, navigator.clone());
    let view = page.render();
    page.settled().await;

    let target = navigator.target();
    if target.is_none() {
        tracing::warn!(destination = %page.destination(), "Legacy page rendered without navigation");
    } else {
        tracing::info!(
            path = %state.legacy_path,
            destination = %page.destination(),
            "Serving legacy fallback page"
        );
    }

    let document = render::render_legacy_page(state.render_context(), view, target.as_deref());
    page.unmount();
    html(StatusCode::OK, document)
}

pub async fn not_found(State(state): State<AppState>, uri: Uri) -> Response {
    html(
        StatusCode::NOT_FOUND,
        render::render_not_found(state.render_context(), uri.path()),
    )
}
