//! Redirect middleware. Runs ahead of every page handler.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};

use crate::http::request::request_id;
use crate::http::response::redirect_response;
use crate::http::server::AppState;
use crate::observability::metrics;

pub async fn redirect_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if !state.redirects_enabled {
        return next.run(request).await;
    }

    let Some(redirect) = state.redirector.resolve_uri(request.uri()) else {
        return next.run(request).await;
    };

    tracing::info!(
        request_id = %request_id(&request),
        path = %request.uri().path(),
        location = %redirect.location,
        rule = %redirect.rule,
        permanent = redirect.permanent,
        "Redirecting request"
    );
    metrics::record_redirect(&redirect.rule, redirect.permanent);

    redirect_response(&redirect, state.permanent_max_age_secs)
}
