//! Security response headers.
//!
//! # Responsibilities
//! - Add `X-Content-Type-Options`, `X-Frame-Options`, `Referrer-Policy`
//!
//! # Design Decisions
//! - Headers are only added when the handler did not set them
//! - Applied to every response, redirects and 404s included

use axum::http::{header, HeaderName, HeaderValue};
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;

/// Header values added to every response.
pub const SECURITY_HEADERS: [(HeaderName, &str); 3] = [
    (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
    (header::X_FRAME_OPTIONS, "DENY"),
    (header::REFERRER_POLICY, "strict-origin-when-cross-origin"),
];

/// Wrap the router with the security header layers.
pub fn with_security_headers(mut router: Router) -> Router {
    for (name, value) in SECURITY_HEADERS {
        router = router.layer(SetResponseHeaderLayer::if_not_present(
            name,
            HeaderValue::from_static(value),
        ));
    }
    router
}
