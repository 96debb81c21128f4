//! Response construction.
//!
//! # Responsibilities
//! - Build redirect responses with the right status and caching
//! - Wrap rendered documents with status and content type
//!
//! # Design Decisions
//! - Permanent redirects are 308 and cacheable for a configured max-age
//! - Temporary redirects are 307 and never stored
//! - 308/307 keep the request method, so redirects apply to any method

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
};

use crate::routing::Redirect;

/// Build the HTTP response for a resolved redirect.
pub fn redirect_response(redirect: &Redirect, permanent_max_age_secs: u64) -> Response {
    let (status, cache_control) = if redirect.permanent {
        (
            StatusCode::PERMANENT_REDIRECT,
            format!("public, max-age={}", permanent_max_age_secs),
        )
    } else {
        (StatusCode::TEMPORARY_REDIRECT, "no-store".to_string())
    };

    let location = match HeaderValue::from_str(&redirect.location) {
        Ok(v) => v,
        Err(e) => {
            tracing::error!(location = %redirect.location, error = %e, "Unencodable redirect location");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    Response::builder()
        .status(status)
        .header(header::LOCATION, location)
        .header(header::CACHE_CONTROL, cache_control)
        .body(Body::empty())
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}

/// A rendered HTML document with a status code.
pub fn html(status: StatusCode, document: String) -> Response {
    (status, Html(document)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn redirect(permanent: bool) -> Redirect {
        Redirect {
            location: "/services".to_string(),
            permanent,
            rule: "/services/software-solutions".to_string(),
        }
    }

    #[test]
    fn test_permanent_redirect() {
        let res = redirect_response(&redirect(true), 3600);
        assert_eq!(res.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(res.headers()[header::LOCATION], "/services");
        assert_eq!(res.headers()[header::CACHE_CONTROL], "public, max-age=3600");
    }

    #[test]
    fn test_temporary_redirect() {
        let res = redirect_response(&redirect(false), 3600);
        assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(res.headers()[header::CACHE_CONTROL], "no-store");
    }
}
