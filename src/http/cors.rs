//! CORS header handling.
//!
//! # Responsibilities
//! - Build the fixed preflight response
//! - Force `Access-Control-Allow-Origin: *` onto proxy responses
//!
//! # Design Decisions
//! - Preflight is a fixed literal header set; no per-origin echo
//! - The origin header is inserted-or-overwritten, so an upstream value
//!   never leaks through
//! - Literal endpoints and asset responses intentionally do NOT get the
//!   header; only preflight and the proxy branch carry it

use axum::body::Body;
use axum::http::{header, HeaderValue, Response, StatusCode};

/// The fixed CORS preflight response: 204, no body, four literal headers.
pub fn preflight_response() -> Response<Body> {
    let mut response = Response::new(Body::empty());
    *response.status_mut() = StatusCode::NO_CONTENT;

    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type, Authorization"),
    );
    headers.insert(
        header::ACCESS_CONTROL_MAX_AGE,
        HeaderValue::from_static("86400"),
    );

    response
}

/// Insert-or-overwrite `Access-Control-Allow-Origin: *`.
pub fn force_allow_any_origin(response: &mut Response<Body>) {
    response.headers_mut().insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preflight_carries_exact_literal_headers() {
        let response = preflight_response();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let headers = response.headers();
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(
            headers[header::ACCESS_CONTROL_ALLOW_METHODS],
            "GET, POST, OPTIONS"
        );
        assert_eq!(
            headers[header::ACCESS_CONTROL_ALLOW_HEADERS],
            "Content-Type, Authorization"
        );
        assert_eq!(headers[header::ACCESS_CONTROL_MAX_AGE], "86400");
    }

    #[test]
    fn force_overwrites_an_existing_origin() {
        let mut response = Response::new(Body::empty());
        response.headers_mut().insert(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("https://elsewhere.example"),
        );

        force_allow_any_origin(&mut response);

        let values: Vec<_> = response
            .headers()
            .get_all(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .iter()
            .collect();
        assert_eq!(values, vec!["*"]);
    }
}
