//! Small response builders for the non-proxy branches.

use axum::body::Body;
use axum::http::{header, HeaderValue, Response, StatusCode};

use crate::http::cors;

/// Plain 200 text response. Deliberately carries no CORS header.
pub fn text_response(body: impl Into<String>) -> Response<Body> {
    Response::new(Body::from(body.into()))
}

/// The JSON 500 produced when the upstream fetch fails:
/// `{"error": "<message>"}` with `Content-Type: application/json` and
/// `Access-Control-Allow-Origin: *`.
pub fn proxy_error_response(message: &str) -> Response<Body> {
    let body = serde_json::json!({ "error": message }).to_string();

    let mut response = Response::new(Body::from(body));
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    cors::force_allow_any_origin(&mut response);
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn proxy_error_shape() {
        let response = proxy_error_response("connection refused");
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"], "connection refused");
    }

    #[test]
    fn text_response_has_no_cors_header() {
        let response = text_response("Hello, World!");
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }
}
