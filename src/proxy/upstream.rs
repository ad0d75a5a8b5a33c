//! Outbound-fetch capability and its production implementation.
//!
//! # Responsibilities
//! - Define the `UpstreamClient` trait the router depends on
//! - Forward a request to a concrete target URL with full fidelity
//! - Surface transport failures as a typed error, never a panic
//!
//! # Design Decisions
//! - Object-safe trait (BoxFuture) so the router holds `Arc<dyn ...>`
//! - reqwest carries the call: it streams bodies and follows redirects,
//!   both of which the proxy branch needs
//! - No client timeout is configured; the transport's defaults apply

use axum::body::Body;
use axum::http::{Request, Response};
use futures_util::future::BoxFuture;
use thiserror::Error;
use url::Url;

/// Failure while performing the outbound fetch.
///
/// Exactly one category: the upstream was unreachable or misbehaved at the
/// transport level. The display text becomes the JSON error body.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid upstream target: {0}")]
    Target(#[from] url::ParseError),
}

/// The outbound-fetch capability injected into the router.
pub trait UpstreamClient: Send + Sync {
    /// Forward `request` to `target`, relaying status, headers, and body.
    fn forward(
        &self,
        request: Request<Body>,
        target: Url,
    ) -> BoxFuture<'_, Result<Response<Body>, UpstreamError>>;
}

/// reqwest-backed upstream client.
#[derive(Clone)]
pub struct HttpUpstream {
    client: reqwest::Client,
}

impl HttpUpstream {
    /// Build the client. Redirects are followed transparently (up to the
    /// default hop limit); no total-request timeout is set.
    pub fn new() -> Result<Self, UpstreamError> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self { client })
    }
}

impl UpstreamClient for HttpUpstream {
    fn forward(
        &self,
        request: Request<Body>,
        target: Url,
    ) -> BoxFuture<'_, Result<Response<Body>, UpstreamError>> {
        Box::pin(async move {
            let (parts, body) = request.into_parts();

            // Headers copied verbatim, Host and Authorization included.
            let outbound = self
                .client
                .request(parts.method, target)
                .headers(parts.headers)
                .body(reqwest::Body::wrap_stream(body.into_data_stream()))
                .send()
                .await?;

            let status = outbound.status();
            let headers = outbound.headers().clone();

            let mut response = Response::new(Body::from_stream(outbound.bytes_stream()));
            *response.status_mut() = status;
            *response.headers_mut() = headers;
            Ok(response)
        })
    }
}
