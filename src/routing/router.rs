//! Branch execution.
//!
//! # Responsibilities
//! - Hold the injected capabilities (upstream client, asset resolver)
//! - Execute the branch the classifier picked
//! - Guarantee exactly one response per request, errors included
//!
//! # Design Decisions
//! - Pure function of (request, capabilities); no cross-request state
//! - Capabilities are trait objects so tests run without network or disk
//! - Upstream failures become the JSON 500; nothing propagates past here

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use url::Url;
use uuid::Uuid;

use crate::assets::AssetResolver;
use crate::http::{cors, response};
use crate::proxy::{upstream_target, UpstreamClient, UpstreamError};
use crate::routing::decision::{classify, Branch};

/// The request router: one inbound request in, exactly one response out.
pub struct RequestRouter {
    upstream_base: Url,
    upstream: Arc<dyn UpstreamClient>,
    assets: Arc<dyn AssetResolver>,
}

impl RequestRouter {
    pub fn new(
        upstream_base: Url,
        upstream: Arc<dyn UpstreamClient>,
        assets: Arc<dyn AssetResolver>,
    ) -> Self {
        Self {
            upstream_base,
            upstream,
            assets,
        }
    }

    /// Handle one request. Never fails: every branch, including a failed
    /// proxy fetch, produces a well-formed response.
    pub async fn handle(&self, request: Request<Body>) -> Response<Body> {
        match classify(request.method(), request.uri().path()) {
            Branch::Preflight => cors::preflight_response(),
            Branch::Proxy => self.proxy(request).await,
            Branch::Message => response::text_response("Hello, World!"),
            Branch::Random => response::text_response(Uuid::new_v4().to_string()),
            Branch::Assets => self.assets.resolve(request).await,
        }
    }

    async fn proxy(&self, request: Request<Body>) -> Response<Body> {
        let target = match upstream_target(&self.upstream_base, request.uri()) {
            Ok(target) => target,
            // Unreachable once the base URL is validated, but the contract
            // is "always a response", so it takes the same error path.
            Err(error) => {
                let error = UpstreamError::from(error);
                tracing::error!(error = %error, "Failed to build upstream target");
                return response::proxy_error_response(&error.to_string());
            }
        };

        tracing::debug!(target = %target, "Forwarding to upstream");

        match self.upstream.forward(request, target).await {
            Ok(mut response) => {
                cors::force_allow_any_origin(&mut response);
                response
            }
            Err(error) => {
                tracing::error!(error = %error, "Upstream request failed");
                response::proxy_error_response(&error.to_string())
            }
        }
    }
}
