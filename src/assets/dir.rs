//! Static-asset capability and its directory-backed implementation.
//!
//! # Responsibilities
//! - Define the `AssetResolver` trait the fallback branch depends on
//! - Serve pre-built files from a directory on disk
//!
//! # Design Decisions
//! - Infallible by contract: the resolver always produces a response
//!   (missing files become its own 404), so the router never has an error
//!   path here
//! - Backed by tower-http's ServeDir, which handles index files, MIME
//!   types, and path-traversal rejection

use std::path::Path;

use axum::body::Body;
use axum::http::{Request, Response};
use futures_util::future::BoxFuture;
use tower::ServiceExt;
use tower_http::services::ServeDir;

/// The static-asset capability injected into the router.
pub trait AssetResolver: Send + Sync {
    /// Produce a response for `request`. The router relays it unmodified.
    fn resolve(&self, request: Request<Body>) -> BoxFuture<'_, Response<Body>>;
}

/// Directory-backed asset resolver.
#[derive(Clone)]
pub struct DirAssets {
    inner: ServeDir,
}

impl DirAssets {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            inner: ServeDir::new(root),
        }
    }
}

impl AssetResolver for DirAssets {
    fn resolve(&self, request: Request<Body>) -> BoxFuture<'_, Response<Body>> {
        let service = self.inner.clone();
        Box::pin(async move {
            match service.oneshot(request).await {
                Ok(response) => response.map(Body::new),
                Err(infallible) => match infallible {},
            }
        })
    }
}
