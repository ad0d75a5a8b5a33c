//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with a catch-all dispatch handler
//! - Wire up middleware (tracing)
//! - Build the production capabilities (upstream client, directory assets)
//! - Run until the shutdown signal fires

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{Request, Response},
    routing::any,
    Router,
};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;
use url::Url;

use crate::assets::DirAssets;
use crate::config::RouterConfig;
use crate::proxy::{HttpUpstream, UpstreamError};
use crate::routing::RequestRouter;

/// Failure while assembling the server from its configuration.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid upstream base URL: {0}")]
    UpstreamUrl(#[from] url::ParseError),

    #[error("failed to build upstream client: {0}")]
    Client(#[from] UpstreamError),
}

/// Application state injected into the dispatch handler.
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<RequestRouter>,
}

/// HTTP server for the edge router.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration, wiring the
    /// production capabilities into the request router.
    pub fn new(config: RouterConfig) -> Result<Self, ServerError> {
        let upstream_base = Url::parse(&config.upstream.base_url)?;
        let upstream = Arc::new(HttpUpstream::new()?);
        let assets = Arc::new(DirAssets::new(&config.assets.root));

        let request_router = Arc::new(RequestRouter::new(upstream_base, upstream, assets));

        Ok(Self {
            router: Self::build_router(AppState {
                router: request_router,
            }),
        })
    }

    /// Build the Axum router. The decision ladder owns all path handling,
    /// so every path and method lands on the same dispatch handler.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(dispatch))
            .route("/", any(dispatch))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener until
    /// the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Catch-all handler: hand the request to the decision ladder.
async fn dispatch(State(state): State<AppState>, request: Request<Body>) -> Response<Body> {
    tracing::debug!(
        method = %request.method(),
        path = %request.uri().path(),
        "Dispatching request"
    );

    state.router.handle(request).await
}
