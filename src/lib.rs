//! Edge HTTP request router.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌────────────────────────────────────────────┐
//!                    │                EDGE ROUTER                 │
//!                    │                                            │
//!   Client Request   │  ┌─────────┐      ┌──────────────┐        │
//!   ─────────────────┼─▶│  http   │─────▶│   routing    │        │
//!                    │  │ server  │      │   ladder     │        │
//!                    │  └─────────┘      └──────┬───────┘        │
//!                    │                          │                 │
//!                    │        ┌─────────────────┼──────────┐     │
//!                    │        ▼                 ▼          ▼     │
//!                    │  ┌───────────┐    ┌───────────┐ ┌────────┐│
//!                    │  │ preflight │    │   proxy   │ │ assets │┼─── disk
//!                    │  │ /literals │    │ (upstream)│ │        ││
//!                    │  └───────────┘    └─────┬─────┘ └────────┘│
//!                    │                         │                  │
//!                    └─────────────────────────┼──────────────────┘
//!                                              ▼
//!                                      Upstream backend
//! ```
//!
//! Every request takes exactly one of four branches, evaluated in order:
//! CORS preflight, API proxy, literal endpoint, static-asset fallback.
//! The router core is a pure function of (request, capabilities) and keeps
//! no cross-request state.

// Core subsystems
pub mod assets;
pub mod config;
pub mod http;
pub mod proxy;
pub mod routing;

// Cross-cutting concerns
pub mod lifecycle;

pub use assets::{AssetResolver, DirAssets};
pub use config::RouterConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use proxy::{HttpUpstream, UpstreamClient};
pub use routing::RequestRouter;
