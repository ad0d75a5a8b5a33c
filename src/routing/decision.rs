//! Branch classification.
//!
//! # Responsibilities
//! - Map (method, path) onto exactly one branch of the decision ladder
//!
//! # Design Decisions
//! - OPTIONS short-circuits everything, including `/api` paths
//! - `/api` with nothing after it counts as a proxy match (it resolves to
//!   the upstream root); `/apifoo` does not
//! - Literal endpoints are exact-match only; everything else falls back to
//!   the asset resolver

use axum::http::Method;

/// The branch a request is dispatched to. Mutually exclusive by
/// construction: classification returns exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// CORS preflight: fixed 204 response.
    Preflight,
    /// Forward to the upstream backend.
    Proxy,
    /// Literal `Hello, World!` body.
    Message,
    /// Freshly generated UUID body.
    Random,
    /// Delegate to the static-asset resolver.
    Assets,
}

/// Classify a request. First match wins, top to bottom.
pub fn classify(method: &Method, path: &str) -> Branch {
    if method == Method::OPTIONS {
        return Branch::Preflight;
    }

    if path == "/api" || path.starts_with("/api/") {
        return Branch::Proxy;
    }

    match path {
        "/message" => Branch::Message,
        "/random" => Branch::Random,
        _ => Branch::Assets,
    }
}
