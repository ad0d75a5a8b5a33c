//! Outbound URL construction for proxied requests.
//!
//! # Responsibilities
//! - Strip exactly the leading `/api` segment from the request path
//! - Preserve the query string untouched
//! - Resolve the result against the upstream base URL
//!
//! # Design Decisions
//! - Standard relative-reference resolution (the `url` crate), so `/api`
//!   with nothing after it lands on the base URL's root
//! - No normalization beyond what URL resolution itself performs

use axum::http::Uri;
use url::Url;

/// Build the upstream target for an already-matched `/api` request.
///
/// The stripped path is root-relative, so resolution replaces any path the
/// base URL carries, matching how an empty or absolute relative reference
/// resolves.
pub fn upstream_target(base: &Url, uri: &Uri) -> Result<Url, url::ParseError> {
    let path = uri.path();
    let stripped = path.strip_prefix("/api").unwrap_or(path);

    let relative = match uri.query() {
        Some(query) => format!("{stripped}?{query}"),
        None => stripped.to_string(),
    };

    base.join(&relative)
}
