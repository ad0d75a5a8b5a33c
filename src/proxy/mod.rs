//! Upstream proxy subsystem.
//!
//! # Data Flow
//! ```text
//! Matched /api request
//!     → rewrite.rs (strip /api, resolve against base URL, keep query)
//!     → upstream.rs (forward: same method, verbatim headers, streamed body)
//!     → relay upstream status/headers/stream, or map failure to JSON 500
//! ```
//!
//! # Design Decisions
//! - The outbound-fetch capability is a trait so the router core is
//!   testable without a network
//! - Headers are copied as-is, Host and Authorization included
//! - Bodies stream in both directions; nothing is buffered
//! - Redirects are followed by the client; no retries, no router timeout

pub mod rewrite;
pub mod upstream;

pub use rewrite::upstream_target;
pub use upstream::{HttpUpstream, UpstreamClient, UpstreamError};
