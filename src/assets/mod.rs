//! Static-asset fallback subsystem.
//!
//! The router delegates every path no other branch claims to an injected
//! `AssetResolver` and relays its response untouched.

pub mod dir;

pub use dir::{AssetResolver, DirAssets};
