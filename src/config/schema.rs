//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Environment variable that overrides the upstream base URL.
pub const BACKEND_URL_VAR: &str = "BACKEND_URL";

/// Root configuration for the edge router.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RouterConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Upstream target for proxied `/api` traffic.
    pub upstream: UpstreamConfig,

    /// Static-asset fallback settings.
    pub assets: AssetConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl RouterConfig {
    /// Apply environment overrides on top of the loaded config.
    ///
    /// `BACKEND_URL`, when set and non-empty, replaces the configured
    /// upstream base URL.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_backend_url(std::env::var(BACKEND_URL_VAR).ok())
    }

    /// Pure half of the override, split out so tests need not touch the
    /// process environment. Unset or empty means "keep the configured value".
    #[must_use]
    pub fn with_backend_url(mut self, value: Option<String>) -> Self {
        if let Some(url) = value.filter(|v| !v.is_empty()) {
            self.upstream.base_url = url;
        }
        self
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Upstream configuration for the proxy branch.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL that stripped `/api` paths are resolved against.
    pub base_url: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "https://aiassistantontelegrambot.uk".to_string(),
        }
    }
}

/// Static-asset fallback configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Directory served for paths no other branch claims.
    pub root: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            root: "public".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default tracing filter directive when RUST_LOG is unset.
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "edge_router=debug,tower_http=debug".to_string(),
        }
    }
}
