//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → env override (BACKEND_URL)
//!     → RouterConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; no hot reload
//! - All fields have defaults so an empty config file works
//! - Validation separates syntactic (serde) from semantic checks
//! - BACKEND_URL wins over the file, but only when set and non-empty

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::RouterConfig;
pub use schema::{AssetConfig, ListenerConfig, ObservabilityConfig, UpstreamConfig};
