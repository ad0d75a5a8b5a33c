//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, catch-all dispatch)
//!     → routing layer picks a branch
//!     → cors.rs / response.rs build fixed responses where needed
//!     → Send to client
//! ```

pub mod cors;
pub mod response;
pub mod server;

pub use server::{HttpServer, ServerError};
