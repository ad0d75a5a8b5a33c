//! Lifecycle management subsystem.
//!
//! Startup is linear (config → listener → server); shutdown is coordinated
//! through a broadcast channel so the server and tests share one mechanism.

pub mod shutdown;

pub use shutdown::Shutdown;
