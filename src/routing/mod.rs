//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, path)
//!     → decision.rs (classify into a branch)
//!     → router.rs (execute the branch)
//!     → Return: exactly one response
//! ```
//!
//! # Design Decisions
//! - Fixed decision ladder, first match wins, evaluated top to bottom
//! - Immutable after construction (thread-safe without locks)
//! - Classification is a pure function so it tests without I/O
//! - Errors never escape: the proxy branch converts failures to JSON 500

pub mod decision;
pub mod router;

pub use decision::Branch;
pub use router::RequestRouter;
