//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Outgoing response:
//!     → headers.rs (add hardening headers unless the handler set them)
//! ```
//!
//! Request-side limits (body size, concurrency, timeout) are tower layers
//! configured in `http::server`.

pub mod headers;
