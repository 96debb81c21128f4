//! Redirect routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (path, query)
//!     → router.rs (redirect table lookup)
//!     → matcher.rs (exact / wildcard capture)
//!     → Return: Redirect { location, permanent } or no-match
//!
//! Table Compilation (at startup):
//!     RedirectRuleConfig[]
//!     → Validate invariants
//!     → Split exact map / wildcard list (longest prefix first)
//!     → Freeze as immutable Redirector
//! ```
//!
//! # Design Decisions
//! - Rules compiled at startup, immutable at runtime
//! - No regex in hot path (prefix matching only)
//! - Deterministic: same path always yields the same redirect
//! - No-match is normal fall-through to page routing, never an error

pub mod matcher;
pub mod router;

pub use router::{Redirect, Redirector};
