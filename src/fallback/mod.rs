//! Legacy page fallback.
//!
//! # Lifecycle
//! ```text
//! mount()  → Mounted     (effect task scheduled)
//! effect   → Redirecting (one Navigator::replace call)
//! unmount  → Unmounted   (pending effect becomes a no-op)
//! ```
//!
//! # Design Decisions
//! - The effect fires at most once per mount, guarded by an atomic flag
//! - Rendering is pure; re-renders never reach the navigator
//! - No retry and no timeout: a stalled navigation keeps the loading
//!   indicator on screen

pub mod lifecycle;
pub mod navigator;

pub use lifecycle::{FallbackState, FallbackView, LegacyFallback};
pub use navigator::{Navigator, RecordingNavigator};
