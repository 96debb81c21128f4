//! Static site content.
//!
//! # Data Flow
//! ```text
//! catalog.rs / privacy.rs (literal page data)
//!     → render.rs (layout + content blocks → HTML document)
//!     → http handlers
//! ```

pub mod catalog;
pub mod privacy;
pub mod render;

pub use catalog::{find_service, ServicePage, SERVICE_PAGES};
pub use render::RenderContext;
