//! Brochure site server for an IT-services company.
//!
//! Serves static service detail pages, a privacy policy and a redirect
//! table that moves retired paths onto their canonical replacements.

pub mod config;
pub mod content;
pub mod fallback;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod security;

pub use config::schema::SiteConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
