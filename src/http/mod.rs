//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP/TLS connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID)
//!     → redirect.rs (redirect table; may answer 308/307 here)
//!     → handlers.rs (render page or 404)
//!     → response.rs (status, content type, caching)
//!     → Send to client
//! ```

pub mod handlers;
pub mod redirect;
pub mod request;
pub mod response;
pub mod routes;
pub mod server;

pub use request::{UuidRequestId, X_REQUEST_ID};
pub use server::{AppState, HttpServer, ServerError};
