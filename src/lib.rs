//! Rendering proxy library.
//!
//! Forwards `/api/...` requests to a fixed JSON API and renders the answer as
//! HTML, and passes image paths through to a fixed asset host.

pub mod classify;
pub mod config;
pub mod failure;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod render;
pub mod routing;
pub mod security;
pub mod upstream;

pub use config::schema::ProxyConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
