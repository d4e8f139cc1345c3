//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID, render context)
//!     → dispatch.rs (route → fetch → classify → render, or error map)
//!     → response.rs (RenderedDocument → HTTP response)
//!     → Send to client
//! ```

pub mod dispatch;
pub mod request;
pub mod response;
pub mod server;

pub use dispatch::Dispatcher;
pub use request::{RequestIdGenerator, X_REQUEST_ID};
pub use response::{DocumentBody, RenderedDocument};
pub use server::HttpServer;
