//! Upstream access subsystem.
//!
//! # Data Flow
//! ```text
//! UpstreamRequest (origin, path, query)
//!     → client.rs (URL build, fixed headers, one GET)
//!     → UpstreamResult (status, content type, body)
//!       or FailureCause (status / connection)
//! ```

pub mod client;
pub mod types;

use std::future::Future;

pub use client::UpstreamClient;
pub use types::{Origin, UpstreamRequest, UpstreamResult};

use crate::failure::FailureCause;

/// Performs exactly one upstream call per invocation.
pub trait Fetch: Send + Sync {
    fn fetch(
        &self,
        request: &UpstreamRequest,
    ) -> impl Future<Output = Result<UpstreamResult, FailureCause>> + Send;
}
