//! Failure taxonomy and error documents.
//!
//! # Data Flow
//! ```text
//! upstream client / classifier / image route / dispatcher
//!     → FailureCause (cause.rs)
//!     → map (mapper.rs)
//!     → RenderedDocument with status and escaped HTML
//! ```
//!
//! # Design Decisions
//! - The taxonomy is closed and the mapper is total over it
//! - Failures are mapped once, never retried
//! - Upstream bodies and request paths are escaped before embedding

pub mod cause;
pub mod mapper;

pub use cause::{body_sample, truncate_for_display, FailureCause, DISPLAY_SAMPLE_CHARS};
pub use mapper::{map, status_for};
