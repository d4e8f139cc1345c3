//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound path
//!     → router.rs (Home | DataProxy | Asset)
//!     → matcher.rs (Asset only: image extension or allow-list?)
//!     → Return: route family, or not-found before any network I/O
//!
//! Matcher Compilation (at startup):
//!     AssetConfig
//!     → lowercase extensions, normalize allow-list
//!     → Freeze as immutable AssetMatcher
//! ```
//!
//! # Design Decisions
//! - Matchers compiled at startup, immutable at runtime
//! - No regex in hot path (prefix and suffix matching only)
//! - Deterministic: same path always yields the same route
//! - Cheap local checks run before any upstream call

pub mod matcher;
pub mod router;

pub use matcher::AssetMatcher;
pub use router::{route, Route};
