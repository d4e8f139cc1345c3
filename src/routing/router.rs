//! Route lookup.
//!
//! # Responsibilities
//! - Classify an inbound path into one of the three route families
//! - Hand the data route its forwarded remainder
//!
//! # Design Decisions
//! - Pure string matching, no allocation
//! - Exactly one route per path; the catch-all is last

/// Reserved first segment of the data-proxy route.
pub const API_SEGMENT: &str = "api";

/// Route family of an inbound path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    /// Exactly `/`.
    Home,
    /// `/api/{path}`; carries `{path}` verbatim.
    DataProxy { api_path: &'a str },
    /// Any other path; image or not-found is decided by the asset matcher.
    Asset { path: &'a str },
}

/// Classify an inbound request path.
pub fn route(path: &str) -> Route<'_> {
    if path == "/" || path.is_empty() {
        return Route::Home;
    }

    let trimmed = path.trim_start_matches('/');
    let (first, rest) = match trimmed.split_once('/') {
        Some((first, rest)) => (first, rest),
        None => (trimmed, ""),
    };

    if first == API_SEGMENT {
        Route::DataProxy { api_path: rest }
    } else {
        Route::Asset { path: trimmed }
    }
}
