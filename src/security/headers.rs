//! Security response headers.
//!
//! # Responsibilities
//! - Stop browsers from sniffing proxied bytes into another type
//! - Forbid framing of rendered pages
//! - Keep inbound URLs out of outgoing `Referer` headers
//!
//! # Design Decisions
//! - Headers are only added when the response does not already carry them

use axum::http::{header, HeaderValue};
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;

/// Layer the hardening headers onto `router`.
pub fn apply(router: Router) -> Router {
    router
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("no-referrer"),
        ))
}
