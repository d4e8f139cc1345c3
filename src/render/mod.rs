//! Rendering subsystem.
//!
//! # Data Flow
//! ```text
//! ClassifiedPayload + forwarded path
//!     → selector.rs (first matching shape, typed decode)
//!     → item.rs | stats.rs | eggs.rs | generic.rs
//!     → layout.rs (page shell, escaping)
//!     → complete HTML string
//! ```
//!
//! # Design Decisions
//! - Renderers are pure: same payload and context, same output
//! - Missing fields render as documented defaults instead of failing
//! - Every interpolated value is HTML-escaped

pub mod eggs;
pub mod format;
pub mod generic;
pub mod home;
pub mod item;
pub mod layout;
pub mod selector;
pub mod shapes;
pub mod stats;

pub use selector::{decode, select, RendererTag, Shape};

use crate::classify::ClassifiedPayload;

/// Request metadata every renderer may use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    /// Inbound path, e.g. `/api/items/dogcat`.
    pub request_path: String,
    /// Full inbound URL including query.
    pub request_url: String,
    /// Scheme and authority of this proxy, without trailing slash.
    pub base_url: String,
}

/// Render a data payload fetched for `api_path` (the part after `/api/`).
pub fn render(api_path: &str, payload: &ClassifiedPayload, ctx: &RenderContext) -> String {
    render_shape(decode(api_path, payload), ctx)
}

/// Render a payload already decoded by [`decode`].
pub fn render_shape(shape: Shape<'_>, ctx: &RenderContext) -> String {
    match shape {
        Shape::Item(item) => item::render(&item, ctx),
        Shape::Stats(stats, raw) => stats::render(&stats, raw, ctx),
        Shape::Eggs(eggs) => eggs::render(&eggs, ctx),
        Shape::Generic(payload) => generic::render(payload, ctx),
    }
}

/// Absolute http(s) image URLs are kept; anything else is served through this proxy.
pub(crate) fn asset_url(image: &str, ctx: &RenderContext) -> String {
    let lower = image.to_ascii_lowercase();
    if lower.starts_with("https://") || lower.starts_with("http://") {
        image.to_string()
    } else {
        format!("{}/{}", ctx.base_url, image.trim_start_matches('/'))
    }
}
