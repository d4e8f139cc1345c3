//! Failure → error document mapping.
//!
//! | Cause | Status |
//! |---|---|
//! | `UpstreamStatus` | upstream's own code |
//! | `UpstreamConnection` | 503 |
//! | `Parse` | 502 |
//! | `UnsupportedContentType` | 415 |
//! | `RouteNotFound` | 404 |

use axum::http::StatusCode;

use crate::failure::cause::FailureCause;
use crate::http::response::RenderedDocument;
use crate::render::layout::error_page;

const ROUTE_GUIDANCE: &str = "<div class=\"details\">\n<p>Valid routes:</p>\n<ul>\n\
<li><code>/api/...</code> fetches from the data API, e.g. <code>/api/stats</code></li>\n\
<li>image paths such as <code>/pets/name.png</code> are served from the asset host</li>\n\
</ul>\n</div>\n";

/// Map a failure to its status code and complete error page.
///
/// Bodies and samples are shown as captured; they were already bounded by
/// [`crate::failure::body_sample`] when the failure was recorded.
pub fn map(cause: &FailureCause) -> RenderedDocument {
    let status = status_for(cause);

    let html = match cause {
        FailureCause::UpstreamStatus { code, reason, body } => {
            let message = if reason.is_empty() {
                format!("The upstream API answered with status {code}.")
            } else {
                format!("The upstream API answered with status {code}: {reason}.")
            };
            error_page(
                &format!("Upstream error {code}"),
                &message,
                Some(body),
                "",
            )
        }
        FailureCause::UpstreamConnection(error) => error_page(
            "Upstream unavailable",
            "Could not reach the upstream API. Try again shortly.",
            Some(error),
            "",
        ),
        FailureCause::Parse { message, sample } => error_page(
            "Invalid upstream response",
            &format!("The upstream response could not be parsed as JSON: {message}"),
            Some(sample),
            "",
        ),
        FailureCause::UnsupportedContentType { expected, actual } => error_page(
            "Unsupported content type",
            &format!("Expected content type {expected}, but upstream sent {actual}."),
            None,
            "",
        ),
        FailureCause::RouteNotFound(path) => error_page(
            "Not found",
            &format!("Nothing is served at {path}."),
            None,
            ROUTE_GUIDANCE,
        ),
    };

    RenderedDocument::html(status, html)
}

/// Status code for a failure. Invalid upstream codes become 502.
pub fn status_for(cause: &FailureCause) -> StatusCode {
    match cause {
        FailureCause::UpstreamStatus { code, .. } => {
            StatusCode::from_u16(*code).unwrap_or(StatusCode::BAD_GATEWAY)
        }
        FailureCause::UpstreamConnection(_) => StatusCode::SERVICE_UNAVAILABLE,
        FailureCause::Parse { .. } => StatusCode::BAD_GATEWAY,
        FailureCause::UnsupportedContentType { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        FailureCause::RouteNotFound(_) => StatusCode::NOT_FOUND,
    }
}
