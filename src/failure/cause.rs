//! Failure causes observed while serving one inbound request.

use thiserror::Error;

/// Maximum number of characters of an upstream body kept for display.
pub const DISPLAY_SAMPLE_CHARS: usize = 2_000;

/// Every way a request can fail before a successful render.
///
/// The set is closed: the upstream client, the classifier and the image
/// pass-through only ever fail with one of these, and [`crate::failure::map`]
/// turns each of them into a complete error document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureCause {
    /// Upstream answered with a non-2xx status.
    #[error("upstream returned {code} {reason}")]
    UpstreamStatus {
        code: u16,
        reason: String,
        body: String,
    },

    /// DNS, connect, reset, redirect-limit or timeout failure talking to upstream.
    #[error("upstream connection failed: {0}")]
    UpstreamConnection(String),

    /// Upstream declared JSON but the body did not parse.
    #[error("failed to parse upstream body: {message}")]
    Parse { message: String, sample: String },

    /// Asset route received something that is not an image.
    #[error("unsupported content type: expected {expected}, got {actual}")]
    UnsupportedContentType { expected: String, actual: String },

    /// Inbound path matches no route family.
    #[error("no route for {0}")]
    RouteNotFound(String),
}

impl FailureCause {
    /// Short label used for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            FailureCause::UpstreamStatus { .. } => "upstream_status",
            FailureCause::UpstreamConnection(_) => "upstream_connection",
            FailureCause::Parse { .. } => "parse",
            FailureCause::UnsupportedContentType { .. } => "unsupported_content_type",
            FailureCause::RouteNotFound(_) => "route_not_found",
        }
    }
}

/// Decode an upstream body for display, bounded to [`DISPLAY_SAMPLE_CHARS`].
pub fn body_sample(body: &[u8]) -> String {
    truncate_for_display(&String::from_utf8_lossy(body), DISPLAY_SAMPLE_CHARS)
}

/// Cut `text` to at most `max_chars` characters, marking the cut.
pub fn truncate_for_display(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((idx, _)) => {
            let dropped = text[idx..].chars().count();
            format!("{}\n… ({dropped} more characters truncated)", &text[..idx])
        }
    }
}
