//! Content classification.
//!
//! # Responsibilities
//! - Turn an `UpstreamResult` into JSON or text (data route) or bytes (image route)
//! - Parse strictly when upstream declares JSON
//! - Parse opportunistically on the data route when it does not
//! - Gate the image route on an `image/*` content type
//!
//! # Design Decisions
//! - Declared-JSON bodies that fail to parse are errors, not text
//! - Undeclared bodies fall back to text; many endpoints mislabel JSON
//! - The image route never parses JSON

use axum::body::Bytes;
use serde_json::Value;

use crate::failure::{body_sample, FailureCause};
use crate::upstream::UpstreamResult;

/// Content type prefix required on the image route.
pub const IMAGE_CLASS: &str = "image/";

/// A data-route body after interpretation.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassifiedPayload {
    Structured(Value),
    RawText(String),
}

/// An image-route body: opaque bytes and the declared content type.
///
/// Kept apart from [`ClassifiedPayload`] so image bytes can never reach a renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryPayload {
    pub bytes: Bytes,
    pub content_type: String,
}

/// True when a content type names JSON (`application/json`, `application/problem+json`, ...).
pub fn declares_json(content_type: &str) -> bool {
    content_type.to_ascii_lowercase().contains("json")
}

/// Classify a body fetched for the data-proxy route.
pub fn classify_data(result: UpstreamResult) -> Result<ClassifiedPayload, FailureCause> {
    if declares_json(&result.content_type) {
        return serde_json::from_slice::<Value>(&result.body)
            .map(ClassifiedPayload::Structured)
            .map_err(|e| FailureCause::Parse {
                message: e.to_string(),
                sample: body_sample(&result.body),
            });
    }

    match serde_json::from_slice::<Value>(&result.body) {
        Ok(value) => Ok(ClassifiedPayload::Structured(value)),
        Err(_) => Ok(ClassifiedPayload::RawText(
            String::from_utf8_lossy(&result.body).into_owned(),
        )),
    }
}

/// Classify a body fetched for the image route.
///
/// `is_favicon` exempts the conventional favicon from the content type check.
pub fn classify_image(
    result: UpstreamResult,
    is_favicon: bool,
) -> Result<BinaryPayload, FailureCause> {
    let is_image = result
        .content_type
        .trim_start()
        .to_ascii_lowercase()
        .starts_with(IMAGE_CLASS);

    if is_image || is_favicon {
        Ok(BinaryPayload {
            bytes: result.body,
            content_type: result.content_type,
        })
    } else {
        Err(FailureCause::UnsupportedContentType {
            expected: format!("{IMAGE_CLASS}*"),
            actual: if result.content_type.is_empty() {
                "(none)".to_string()
            } else {
                result.content_type
            },
        })
    }
}
