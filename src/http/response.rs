//! Terminal response artifacts.
//!
//! # Responsibilities
//! - Hold the fully materialized body chosen for one inbound request
//! - Carry the status code and declared content type with it
//! - Convert into an axum response in one step
//!
//! # Design Decisions
//! - Bodies are complete before conversion; nothing is written early
//! - Image bytes are passed through untouched with the upstream content type

use axum::body::{Body, Bytes};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Body of a rendered document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentBody {
    Html(String),
    Bytes(Bytes),
}

/// The single terminal artifact produced per inbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub status: StatusCode,
    pub body: DocumentBody,
    pub content_type: String,
}

impl RenderedDocument {
    /// An HTML document with the given status.
    pub fn html(status: StatusCode, html: String) -> Self {
        Self {
            status,
            body: DocumentBody::Html(html),
            content_type: HTML_CONTENT_TYPE.to_string(),
        }
    }

    /// A binary pass-through. An empty content type becomes `application/octet-stream`.
    pub fn bytes(bytes: Bytes, content_type: &str) -> Self {
        let content_type = if content_type.trim().is_empty() {
            OCTET_STREAM.to_string()
        } else {
            content_type.to_string()
        };
        Self {
            status: StatusCode::OK,
            body: DocumentBody::Bytes(bytes),
            content_type,
        }
    }

    /// The HTML text, if this is an HTML document.
    pub fn as_html(&self) -> Option<&str> {
        match &self.body {
            DocumentBody::Html(html) => Some(html),
            DocumentBody::Bytes(_) => None,
        }
    }
}

impl IntoResponse for RenderedDocument {
    fn into_response(self) -> Response {
        let content_type = HeaderValue::from_str(&self.content_type)
            .unwrap_or_else(|_| HeaderValue::from_static(OCTET_STREAM));
        let body = match self.body {
            DocumentBody::Html(html) => Body::from(html),
            DocumentBody::Bytes(bytes) => Body::from(bytes),
        };

        let mut response = Response::new(body);
        *response.status_mut() = self.status;
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, content_type);
        response
    }
}
