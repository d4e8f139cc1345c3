//! Upstream request and result types.

use axum::body::Bytes;

/// Which fixed upstream a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    /// Structured JSON API, reached under `/api/`.
    Data,
    /// Image host, reached at its root.
    Asset,
}

impl Origin {
    /// Path prefix placed between the origin base and the caller's path.
    pub fn prefix(&self) -> &'static str {
        match self {
            Origin::Data => "/api/",
            Origin::Asset => "/",
        }
    }

    /// `Accept` header for this origin.
    pub fn accept(&self) -> &'static str {
        match self {
            Origin::Data => "application/json, text/plain;q=0.9, */*;q=0.8",
            Origin::Asset => "image/avif,image/webp,image/apng,image/svg+xml,image/*,*/*;q=0.8",
        }
    }

    /// Label for logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Origin::Data => "data",
            Origin::Asset => "asset",
        }
    }
}

/// One outbound GET, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamRequest {
    origin: Origin,
    path: String,
    query: Vec<(String, String)>,
}

impl UpstreamRequest {
    pub fn new(origin: Origin, path: impl Into<String>, query: Vec<(String, String)>) -> Self {
        Self {
            origin,
            path: path.into(),
            query,
        }
    }

    /// Build a request from a raw inbound query string, keeping pair order.
    pub fn with_raw_query(origin: Origin, path: impl Into<String>, raw_query: Option<&str>) -> Self {
        let query = raw_query
            .map(|raw| {
                url::form_urlencoded::parse(raw.as_bytes())
                    .into_owned()
                    .collect()
            })
            .unwrap_or_default();
        Self::new(origin, path, query)
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// Absolute URL against `base`: `{base}{prefix}{path}[?{query}]`.
    pub fn url(&self, base: &str) -> String {
        let mut url = format!(
            "{}{}{}",
            base.trim_end_matches('/'),
            self.origin.prefix(),
            self.path.trim_start_matches('/')
        );
        if !self.query.is_empty() {
            let encoded = url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(self.query.iter())
                .finish();
            url.push('?');
            url.push_str(&encoded);
        }
        url
    }
}

/// A 2xx upstream response, fully read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResult {
    pub status: u16,
    /// Declared `Content-Type`, empty when absent.
    pub content_type: String,
    pub body: Bytes,
}
