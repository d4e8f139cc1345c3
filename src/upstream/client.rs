//! Outbound HTTP client for the two upstream origins.
//!
//! # Responsibilities
//! - Build the absolute upstream URL for a request
//! - Send one GET with the fixed header profile, following redirects
//! - Read the whole body and normalize the outcome
//!
//! # Design Decisions
//! - One call per request: no retries, no caching
//! - Explicit total and connect timeouts from configuration
//! - Non-2xx answers become `UpstreamStatus`, transport errors `UpstreamConnection`

use std::time::{Duration, Instant};

use hyper::ext::ReasonPhrase;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, ORIGIN, REFERER};
use reqwest::redirect::Policy;

use crate::config::UpstreamConfig;
use crate::failure::{body_sample, FailureCause};
use crate::observability::metrics;
use crate::upstream::types::{Origin, UpstreamRequest, UpstreamResult};
use crate::upstream::Fetch;

/// reqwest-backed client bound to the configured origins.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    data_origin: String,
    asset_origin: String,
    timeout: Duration,
}

impl UpstreamClient {
    /// Build the client. Fails only if the TLS backend cannot initialize
    /// or the configured header values are invalid.
    pub fn new(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        let data_origin = config.data_origin.trim_end_matches('/').to_string();

        let mut headers = HeaderMap::new();
        if let Ok(origin) = HeaderValue::from_str(&data_origin) {
            headers.insert(ORIGIN, origin);
        }
        if let Ok(referer) = HeaderValue::from_str(&format!("{data_origin}/")) {
            headers.insert(REFERER, referer);
        }

        let timeout = Duration::from_secs(config.timeout_secs);
        let mut builder = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .redirect(Policy::limited(config.max_redirects))
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs));
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            data_origin,
            asset_origin: config.asset_origin.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    fn base(&self, origin: Origin) -> &str {
        match origin {
            Origin::Data => &self.data_origin,
            Origin::Asset => &self.asset_origin,
        }
    }

    /// Absolute URL a request is sent to.
    pub fn url_for(&self, request: &UpstreamRequest) -> String {
        request.url(self.base(request.origin()))
    }

    async fn send(&self, request: &UpstreamRequest) -> Result<UpstreamResult, FailureCause> {
        let url = self.url_for(request);
        tracing::debug!(origin = request.origin().as_str(), url = %url, "Fetching upstream");

        let response = self
            .http
            .get(&url)
            .header(ACCEPT, request.origin().accept())
            .send()
            .await
            .map_err(|e| self.connection_failure(&url, e))?;

        let status = response.status();
        let reason = reason_phrase(&response);
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        let body = response
            .bytes()
            .await
            .map_err(|e| self.connection_failure(&url, e))?;

        if !status.is_success() {
            tracing::warn!(url = %url, status = %status, "Upstream returned error status");
            return Err(FailureCause::UpstreamStatus {
                code: status.as_u16(),
                reason,
                body: body_sample(&body),
            });
        }

        Ok(UpstreamResult {
            status: status.as_u16(),
            content_type,
            body,
        })
    }

    fn connection_failure(&self, url: &str, error: reqwest::Error) -> FailureCause {
        let message = if error.is_timeout() {
            format!("request to {url} timed out after {}s", self.timeout.as_secs())
        } else if error.is_redirect() {
            format!("too many redirects fetching {url}")
        } else {
            error_chain(&error)
        };
        tracing::warn!(url = %url, error = %message, "Upstream request failed");
        FailureCause::UpstreamConnection(message)
    }
}

impl Fetch for UpstreamClient {
    async fn fetch(&self, request: &UpstreamRequest) -> Result<UpstreamResult, FailureCause> {
        let start = Instant::now();
        let result = self.send(request).await;
        let outcome = match &result {
            Ok(_) => "ok",
            Err(cause) => cause.kind(),
        };
        metrics::record_upstream(request.origin().as_str(), outcome, start);
        result
    }
}

/// Reason phrase as sent by upstream, else the canonical one for the code.
fn reason_phrase(response: &reqwest::Response) -> String {
    response
        .extensions()
        .get::<ReasonPhrase>()
        .and_then(|phrase| std::str::from_utf8(phrase.as_bytes()).ok())
        .or_else(|| response.status().canonical_reason())
        .unwrap_or_default()
        .to_string()
}

/// `error: source: source ...`, the way reqwest errors read best.
fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
