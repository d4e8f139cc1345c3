//! Request dispatch.
//!
//! # Responsibilities
//! - Pick the route family for an inbound path
//! - Run fetch → classify → render for the data route
//! - Run allow-check → fetch → content type gate for the image route
//! - Map any failure to exactly one error document
//!
//! # Design Decisions
//! - One hop from start to response; no retries
//! - Image paths are checked locally before any network I/O
//! - Every outcome, success or failure, is a complete `RenderedDocument`

use std::time::Instant;

use axum::http::StatusCode;

use crate::classify;
use crate::failure::{self, FailureCause};
use crate::http::response::RenderedDocument;
use crate::observability::metrics;
use crate::render::{self, home, RenderContext};
use crate::routing::{route, AssetMatcher, Route};
use crate::upstream::{Fetch, Origin, UpstreamClient, UpstreamRequest};

/// Routes inbound requests through the upstream, classification and render pipeline.
#[derive(Debug)]
pub struct Dispatcher<U = UpstreamClient> {
    upstream: U,
    assets: AssetMatcher,
}

impl<U: Fetch> Dispatcher<U> {
    pub fn new(upstream: U, assets: AssetMatcher) -> Self {
        Self { upstream, assets }
    }

    /// Serve one inbound GET. `path` is the raw URI path, `query` the raw query string.
    pub async fn dispatch(
        &self,
        path: &str,
        query: Option<&str>,
        ctx: &RenderContext,
    ) -> RenderedDocument {
        let start = Instant::now();

        let (label, outcome) = match route(path) {
            Route::Home => (
                "home",
                Ok(RenderedDocument::html(StatusCode::OK, home::render(ctx))),
            ),
            Route::DataProxy { api_path } => ("api", self.serve_data(api_path, query, ctx).await),
            Route::Asset { path: asset_path } => ("asset", self.serve_asset(path, asset_path).await),
        };

        let document = match outcome {
            Ok(document) => document,
            Err(cause) => {
                tracing::warn!(
                    path = %path,
                    route = label,
                    kind = cause.kind(),
                    error = %cause,
                    "Request failed"
                );
                failure::map(&cause)
            }
        };

        tracing::debug!(
            path = %path,
            route = label,
            status = document.status.as_u16(),
            "Request served"
        );
        metrics::record_request(label, document.status.as_u16(), start);
        document
    }

    async fn serve_data(
        &self,
        api_path: &str,
        query: Option<&str>,
        ctx: &RenderContext,
    ) -> Result<RenderedDocument, FailureCause> {
        let request = UpstreamRequest::with_raw_query(Origin::Data, api_path, query);
        let result = self.upstream.fetch(&request).await?;
        let payload = classify::classify_data(result)?;

        let shape = render::decode(api_path, &payload);
        tracing::debug!(
            api_path = %api_path,
            renderer = ?shape.tag(),
            "Rendering payload"
        );
        Ok(RenderedDocument::html(
            StatusCode::OK,
            render::render_shape(shape, ctx),
        ))
    }

    async fn serve_asset(
        &self,
        inbound_path: &str,
        asset_path: &str,
    ) -> Result<RenderedDocument, FailureCause> {
        if !self.assets.is_asset(asset_path) {
            return Err(FailureCause::RouteNotFound(inbound_path.to_string()));
        }

        let request = UpstreamRequest::new(Origin::Asset, asset_path, Vec::new());
        let result = self.upstream.fetch(&request).await?;
        let image = classify::classify_image(result, self.assets.is_favicon(asset_path))?;

        Ok(RenderedDocument::bytes(image.bytes, &image.content_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use axum::body::Bytes;

    use crate::config::AssetConfig;
    use crate::http::response::DocumentBody;
    use crate::upstream::UpstreamResult;

    /// Records every request and answers with a canned outcome.
    #[derive(Debug)]
    struct FakeUpstream {
        calls: Mutex<Vec<UpstreamRequest>>,
        outcome: Result<UpstreamResult, FailureCause>,
    }

    impl FakeUpstream {
        fn answering(content_type: &str, body: &'static [u8]) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                outcome: Ok(UpstreamResult {
                    status: 200,
                    content_type: content_type.to_string(),
                    body: Bytes::from_static(body),
                }),
            }
        }

        fn failing(cause: FailureCause) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                outcome: Err(cause),
            }
        }

        fn calls(&self) -> Vec<UpstreamRequest> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Fetch for FakeUpstream {
        async fn fetch(&self, request: &UpstreamRequest) -> Result<UpstreamResult, FailureCause> {
            self.calls.lock().unwrap().push(request.clone());
            self.outcome.clone()
        }
    }

    fn dispatcher(upstream: FakeUpstream) -> Dispatcher<FakeUpstream> {
        Dispatcher::new(upstream, AssetMatcher::from_config(&AssetConfig::default()))
    }

    fn ctx(path: &str) -> RenderContext {
        RenderContext {
            request_path: path.into(),
            request_url: format!("http://proxy.local{path}"),
            base_url: "http://proxy.local".into(),
        }
    }

    #[tokio::test]
    async fn test_home_makes_no_upstream_call() {
        let d = dispatcher(FakeUpstream::answering("application/json", b"{}"));
        let doc = d.dispatch("/", None, &ctx("/")).await;
        assert_eq!(doc.status, StatusCode::OK);
        assert!(d.upstream.calls().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_path_is_404_without_network() {
        let d = dispatcher(FakeUpstream::answering("image/png", b"\x89PNG"));
        for path in ["/nothing", "/index.html", "/apix/stats", "/pets/dogcat"] {
            let doc = d.dispatch(path, None, &ctx(path)).await;
            assert_eq!(doc.status, StatusCode::NOT_FOUND, "{path}");
            assert!(doc.as_html().unwrap().contains("/api/..."));
        }
        assert!(d.upstream.calls().is_empty());
    }

    #[tokio::test]
    async fn test_stats_scenario() {
        let d = dispatcher(FakeUpstream::answering(
            "application/json",
            br#"{"usersOnline": 1234, "secretHatches24h": 5, "totalPets": 10, "totalExists": 99}"#,
        ));
        let doc = d.dispatch("/api/stats", None, &ctx("/api/stats")).await;

        assert_eq!(doc.status, StatusCode::OK);
        let html = doc.as_html().unwrap();
        for expected in ["1,234", ">5<", ">10<", ">99<"] {
            assert!(html.contains(expected), "missing {expected}");
        }

        let calls = d.upstream.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].origin(), Origin::Data);
        assert_eq!(calls[0].path(), "stats");
    }

    #[tokio::test]
    async fn test_query_forwarded_in_order() {
        let d = dispatcher(FakeUpstream::answering("application/json", b"[]"));
        d.dispatch("/api/pets", Some("b=2&a=1"), &ctx("/api/pets")).await;

        let calls = d.upstream.calls();
        assert_eq!(
            calls[0].query(),
            &[("b".to_string(), "2".to_string()), ("a".to_string(), "1".to_string())]
        );
    }

    #[tokio::test]
    async fn test_upstream_404_passes_through() {
        let d = dispatcher(FakeUpstream::failing(FailureCause::UpstreamStatus {
            code: 404,
            reason: "Not Found".into(),
            body: "\"not found\"".into(),
        }));
        let doc = d
            .dispatch("/api/items/does-not-exist", None, &ctx("/api/items/does-not-exist"))
            .await;
        assert_eq!(doc.status, StatusCode::NOT_FOUND);
        assert!(doc.as_html().unwrap().contains("\"not found\""));
    }

    #[tokio::test]
    async fn test_declared_json_garbage_is_502() {
        let d = dispatcher(FakeUpstream::answering("application/json", b"not-json"));
        let doc = d.dispatch("/api/stats", None, &ctx("/api/stats")).await;
        assert_eq!(doc.status, StatusCode::BAD_GATEWAY);
        assert!(doc.as_html().unwrap().contains("<pre>not-json</pre>"));
    }

    #[tokio::test]
    async fn test_connection_failure_is_503() {
        let d = dispatcher(FakeUpstream::failing(FailureCause::UpstreamConnection(
            "connection refused".into(),
        )));
        let doc = d.dispatch("/api/eggs", None, &ctx("/api/eggs")).await;
        assert_eq!(doc.status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_image_with_html_type_is_415() {
        let d = dispatcher(FakeUpstream::answering("text/html", b"<html></html>"));
        let doc = d.dispatch("/logo.png", None, &ctx("/logo.png")).await;
        assert_eq!(doc.status, StatusCode::UNSUPPORTED_MEDIA_TYPE);

        let calls = d.upstream.calls();
        assert_eq!(calls[0].origin(), Origin::Asset);
        assert_eq!(calls[0].path(), "logo.png");
    }

    #[tokio::test]
    async fn test_image_bytes_unmodified() {
        let d = dispatcher(FakeUpstream::answering("image/png", b"{\"not\": \"parsed\"}"));
        let doc = d.dispatch("/pets/dogcat.png", Some("v=1"), &ctx("/pets/dogcat.png")).await;

        assert_eq!(doc.status, StatusCode::OK);
        assert_eq!(doc.content_type, "image/png");
        assert_eq!(
            doc.body,
            DocumentBody::Bytes(Bytes::from_static(b"{\"not\": \"parsed\"}"))
        );
        assert!(d.upstream.calls()[0].query().is_empty());
    }

    #[tokio::test]
    async fn test_favicon_without_type_defaults_to_octet_stream() {
        let d = dispatcher(FakeUpstream::answering("", b"\x00\x00\x01\x00"));
        let doc = d.dispatch("/favicon.ico", None, &ctx("/favicon.ico")).await;
        assert_eq!(doc.status, StatusCode::OK);
        assert_eq!(doc.content_type, "application/octet-stream");
    }
}
