//! Metrics collection and exposition.
//!
//! # Responsibilities
//! - Define proxy metrics (requests, latency, upstream outcomes)
//! - Expose Prometheus-compatible metrics endpoint
//!
//! # Metrics
//! - `proxy_requests_total` (counter): inbound requests by route, status
//! - `proxy_request_duration_seconds` (histogram): inbound latency by route
//! - `proxy_upstream_requests_total` (counter): upstream calls by origin, outcome
//! - `proxy_upstream_duration_seconds` (histogram): upstream latency by origin
//!
//! # Design Decisions
//! - Recording without an installed exporter is a no-op
//! - Labels are low-cardinality (route family, never raw path)

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter listening on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one inbound request.
pub fn record_request(route: &'static str, status: u16, start: Instant) {
    metrics::counter!("proxy_requests_total", "route" => route, "status" => status.to_string())
        .increment(1);
    metrics::histogram!("proxy_request_duration_seconds", "route" => route)
        .record(start.elapsed().as_secs_f64());
}

/// Record one upstream call.
pub fn record_upstream(origin: &'static str, outcome: &'static str, start: Instant) {
    metrics::counter!("proxy_upstream_requests_total", "origin" => origin, "outcome" => outcome)
        .increment(1);
    metrics::histogram!("proxy_upstream_duration_seconds", "origin" => origin)
        .record(start.elapsed().as_secs_f64());
}
