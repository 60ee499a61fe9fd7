//! Metrics collection and exposition.
//!
//! # Metrics
//! - `translate_requests_total` (counter): translations by result code
//! - `translate_upstream_duration_seconds` (histogram): upstream round-trip latency
//!
//! Without an installed recorder every call here is a no-op.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Start the Prometheus exporter on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to start metrics exporter"),
    }
}

/// Count one finished translation.
pub fn record_translation(code: u16) {
    metrics::counter!("translate_requests_total", "code" => code.to_string()).increment(1);
}

/// Record the upstream round-trip started at `start`.
pub fn record_upstream(start: Instant) {
    metrics::histogram!("translate_upstream_duration_seconds").record(start.elapsed().as_secs_f64());
}
