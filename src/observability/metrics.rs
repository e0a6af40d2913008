//! Metrics collection and exposition.
//!
//! # Metrics
//! - `outgoing_requests_total` (counter): requests by outcome
//! - `outgoing_request_duration_seconds` (histogram): handler latency
//!
//! # Design Decisions
//! - Outcome labels name the rejection reason; clients never see it
//! - Without an installed recorder the macros are no-ops

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

pub const REQUESTS_TOTAL: &str = "outgoing_requests_total";
pub const REQUEST_DURATION: &str = "outgoing_request_duration_seconds";

/// Outcome label for a rendered redirect.
pub const OUTCOME_REDIRECT: &str = "redirect";

/// Start the Prometheus scrape endpoint on `addr`.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record one handled request.
pub fn record_request(outcome: &'static str, start: Instant) {
    metrics::counter!(REQUESTS_TOTAL, "outcome" => outcome).increment(1);
    metrics::histogram!(REQUEST_DURATION, "outcome" => outcome)
        .record(start.elapsed().as_secs_f64());
}
