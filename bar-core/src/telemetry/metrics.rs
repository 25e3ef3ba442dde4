//! Prometheus metrics setup and metric definitions

use anyhow::{Context, Result};
use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Outcomes recorded on `bar_business_token_lookups_total`.
const LOOKUP_OUTCOMES: [&str; 5] = [
    "resolved",
    "invalid_token",
    "token_not_found",
    "business_not_found",
    "error",
];

/// Install the Prometheus recorder and return a handle for rendering metrics.
pub fn install_prometheus_recorder() -> Result<PrometheusHandle> {
    // Lookups are two indexed reads, so most requests land in the
    // sub-10ms buckets.
    let buckets = [
        0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0,
    ];

    PrometheusBuilder::new()
        .set_buckets(&buckets)
        .context("failed to set histogram buckets")?
        .install_recorder()
        .context("failed to install Prometheus recorder")
}

/// Register metric descriptions and emit initial zero values so the
/// exposition carries HELP/TYPE lines from startup.
pub fn describe_metrics() {
    describe_counter!("bar_http_requests_total", "Total number of HTTP requests");
    describe_histogram!(
        "bar_http_request_duration_seconds",
        "HTTP request duration in seconds"
    );
    describe_gauge!(
        "bar_http_requests_in_flight",
        "Number of HTTP requests currently being processed"
    );
    describe_counter!(
        "bar_business_token_lookups_total",
        "Invitation token lookups by outcome"
    );

    gauge!("bar_http_requests_in_flight").set(0.0);
    for outcome in LOOKUP_OUTCOMES {
        counter!("bar_business_token_lookups_total", "outcome" => outcome).absolute(0);
    }
}
