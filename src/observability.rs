use std::net::SocketAddr;

/// Counter: booking admissions rejected for a slot overlap.
pub const BOOKING_CONFLICTS_TOTAL: &str = "condohub_booking_conflicts_total";

/// Counter: full-document writes committed to the store.
pub const STORE_SAVES_TOTAL: &str = "condohub_store_saves_total";

/// Histogram: full-document save latency in seconds.
pub const STORE_SAVE_DURATION_SECONDS: &str = "condohub_store_save_duration_seconds";

/// Gauge: records currently held. Labels: category.
pub const RECORDS: &str = "condohub_records";

/// Install Prometheus metrics exporter on the given port. No-op if port is None.
pub fn init(port: Option<u16>) {
    let Some(port) = port else { return };
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();
    metrics_exporter_prometheus::PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .expect("failed to install Prometheus metrics exporter");
    tracing::info!("metrics endpoint: http://0.0.0.0:{port}/metrics");
}
