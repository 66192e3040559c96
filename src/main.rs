use std::path::PathBuf;

use tracing::info;

use condohub::hub::Hub;
use condohub::store::JsonStore;

/// Open the hub from the configured data file and report what it holds.
/// Any front-end (or test harness) drives the library directly; this binary
/// only wires up logging, metrics, and the store.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let metrics_port: Option<u16> = std::env::var("CONDOHUB_METRICS_PORT")
        .ok()
        .and_then(|s| s.parse().ok());
    condohub::observability::init(metrics_port);

    let data_file = std::env::var("CONDOHUB_DATA_FILE").unwrap_or_else(|_| "./condo_data.json".into());
    let hub = Hub::open(Box::new(JsonStore::open(PathBuf::from(&data_file))))?;

    let summary = hub.summary();
    info!("condohub opened {data_file}");
    info!("  amenity bookings: {}", summary.bookings);
    info!("  packages: {}", summary.packages);
    info!("  service requests: {}", summary.service_requests);
    info!("  announcements: {}", summary.announcements);

    if let Some(a) = hub.latest_announcement() {
        info!("latest announcement: {} ({})", a.title, a.created_at);
    }
    for b in hub.bookings().iter().filter(|b| !b.is_cancelled()) {
        info!(
            "booking #{}: {} on {} {}-{} for unit {}",
            b.id, b.facility_type, b.date, b.start_time, b.end_time, b.unit
        );
    }

    Ok(())
}
