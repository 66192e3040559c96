mod conflict;
mod error;
mod mutations;
mod queries;

pub use error::HubError;
pub use queries::Summary;

use std::io;
use std::time::Instant;

use crate::observability;
use crate::store::{Document, Storage};

/// Owns the authoritative in-memory document for the lifetime of the
/// process. The persistent store is a passive mirror: every successful
/// mutation triggers exactly one full-document write, and a rejected
/// mutation triggers none.
pub struct Hub {
    doc: Document,
    storage: Box<dyn Storage>,
}

impl Hub {
    pub fn open(storage: Box<dyn Storage>) -> io::Result<Self> {
        let doc = storage.load()?;
        Ok(Self { doc, storage })
    }

    /// The one full-document write per successful mutation. A failed write is
    /// surfaced as `HubError::Storage`; the in-memory mutation that preceded
    /// it stays in place so the caller can retry the write.
    fn persist(&mut self) -> Result<(), HubError> {
        let started = Instant::now();
        let result = self.storage.save(&self.doc);
        metrics::histogram!(observability::STORE_SAVE_DURATION_SECONDS)
            .record(started.elapsed().as_secs_f64());
        if let Err(e) = result {
            return Err(HubError::Storage(e.to_string()));
        }
        metrics::counter!(observability::STORE_SAVES_TOTAL).increment(1);
        for (category, len) in [
            ("amenity_bookings", self.doc.amenity_bookings.len()),
            ("packages", self.doc.packages.len()),
            ("service_requests", self.doc.service_requests.len()),
            ("announcements", self.doc.announcements.len()),
        ] {
            metrics::gauge!(observability::RECORDS, "category" => category).set(len as f64);
        }
        Ok(())
    }
}

/// `max(existing ids, default 0) + 1` — unique for the repository's
/// lifetime, not necessarily contiguous after deletions.
fn next_id(taken: impl Iterator<Item = u32>) -> u32 {
    taken.max().unwrap_or(0) + 1
}
