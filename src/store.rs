use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::model::{Announcement, Booking, PackageRecord, ServiceRequest, User};

/// The whole persisted state: one JSON document mapping record-category
/// names to flat record arrays. Unknown keys are ignored on load and missing
/// ones default to empty, so older documents keep loading.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub amenity_bookings: Vec<Booking>,
    #[serde(default)]
    pub packages: Vec<PackageRecord>,
    #[serde(default)]
    pub service_requests: Vec<ServiceRequest>,
    #[serde(default)]
    pub announcements: Vec<Announcement>,
}

/// Persistence port. The hub owns the authoritative in-memory document and
/// calls `save` with the full document after every successful mutation; it
/// never touches file I/O directly.
pub trait Storage {
    fn load(&self) -> io::Result<Document>;
    fn save(&mut self, doc: &Document) -> io::Result<()>;
}

/// Full-document JSON file store.
///
/// Saves go to a temp file first, then rename over the target, so a crashed
/// write leaves the previous document intact.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Storage for JsonStore {
    fn load(&self) -> io::Result<Document> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Document::default()),
            Err(e) => return Err(e),
        };
        match serde_json::from_reader(BufReader::new(file)) {
            Ok(doc) => Ok(doc),
            Err(e) => {
                tracing::warn!(
                    "unreadable document at {}, starting empty: {e}",
                    self.path.display()
                );
                Ok(Document::default())
            }
        }
    }

    fn save(&mut self, doc: &Document) -> io::Result<()> {
        let tmp_path = self.path.with_extension("json.tmp");
        let file = File::create(&tmp_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, doc)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        writer.flush()?;
        writer.get_ref().sync_all()?;
        fs::rename(&tmp_path, &self.path)
    }
}

#[cfg(test)]
pub use mem::{MemHandle, MemStore};
