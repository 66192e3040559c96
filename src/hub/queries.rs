use crate::model::{Announcement, Booking, PackageRecord, ServiceRequest, User};

use super::Hub;

/// Record counts per category — the admin dashboard figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub bookings: usize,
    pub packages: usize,
    pub service_requests: usize,
    pub announcements: usize,
}

/// All listings are insertion-order snapshots: they clone the current state
/// and do not reflect later mutations.
impl Hub {
    pub fn bookings(&self) -> Vec<Booking> {
        self.doc.amenity_bookings.clone()
    }

    pub fn booking(&self, id: u32) -> Option<Booking> {
        self.doc.amenity_bookings.iter().find(|b| b.id == id).cloned()
    }

    pub fn packages(&self) -> Vec<PackageRecord> {
        self.doc.packages.clone()
    }

    /// Residents see only their own unit's packages; admin sees all. The
    /// optional filter then narrows by unit prefix, like the search box.
    pub fn packages_for(&self, user: &User, prefix: &str) -> Vec<PackageRecord> {
        self.doc
            .packages
            .iter()
            .filter(|p| user.is_admin() || user.unit.is_empty() || p.unit == user.unit)
            .filter(|p| prefix.is_empty() || p.unit.starts_with(prefix))
            .cloned()
            .collect()
    }

    pub fn requests(&self) -> Vec<ServiceRequest> {
        self.doc.service_requests.clone()
    }

    /// Residents see only the requests they submitted; admin sees all.
    pub fn requests_for(&self, user: &User) -> Vec<ServiceRequest> {
        self.doc
            .service_requests
            .iter()
            .filter(|r| user.is_admin() || r.created_by == user.username)
            .cloned()
            .collect()
    }

    pub fn announcements(&self) -> Vec<Announcement> {
        self.doc.announcements.clone()
    }

    /// The most recently posted announcement, if any.
    pub fn latest_announcement(&self) -> Option<Announcement> {
        self.doc.announcements.last().cloned()
    }

    pub fn summary(&self) -> Summary {
        Summary {
            bookings: self.doc.amenity_bookings.len(),
            packages: self.doc.packages.len(),
            service_requests: self.doc.service_requests.len(),
            announcements: self.doc.announcements.len(),
        }
    }
}
