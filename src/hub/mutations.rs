use crate::model::{
    Announcement, AnnouncementDraft, Booking, BookingDraft, BookingStatus, PackageDraft,
    PackageRecord, RequestDraft, RequestStatus, ServiceRequest, User,
};

use super::conflict::{admit, required, valid_date};
use super::{Hub, HubError, next_id};

// ── Amenity bookings ─────────────────────────────────────

impl Hub {
    /// Admit and commit a new booking. The id is assigned here and the
    /// booking starts in whatever status the draft carries (`Booked` by
    /// default).
    pub fn create_booking(&mut self, draft: BookingDraft) -> Result<Booking, HubError> {
        let id = next_id(self.doc.amenity_bookings.iter().map(|b| b.id));
        let booking = draft.into_booking(id);
        admit(&booking, &self.doc.amenity_bookings)?;
        self.doc.amenity_bookings.push(booking.clone());
        self.persist()?;
        Ok(booking)
    }

    /// Replace every field except the id. The booking's own prior version is
    /// excluded from the conflict scan, so re-saving the same slot succeeds;
    /// re-marking a cancelled booking as `Booked` goes through the same scan
    /// and can be rejected with a conflict.
    pub fn update_booking(&mut self, id: u32, draft: BookingDraft) -> Result<Booking, HubError> {
        let pos = self
            .doc
            .amenity_bookings
            .iter()
            .position(|b| b.id == id)
            .ok_or(HubError::NotFound(id))?;
        let candidate = draft.into_booking(id);
        admit(&candidate, &self.doc.amenity_bookings)?;
        self.doc.amenity_bookings[pos] = candidate.clone();
        self.persist()?;
        Ok(candidate)
    }

    /// Booked → Cancelled. Cancelling an already-cancelled booking reports
    /// `AlreadyCancelled` and writes nothing.
    pub fn cancel_booking(&mut self, id: u32) -> Result<Booking, HubError> {
        let booking = self
            .doc
            .amenity_bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(HubError::NotFound(id))?;
        if booking.is_cancelled() {
            return Err(HubError::AlreadyCancelled(id));
        }
        booking.status = BookingStatus::Cancelled;
        let cancelled = booking.clone();
        self.persist()?;
        Ok(cancelled)
    }

    /// Remove the booking permanently. No conflict implications.
    pub fn delete_booking(&mut self, id: u32) -> Result<(), HubError> {
        let pos = self
            .doc
            .amenity_bookings
            .iter()
            .position(|b| b.id == id)
            .ok_or(HubError::NotFound(id))?;
        self.doc.amenity_bookings.remove(pos);
        self.persist()
    }
}

// ── Packages ─────────────────────────────────────────────

fn check_package(draft: &PackageDraft) -> Result<(), HubError> {
    required(&draft.unit, "unit")?;
    required(&draft.carrier, "carrier")?;
    required(&draft.arrival_date, "arrival date")?;
    valid_date(&draft.arrival_date)
}

impl Hub {
    pub fn log_package(&mut self, draft: PackageDraft) -> Result<PackageRecord, HubError> {
        check_package(&draft)?;
        let id = next_id(self.doc.packages.iter().map(|p| p.id));
        let record = draft.into_record(id);
        self.doc.packages.push(record.clone());
        self.persist()?;
        Ok(record)
    }

    pub fn update_package(
        &mut self,
        id: u32,
        draft: PackageDraft,
    ) -> Result<PackageRecord, HubError> {
        let pos = self
            .doc
            .packages
            .iter()
            .position(|p| p.id == id)
            .ok_or(HubError::NotFound(id))?;
        check_package(&draft)?;
        let record = draft.into_record(id);
        self.doc.packages[pos] = record.clone();
        self.persist()?;
        Ok(record)
    }

    /// Residents may only mark packages addressed to their own unit.
    pub fn mark_picked_up(&mut self, user: &User, id: u32) -> Result<PackageRecord, HubError> {
        let record = self
            .doc
            .packages
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(HubError::NotFound(id))?;
        if !user.is_admin() && !user.unit.is_empty() && record.unit != user.unit {
            return Err(HubError::Forbidden(
                "only your own unit's packages can be marked picked up",
            ));
        }
        record.picked_up = true;
        let updated = record.clone();
        self.persist()?;
        Ok(updated)
    }

    pub fn delete_package(&mut self, user: &User, id: u32) -> Result<(), HubError> {
        if !user.is_admin() {
            return Err(HubError::Forbidden("only staff may delete package records"));
        }
        let pos = self
            .doc
            .packages
            .iter()
            .position(|p| p.id == id)
            .ok_or(HubError::NotFound(id))?;
        self.doc.packages.remove(pos);
        self.persist()
    }
}

// ── Service requests ─────────────────────────────────────

fn check_request(draft: &RequestDraft) -> Result<(), HubError> {
    required(&draft.unit, "unit")?;
    required(&draft.req_type, "request type")?;
    required(&draft.description, "description")
}

impl Hub {
    /// New requests always start `Submitted`, stamped with the caller's
    /// username as creator.
    pub fn submit_request(
        &mut self,
        user: &User,
        draft: RequestDraft,
    ) -> Result<ServiceRequest, HubError> {
        check_request(&draft)?;
        let request = ServiceRequest {
            id: next_id(self.doc.service_requests.iter().map(|r| r.id)),
            unit: draft.unit,
            req_type: draft.req_type,
            description: draft.description,
            status: RequestStatus::Submitted,
            created_by: user.username.clone(),
        };
        self.doc.service_requests.push(request.clone());
        self.persist()?;
        Ok(request)
    }

    /// Admin or the creator may edit; status and creator are preserved
    /// (status moves only through `change_request_status`).
    pub fn update_request(
        &mut self,
        user: &User,
        id: u32,
        draft: RequestDraft,
    ) -> Result<ServiceRequest, HubError> {
        let pos = self
            .doc
            .service_requests
            .iter()
            .position(|r| r.id == id)
            .ok_or(HubError::NotFound(id))?;
        let prior = &self.doc.service_requests[pos];
        if !user.is_admin() && prior.created_by != user.username {
            return Err(HubError::Forbidden(
                "only the submitter may edit a request",
            ));
        }
        check_request(&draft)?;
        let request = ServiceRequest {
            id,
            unit: draft.unit,
            req_type: draft.req_type,
            description: draft.description,
            status: prior.status,
            created_by: prior.created_by.clone(),
        };
        self.doc.service_requests[pos] = request.clone();
        self.persist()?;
        Ok(request)
    }

    pub fn change_request_status(
        &mut self,
        user: &User,
        id: u32,
        status: RequestStatus,
    ) -> Result<ServiceRequest, HubError> {
        if !user.is_admin() {
            return Err(HubError::Forbidden("only staff may change request status"));
        }
        let request = self
            .doc
            .service_requests
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(HubError::NotFound(id))?;
        request.status = status;
        let updated = request.clone();
        self.persist()?;
        Ok(updated)
    }

    pub fn delete_request(&mut self, user: &User, id: u32) -> Result<(), HubError> {
        if !user.is_admin() {
            return Err(HubError::Forbidden("only staff may delete requests"));
        }
        let pos = self
            .doc
            .service_requests
            .iter()
            .position(|r| r.id == id)
            .ok_or(HubError::NotFound(id))?;
        self.doc.service_requests.remove(pos);
        self.persist()
    }
}

// ── Announcements ────────────────────────────────────────

fn check_announcement(draft: &AnnouncementDraft) -> Result<(), HubError> {
    required(&draft.title, "title")?;
    required(&draft.content, "content")
}

fn stamp_now() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M").to_string()
}

impl Hub {
    pub fn post_announcement(
        &mut self,
        user: &User,
        draft: AnnouncementDraft,
    ) -> Result<Announcement, HubError> {
        if !user.is_admin() {
            return Err(HubError::Forbidden("only staff may post announcements"));
        }
        check_announcement(&draft)?;
        let announcement = Announcement {
            id: next_id(self.doc.announcements.iter().map(|a| a.id)),
            title: draft.title,
            content: draft.content,
            created_at: stamp_now(),
        };
        self.doc.announcements.push(announcement.clone());
        self.persist()?;
        Ok(announcement)
    }

    /// The posting timestamp is preserved across edits.
    pub fn edit_announcement(
        &mut self,
        user: &User,
        id: u32,
        draft: AnnouncementDraft,
    ) -> Result<Announcement, HubError> {
        if !user.is_admin() {
            return Err(HubError::Forbidden("only staff may edit announcements"));
        }
        let pos = self
            .doc
            .announcements
            .iter()
            .position(|a| a.id == id)
            .ok_or(HubError::NotFound(id))?;
        check_announcement(&draft)?;
        let announcement = Announcement {
            id,
            title: draft.title,
            content: draft.content,
            created_at: self.doc.announcements[pos].created_at.clone(),
        };
        self.doc.announcements[pos] = announcement.clone();
        self.persist()?;
        Ok(announcement)
    }

    pub fn delete_announcement(&mut self, user: &User, id: u32) -> Result<(), HubError> {
        if !user.is_admin() {
            return Err(HubError::Forbidden("only staff may delete announcements"));
        }
        let pos = self
            .doc
            .announcements
            .iter()
            .position(|a| a.id == id)
            .ok_or(HubError::NotFound(id))?;
        self.doc.announcements.remove(pos);
        self.persist()
    }
}
