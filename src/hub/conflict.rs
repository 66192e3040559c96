use chrono::NaiveDate;

use crate::model::{Booking, Facility, to_minutes};

use super::HubError;

/// Field checks for a booking candidate: required fields, facility in the
/// closed set, a real calendar date, and a forward time range.
pub(super) fn validate(b: &Booking) -> Result<(), HubError> {
    required(&b.unit, "unit")?;
    required(&b.facility_type, "facility")?;
    required(&b.date, "date")?;
    required(&b.start_time, "start time")?;
    required(&b.end_time, "end time")?;

    if Facility::from_name(&b.facility_type).is_none() {
        return Err(HubError::UnknownFacility(b.facility_type.clone()));
    }
    if NaiveDate::parse_from_str(&b.date, "%Y-%m-%d").is_err() {
        return Err(HubError::InvalidDate(b.date.clone()));
    }
    match (to_minutes(&b.start_time), to_minutes(&b.end_time)) {
        (Some(start), Some(end)) if start < end => Ok(()),
        _ => Err(HubError::InvalidTimeRange {
            start: b.start_time.clone(),
            end: b.end_time.clone(),
        }),
    }
}

pub(super) fn required(value: &str, name: &'static str) -> Result<(), HubError> {
    if value.trim().is_empty() {
        Err(HubError::MissingField(name))
    } else {
        Ok(())
    }
}

/// First non-cancelled booking for the same facility and date whose slot
/// overlaps the candidate's, in insertion order.
///
/// The candidate's own prior version (matched by id) never counts, so an
/// edit cannot conflict with itself. A candidate that is itself cancelled
/// never conflicts either — the overlap invariant binds non-cancelled
/// bookings only, and cancelling frees the slot.
pub(super) fn find_conflict<'a>(
    candidate: &Booking,
    existing: &'a [Booking],
) -> Option<&'a Booking> {
    if candidate.is_cancelled() {
        return None;
    }
    let slot = candidate.slot()?;
    existing.iter().find(|b| {
        b.id != candidate.id
            && !b.is_cancelled()
            && b.facility_type == candidate.facility_type
            && b.date == candidate.date
            && b.slot().is_some_and(|s| s.overlaps(&slot))
    })
}

/// Create/edit admission: validate, then scan for a conflict. Nothing is
/// mutated on failure; the caller commits only on `Ok`.
pub(super) fn admit(candidate: &Booking, existing: &[Booking]) -> Result<(), HubError> {
    validate(candidate)?;
    if let Some(hit) = find_conflict(candidate, existing) {
        metrics::counter!(crate::observability::BOOKING_CONFLICTS_TOTAL).increment(1);
        return Err(HubError::Conflict { with: hit.id });
    }
    Ok(())
}

/// Shared check for the supplement records that carry a calendar date.
pub(super) fn valid_date(date: &str) -> Result<(), HubError> {
    if NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
        return Err(HubError::InvalidDate(date.to_string()));
    }
    Ok(())
}
