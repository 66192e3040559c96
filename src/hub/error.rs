use std::fmt;

/// Everything a hub operation can report. All of these are recoverable
/// result values; none abort the process.
#[derive(Debug)]
pub enum HubError {
    /// A required field was empty. Carries the field name.
    MissingField(&'static str),
    /// The facility name is not in the bookable set.
    UnknownFacility(String),
    /// The date string is not a real `YYYY-MM-DD` calendar date.
    InvalidDate(String),
    /// Times failed to parse, or the end does not come after the start.
    InvalidTimeRange { start: String, end: String },
    /// The slot overlaps an existing non-cancelled booking.
    Conflict { with: u32 },
    /// Cancel requested on a booking that is already cancelled.
    /// Informational — nothing changed and nothing was written.
    AlreadyCancelled(u32),
    /// No record with this id.
    NotFound(u32),
    /// The caller's role or ownership does not permit the operation.
    Forbidden(&'static str),
    /// The write-back to storage failed. The in-memory mutation is retained.
    Storage(String),
}

impl fmt::Display for HubError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HubError::MissingField(name) => write!(f, "required field missing: {name}"),
            HubError::UnknownFacility(name) => write!(f, "unknown facility: {name}"),
            HubError::InvalidDate(date) => {
                write!(f, "date must be a real YYYY-MM-DD date: {date}")
            }
            HubError::InvalidTimeRange { start, end } => {
                write!(f, "invalid time range: {start}-{end}")
            }
            HubError::Conflict { with } => {
                write!(
                    f,
                    "facility already booked for this time range (booking #{with})"
                )
            }
            HubError::AlreadyCancelled(id) => {
                write!(f, "booking #{id} is already cancelled")
            }
            HubError::NotFound(id) => write!(f, "no record with id {id}"),
            HubError::Forbidden(msg) => write!(f, "not permitted: {msg}"),
            HubError::Storage(e) => write!(f, "storage error: {e}"),
        }
    }
}

impl std::error::Error for HubError {}
