use serde::{Deserialize, Serialize};

/// Minutes since midnight — the only time scalar.
pub type Minutes = i32;

/// Parse an `"HH:MM"` wall-clock string into minutes since midnight.
/// `None` on anything malformed or out of range; callers must check before
/// using the value arithmetically.
pub fn to_minutes(s: &str) -> Option<Minutes> {
    let (h, m) = s.split_once(':')?;
    let h: Minutes = h.parse().ok()?;
    let m: Minutes = m.parse().ok()?;
    if !(0..24).contains(&h) || !(0..60).contains(&m) {
        return None;
    }
    Some(h * 60 + m)
}

/// Half-open interval `[start, end)` within a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub start: Minutes,
    pub end: Minutes,
}

impl Slot {
    pub fn new(start: Minutes, end: Minutes) -> Self {
        debug_assert!(start < end, "Slot start must be before end");
        Self { start, end }
    }

    /// A slot ending exactly when another starts does not overlap.
    pub fn overlaps(&self, other: &Slot) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// The bookable amenities — the closed set checked at validation time.
/// Records store the display name so the document stays flat strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facility {
    MeetingRoom,
    SwimmingPoolLane,
    Gym,
    PartyRoom,
}

impl Facility {
    pub const ALL: [Facility; 4] = [
        Facility::MeetingRoom,
        Facility::SwimmingPoolLane,
        Facility::Gym,
        Facility::PartyRoom,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Facility::MeetingRoom => "Meeting Room",
            Facility::SwimmingPoolLane => "Swimming Pool Lane",
            Facility::Gym => "Gym",
            Facility::PartyRoom => "Party Room",
        }
    }

    pub fn from_name(name: &str) -> Option<Facility> {
        Facility::ALL.into_iter().find(|f| f.name() == name)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    #[default]
    Booked,
    Cancelled,
}

/// One reservation of a shared facility by one residential unit.
///
/// `id` is assigned by the hub and immutable afterwards. Dates and times stay
/// strings (`"YYYY-MM-DD"`, `"HH:MM"`) so a record round-trips through the
/// document field-for-field; they are parsed at validation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub facility_type: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub status: BookingStatus,
}

impl Booking {
    /// The booking's time slot, if both times parse and the range is forward.
    pub fn slot(&self) -> Option<Slot> {
        let start = to_minutes(&self.start_time)?;
        let end = to_minutes(&self.end_time)?;
        if start < end { Some(Slot::new(start, end)) } else { None }
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == BookingStatus::Cancelled
    }
}

/// Caller-supplied booking fields; the hub assigns the id.
#[derive(Debug, Clone, Default)]
pub struct BookingDraft {
    pub unit: String,
    pub facility_type: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub status: BookingStatus,
}

impl BookingDraft {
    pub(crate) fn into_booking(self, id: u32) -> Booking {
        Booking {
            id,
            unit: self.unit,
            facility_type: self.facility_type,
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            status: self.status,
        }
    }
}

/// A delivery waiting at the front desk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRecord {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub carrier: String,
    #[serde(default)]
    pub arrival_date: String,
    #[serde(default)]
    pub picked_up: bool,
}

#[derive(Debug, Clone, Default)]
pub struct PackageDraft {
    pub unit: String,
    pub carrier: String,
    pub arrival_date: String,
    pub picked_up: bool,
}

impl PackageDraft {
    pub(crate) fn into_record(self, id: u32) -> PackageRecord {
        PackageRecord {
            id,
            unit: self.unit,
            carrier: self.carrier,
            arrival_date: self.arrival_date,
            picked_up: self.picked_up,
        }
    }
}

/// The request categories offered to residents. Informational — request
/// records are plain CRUD and store whatever type string was submitted.
pub const REQUEST_TYPES: [&str; 4] = [
    "Service Request",
    "Architectural Change Request",
    "Suggestion",
    "Question",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestStatus {
    #[default]
    Submitted,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
}

/// A repair or concierge request submitted by a resident.
/// `created_by` is the submitting username, used for edit/visibility gating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRequest {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub req_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: RequestStatus,
    #[serde(default)]
    pub created_by: String,
}

#[derive(Debug, Clone, Default)]
pub struct RequestDraft {
    pub unit: String,
    pub req_type: String,
    pub description: String,
}

/// A building-wide notice posted by staff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Clone, Default)]
pub struct AnnouncementDraft {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Resident,
    Admin,
}

/// The self-declared identity a caller presents: `(unit, role)` plus the
/// username stamped onto service requests. Never authenticated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub unit: String,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
