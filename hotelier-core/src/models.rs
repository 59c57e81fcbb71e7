use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A hotel room. Reference data: the engine only ever reads the catalog,
/// it never creates, mutates, or deletes rooms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: i32,
    pub description: String,
}

/// A reservation of one room for an inclusive range of calendar dates.
///
/// `id` is assigned by the booking store on append. Dates carry no time
/// component and no timezone. Only bookings with `is_active == true`
/// count against availability and occupancy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: i32,
    pub room_id: i32,
    pub customer_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_active: bool,
}

impl Booking {
    /// Closed-range overlap: `[s1,e1]` and `[s2,e2]` share at least one
    /// date iff `s1 <= e2 && s2 <= e1`.
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.start_date <= end && start <= self.end_date
    }
}

/// A reservation request before a room has been assigned. Room choice
/// and activation are the engine's job, so the draft does not carry them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingDraft {
    pub customer_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
