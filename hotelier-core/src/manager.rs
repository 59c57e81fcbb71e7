use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::debug;

use crate::models::{Booking, BookingDraft, Room};
use crate::repository::Repository;
use crate::{BookingError, BookingResult};

/// Sentinel returned by [`BookingManager::find_available_room`] when no
/// room is free for the requested range.
pub const NO_ROOM: i32 = -1;

/// The room-allocation and occupancy-query engine.
///
/// Stateless: every operation re-reads a fresh snapshot from the room
/// catalog and booking ledger, computes over it, and drops it. The only
/// side effect anywhere is the single ledger append performed by a
/// successful [`create_booking`](Self::create_booking). Serializing
/// conflicting concurrent reservations is the store's concern, not ours.
pub struct BookingManager {
    rooms: Arc<dyn Repository<Room>>,
    bookings: Arc<dyn Repository<Booking>>,
}

impl BookingManager {
    pub fn new(rooms: Arc<dyn Repository<Room>>, bookings: Arc<dyn Repository<Booking>>) -> Self {
        Self { rooms, bookings }
    }

    /// Find the first room in catalog order with no active booking
    /// overlapping `[start, end]`, or [`NO_ROOM`] if every room is taken.
    ///
    /// The range must start strictly after today and satisfy
    /// `start <= end`; both checks run before any store read.
    pub async fn find_available_room(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> BookingResult<i32> {
        let today = Utc::now().date_naive();
        if start <= today {
            return Err(BookingError::InvalidRange(
                "the start date must be strictly in the future",
            ));
        }
        if start > end {
            return Err(BookingError::InvalidRange(
                "the start date cannot be later than the end date",
            ));
        }

        let rooms = self.rooms.get_all().await?;
        let bookings = self.bookings.get_all().await?;
        Ok(first_free_room(&rooms, &bookings, start, end))
    }

    /// Reserve a room for the draft's range. Returns the persisted
    /// booking on success, or `None` when no room is free — an expected
    /// outcome the caller must branch on, not an error. Exactly one
    /// ledger append happens on success; none otherwise.
    pub async fn create_booking(&self, draft: BookingDraft) -> BookingResult<Option<Booking>> {
        let room_id = self
            .find_available_room(draft.start_date, draft.end_date)
            .await?;
        if room_id == NO_ROOM {
            debug!(
                customer_id = draft.customer_id,
                start = %draft.start_date,
                end = %draft.end_date,
                "no room free for requested range"
            );
            return Ok(None);
        }

        let booking = Booking {
            id: 0, // assigned by the store
            room_id,
            customer_id: draft.customer_id,
            start_date: draft.start_date,
            end_date: draft.end_date,
            is_active: true,
        };
        let persisted = self.bookings.add(booking).await?;
        debug!(booking_id = persisted.id, room_id, "booking created");
        Ok(Some(persisted))
    }

    /// Every date in `[start, end]` on which all rooms in the catalog
    /// have an active booking, in ascending order.
    ///
    /// Historical and present ranges are legal here; only `start <= end`
    /// is enforced. An empty catalog yields no fully occupied dates.
    pub async fn get_fully_occupied_dates(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> BookingResult<Vec<NaiveDate>> {
        if start > end {
            return Err(BookingError::InvalidRange(
                "the start date cannot be later than the end date",
            ));
        }

        let rooms = self.rooms.get_all().await?;
        if rooms.is_empty() {
            return Ok(Vec::new());
        }
        let bookings = self.bookings.get_all().await?;

        Ok(start
            .iter_days()
            .take_while(|d| *d <= end)
            .filter(|d| first_free_room(&rooms, &bookings, *d, *d) == NO_ROOM)
            .collect())
    }
}

/// Selection rule shared by availability and occupancy: the first room in
/// catalog order with no active booking overlapping `[start, end]`.
fn first_free_room(rooms: &[Room], bookings: &[Booking], start: NaiveDate, end: NaiveDate) -> i32 {
    rooms
        .iter()
        .find(|room| {
            !bookings
                .iter()
                .any(|b| b.is_active && b.room_id == room.id && b.overlaps(start, end))
        })
        .map(|room| room.id)
        .unwrap_or(NO_ROOM)
}
