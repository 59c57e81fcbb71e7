use std::sync::Arc;

use hotelier_core::manager::BookingManager;
use hotelier_core::models::{Booking, Room};
use hotelier_core::repository::Repository;

#[derive(Clone)]
pub struct AppState {
    pub manager: Arc<BookingManager>,
    pub rooms: Arc<dyn Repository<Room>>,
    pub bookings: Arc<dyn Repository<Booking>>,
}
