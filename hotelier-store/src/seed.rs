use chrono::{Days, Utc};
use tracing::info;

use hotelier_core::models::{Booking, Room};
use hotelier_core::repository::{Repository, RepositoryError};

use crate::app_config::SeedConfig;
use crate::memory::InMemoryRepository;

/// Load demo data: rooms "A" and "B", each carrying an active booking
/// over the configured window, so availability starts from a state where
/// that window is fully occupied.
pub async fn seed(
    rooms: &InMemoryRepository<Room>,
    bookings: &InMemoryRepository<Booking>,
    cfg: &SeedConfig,
) -> Result<(), RepositoryError> {
    let today = Utc::now().date_naive();
    let start = today + Days::new(cfg.occupied_from_days);
    let end = today + Days::new(cfg.occupied_to_days);

    let room_a = rooms
        .add(Room {
            id: 0,
            description: "A".to_string(),
        })
        .await?;
    let room_b = rooms
        .add(Room {
            id: 0,
            description: "B".to_string(),
        })
        .await?;

    for (room_id, customer_id) in [(room_a.id, 1), (room_b.id, 2)] {
        bookings
            .add(Booking {
                id: 0,
                room_id,
                customer_id,
                start_date: start,
                end_date: end,
                is_active: true,
            })
            .await?;
    }

    info!(%start, %end, "seeded 2 rooms, fully occupied window");
    Ok(())
}
