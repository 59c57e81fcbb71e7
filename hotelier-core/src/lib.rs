pub mod manager;
pub mod models;
pub mod repository;

pub use manager::{BookingManager, NO_ROOM};
pub use models::{Booking, BookingDraft, Room};
pub use repository::{Repository, RepositoryError};

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    /// The requested date range is rejected before any storage access:
    /// either the start date is not strictly in the future (where that
    /// check applies) or the start date is later than the end date.
    #[error("invalid date range: {0}")]
    InvalidRange(&'static str),

    /// A failure from the underlying room or booking store, passed
    /// through untranslated.
    #[error("storage error: {0}")]
    Store(#[from] RepositoryError),
}

pub type BookingResult<T> = Result<T, BookingError>;
