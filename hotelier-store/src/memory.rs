use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use hotelier_core::models::{Booking, Room};
use hotelier_core::repository::{Repository, RepositoryError};

/// Storage identity for records held by [`InMemoryRepository`].
pub trait Entity: Clone + Send + Sync + 'static {
    fn id(&self) -> i32;
    fn with_id(self, id: i32) -> Self;
}

impl Entity for Room {
    fn id(&self) -> i32 {
        self.id
    }

    fn with_id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }
}

impl Entity for Booking {
    fn id(&self) -> i32 {
        self.id
    }

    fn with_id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }
}

/// In-memory backing store. Records keep insertion order, which is the
/// catalog order the allocation engine's tie-break depends on. `get_all`
/// hands out a clone of the whole vec, so each engine call computes over
/// a consistent point-in-time snapshot.
pub struct InMemoryRepository<T> {
    records: RwLock<Vec<T>>,
    next_id: AtomicI32,
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            next_id: AtomicI32::new(1),
        }
    }

    /// Start from pre-assigned records; the id counter continues past
    /// the highest existing id.
    pub fn with_records(records: Vec<T>) -> Self {
        let next = records.iter().map(Entity::id).max().unwrap_or(0) + 1;
        Self {
            records: RwLock::new(records),
            next_id: AtomicI32::new(next),
        }
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    async fn get_all(&self) -> Result<Vec<T>, RepositoryError> {
        Ok(self.records.read().await.clone())
    }

    async fn add(&self, entity: T) -> Result<T, RepositoryError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let entity = entity.with_id(id);
        self.records.write().await.push(entity.clone());
        Ok(entity)
    }
}
