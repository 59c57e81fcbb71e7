use async_trait::async_trait;

pub type RepositoryError = Box<dyn std::error::Error + Send + Sync>;

/// Generic data access seam for the allocation engine.
///
/// `get_all` must return a consistent point-in-time snapshot, in the
/// store's stable insertion order (room selection depends on catalog
/// order as a tie-break). `add` assigns persistence identity and stores
/// the record. The engine needs no update or delete capability.
#[async_trait]
pub trait Repository<T>: Send + Sync {
    async fn get_all(&self) -> Result<Vec<T>, RepositoryError>;

    async fn add(&self, entity: T) -> Result<T, RepositoryError>;
}
