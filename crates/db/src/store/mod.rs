//! The catalog store capability set.
//!
//! Handlers never talk to PostgreSQL directly; they go through a
//! [`Collection`] per record kind, bundled in a [`CatalogStore`]. Two
//! backends exist: [`postgres::PgCollection`] and [`memory::MemoryCollection`].

pub mod memory;
pub mod postgres;

use std::sync::Arc;

use async_trait::async_trait;
use motorhub_core::types::RecordId;
use serde::Serialize;

use crate::models::part::Part;
use crate::models::vehicle::Vehicle;
use crate::DbPool;

/// Failures raised by a store backend. Never retried.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Store call timed out")]
    TimedOut,
}

/// A record kind that can live in a [`Collection`].
pub trait Record: Clone + Serialize + Send + Sync + 'static {
    /// Human-readable entity name used in error messages.
    const ENTITY: &'static str;
    /// Validated insert input.
    type New: Send + Sync;
    /// Partial update; `None` fields are left unchanged.
    type Patch: Send + Sync;

    fn id(&self) -> RecordId;

    fn from_new(id: RecordId, input: &Self::New) -> Self;

    /// Merge the present fields of `patch` into `self`.
    fn apply(&mut self, patch: &Self::Patch);
}

/// Key-addressed storage for one record kind.
///
/// Every method is a single call against the backend. Concurrent writers to
/// the same id are last-write-wins.
#[async_trait]
pub trait Collection<R: Record>: Send + Sync {
    /// Store a new record; the backend assigns its id.
    async fn create(&self, input: &R::New) -> Result<R, StoreError>;

    /// All records, oldest first.
    async fn find_all(&self) -> Result<Vec<R>, StoreError>;

    async fn find_by_id(&self, id: RecordId) -> Result<Option<R>, StoreError>;

    /// Returns `None` if no record has this id. An empty patch is a no-op.
    async fn update_by_id(&self, id: RecordId, patch: &R::Patch) -> Result<Option<R>, StoreError>;

    /// Returns `true` if a record was removed.
    async fn delete_by_id(&self, id: RecordId) -> Result<bool, StoreError>;

    /// Cheap reachability probe for health reporting.
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// The vehicle and part collections handed to the HTTP layer.
///
/// Cheap to clone; both collections sit behind `Arc`.
#[derive(Clone)]
pub struct CatalogStore {
    pub vehicles: Arc<dyn Collection<Vehicle>>,
    pub parts: Arc<dyn Collection<Part>>,
}

impl CatalogStore {
    pub fn new(vehicles: Arc<dyn Collection<Vehicle>>, parts: Arc<dyn Collection<Part>>) -> Self {
        Self { vehicles, parts }
    }

    /// Both collections backed by the given PostgreSQL pool.
    pub fn postgres(pool: DbPool) -> Self {
        let collection = Arc::new(postgres::PgCollection::new(pool));
        Self {
            vehicles: collection.clone(),
            parts: collection,
        }
    }

    /// Both collections held in process memory. Contents are lost on exit.
    pub fn in_memory() -> Self {
        Self {
            vehicles: Arc::new(memory::MemoryCollection::<Vehicle>::default()),
            parts: Arc::new(memory::MemoryCollection::<Part>::default()),
        }
    }

    /// Probe every backing collection.
    pub async fn ping(&self) -> Result<(), StoreError> {
        self.vehicles.ping().await?;
        self.parts.ping().await
    }
}
