//! In-process collection backend.
//!
//! Used when `STORE_BACKEND=memory` and by the test suites. Observable
//! behaviour matches the PostgreSQL backend: store-assigned ids, insertion
//! ordering, merge-on-update, hard delete.

use async_trait::async_trait;
use indexmap::IndexMap;
use motorhub_core::types::{new_record_id, RecordId};
use tokio::sync::RwLock;

use super::{Collection, Record, StoreError};

/// Records of one kind keyed by id, kept in insertion order.
pub struct MemoryCollection<R: Record> {
    records: RwLock<IndexMap<RecordId, R>>,
}

impl<R: Record> Default for MemoryCollection<R> {
    fn default() -> Self {
        Self {
            records: RwLock::new(IndexMap::new()),
        }
    }
}

impl<R: Record> MemoryCollection<R> {
    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl<R: Record> Collection<R> for MemoryCollection<R> {
    async fn create(&self, input: &R::New) -> Result<R, StoreError> {
        let mut records = self.records.write().await;
        let id = loop {
            let candidate = new_record_id();
            if !records.contains_key(&candidate) {
                break candidate;
            }
        };
        let record = R::from_new(id, input);
        records.insert(record.id(), record.clone());
        tracing::debug!(entity = R::ENTITY, %id, "Stored record in memory");
        Ok(record)
    }

    async fn find_all(&self) -> Result<Vec<R>, StoreError> {
        Ok(self.records.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: RecordId) -> Result<Option<R>, StoreError> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn update_by_id(&self, id: RecordId, patch: &R::Patch) -> Result<Option<R>, StoreError> {
        let mut records = self.records.write().await;
        Ok(records.get_mut(&id).map(|record| {
            record.apply(patch);
            record.clone()
        }))
    }

    async fn delete_by_id(&self, id: RecordId) -> Result<bool, StoreError> {
        Ok(self.records.write().await.shift_remove(&id).is_some())
    }
}
