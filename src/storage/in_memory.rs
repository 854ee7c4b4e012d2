//! In-memory implementation of RecordService for testing and development

use crate::core::engine;
use crate::core::filter::FilterSpec;
use crate::core::record::Record;
use crate::core::service::RecordService;
use crate::core::sort::Sort;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// In-memory record service implementation
///
/// Useful for testing and development. Uses RwLock for thread-safe access.
/// Records are held in an `IndexMap` so that `list` and `query` see them in
/// insertion order, which is what an unsorted query preserves.
#[derive(Clone)]
pub struct InMemoryRecordService<T: Record> {
    records: Arc<RwLock<IndexMap<Uuid, T>>>,
}

impl<T: Record> InMemoryRecordService<T> {
    /// Create an empty in-memory record service
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(IndexMap::new())),
        }
    }

    /// Create a service pre-seeded with a record collection
    pub fn with_records(records: Vec<T>) -> Self {
        let map: IndexMap<Uuid, T> = records
            .into_iter()
            .map(|record| (record.id(), record))
            .collect();
        tracing::debug!(count = map.len(), "Seeded in-memory record service");
        Self {
            records: Arc::new(RwLock::new(map)),
        }
    }

    /// Insert a record, replacing any record with the same id
    pub fn insert(&self, record: T) -> Result<()> {
        let mut records = self
            .records
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        records.insert(record.id(), record);

        Ok(())
    }

    /// Remove a record by id
    ///
    /// Uses a shifting removal so the insertion order of the remaining
    /// records is untouched.
    pub fn remove(&self, id: &Uuid) -> Result<Option<T>> {
        let mut records = self
            .records
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        Ok(records.shift_remove(id))
    }

    /// Number of stored records
    pub fn len(&self) -> Result<usize> {
        let records = self
            .records
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(records.len())
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl<T: Record> Default for InMemoryRecordService<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> RecordService<T> for InMemoryRecordService<T> {
    async fn get(&self, id: &Uuid) -> Result<Option<T>> {
        let records = self
            .records
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(records.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<T>> {
        let records = self
            .records
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(records.values().cloned().collect())
    }

    async fn query(&self, spec: &FilterSpec, sort: Option<&Sort>) -> Result<Vec<T>> {
        let snapshot = self.list().await?;
        let total = snapshot.len();

        let matching = engine::query(snapshot, spec, sort)?;
        tracing::debug!(
            resource = T::resource_name(),
            total,
            matching = matching.len(),
            "Query evaluated"
        );

        Ok(matching)
    }
}
