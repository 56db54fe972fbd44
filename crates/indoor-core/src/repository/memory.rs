//! In-memory Repository
//!
//! Backs the demo data source and the tests. Ids are assigned from a numeric
//! sequence that starts after the largest numeric id already present.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use super::traits::Repository;
use crate::domain::{Entity, RecordId};
use crate::error::{ApiError, ApiResult};

struct MemoryState<T> {
    records: Vec<T>,
    next_id: u64,
}

pub struct MemoryRepository<T> {
    state: Arc<Mutex<MemoryState<T>>>,
}

impl<T> Clone for MemoryRepository<T> {
    fn clone(&self) -> Self {
        Self { state: Arc::clone(&self.state) }
    }
}

impl<T: Entity> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> MemoryRepository<T> {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    pub fn with_records(records: Vec<T>) -> Self {
        let next_id = records
            .iter()
            .filter_map(|r| r.id().as_str().parse::<u64>().ok())
            .max()
            .map_or(1, |max| max + 1);
        Self { state: Arc::new(Mutex::new(MemoryState { records, next_id })) }
    }

    fn lock(&self) -> ApiResult<MutexGuard<'_, MemoryState<T>>> {
        self.state
            .lock()
            .map_err(|e| ApiError::Internal(format!("Memory store poisoned: {}", e)))
    }

    /// Copy of the stored records
    pub fn snapshot(&self) -> Vec<T> {
        self.lock().map(|state| state.records.clone()).unwrap_or_default()
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl<T: Entity> Repository<T> for MemoryRepository<T> {
    async fn list(&self) -> ApiResult<Vec<T>> {
        Ok(self.lock()?.records.clone())
    }

    async fn find_by_id(&self, id: &RecordId) -> ApiResult<Option<T>> {
        Ok(self.lock()?.records.iter().find(|r| r.id() == id).cloned())
    }

    async fn create(&self, entity: &T) -> ApiResult<T> {
        let mut state = self.lock()?;
        let mut record = entity.clone();
        if record.id().is_empty() || record.id().is_temporary() {
            record.set_id(RecordId::new(state.next_id.to_string()));
            state.next_id += 1;
        } else if state.records.iter().any(|r| r.id() == record.id()) {
            return Err(ApiError::Status { status: 409, body: format!("Duplicate id {}", record.id()) });
        }
        state.records.push(record.clone());
        Ok(record)
    }

    async fn update(&self, entity: &T) -> ApiResult<T> {
        let mut state = self.lock()?;
        let slot = state
            .records
            .iter_mut()
            .find(|r| r.id() == entity.id())
            .ok_or_else(|| ApiError::NotFound(entity.id().to_string()))?;
        *slot = entity.clone();
        Ok(entity.clone())
    }

    async fn delete(&self, id: &RecordId) -> ApiResult<()> {
        let mut state = self.lock()?;
        let index = state
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| ApiError::NotFound(id.to_string()))?;
        state.records.remove(index);
        Ok(())
    }
}
