//! Data source selection
//!
//! Pages hold a `DataSource<T>` and never care whether records come from the
//! REST API or the seeded in-memory store.

use async_trait::async_trait;

use super::memory::MemoryRepository;
use super::rest::RestRepository;
use super::traits::{Repository, Resource};
use crate::config::{ApiConfig, DataSourceKind};
use crate::domain::RecordId;
use crate::error::ApiResult;
use crate::http::HttpClient;

pub enum DataSource<T> {
    Remote(RestRepository<T>),
    Memory(MemoryRepository<T>),
}

impl<T> Clone for DataSource<T> {
    fn clone(&self) -> Self {
        match self {
            DataSource::Remote(repo) => DataSource::Remote(repo.clone()),
            DataSource::Memory(repo) => DataSource::Memory(repo.clone()),
        }
    }
}

impl<T: Resource> DataSource<T> {
    /// Remote repository, or a memory repository holding `seed` in demo mode
    pub fn from_config(config: &ApiConfig, client: &HttpClient, seed: impl FnOnce() -> Vec<T>) -> Self {
        match config.data_source {
            DataSourceKind::Remote => DataSource::Remote(RestRepository::new(client.clone())),
            DataSourceKind::Demo => DataSource::Memory(MemoryRepository::with_records(seed())),
        }
    }

    pub fn kind(&self) -> DataSourceKind {
        match self {
            DataSource::Remote(_) => DataSourceKind::Remote,
            DataSource::Memory(_) => DataSourceKind::Demo,
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl<T: Resource> Repository<T> for DataSource<T> {
    async fn list(&self) -> ApiResult<Vec<T>> {
        match self {
            DataSource::Remote(repo) => repo.list().await,
            DataSource::Memory(repo) => repo.list().await,
        }
    }

    async fn find_by_id(&self, id: &RecordId) -> ApiResult<Option<T>> {
        match self {
            DataSource::Remote(repo) => repo.find_by_id(id).await,
            DataSource::Memory(repo) => repo.find_by_id(id).await,
        }
    }

    async fn create(&self, entity: &T) -> ApiResult<T> {
        match self {
            DataSource::Remote(repo) => repo.create(entity).await,
            DataSource::Memory(repo) => repo.create(entity).await,
        }
    }

    async fn update(&self, entity: &T) -> ApiResult<T> {
        match self {
            DataSource::Remote(repo) => repo.update(entity).await,
            DataSource::Memory(repo) => repo.update(entity).await,
        }
    }

    async fn delete(&self, id: &RecordId) -> ApiResult<()> {
        match self {
            DataSource::Remote(repo) => repo.delete(id).await,
            DataSource::Memory(repo) => repo.delete(id).await,
        }
    }
}
