//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.
//! Implementations talk to the REST API or keep records in memory.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::{
    Bike, Category, Client, Employee, Entity, InventoryItem, MaintenanceRecord, RecordId, Sale, Service, Simulator,
    TrainingAssignment, TrainingPlan,
};
use crate::error::ApiResult;

/// Core repository trait for CRUD operations
///
/// Generic over any Entity type. Futures are `Send` on the host; in the
/// browser they run on the single UI thread.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait Repository<T: Entity>: Send + Sync {
    /// List all entities
    async fn list(&self) -> ApiResult<Vec<T>>;

    /// Find entity by ID
    async fn find_by_id(&self, id: &RecordId) -> ApiResult<Option<T>>;

    /// Create a new entity; returns the stored record with its assigned id
    async fn create(&self, entity: &T) -> ApiResult<T>;

    /// Update an existing entity
    async fn update(&self, entity: &T) -> ApiResult<T>;

    /// Delete entity by ID
    async fn delete(&self, id: &RecordId) -> ApiResult<()>;
}

/// An entity served from its own REST collection
pub trait Resource: Entity + Serialize + DeserializeOwned {
    /// Path segment under the API base URL
    const COLLECTION: &'static str;
}

macro_rules! impl_resource {
    ($($ty:ty => $path:literal),+ $(,)?) => {
        $(
            impl Resource for $ty {
                const COLLECTION: &'static str = $path;
            }
        )+
    };
}

impl_resource! {
    Client => "clients",
    Simulator => "simulators",
    TrainingPlan => "training-plans",
    TrainingAssignment => "training-assignments",
    Service => "services",
    InventoryItem => "inventory",
    Category => "categories",
    Bike => "bikes",
    Employee => "employees",
    MaintenanceRecord => "maintenance",
    Sale => "sales",
}

/// Maintenance history of one bike, newest first
pub async fn list_for_bike<R>(repo: &R, bike_id: &RecordId) -> ApiResult<Vec<MaintenanceRecord>>
where
    R: Repository<MaintenanceRecord> + ?Sized,
{
    let mut records: Vec<_> = repo.list().await?.into_iter().filter(|r| &r.bike_id == bike_id).collect();
    records.sort_by(|a, b| b.service_date.cmp(&a.service_date));
    Ok(records)
}
