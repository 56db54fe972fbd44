//! REST Repository
//!
//! One `RestRepository<T>` per collection: GET list, GET by id, POST create,
//! PUT update and DELETE, all against `{base}/{collection}[/{id}]`.

use std::marker::PhantomData;

use async_trait::async_trait;

use super::traits::{Repository, Resource};
use crate::domain::RecordId;
use crate::error::{ApiError, ApiResult};
use crate::http::{collection_url, decode, record_url, ApiRequest, HttpClient};

pub struct RestRepository<T> {
    client: HttpClient,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for RestRepository<T> {
    fn clone(&self) -> Self {
        Self { client: self.client.clone(), _marker: PhantomData }
    }
}

impl<T: Resource> RestRepository<T> {
    pub fn new(client: HttpClient) -> Self {
        Self { client, _marker: PhantomData }
    }

    // ========================
    // Request builders
    // ========================

    pub fn list_request(&self) -> ApiRequest {
        ApiRequest::get(collection_url(self.client.base_url(), T::COLLECTION))
    }

    pub fn find_request(&self, id: &RecordId) -> ApiResult<ApiRequest> {
        Self::require_saved(id, "find")?;
        Ok(ApiRequest::get(record_url(self.client.base_url(), T::COLLECTION, id.as_str())))
    }

    /// POST body without any local placeholder id
    pub fn create_request(&self, entity: &T) -> ApiResult<ApiRequest> {
        let mut body = entity.clone();
        if body.id().is_temporary() {
            body.set_id(RecordId::default());
        }
        ApiRequest::post(collection_url(self.client.base_url(), T::COLLECTION), &body)
    }

    pub fn update_request(&self, entity: &T) -> ApiResult<ApiRequest> {
        let id = entity.id();
        Self::require_saved(id, "update")?;
        ApiRequest::put(record_url(self.client.base_url(), T::COLLECTION, id.as_str()), entity)
    }

    pub fn delete_request(&self, id: &RecordId) -> ApiResult<ApiRequest> {
        Self::require_saved(id, "delete")?;
        Ok(ApiRequest::delete(record_url(self.client.base_url(), T::COLLECTION, id.as_str())))
    }

    /// Placeholder and empty ids never reach `{collection}/{id}` URLs
    fn require_saved(id: &RecordId, action: &str) -> ApiResult<()> {
        if id.is_empty() || id.is_temporary() {
            return Err(ApiError::Internal(format!(
                "Cannot {} {} record without a saved id",
                action,
                T::COLLECTION
            )));
        }
        Ok(())
    }

    /// Decode a saved record, falling back to what was sent when the API
    /// answers with an empty body or omits the id
    fn saved_record(sent: &T, response: Option<serde_json::Value>) -> ApiResult<T> {
        let Some(value) = response else {
            return Ok(sent.clone());
        };
        let mut saved: T = decode(value)?;
        if saved.id().is_empty() {
            saved.set_id(sent.id().clone());
        }
        Ok(saved)
    }

    /// Like `saved_record`, but a create the API answered without a real id
    /// is an error so the optimistic row is rolled back
    pub(crate) fn created_record(sent: &T, response: Option<serde_json::Value>) -> ApiResult<T> {
        let saved = Self::saved_record(sent, response)?;
        if saved.id().is_empty() || saved.id().is_temporary() {
            return Err(ApiError::Internal(format!(
                "API did not return an id for the new {} record",
                T::COLLECTION
            )));
        }
        Ok(saved)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl<T: Resource> Repository<T> for RestRepository<T> {
    async fn list(&self) -> ApiResult<Vec<T>> {
        match self.client.execute(self.list_request()).await? {
            Some(value) => decode(value),
            None => Ok(Vec::new()),
        }
    }

    async fn find_by_id(&self, id: &RecordId) -> ApiResult<Option<T>> {
        let request = self.find_request(id)?;
        match self.client.execute(request).await {
            Ok(Some(value)) => Ok(Some(decode(value)?)),
            Ok(None) | Err(ApiError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn create(&self, entity: &T) -> ApiResult<T> {
        let request = self.create_request(entity)?;
        let response = self.client.execute(request).await?;
        let saved = Self::created_record(entity, response)?;
        log::info!("Created {} record {}", T::COLLECTION, saved.id());
        Ok(saved)
    }

    async fn update(&self, entity: &T) -> ApiResult<T> {
        let request = self.update_request(entity)?;
        let response = self.client.execute(request).await?;
        let saved = Self::saved_record(entity, response)?;
        log::info!("Updated {} record {}", T::COLLECTION, saved.id());
        Ok(saved)
    }

    async fn delete(&self, id: &RecordId) -> ApiResult<()> {
        let request = self.delete_request(id)?;
        self.client.execute(request).await?;
        log::info!("Deleted {} record {}", T::COLLECTION, id);
        Ok(())
    }
}
