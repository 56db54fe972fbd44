//! CRUD orchestration
//!
//! Ties a `Repository` to a `Collection`: fetch on mount, and optimistic
//! create/update/delete that roll back when the API call fails.

use std::cell::RefCell;
use std::rc::Rc;

use crate::collection::Collection;
use crate::domain::{Entity, RecordId};
use crate::error::{ApiError, ApiResult};
use crate::repository::Repository;

/// Shared mutable access to a `Collection<T>`
pub trait CollectionCell<T> {
    fn update_with<R>(&self, f: impl FnOnce(&mut Collection<T>) -> R) -> R;
}

impl<T> CollectionCell<T> for Rc<RefCell<Collection<T>>> {
    fn update_with<R>(&self, f: impl FnOnce(&mut Collection<T>) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

fn record_failure<T: Entity, C: CollectionCell<T>>(cell: &C, action: &str, error: &ApiError) {
    log::error!("Failed to {}: {}", action, error);
    let message = error.to_string();
    cell.update_with(|c| c.set_error(message));
}

/// Fetch every record into the collection
pub async fn load<T, R, C>(repo: &R, cell: &C) -> ApiResult<()>
where
    T: Entity,
    R: Repository<T> + ?Sized,
    C: CollectionCell<T>,
{
    cell.update_with(|c| c.set_loading(true));
    match repo.list().await {
        Ok(records) => {
            log::debug!("Loaded {} records", records.len());
            cell.update_with(|c| c.replace_all(records));
            Ok(())
        }
        Err(e) => {
            record_failure(cell, "load records", &e);
            Err(e)
        }
    }
}

/// Show `draft` immediately, then create it remotely
pub async fn create<T, R, C>(repo: &R, cell: &C, draft: T) -> ApiResult<T>
where
    T: Entity,
    R: Repository<T> + ?Sized,
    C: CollectionCell<T>,
{
    let pending = cell.update_with(|c| c.insert_pending(draft.clone()));
    match repo.create(&draft).await {
        Ok(saved) => {
            if let Some(temp_id) = pending.temp_id() {
                cell.update_with(|c| c.confirm_insert(temp_id, saved.clone()));
            }
            Ok(saved)
        }
        Err(e) => {
            cell.update_with(|c| c.rollback(pending));
            record_failure(cell, "create record", &e);
            Err(e)
        }
    }
}

/// Replace the row immediately, then update it remotely
pub async fn update<T, R, C>(repo: &R, cell: &C, record: T) -> ApiResult<T>
where
    T: Entity,
    R: Repository<T> + ?Sized,
    C: CollectionCell<T>,
{
    let Some(pending) = cell.update_with(|c| c.apply_update(record.clone())) else {
        let e = ApiError::NotFound(record.id().to_string());
        record_failure(cell, "update record", &e);
        return Err(e);
    };
    match repo.update(&record).await {
        Ok(saved) => {
            cell.update_with(|c| c.apply_update(saved.clone()));
            Ok(saved)
        }
        Err(e) => {
            cell.update_with(|c| c.rollback(pending));
            record_failure(cell, &format!("update record {}", record.id()), &e);
            Err(e)
        }
    }
}

/// Drop the row immediately, then delete it remotely
pub async fn remove<T, R, C>(repo: &R, cell: &C, id: &RecordId) -> ApiResult<()>
where
    T: Entity,
    R: Repository<T> + ?Sized,
    C: CollectionCell<T>,
{
    let Some(pending) = cell.update_with(|c| c.remove(id)) else {
        let e = ApiError::NotFound(id.to_string());
        record_failure(cell, "delete record", &e);
        return Err(e);
    };
    match repo.delete(id).await {
        Ok(()) => Ok(()),
        Err(e) => {
            cell.update_with(|c| c.rollback(pending));
            record_failure(cell, &format!("delete record {}", id), &e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;
    use crate::repository::MemoryRepository;
    use async_trait::async_trait;

    /// Repository whose every call fails
    struct Offline;

    #[async_trait]
    impl Repository<Category> for Offline {
        async fn list(&self) -> ApiResult<Vec<Category>> {
            Err(ApiError::Status { status: 503, body: "offline".into() })
        }
        async fn find_by_id(&self, _id: &RecordId) -> ApiResult<Option<Category>> {
            Err(ApiError::Status { status: 503, body: "offline".into() })
        }
        async fn create(&self, _entity: &Category) -> ApiResult<Category> {
            Err(ApiError::Status { status: 503, body: "offline".into() })
        }
        async fn update(&self, _entity: &Category) -> ApiResult<Category> {
            Err(ApiError::Status { status: 503, body: "offline".into() })
        }
        async fn delete(&self, _id: &RecordId) -> ApiResult<()> {
            Err(ApiError::Status { status: 503, body: "offline".into() })
        }
    }

    fn category(id: &str, name: &str) -> Category {
        Category { id: RecordId::from(id), name: name.into() }
    }

    fn cell(records: Vec<Category>) -> Rc<RefCell<Collection<Category>>> {
        Rc::new(RefCell::new(Collection::from_records(records)))
    }

    #[tokio::test]
    async fn test_load_and_create() {
        let repo = MemoryRepository::with_records(vec![category("1", "Piezas")]);
        let list = cell(Vec::new());

        load(&repo, &list).await.unwrap();
        assert_eq!(list.borrow().len(), 1);

        let saved = create(&repo, &list, category("", "Ropa")).await.unwrap();
        assert_eq!(saved.id.as_str(), "2");
        let list = list.borrow();
        assert_eq!(list.len(), 2);
        assert!(list.iter().all(|c| !c.id.is_temporary()));
    }

    #[tokio::test]
    async fn test_update_and_remove() {
        let repo = MemoryRepository::with_records(vec![category("1", "Piezas")]);
        let list = cell(repo.snapshot());

        update(&repo, &list, category("1", "Repuestos")).await.unwrap();
        assert_eq!(repo.snapshot()[0].name, "Repuestos");
        assert_eq!(list.borrow().get(&RecordId::from("1")).unwrap().name, "Repuestos");

        remove(&repo, &list, &RecordId::from("1")).await.unwrap();
        assert!(list.borrow().is_empty());
        assert!(repo.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_failures_roll_back() {
        let list = cell(vec![category("1", "Piezas"), category("2", "Ropa")]);
        let before = list.borrow().clone();

        assert!(create(&Offline, &list, category("", "Nueva")).await.is_err());
        assert!(update(&Offline, &list, category("1", "Cambio")).await.is_err());
        assert!(remove(&Offline, &list, &RecordId::from("2")).await.is_err());

        let after = list.borrow();
        assert_eq!(after.as_slice(), before.as_slice());
        assert!(after.error().unwrap().contains("503"));
    }

    #[tokio::test]
    async fn test_load_failure_keeps_rows() {
        let list = cell(vec![category("1", "Piezas")]);
        assert!(load(&Offline, &list).await.is_err());
        let list = list.borrow();
        assert_eq!(list.len(), 1);
        assert!(!list.is_loading());
        assert!(list.error().is_some());
    }
}
