//! Optimistic list state
//!
//! A `Collection<T>` is what every list page renders. Mutations are applied
//! locally first and hand back a `Pending<T>` token that restores the exact
//! previous state if the API call fails.

use crate::domain::{Entity, RecordId};
use crate::search::Searchable;

#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T> {
    items: Vec<T>,
    loading: bool,
    error: Option<String>,
    next_temp: u64,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new(), loading: false, error: None, next_temp: 1 }
    }
}

/// Undo token for an optimistic mutation
#[derive(Debug, Clone, PartialEq)]
pub enum Pending<T> {
    Insert { temp_id: RecordId },
    Update { previous: T },
    Remove { index: usize, record: T },
}

impl<T> Pending<T> {
    /// Placeholder id of an optimistic insert
    pub fn temp_id(&self) -> Option<&RecordId> {
        match self {
            Pending::Insert { temp_id } => Some(temp_id),
            _ => None,
        }
    }
}

impl<T: Entity> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(items: Vec<T>) -> Self {
        Self { items, ..Self::default() }
    }

    // ========================
    // Fetch state
    // ========================

    /// Replace every row after a successful fetch
    pub fn replace_all(&mut self, items: Vec<T>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
        if loading {
            self.error = None;
        }
    }

    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
        self.loading = false;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    // ========================
    // Optimistic mutations
    // ========================

    /// Append `draft` under a fresh `tmp-N` id
    pub fn insert_pending(&mut self, mut draft: T) -> Pending<T> {
        let temp_id = RecordId::temporary(self.next_temp);
        self.next_temp += 1;
        draft.set_id(temp_id.clone());
        self.items.push(draft);
        Pending::Insert { temp_id }
    }

    /// Replace the row with the same id; `None` if it is not loaded
    pub fn apply_update(&mut self, record: T) -> Option<Pending<T>> {
        let slot = self.items.iter_mut().find(|r| r.id() == record.id())?;
        let previous = std::mem::replace(slot, record);
        Some(Pending::Update { previous })
    }

    /// Remove the row with `id`; `None` if it is not loaded
    pub fn remove(&mut self, id: &RecordId) -> Option<Pending<T>> {
        let index = self.items.iter().position(|r| r.id() == id)?;
        let record = self.items.remove(index);
        Some(Pending::Remove { index, record })
    }

    /// Swap the placeholder row for the record the API returned
    pub fn confirm_insert(&mut self, temp_id: &RecordId, saved: T) {
        match self.items.iter_mut().find(|r| r.id() == temp_id) {
            Some(slot) => *slot = saved,
            None => self.items.push(saved),
        }
    }

    /// Undo an optimistic mutation
    pub fn rollback(&mut self, pending: Pending<T>) {
        match pending {
            Pending::Insert { temp_id } => self.items.retain(|r| r.id() != &temp_id),
            Pending::Update { previous } => {
                if let Some(slot) = self.items.iter_mut().find(|r| r.id() == previous.id()) {
                    *slot = previous;
                }
            }
            Pending::Remove { index, record } => {
                let index = index.min(self.items.len());
                self.items.insert(index, record);
            }
        }
    }

    // ========================
    // Queries
    // ========================

    pub fn get(&self, id: &RecordId) -> Option<&T> {
        self.items.iter().find(|r| r.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Entity + Searchable> Collection<T> {
    /// Rows matching the search box
    pub fn filtered(&self, term: &str) -> Vec<T> {
        self.items.iter().filter(|r| r.matches(term)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, RecordId};

    fn category(id: &str, name: &str) -> Category {
        Category { id: RecordId::from(id), name: name.into() }
    }

    fn names(collection: &Collection<Category>) -> Vec<&str> {
        collection.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_insert_then_confirm() {
        let mut list = Collection::from_records(vec![category("1", "Piezas")]);
        let pending = list.insert_pending(category("", "Ropa"));
        let temp_id = pending.temp_id().cloned().unwrap();
        assert!(temp_id.is_temporary());
        assert_eq!(list.len(), 2);

        list.confirm_insert(&temp_id, category("2", "Ropa"));
        assert!(list.get(&temp_id).is_none());
        assert_eq!(list.get(&RecordId::from("2")).unwrap().name, "Ropa");
    }

    #[test]
    fn test_rollbacks_restore_previous_state() {
        let original = Collection::from_records(vec![category("1", "Piezas"), category("2", "Ropa"), category("3", "Accesorios")]);
        let mut list = original.clone();

        let insert = list.insert_pending(category("", "Nueva"));
        list.rollback(insert);
        assert_eq!(names(&list), names(&original));

        let update = list.apply_update(category("2", "Textil")).unwrap();
        assert_eq!(list.get(&RecordId::from("2")).unwrap().name, "Textil");
        list.rollback(update);
        assert_eq!(names(&list), names(&original));

        let removal = list.remove(&RecordId::from("2")).unwrap();
        assert_eq!(names(&list), vec!["Piezas", "Accesorios"]);
        list.rollback(removal);
        assert_eq!(names(&list), vec!["Piezas", "Ropa", "Accesorios"]);
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let mut list = Collection::from_records(vec![category("1", "Piezas")]);
        assert!(list.apply_update(category("9", "X")).is_none());
        assert!(list.remove(&RecordId::from("9")).is_none());
    }

    #[test]
    fn test_fetch_state() {
        let mut list: Collection<Category> = Collection::new();
        list.set_loading(true);
        assert!(list.is_loading());
        list.set_error("Network down");
        assert!(!list.is_loading());
        assert_eq!(list.error(), Some("Network down"));
        list.replace_all(vec![category("1", "Piezas")]);
        assert!(list.error().is_none());
        assert_eq!(list.filtered("pie").len(), 1);
        assert!(list.filtered("zzz").is_empty());
    }
}
