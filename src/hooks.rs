//! Page Hooks
//!
//! Glue between the core CRUD helpers and Leptos signals. Collections fetch
//! on mount; save and delete report through the notice banner.

use chrono::NaiveDate;
use indoor_core::crud::{self, CollectionCell};
use indoor_core::domain::RecordId;
use indoor_core::forms::{FormErrors, RecordForm};
use indoor_core::repository::{DataSource, Resource};
use indoor_core::search::Searchable;
use indoor_core::Collection;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::store::{store_error, store_success, use_app_store, AppStore};

/// A collection signal the core CRUD helpers can mutate
pub struct SignalCell<T: Send + Sync + 'static>(pub RwSignal<Collection<T>>);

impl<T: Send + Sync + 'static> CollectionCell<T> for SignalCell<T> {
    fn update_with<R>(&self, f: impl FnOnce(&mut Collection<T>) -> R) -> R {
        // The page may be gone by the time a request finishes
        match self.0.try_write() {
            Some(mut guard) => f(&mut *guard),
            None => f(&mut Collection::default()),
        }
    }
}

/// Today in the browser's local time zone
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

// ========================
// Collections
// ========================

/// A page's handle on one collection: the data source, the rows it loaded
/// and the store used to report outcomes
pub struct Crud<T: Send + Sync + 'static> {
    repo: StoredValue<DataSource<T>>,
    pub records: RwSignal<Collection<T>>,
    store: AppStore,
}

impl<T: Send + Sync + 'static> Clone for Crud<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for Crud<T> {}

/// Collection loaded from `repo` when the page mounts
pub fn use_crud<T: Resource>(repo: DataSource<T>) -> Crud<T> {
    let crud = Crud {
        repo: StoredValue::new(repo),
        records: RwSignal::new(Collection::new()),
        store: use_app_store(),
    };
    crud.reload();
    crud
}

impl<T: Resource> Crud<T> {
    pub fn repo(&self) -> DataSource<T> {
        self.repo.get_value()
    }

    /// Fetch every record again
    pub fn reload(&self) {
        let (repo, records, store) = (self.repo(), self.records, self.store);
        spawn_local(async move {
            if let Err(e) = crud::load(&repo, &SignalCell(records)).await {
                store_error(&store, format!("No se pudieron cargar los datos: {}", e));
            }
        });
    }

    /// All loaded rows (tracked)
    pub fn rows(&self) -> Vec<T> {
        self.records.with(|c| c.as_slice().to_vec())
    }

    /// Rows matching the search box (tracked)
    pub fn search(&self, term: &str) -> Vec<T>
    where
        T: Searchable,
    {
        self.records.with(|c| c.filtered(term))
    }

    pub fn is_loading(&self) -> bool {
        self.records.with(|c| c.is_loading())
    }

    /// Create when the record has no id yet, update otherwise
    pub fn save(&self, record: T, done: &'static str) {
        let (repo, records, store) = (self.repo(), self.records, self.store);
        spawn_local(async move {
            let cell = SignalCell(records);
            let result = if record.id().is_empty() {
                crud::create(&repo, &cell, record).await.map(|_| ())
            } else {
                crud::update(&repo, &cell, record).await.map(|_| ())
            };
            match result {
                Ok(()) => store_success(&store, done),
                Err(e) => store_error(&store, format!("Error al guardar: {}", e)),
            }
        });
    }

    pub fn delete(&self, id: RecordId) {
        let (repo, records, store) = (self.repo(), self.records, self.store);
        spawn_local(async move {
            match crud::remove(&repo, &SignalCell(records), &id).await {
                Ok(()) => store_success(&store, "Registro eliminado"),
                Err(e) => store_error(&store, format!("Error al eliminar: {}", e)),
            }
        });
    }
}

// ========================
// Form modal
// ========================

/// Value + input handler for one text field of a form
#[derive(Clone, Copy)]
pub struct FieldBinding {
    pub value: Signal<String>,
    pub on_input: Callback<String>,
}

/// Create/edit modal state for one record form
pub struct FormModal<F: Send + Sync + 'static> {
    pub open: RwSignal<bool>,
    pub editing: RwSignal<bool>,
    pub form: RwSignal<F>,
    pub errors: RwSignal<FormErrors>,
}

impl<F: Send + Sync + 'static> Clone for FormModal<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: Send + Sync + 'static> Copy for FormModal<F> {}

impl<F: RecordForm> FormModal<F> {
    pub fn new() -> Self {
        Self {
            open: RwSignal::new(false),
            editing: RwSignal::new(false),
            form: RwSignal::new(F::default()),
            errors: RwSignal::new(FormErrors::new()),
        }
    }

    pub fn open_new(&self) {
        self.open_with(F::default(), false);
    }

    pub fn open_edit(&self, record: &F::Record) {
        self.open_with(F::from_record(record), true);
    }

    fn open_with(&self, form: F, editing: bool) {
        self.form.set(form);
        self.errors.set(FormErrors::new());
        self.editing.set(editing);
        self.open.set(true);
    }

    pub fn close(&self) {
        self.open.set(false);
    }

    /// "Nuevo X" / "Editar X"
    pub fn title(&self, noun: &'static str) -> Signal<String> {
        let editing = self.editing;
        Signal::derive(move || if editing.get() { format!("Editar {noun}") } else { format!("Nuevo {noun}") })
    }

    /// Bind a text field to the form
    pub fn bind(&self, get: fn(&F) -> &String, set: fn(&mut F, String)) -> FieldBinding {
        let form = self.form;
        FieldBinding {
            value: Signal::derive(move || form.with(|f| get(f).clone())),
            on_input: Callback::new(move |value: String| form.update(|f| set(f, value))),
        }
    }

    /// Error message for `field`, if any
    pub fn error(&self, field: &'static str) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
    }

    /// Validate, then save through `crud`; errors keep the modal open
    pub fn submit<T>(&self, crud: Crud<T>, saved: &'static str)
    where
        F: RecordForm<Record = T>,
        T: Resource,
    {
        match self.form.with_untracked(|f| f.validate()) {
            Ok(record) => {
                self.close();
                crud.save(record, saved);
            }
            Err(errors) => self.errors.set(errors),
        }
    }
}
