//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use gloo_timers::future::TimeoutFuture;
use indoor_core::domain::User;
use indoor_core::nav::Route;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use wasm_bindgen::JsValue;

/// Notices hide themselves after this long
const NOTICE_TIMEOUT_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "notice notice-success",
            NoticeKind::Error => "notice notice-error",
        }
    }
}

/// Banner message shown above the page
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Logged-in user; `None` shows the login page
    pub user: Option<User>,
    /// Page currently shown
    pub route: Route,
    /// Banner message, if any
    pub notice: Option<Notice>,
    /// Last notice id handed out
    pub notice_seq: u64,
}

impl AppState {
    pub fn new(user: Option<User>, route: Route) -> Self {
        Self { user, route, ..Default::default() }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Route for the current `location.pathname`
pub fn current_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| Route::from_path(&path))
        .unwrap_or_default()
}

/// Push a history entry and switch page
pub fn store_navigate(store: &AppStore, route: Route) {
    if store.route().get_untracked() == route {
        return;
    }
    let pushed = web_sys::window()
        .and_then(|w| w.history().ok())
        .map(|history| history.push_state_with_url(&JsValue::NULL, "", Some(route.path())));
    if let Some(Err(e)) = pushed {
        log::warn!("history.pushState failed: {:?}", e);
    }
    store.route().set(route);
}

/// Show a banner that hides itself after a few seconds
pub fn store_notify(store: &AppStore, kind: NoticeKind, message: impl Into<String>) {
    let message = message.into();
    match kind {
        NoticeKind::Error => log::warn!("{}", message),
        NoticeKind::Success => log::info!("{}", message),
    }

    let id = {
        let seq_field = store.notice_seq();
        let mut seq = seq_field.write();
        *seq += 1;
        *seq
    };
    store.notice().set(Some(Notice { id, kind, message }));

    let store = *store;
    spawn_local(async move {
        TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
        let still_shown = store.notice().get_untracked().is_some_and(|n| n.id == id);
        if still_shown {
            store.notice().set(None);
        }
    });
}

pub fn store_error(store: &AppStore, message: impl Into<String>) {
    store_notify(store, NoticeKind::Error, message);
}

pub fn store_success(store: &AppStore, message: impl Into<String>) {
    store_notify(store, NoticeKind::Success, message);
}
