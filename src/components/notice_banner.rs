//! Notice Banner Component
//!
//! Shows the current notice from the store; it hides itself after a few
//! seconds or when dismissed.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let store = use_app_store();

    move || {
        store.notice().get().map(|notice| {
            view! {
                <div class=notice.kind.class() role="status">
                    <span class="notice-message">{notice.message}</span>
                    <button class="notice-close" on:click=move |_| store.notice().set(None)>"×"</button>
                </div>
            }
        })
    }
}
