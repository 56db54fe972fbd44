//! Search Box Component

use leptos::prelude::*;

#[component]
pub fn SearchBox(term: RwSignal<String>, #[prop(into)] placeholder: String) -> impl IntoView {
    view! {
        <div class="search-box">
            <input
                type="search"
                class="search-input"
                placeholder=placeholder
                prop:value=move || term.get()
                on:input=move |ev| term.set(event_target_value(&ev))
            />
        </div>
    }
}
