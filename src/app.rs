//! Indoor Admin App
//!
//! Root component: restores the session, provides the store and backend,
//! and switches between the login screen and the routed page.

use indoor_core::ApiConfig;
use leptos::ev;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::Layout;
use crate::context::Backend;
use crate::pages::{render_page, LoginPage};
use crate::storage::auth_service;
use crate::store::{current_route, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let user = auth_service().restore();
    let store = Store::new(AppState::new(user, current_route()));
    provide_context(store);

    let config = ApiConfig::from_env();
    log::info!("API {} ({:?})", config.base_url, config.data_source);
    provide_context(Backend::new(&config));

    // Back/forward buttons
    let popstate = window_event_listener(ev::popstate, move |_| store.route().set(current_route()));
    // The root lives as long as the page
    std::mem::forget(popstate);

    let logged_in = move || store.user().with(Option::is_some);

    view! {
        <Show when=logged_in fallback=|| view! { <LoginPage /> }>
            <Layout>{move || render_page(store.route().get())}</Layout>
        </Show>
    }
}
