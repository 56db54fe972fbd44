//! Layout Component
//!
//! Sidebar menu, header with the page title and logout, and the notice
//! banner above the page content.

use indoor_core::nav::Route;
use leptos::prelude::*;

use crate::components::NoticeBanner;
use crate::storage::auth_service;
use crate::store::{store_navigate, use_app_store, AppStateStoreFields};

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let store = use_app_store();
    let current = move || store.route().get();

    let logout = move |_| {
        auth_service().logout();
        store.user().set(None);
        store_navigate(&store, Route::Dashboard);
    };

    view! {
        <div class="app-layout">
            <aside class="sidebar">
                <div class="sidebar-brand">
                    <h1>"Indoor Cycling Team"</h1>
                </div>
                <nav class="sidebar-nav">
                    {Route::MENU
                        .into_iter()
                        .map(|route| {
                            view! {
                                <a
                                    href=route.path()
                                    class=move || if current() == route { "nav-item active" } else { "nav-item" }
                                    on:click=move |ev: web_sys::MouseEvent| {
                                        ev.prevent_default();
                                        store_navigate(&store, route);
                                    }
                                >
                                    {route.label()}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
            </aside>

            <div class="main-column">
                <header class="top-bar">
                    <h2 class="page-title">{move || current().label()}</h2>
                    <div class="user-box">
                        <span class="user-name">
                            {move || store.user().get().map(|u| u.name).unwrap_or_default()}
                        </span>
                        <button class="btn btn-link" on:click=logout>"Cerrar sesión"</button>
                    </div>
                </header>
                <NoticeBanner />
                <main class="page-content">{children()}</main>
            </div>
        </div>
    }
}
