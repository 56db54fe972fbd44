//! Login Page
//!
//! Local credential check; the session user is persisted so a reload keeps
//! the admin logged in.

use indoor_core::forms::{FormErrors, LoginForm};
use leptos::prelude::*;

use crate::storage::auth_service;
use crate::store::{current_route, use_app_store, AppStateStoreFields};

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = use_app_store();
    let form = RwSignal::new(LoginForm::default());
    let errors = RwSignal::new(FormErrors::new());
    let (failure, set_failure) = signal::<Option<String>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_failure.set(None);
        let (email, password) = match form.with_untracked(|f| f.validate_fields()) {
            Ok(fields) => fields,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FormErrors::new());

        match auth_service().login(&email, &password) {
            Ok(user) => {
                store.route().set(current_route());
                store.user().set(Some(user));
            }
            Err(e) => set_failure.set(Some(e.to_string())),
        }
    };

    let field_error = move |field: &'static str| move || errors.with(|e| e.get(field).map(str::to_string));

    view! {
        <div class="login-screen">
            <form class="login-card" on:submit=on_submit>
                <h1 class="login-title">"Indoor Cycling Team"</h1>
                <p class="login-subtitle">"Inicia sesión para continuar"</p>

                {move || failure.get().map(|message| view! { <div class="notice notice-error">{message}</div> })}

                <label class="form-field">
                    <span class="form-label">"Correo electrónico"</span>
                    <input
                        type="email"
                        class="form-input"
                        autocomplete="username"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    {move || field_error("email")().map(|m| view! { <p class="field-error">{m}</p> })}
                </label>

                <label class="form-field">
                    <span class="form-label">"Contraseña"</span>
                    <input
                        type="password"
                        class="form-input"
                        autocomplete="current-password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    {move || field_error("password")().map(|m| view! { <p class="field-error">{m}</p> })}
                </label>

                <button type="submit" class="btn btn-primary btn-block">"Iniciar sesión"</button>
            </form>
        </div>
    }
}
