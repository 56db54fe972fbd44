//! Modal Component
//!
//! Overlay holding a create/edit form with Cancel and Save buttons.

use leptos::prelude::*;

#[component]
pub fn Modal(
    #[prop(into)] title: Signal<String>,
    open: RwSignal<bool>,
    #[prop(into)] on_submit: Callback<()>,
    #[prop(optional, into)] submit_label: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let submit_label = submit_label.unwrap_or_else(|| "Guardar".to_string());

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| open.set(false)>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <h3 class="modal-title">{move || title.get()}</h3>
                    <form on:submit=move |ev: web_sys::SubmitEvent| {
                        ev.prevent_default();
                        on_submit.run(());
                    }>
                        {children()}
                        <div class="modal-actions">
                            <button type="button" class="btn btn-secondary" on:click=move |_| open.set(false)>
                                "Cancelar"
                            </button>
                            <button type="submit" class="btn btn-primary">{submit_label.clone()}</button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
