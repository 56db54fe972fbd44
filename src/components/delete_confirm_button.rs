//! Delete Confirm Button Component

use leptos::prelude::*;

/// "Eliminar" button that asks "¿Eliminar?" inline before running `on_confirm`
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(optional, into)] label: Option<String>,
) -> impl IntoView {
    let label = label.unwrap_or_else(|| "Eliminar".to_string());
    let asking = RwSignal::new(false);

    move || {
        if !asking.get() {
            let label = label.clone();
            return view! {
                <button
                    class="btn btn-small btn-danger"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        asking.set(true);
                    }
                >
                    {label}
                </button>
            }
            .into_any();
        }

        view! {
            <span class="delete-confirm">
                <span class="delete-confirm-text">"¿Eliminar?"</span>
                <button
                    class="confirm-btn"
                    title="Confirmar"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        asking.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    title="Cancelar"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        asking.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        }
        .into_any()
    }
}
