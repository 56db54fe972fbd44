//! Bike History Page
//!
//! Pick a client, then one of their bikes, to see its maintenance records.

use indoor_core::domain::{bikes_of, dates, MaintenanceRecord, RecordId};
use indoor_core::repository::list_for_bike;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_backend;
use crate::hooks::use_crud;
use crate::store::{store_error, use_app_store};

#[component]
pub fn BikeHistoryPage() -> impl IntoView {
    let store = use_app_store();
    let backend = use_backend();
    let clients = use_crud(backend.clients);
    let bikes = use_crud(backend.bikes);
    let maintenance = StoredValue::new(backend.maintenance);

    let client_id = RwSignal::new(String::new());
    let bike_id = RwSignal::new(String::new());
    let history = RwSignal::new(Vec::<MaintenanceRecord>::new());
    let loading = RwSignal::new(false);

    let client_bikes = move || {
        let owner = RecordId::from(client_id.get());
        bikes.records.with(|b| bikes_of(b.as_slice(), &owner).cloned().collect::<Vec<_>>())
    };

    let select_client = move |id: String| {
        client_id.set(id);
        bike_id.set(String::new());
        history.set(Vec::new());
        loading.set(false);
    };

    let select_bike = move |id: String| {
        bike_id.set(id.clone());
        history.set(Vec::new());
        if id.is_empty() {
            loading.set(false);
            return;
        }
        loading.set(true);
        let repo = maintenance.get_value();
        spawn_local(async move {
            let result = list_for_bike(&repo, &RecordId::from(id.as_str())).await;
            // a later selection owns the table now
            if bike_id.get_untracked() != id {
                return;
            }
            match result {
                Ok(records) => history.set(records),
                Err(e) => store_error(&store, format!("No se pudo cargar el historial: {}", e)),
            }
            loading.set(false);
        });
    };

    view! {
        <div class="page">
            <div class="panel filter-panel">
                <label class="form-field">
                    <span class="form-label">"Cliente"</span>
                    <select class="form-input" on:change=move |ev| select_client(event_target_value(&ev))>
                        <option value="">"Seleccionar cliente"</option>
                        {move || {
                            clients
                                .rows()
                                .into_iter()
                                .map(|client| {
                                    let value = client.id.to_string();
                                    let selected = value == client_id.get_untracked();
                                    view! { <option value=value selected=selected>{client.name}</option> }
                                })
                                .collect_view()
                        }}
                    </select>
                </label>

                <label class="form-field">
                    <span class="form-label">"Bicicleta"</span>
                    <select
                        class="form-input"
                        disabled=move || client_id.with(String::is_empty)
                        prop:value=move || bike_id.get()
                        on:change=move |ev| select_bike(event_target_value(&ev))
                    >
                        <option value="">"Seleccionar bicicleta"</option>
                        {move || {
                            client_bikes()
                                .into_iter()
                                .map(|bike| view! { <option value=bike.id.to_string()>{bike.display_name()}</option> })
                                .collect_view()
                        }}
                    </select>
                </label>
            </div>

            <section class="panel">
                <h3 class="panel-title">"Historial de Mantenimiento"</h3>
                {move || {
                    if bike_id.with(String::is_empty) {
                        return view! { <p class="text-muted">"Seleccione un cliente y una bicicleta"</p> }.into_any();
                    }
                    if loading.get() {
                        return view! { <p class="text-muted">"Cargando..."</p> }.into_any();
                    }
                    let records = history.get();
                    if records.is_empty() {
                        return view! { <p class="text-muted">"Sin registros de mantenimiento"</p> }.into_any();
                    }
                    view! {
                        <ul class="timeline">
                            {records
                                .into_iter()
                                .map(|record| {
                                    view! {
                                        <li class="timeline-item">
                                            <p class="timeline-date">{dates::format_date(&record.service_date)}</p>
                                            <p>{record.details}</p>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                        .into_any()
                }}
            </section>
        </div>
    }
}
