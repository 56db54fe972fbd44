//! Bikes Page
//!
//! Plain CRUD over client bikes; the owner is picked from the client list.

use indoor_core::forms::BikeForm;
use leptos::prelude::*;

use crate::components::{DeleteConfirmButton, Modal, SearchBox, SelectField, TextField};
use crate::context::use_backend;
use crate::hooks::{use_crud, FormModal};
use crate::pages::empty_row;

#[component]
pub fn BikesPage() -> impl IntoView {
    let backend = use_backend();
    let bikes = use_crud(backend.bikes);
    let clients = use_crud(backend.clients);
    let term = RwSignal::new(String::new());
    let modal = FormModal::<BikeForm>::new();

    let owner_options = Signal::derive(move || {
        clients.records.with(|c| c.iter().map(|client| (client.id.to_string(), client.name.clone())).collect::<Vec<_>>())
    });

    view! {
        <div class="page">
            <div class="page-toolbar">
                <SearchBox term=term placeholder="Buscar bicicletas..." />
                <button class="btn btn-primary" on:click=move |_| modal.open_new()>"Agregar Bicicleta"</button>
            </div>

            <div class="table-card">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Marca"</th>
                            <th>"Modelo"</th>
                            <th>"Propietario"</th>
                            <th>"Acciones"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = bikes.search(&term.get());
                            if rows.is_empty() {
                                return empty_row(4, bikes.is_loading()).into_any();
                            }
                            let client_list = clients.rows();
                            rows.into_iter()
                                .map(|bike| {
                                    let owner = client_list
                                        .iter()
                                        .find(|c| c.id == bike.owner_id)
                                        .map(|c| c.name.clone())
                                        .unwrap_or_else(|| bike.owner_id.to_string());
                                    let id = bike.id.clone();
                                    let editing = bike.clone();
                                    view! {
                                        <tr>
                                            <td class="cell-strong">{bike.brand.clone()}</td>
                                            <td>{bike.model.clone()}</td>
                                            <td>{owner}</td>
                                            <td class="cell-actions">
                                                <button class="btn btn-small" on:click=move |_| modal.open_edit(&editing)>
                                                    "Editar"
                                                </button>
                                                <DeleteConfirmButton on_confirm=move |_| bikes.delete(id.clone()) />
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </tbody>
                </table>
            </div>

            <Modal
                title=modal.title("Bicicleta")
                open=modal.open
                on_submit=move |_| modal.submit(bikes, "Bicicleta guardada")
            >
                <TextField label="Marca" field=modal.bind(|f| &f.brand, |f, v| f.brand = v) error=modal.error("brand") />
                <TextField label="Modelo" field=modal.bind(|f| &f.model, |f, v| f.model = v) error=modal.error("model") />
                <SelectField
                    label="Propietario"
                    placeholder="Seleccionar cliente"
                    options=owner_options
                    field=modal.bind(|f| &f.owner_id, |f, v| f.owner_id = v)
                    error=modal.error("owner_id")
                />
            </Modal>
        </div>
    }
}
