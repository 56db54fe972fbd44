//! Clients Page
//!
//! Member list with search, create/edit modal and inline delete.

use indoor_core::domain::MembershipStatus;
use indoor_core::forms::ClientForm;
use indoor_core::nav::Route;
use leptos::prelude::*;

use crate::components::{DeleteConfirmButton, Modal, SearchBox, SelectField, StatusBadge, TextField};
use crate::context::use_backend;
use crate::hooks::{use_crud, FormModal};
use crate::pages::{choices, empty_row};
use crate::store::{store_navigate, use_app_store};

#[component]
pub fn ClientsPage() -> impl IntoView {
    let store = use_app_store();
    let clients = use_crud(use_backend().clients);
    let term = RwSignal::new(String::new());
    let modal = FormModal::<ClientForm>::new();

    let statuses = choices([MembershipStatus::Active, MembershipStatus::Inactive].map(|s| (s.as_str(), s.label())));

    view! {
        <div class="page">
            <div class="page-toolbar">
                <SearchBox term=term placeholder="Buscar clientes..." />
                <button class="btn btn-primary" on:click=move |_| modal.open_new()>"Agregar Cliente"</button>
            </div>

            <div class="table-card">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Nombre"</th>
                            <th>"Contacto"</th>
                            <th>"Estado"</th>
                            <th>"Bicicletas"</th>
                            <th>"Acciones"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = clients.search(&term.get());
                            if rows.is_empty() {
                                return empty_row(5, clients.is_loading()).into_any();
                            }
                            rows.into_iter()
                                .map(|client| {
                                    let tone = if client.is_active() { "success" } else { "danger" };
                                    let id = client.id.clone();
                                    let editing = client.clone();
                                    view! {
                                        <tr>
                                            <td class="cell-strong">{client.name.clone()}</td>
                                            <td>
                                                <div>{client.email.clone()}</div>
                                                <div class="text-muted">{client.phone.clone()}</div>
                                            </td>
                                            <td>
                                                <StatusBadge label=client.membership_status.label() tone=tone />
                                            </td>
                                            <td class="text-muted">{format!("{} bicicletas", client.bikes)}</td>
                                            <td class="cell-actions">
                                                <button class="btn btn-small" on:click=move |_| modal.open_edit(&editing)>
                                                    "Editar"
                                                </button>
                                                <button
                                                    class="btn btn-small"
                                                    on:click=move |_| store_navigate(&store, Route::BikeHistory)
                                                >
                                                    "Ver Bicicletas"
                                                </button>
                                                <DeleteConfirmButton on_confirm=move |_| clients.delete(id.clone()) />
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
                title=modal.title("Cliente")
                open=modal.open
                on_submit=move |_| modal.submit(clients, "Cliente guardado")
            >
                <TextField label="Nombre" field=modal.bind(|f| &f.name, |f, v| f.name = v) error=modal.error("name") />
                <TextField
                    label="Correo electrónico"
                    input_type="email"
                    field=modal.bind(|f| &f.email, |f, v| f.email = v)
                    error=modal.error("email")
                />
                <TextField label="Teléfono" field=modal.bind(|f| &f.phone, |f, v| f.phone = v) />
                <SelectField
                    label="Estado"
                    options=statuses.clone()
                    field=modal.bind(|f| &f.membership_status, |f, v| f.membership_status = v)
                    error=modal.error("membership_status")
                />
            </Modal>
        </div>
    }
}
