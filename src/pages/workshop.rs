//! Workshop Page
//!
//! Service tickets for client bikes. Client and bike columns are resolved
//! against the loaded lists; "Actualizar Estado" advances the workflow.

use indoor_core::domain::{bikes_of, dates, RecordId, Service, ServiceStatus};
use indoor_core::forms::ServiceForm;
use indoor_core::metrics;
use indoor_core::search::service_matches;
use leptos::prelude::*;

use crate::components::{
    DeleteConfirmButton, Modal, SearchBox, SelectField, StatCard, StatusBadge, TextAreaField, TextField,
};
use crate::context::use_backend;
use crate::hooks::{today, use_crud, FormModal};
use crate::pages::{choices, empty_row};

const SERVICE_KINDS: [&str; 3] = ["Mantenimiento", "Reparación", "Mejora"];

fn status_tone(status: ServiceStatus) -> &'static str {
    match status {
        ServiceStatus::Pending => "warning",
        ServiceStatus::InProgress => "info",
        ServiceStatus::Completed => "success",
    }
}

fn date_or_dash(date: Option<chrono::NaiveDate>) -> String {
    date.as_ref().map(dates::format_date).unwrap_or_else(|| "-".to_string())
}

#[component]
pub fn WorkshopPage() -> impl IntoView {
    let backend = use_backend();
    let services = use_crud(backend.services);
    let clients = use_crud(backend.clients);
    let bikes = use_crud(backend.bikes);
    let term = RwSignal::new(String::new());
    let modal = FormModal::<ServiceForm>::new();

    let stats = Memo::new(move |_| metrics::workshop(&services.rows(), today()));

    let advance = move |service: &Service| {
        let next = service.status.next();
        if next == service.status {
            return;
        }
        let mut updated = service.clone();
        updated.status = next;
        services.save(updated, "Estado actualizado");
    };

    let client_options = Signal::derive(move || {
        clients.records.with(|c| c.iter().map(|client| (client.id.to_string(), client.name.clone())).collect::<Vec<_>>())
    });
    // Only the selected client's bikes are offered
    let bike_options = Signal::derive(move || {
        let owner = RecordId::from(modal.form.with(|f| f.client_id.clone()));
        bikes.records.with(|b| {
            bikes_of(b.as_slice(), &owner)
                .map(|bike| (bike.id.to_string(), bike.display_name()))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="page">
            <div class="stat-grid">
                <StatCard
                    title="Servicios Activos"
                    value=Signal::derive(move || stats.with(|s| s.active.to_string()))
                    tone="info"
                />
                <StatCard
                    title="Servicios Pendientes"
                    value=Signal::derive(move || stats.with(|s| s.pending.to_string()))
                    tone="warning"
                />
                <StatCard
                    title="Completados Hoy"
                    value=Signal::derive(move || stats.with(|s| s.completed_today.to_string()))
                    tone="success"
                />
            </div>

            <div class="page-toolbar">
                <SearchBox term=term placeholder="Buscar servicios..." />
                <button class="btn btn-primary" on:click=move |_| modal.open_new()>"Nuevo Servicio"</button>
            </div>

            <div class="table-card">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Cliente"</th>
                            <th>"Bicicleta"</th>
                            <th>"Tipo"</th>
                            <th>"Estado"</th>
                            <th>"Inicio"</th>
                            <th>"Entrega estimada"</th>
                            <th>"Acciones"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let client_list = clients.rows();
                            let bike_list = bikes.rows();
                            let term = term.get();
                            let rows: Vec<_> = services
                                .rows()
                                .into_iter()
                                .filter(|s| service_matches(s, &term, &client_list, &bike_list))
                                .collect();
                            if rows.is_empty() {
                                return empty_row(7, services.is_loading()).into_any();
                            }
                            rows.into_iter()
                                .map(|service| {
                                    let client = service.client_display(&client_list);
                                    let bike = service
                                        .bike(&bike_list)
                                        .map(|b| b.display_name())
                                        .unwrap_or_else(|| service.bike_id.to_string());
                                    let id = service.id.clone();
                                    let editing = service.clone();
                                    let current = service.clone();
                                    let done = service.status == ServiceStatus::Completed;
                                    view! {
                                        <tr>
                                            <td class="cell-strong">{client}</td>
                                            <td>{bike}</td>
                                            <td>
                                                <div>{service.kind.clone()}</div>
                                                <div class="text-muted">{service.description.clone()}</div>
                                            </td>
                                            <td>
                                                <StatusBadge label=service.status.label() tone=status_tone(service.status) />
                                            </td>
                                            <td>{date_or_dash(service.start_date)}</td>
                                            <td>{date_or_dash(service.estimated_completion)}</td>
                                            <td class="cell-actions">
                                                <button
                                                    class="btn btn-small"
                                                    disabled=done
                                                    on:click=move |_| advance(&current)
                                                >
                                                    "Actualizar Estado"
                                                </button>
                                                <button class="btn btn-small" on:click=move |_| modal.open_edit(&editing)>
                                                    "Editar"
                                                </button>
                                                <DeleteConfirmButton on_confirm=move |_| services.delete(id.clone()) />
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
                title=modal.title("Servicio")
                open=modal.open
                on_submit=move |_| modal.submit(services, "Servicio guardado")
            >
                <SelectField
                    label="Cliente"
                    placeholder="Seleccionar cliente"
                    options=client_options
                    field=modal.bind(|f| &f.client_id, |f, v| {
                        f.client_id = v;
                        f.bike_id.clear();
                    })
                    error=modal.error("client_id")
                />
                <SelectField
                    label="Bicicleta"
                    placeholder="Seleccionar bicicleta"
                    options=bike_options
                    field=modal.bind(|f| &f.bike_id, |f, v| f.bike_id = v)
                    error=modal.error("bike_id")
                />
                <SelectField
                    label="Tipo de servicio"
                    placeholder="Seleccionar tipo"
                    options=choices(SERVICE_KINDS.map(|kind| (kind, kind)))
                    field=modal.bind(|f| &f.kind, |f, v| f.kind = v)
                    error=modal.error("kind")
                />
                <TextAreaField
                    label="Descripción"
                    field=modal.bind(|f| &f.description, |f, v| f.description = v)
                />
                <SelectField
                    label="Estado"
                    options=choices(ServiceStatus::ALL.map(|s| (s.as_str(), s.label())))
                    field=modal.bind(|f| &f.status, |f, v| f.status = v)
                    error=modal.error("status")
                />
                <TextField
                    label="Fecha de inicio"
                    input_type="date"
                    field=modal.bind(|f| &f.start_date, |f, v| f.start_date = v)
                    error=modal.error("start_date")
                />
                <TextField
                    label="Entrega estimada"
                    input_type="date"
                    field=modal.bind(|f| &f.estimated_completion, |f, v| f.estimated_completion = v)
                    error=modal.error("estimated_completion")
                />
            </Modal>
        </div>
    }
}
