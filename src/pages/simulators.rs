//! Simulators Page
//!
//! Card grid of the studio's simulators. The status can be changed straight
//! from the card; the modal edits model and maintenance date.

use indoor_core::domain::{dates, Simulator, SimulatorStatus};
use indoor_core::forms::SimulatorForm;
use leptos::prelude::*;

use crate::components::{DeleteConfirmButton, Modal, SearchBox, SelectField, StatusBadge, TextField};
use crate::context::use_backend;
use crate::hooks::{use_crud, FormModal};
use crate::pages::choices;

fn status_tone(status: SimulatorStatus) -> &'static str {
    match status {
        SimulatorStatus::Available => "success",
        SimulatorStatus::InUse => "info",
        SimulatorStatus::Maintenance => "danger",
    }
}

fn status_choices() -> Vec<(String, String)> {
    choices(SimulatorStatus::ALL.map(|s| (s.as_str(), s.label())))
}

#[component]
pub fn SimulatorsPage() -> impl IntoView {
    let simulators = use_crud(use_backend().simulators);
    let term = RwSignal::new(String::new());
    let modal = FormModal::<SimulatorForm>::new();

    let set_status = move |sim: &Simulator, raw: String| {
        let Some(status) = SimulatorStatus::from_str(&raw) else {
            return;
        };
        if status != sim.status {
            let mut updated = sim.clone();
            updated.status = status;
            simulators.save(updated, "Estado actualizado");
        }
    };

    view! {
        <div class="page">
            <div class="page-toolbar">
                <SearchBox term=term placeholder="Buscar simuladores..." />
                <button class="btn btn-primary" on:click=move |_| modal.open_new()>"Agregar Simulador"</button>
            </div>

            <div class="card-grid">
                {move || {
                    simulators
                        .search(&term.get())
                        .into_iter()
                        .map(|sim| {
                            let id = sim.id.clone();
                            let editing = sim.clone();
                            let current = sim.clone();
                            let status_now = sim.status;
                            let last = sim
                                .last_maintenance
                                .as_ref()
                                .map(dates::format_date)
                                .unwrap_or_else(|| "Sin registro".to_string());
                            view! {
                                <div class="card">
                                    <div class="card-header">
                                        <h3 class="card-title">{sim.model.clone()}</h3>
                                        <StatusBadge label=sim.status.label() tone=status_tone(sim.status) />
                                    </div>
                                    <p class="text-muted">{format!("Último mantenimiento: {last}")}</p>
                                    <label class="form-field">
                                        <span class="form-label">"Estado"</span>
                                        <select
                                            class="form-input"
                                            on:change=move |ev| set_status(&current, event_target_value(&ev))
                                        >
                                            {SimulatorStatus::ALL
                                                .into_iter()
                                                .map(|status| {
                                                    view! {
                                                        <option value=status.as_str() selected={status == status_now}>
                                                            {status.label()}
                                                        </option>
                                                    }
                                                })
                                                .collect_view()}
                                        </select>
                                    </label>
                                    <div class="card-actions">
                                        <button class="btn btn-small" on:click=move |_| modal.open_edit(&editing)>
                                            "Editar"
                                        </button>
                                        <DeleteConfirmButton on_confirm=move |_| simulators.delete(id.clone()) />
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <Modal
                title=modal.title("Simulador")
                open=modal.open
                on_submit=move |_| modal.submit(simulators, "Simulador guardado")
            >
                <TextField label="Modelo" field=modal.bind(|f| &f.model, |f, v| f.model = v) error=modal.error("model") />
                <SelectField
                    label="Estado"
                    options=status_choices()
                    field=modal.bind(|f| &f.status, |f, v| f.status = v)
                    error=modal.error("status")
                />
                <TextField
                    label="Último mantenimiento"
                    input_type="date"
                    field=modal.bind(|f| &f.last_maintenance, |f, v| f.last_maintenance = v)
                    error=modal.error("last_maintenance")
                />
            </Modal>
        </div>
    }
}
