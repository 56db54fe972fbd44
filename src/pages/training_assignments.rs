//! Training Assignments Page
//!
//! Client enrolments in plans: progress, days left and attendance marking.
//! Picking a plan in the modal fills in its session count.

use indoor_core::domain::{dates, AssignmentStatus, TrainingAssignment};
use indoor_core::forms::TrainingAssignmentForm;
use leptos::prelude::*;

use crate::components::{DeleteConfirmButton, Modal, SearchBox, SelectField, StatusBadge, TextField};
use crate::context::use_backend;
use crate::hooks::{today, use_crud, FieldBinding, FormModal};
use crate::pages::empty_row;
use crate::store::{store_error, use_app_store};

fn status_tone(status: AssignmentStatus) -> &'static str {
    match status {
        AssignmentStatus::Active => "success",
        AssignmentStatus::Frozen => "warning",
        AssignmentStatus::Completed => "info",
    }
}

#[component]
pub fn TrainingAssignmentsPage() -> impl IntoView {
    let store = use_app_store();
    let backend = use_backend();
    let assignments = use_crud(backend.training_assignments);
    let clients = use_crud(backend.clients);
    let plans = use_crud(backend.training_plans);
    let term = RwSignal::new(String::new());
    let modal = FormModal::<TrainingAssignmentForm>::new();

    let mark = move |assignment: &TrainingAssignment| {
        if assignment.status != AssignmentStatus::Active {
            store_error(&store, "Solo se registra asistencia en asignaciones activas");
            return;
        }
        let mut updated = assignment.clone();
        if !updated.mark_attendance(today()) {
            store_error(&store, "La asistencia de hoy ya fue registrada");
            return;
        }
        assignments.save(updated, "Asistencia registrada");
    };

    let toggle_freeze = move |assignment: &TrainingAssignment| {
        let mut updated = assignment.clone();
        updated.toggle_freeze();
        let done = match updated.status {
            AssignmentStatus::Frozen => "Asignación congelada",
            _ => "Asignación reactivada",
        };
        assignments.save(updated, done);
    };

    let client_options = Signal::derive(move || {
        clients.records.with(|c| c.iter().map(|client| (client.name.clone(), client.name.clone())).collect::<Vec<_>>())
    });
    let plan_options = Signal::derive(move || {
        plans.records.with(|p| p.iter().map(|plan| (plan.name.clone(), plan.name.clone())).collect::<Vec<_>>())
    });
    let pick_plan = move |name: String| {
        let sessions = plans
            .records
            .with_untracked(|p| p.iter().find(|plan| plan.name == name).map(|plan| plan.total_sessions()));
        modal.form.update(|f| {
            f.plan_name = name;
            if let Some(sessions) = sessions {
                f.total_sessions = sessions.to_string();
            }
        });
    };
    let plan_field = FieldBinding {
        value: Signal::derive(move || modal.form.with(|f| f.plan_name.clone())),
        on_input: Callback::new(pick_plan),
    };

    view! {
        <div class="page">
            <div class="page-toolbar">
                <SearchBox term=term placeholder="Buscar asignaciones..." />
                <button class="btn btn-primary" on:click=move |_| modal.open_new()>"Nueva Asignación"</button>
            </div>

            <div class="table-card">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Cliente"</th>
                            <th>"Plan"</th>
                            <th>"Periodo"</th>
                            <th>"Progreso"</th>
                            <th>"Días restantes"</th>
                            <th>"Estado"</th>
                            <th>"Acciones"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = assignments.search(&term.get());
                            if rows.is_empty() {
                                return empty_row(7, assignments.is_loading()).into_any();
                            }
                            let today = today();
                            rows.into_iter()
                                .map(|assignment| {
                                    let id = assignment.id.clone();
                                    let editing = assignment.clone();
                                    let to_mark = assignment.clone();
                                    let to_toggle = assignment.clone();
                                    let progress = assignment.progress();
                                    let attended = assignment.attendance.iter().filter(|a| a.attended).count();
                                    let active = assignment.status == AssignmentStatus::Active;
                                    let completed = assignment.status == AssignmentStatus::Completed;
                                    view! {
                                        <tr>
                                            <td class="cell-strong">{assignment.client_name.clone()}</td>
                                            <td>{assignment.plan_name.clone()}</td>
                                            <td class="text-muted">
                                                {format!(
                                                    "{} → {}",
                                                    dates::format_date(&assignment.start_date),
                                                    dates::format_date(&assignment.end_date),
                                                )}
                                            </td>
                                            <td>
                                                <div class="progress">
                                                    <div class="progress-bar" style=format!("width: {progress}%")></div>
                                                </div>
                                                <div class="text-muted">
                                                    {format!(
                                                        "{}/{} sesiones · {} asistencias",
                                                        assignment.completed_sessions,
                                                        assignment.total_sessions,
                                                        attended,
                                                    )}
                                                </div>
                                            </td>
                                            <td>{assignment.days_left(today)}</td>
                                            <td>
                                                <StatusBadge label=assignment.status.label() tone=status_tone(assignment.status) />
                                            </td>
                                            <td class="cell-actions">
                                                <button class="btn btn-small" disabled={!active} on:click=move |_| mark(&to_mark)>
                                                    "Marcar asistencia"
                                                </button>
                                                <button
                                                    class="btn btn-small"
                                                    disabled=completed
                                                    on:click=move |_| toggle_freeze(&to_toggle)
                                                >
                                                    {if active { "Congelar" } else { "Reanudar" }}
                                                </button>
                                                <button class="btn btn-small" on:click=move |_| modal.open_edit(&editing)>
                                                    "Editar"
                                                </button>
                                                <DeleteConfirmButton on_confirm=move |_| assignments.delete(id.clone()) />
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
                title=modal.title("Asignación")
                open=modal.open
                on_submit=move |_| modal.submit(assignments, "Asignación guardada")
            >
                <SelectField
                    label="Cliente"
                    placeholder="Seleccionar cliente"
                    options=client_options
                    field=modal.bind(|f| &f.client_name, |f, v| f.client_name = v)
                    error=modal.error("client_name")
                />
                <SelectField
                    label="Plan"
                    placeholder="Seleccionar plan"
                    options=plan_options
                    field=plan_field
                    error=modal.error("plan_name")
                />
                <TextField
                    label="Fecha de inicio"
                    input_type="date"
                    field=modal.bind(|f| &f.start_date, |f, v| f.start_date = v)
                    error=modal.error("start_date")
                />
                <TextField
                    label="Sesiones totales"
                    input_type="number"
                    field=modal.bind(|f| &f.total_sessions, |f, v| f.total_sessions = v)
                    error=modal.error("total_sessions")
                />
                <p class="form-hint">"La asignación termina 35 días después del inicio"</p>
            </Modal>
        </div>
    }
}
