//! Training Plans Page
//!
//! Plan catalogue as cards. Every plan runs for the fixed 35 days; plans can
//! be frozen and resumed without deleting them.

use indoor_core::domain::{Difficulty, PlanStatus, TrainingPlan};
use indoor_core::forms::TrainingPlanForm;
use indoor_core::{metrics, money};
use leptos::prelude::*;

use crate::components::{DeleteConfirmButton, Modal, SearchBox, SelectField, StatCard, StatusBadge, TextAreaField, TextField};
use crate::context::use_backend;
use crate::hooks::{use_crud, FormModal};
use crate::pages::choices;

fn difficulty_tone(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Beginner => "success",
        Difficulty::Intermediate => "warning",
        Difficulty::Advanced => "danger",
    }
}

#[component]
pub fn TrainingPlansPage() -> impl IntoView {
    let plans = use_crud(use_backend().training_plans);
    let term = RwSignal::new(String::new());
    let modal = FormModal::<TrainingPlanForm>::new();

    let stats = Memo::new(move |_| metrics::training(&plans.rows()));

    let toggle_status = move |plan: &TrainingPlan| {
        let mut updated = plan.clone();
        updated.status = match plan.status {
            PlanStatus::Active => PlanStatus::Frozen,
            PlanStatus::Frozen => PlanStatus::Active,
        };
        let done = if updated.status == PlanStatus::Frozen { "Plan congelado" } else { "Plan reactivado" };
        plans.save(updated, done);
    };

    view! {
        <div class="page">
            <div class="stat-grid">
                <StatCard
                    title="Planes Activos"
                    value=Signal::derive(move || stats.with(|s| s.active_plans.to_string()))
                />
                <StatCard
                    title="Usuarios Activos"
                    value=Signal::derive(move || stats.with(|s| s.active_users.to_string()))
                    tone="success"
                />
            </div>

            <div class="page-toolbar">
                <SearchBox term=term placeholder="Buscar planes..." />
                <button class="btn btn-primary" on:click=move |_| modal.open_new()>"Nuevo Plan"</button>
            </div>

            <div class="card-grid">
                {move || {
                    plans
                        .search(&term.get())
                        .into_iter()
                        .map(|plan| {
                            let id = plan.id.clone();
                            let editing = plan.clone();
                            let current = plan.clone();
                            let frozen = plan.status == PlanStatus::Frozen;
                            view! {
                                <div class={if frozen { "card card-muted" } else { "card" }}>
                                    <div class="card-header">
                                        <h3 class="card-title">{plan.name.clone()}</h3>
                                        <StatusBadge
                                            label=plan.difficulty.label()
                                            tone=difficulty_tone(plan.difficulty)
                                        />
                                    </div>
                                    <p class="text-muted">{plan.description.clone()}</p>
                                    <dl class="figures">
                                        <div class="figure">
                                            <dt>"Duración"</dt>
                                            <dd>{format!("{} días", plan.duration_days)}</dd>
                                        </div>
                                        <div class="figure">
                                            <dt>"Sesiones por semana"</dt>
                                            <dd>{plan.sessions_per_week}</dd>
                                        </div>
                                        <div class="figure">
                                            <dt>"Precio"</dt>
                                            <dd>{money::format_f64(plan.price)}</dd>
                                        </div>
                                        <div class="figure">
                                            <dt>"Usuarios activos"</dt>
                                            <dd>{plan.active_users}</dd>
                                        </div>
                                    </dl>
                                    <div class="card-actions">
                                        <button class="btn btn-small" on:click=move |_| modal.open_edit(&editing)>
                                            "Editar"
                                        </button>
                                        <button class="btn btn-small" on:click=move |_| toggle_status(&current)>
                                            {if frozen { "Reactivar" } else { "Congelar" }}
                                        </button>
                                        <DeleteConfirmButton on_confirm=move |_| plans.delete(id.clone()) />
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <Modal
                title=modal.title("Plan")
                open=modal.open
                on_submit=move |_| modal.submit(plans, "Plan guardado")
            >
                <TextField label="Nombre" field=modal.bind(|f| &f.name, |f, v| f.name = v) error=modal.error("name") />
                <TextAreaField
                    label="Descripción"
                    field=modal.bind(|f| &f.description, |f, v| f.description = v)
                    error=modal.error("description")
                />
                <SelectField
                    label="Dificultad"
                    options=choices(Difficulty::ALL.map(|d| (d.as_str(), d.label())))
                    field=modal.bind(|f| &f.difficulty, |f, v| f.difficulty = v)
                    error=modal.error("difficulty")
                />
                <TextField
                    label="Precio"
                    input_type="number"
                    field=modal.bind(|f| &f.price, |f, v| f.price = v)
                    error=modal.error("price")
                />
                <TextField
                    label="Sesiones por semana"
                    input_type="number"
                    field=modal.bind(|f| &f.sessions_per_week, |f, v| f.sessions_per_week = v)
                    error=modal.error("sessions_per_week")
                />
                <p class="form-hint">"Duración fija de 35 días"</p>
            </Modal>
        </div>
    }
}
