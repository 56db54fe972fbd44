//! Dashboard Page
//!
//! Stat cards, equipment and training overview, recent sales and alerts,
//! all computed from the loaded lists.

use indoor_core::metrics::{self, Alert};
use indoor_core::money;
use leptos::prelude::*;

use crate::components::StatCard;
use crate::context::use_backend;
use crate::hooks::{today, use_crud};

/// Sales listed under recent activity
const RECENT_SALES: usize = 5;

fn alert_class(alert: &Alert) -> &'static str {
    match alert {
        Alert::LowStock { .. } => "alert-item alert-warning",
        Alert::SimulatorMaintenance { .. } => "alert-item alert-danger",
        Alert::AssignmentEnding { .. } => "alert-item alert-info",
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let backend = use_backend();
    let clients = use_crud(backend.clients.clone());
    let simulators = use_crud(backend.simulators.clone());
    let services = use_crud(backend.services.clone());
    let assignments = use_crud(backend.training_assignments.clone());
    let sales = use_crud(backend.sales.clone());
    let inventory = use_crud(backend.inventory.clone());

    let stats = Memo::new(move |_| {
        metrics::dashboard(
            &clients.rows(),
            &simulators.rows(),
            &services.rows(),
            &assignments.rows(),
            &sales.rows(),
            today(),
        )
    });
    let alerts = move || metrics::alerts(&inventory.rows(), &simulators.rows(), &assignments.rows(), today());
    let recent_sales = move || {
        let mut rows = sales.rows();
        rows.sort_by(|a, b| b.date.cmp(&a.date));
        rows.truncate(RECENT_SALES);
        rows
    };

    view! {
        <div class="page dashboard">
            <div class="stat-grid">
                <StatCard
                    title="Miembros Activos"
                    value=Signal::derive(move || stats.with(|s| s.active_clients.to_string()))
                />
                <StatCard
                    title="Ingreso Mensual"
                    value=Signal::derive(move || stats.with(|s| money::format(s.monthly_revenue)))
                    tone="success"
                />
                <StatCard
                    title="Entrenamientos Activos"
                    value=Signal::derive(move || stats.with(|s| s.active_assignments.to_string()))
                />
                <StatCard
                    title="Servicios Pendientes"
                    value=Signal::derive(move || stats.with(|s| s.pending_services.to_string()))
                    tone="warning"
                />
            </div>

            <div class="panel-grid">
                <section class="panel">
                    <h3 class="panel-title">"Estado de Equipos"</h3>
                    <dl class="figures">
                        <div class="figure">
                            <dt>"Simuladores en uso"</dt>
                            <dd>{move || stats.with(|s| format!("{}/{}", s.simulators_in_use, s.simulators_total))}</dd>
                        </div>
                        <div class="figure">
                            <dt>"Simuladores disponibles"</dt>
                            <dd>{move || stats.with(|s| s.available_simulators)}</dd>
                        </div>
                        <div class="figure">
                            <dt>"Mantenimientos Requeridos"</dt>
                            <dd class="text-danger">{move || stats.with(|s| s.simulators_in_maintenance)}</dd>
                        </div>
                    </dl>
                </section>

                <section class="panel">
                    <h3 class="panel-title">"Planes de Entrenamiento"</h3>
                    <dl class="figures">
                        <div class="figure">
                            <dt>"Planes Activos"</dt>
                            <dd>{move || stats.with(|s| s.active_assignments)}</dd>
                        </div>
                        <div class="figure">
                            <dt>"Planes Congelados"</dt>
                            <dd class="text-warning">{move || stats.with(|s| s.frozen_assignments)}</dd>
                        </div>
                        <div class="figure">
                            <dt>"Tasa de cumplimiento"</dt>
                            <dd class="text-success">{move || stats.with(|s| format!("{}%", s.completion_rate))}</dd>
                        </div>
                    </dl>
                </section>
            </div>

            <div class="panel-grid">
                <section class="panel">
                    <h3 class="panel-title">"Actividad Reciente"</h3>
                    <ul class="activity-list">
                        {move || {
                            recent_sales()
                                .into_iter()
                                .map(|sale| {
                                    view! {
                                        <li class="activity-item">
                                            <p class="activity-action">
                                                {format!("Venta de {}", money::format_f64(sale.total))}
                                            </p>
                                            <p class="activity-meta">
                                                {format!("{} - {}", sale.customer_name, sale.date.format("%Y-%m-%d %H:%M"))}
                                            </p>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </section>

                <section class="panel">
                    <h3 class="panel-title">"Alertas"</h3>
                    <ul class="alert-list">
                        {move || {
                            let alerts = alerts();
                            if alerts.is_empty() {
                                return view! { <li class="alert-item">"Sin alertas"</li> }.into_any();
                            }
                            alerts
                                .into_iter()
                                .map(|alert| view! { <li class=alert_class(&alert)>{alert.message()}</li> })
                                .collect_view()
                                .into_any()
                        }}
                    </ul>
                </section>
            </div>
        </div>
    }
}
