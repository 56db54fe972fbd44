//! Pages
//!
//! One component per route.

mod login;
mod dashboard;
mod clients;
mod simulators;
mod workshop;
mod training_plans;
mod training_assignments;
mod inventory;
mod pos;
mod employees;
mod bike_history;
mod bikes;

use indoor_core::nav::Route;
use leptos::prelude::*;

pub use login::LoginPage;
pub use dashboard::DashboardPage;
pub use clients::ClientsPage;
pub use simulators::SimulatorsPage;
pub use workshop::WorkshopPage;
pub use training_plans::TrainingPlansPage;
pub use training_assignments::TrainingAssignmentsPage;
pub use inventory::InventoryPage;
pub use pos::PosPage;
pub use employees::EmployeesPage;
pub use bike_history::BikeHistoryPage;
pub use bikes::BikesPage;

/// Page component for a route
pub fn render_page(route: Route) -> AnyView {
    match route {
        Route::Dashboard => view! { <DashboardPage /> }.into_any(),
        Route::Simulators => view! { <SimulatorsPage /> }.into_any(),
        Route::Clients => view! { <ClientsPage /> }.into_any(),
        Route::Workshop => view! { <WorkshopPage /> }.into_any(),
        Route::TrainingPlans => view! { <TrainingPlansPage /> }.into_any(),
        Route::TrainingAssignments => view! { <TrainingAssignmentsPage /> }.into_any(),
        Route::Inventory => view! { <InventoryPage /> }.into_any(),
        Route::Pos => view! { <PosPage /> }.into_any(),
        Route::Employees => view! { <EmployeesPage /> }.into_any(),
        Route::BikeHistory => view! { <BikeHistoryPage /> }.into_any(),
        Route::Bikes => view! { <BikesPage /> }.into_any(),
    }
}

/// `(value, label)` pairs for a select
pub(crate) fn choices<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Vec<(String, String)> {
    pairs.into_iter().map(|(value, label)| (value.to_string(), label.to_string())).collect()
}

/// Placeholder row for an empty or loading table
pub(crate) fn empty_row(columns: u32, loading: bool) -> impl IntoView {
    let text = if loading { "Cargando..." } else { "Sin resultados" };
    view! {
        <tr>
            <td class="empty-cell" colspan=columns.to_string()>{text}</td>
        </tr>
    }
}
