//! Summary figures for the stat cards
//!
//! Everything is derived from the loaded lists; nothing here is fetched.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::domain::{
    AssignmentStatus, Client, InventoryItem, PlanStatus, Sale, Service, ServiceStatus, Simulator, SimulatorStatus,
    TrainingAssignment, TrainingPlan,
};
use crate::money;

/// Assignments ending within this many days raise an alert
pub const ENDING_SOON_DAYS: i64 = 7;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardStats {
    pub active_clients: usize,
    pub available_simulators: usize,
    pub simulators_in_use: usize,
    pub simulators_total: usize,
    pub simulators_in_maintenance: usize,
    pub pending_services: usize,
    pub active_assignments: usize,
    pub frozen_assignments: usize,
    /// Completed sessions over scheduled sessions, 0..=100
    pub completion_rate: u32,
    /// Sales dated in the current month
    pub monthly_revenue: Decimal,
}

/// `part` as a whole percentage of `whole`; zero when nothing is scheduled
pub fn percent(part: u64, whole: u64) -> u32 {
    if whole == 0 {
        return 0;
    }
    u32::try_from(part.min(whole) * 100 / whole).unwrap_or(100)
}

pub fn dashboard(
    clients: &[Client],
    simulators: &[Simulator],
    services: &[Service],
    assignments: &[TrainingAssignment],
    sales: &[Sale],
    today: NaiveDate,
) -> DashboardStats {
    let count_sims = |status: SimulatorStatus| simulators.iter().filter(|s| s.status == status).count();
    let count_assignments = |status: AssignmentStatus| assignments.iter().filter(|a| a.status == status).count();

    let scheduled: u64 = assignments.iter().map(|a| u64::from(a.total_sessions)).sum();
    let completed: u64 = assignments
        .iter()
        .map(|a| u64::from(a.completed_sessions.min(a.total_sessions)))
        .sum();
    let completion_rate = percent(completed, scheduled);

    let monthly_revenue: Decimal = sales
        .iter()
        .filter(|s| {
            let date = s.date.date_naive();
            date.year() == today.year() && date.month() == today.month()
        })
        .map(|s| money::to_decimal(s.total))
        .sum();

    DashboardStats {
        active_clients: clients.iter().filter(|c| c.is_active()).count(),
        available_simulators: count_sims(SimulatorStatus::Available),
        simulators_in_use: count_sims(SimulatorStatus::InUse),
        simulators_total: simulators.len(),
        simulators_in_maintenance: count_sims(SimulatorStatus::Maintenance),
        pending_services: services.iter().filter(|s| s.status == ServiceStatus::Pending).count(),
        active_assignments: count_assignments(AssignmentStatus::Active),
        frozen_assignments: count_assignments(AssignmentStatus::Frozen),
        completion_rate,
        monthly_revenue: money::round(monthly_revenue),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkshopStats {
    pub active: usize,
    pub pending: usize,
    pub completed_today: usize,
}

pub fn workshop(services: &[Service], today: NaiveDate) -> WorkshopStats {
    WorkshopStats {
        active: services.iter().filter(|s| s.status == ServiceStatus::InProgress).count(),
        pending: services.iter().filter(|s| s.status == ServiceStatus::Pending).count(),
        completed_today: services
            .iter()
            .filter(|s| s.status == ServiceStatus::Completed && s.estimated_completion == Some(today))
            .count(),
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryStats {
    pub total_units: u64,
    pub low_stock: usize,
    pub total_value: Decimal,
}

pub fn inventory(items: &[InventoryItem]) -> InventoryStats {
    let total_value: Decimal = items.iter().map(|i| money::line_total(i.price, i.stock)).sum();
    InventoryStats {
        total_units: items.iter().map(|i| u64::from(i.stock)).sum(),
        low_stock: items.iter().filter(|i| i.is_low_stock()).count(),
        total_value: money::round(total_value),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrainingStats {
    pub active_plans: usize,
    pub active_users: u32,
}

pub fn training(plans: &[TrainingPlan]) -> TrainingStats {
    TrainingStats {
        active_plans: plans.iter().filter(|p| p.status == PlanStatus::Active).count(),
        active_users: plans.iter().map(|p| p.active_users).sum(),
    }
}

/// One line in the dashboard alert panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alert {
    LowStock { item: String, stock: u32, min_stock: u32 },
    SimulatorMaintenance { simulator: String },
    AssignmentEnding { client: String, plan: String, days_left: i64 },
}

impl Alert {
    pub fn message(&self) -> String {
        match self {
            Alert::LowStock { item, stock, min_stock } => {
                format!("Stock bajo: {item} ({stock} de {min_stock} mínimo)")
            }
            Alert::SimulatorMaintenance { simulator } => format!("Simulador en mantenimiento: {simulator}"),
            Alert::AssignmentEnding { client, plan, days_left } => {
                format!("{plan} de {client} termina en {days_left} días")
            }
        }
    }
}

pub fn alerts(
    items: &[InventoryItem],
    simulators: &[Simulator],
    assignments: &[TrainingAssignment],
    today: NaiveDate,
) -> Vec<Alert> {
    let low_stock = items.iter().filter(|i| i.is_low_stock()).map(|i| Alert::LowStock {
        item: i.name.clone(),
        stock: i.stock,
        min_stock: i.min_stock,
    });
    let maintenance = simulators
        .iter()
        .filter(|s| s.status == SimulatorStatus::Maintenance)
        .map(|s| Alert::SimulatorMaintenance { simulator: s.model.clone() });
    let ending = assignments
        .iter()
        .filter(|a| a.status == AssignmentStatus::Active && a.end_date >= today)
        .filter(|a| a.days_left(today) <= ENDING_SOON_DAYS)
        .map(|a| Alert::AssignmentEnding {
            client: a.client_name.clone(),
            plan: a.plan_name.clone(),
            days_left: a.days_left(today),
        });

    low_stock.chain(maintenance).chain(ending).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use chrono::{TimeZone, Utc};

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_inventory_figures() {
        let stats = inventory(&seed::inventory());
        assert_eq!(stats.total_units, 48);
        assert_eq!(stats.low_stock, 1);
        // 25 × 89.99 + 15 × 59.99 + 8 × 45.99
        assert_eq!(stats.total_value, Decimal::new(351752, 2));
    }

    #[test]
    fn test_workshop_counts() {
        let stats = workshop(&seed::services(), day("2024-02-21"));
        assert_eq!(stats, WorkshopStats { active: 1, pending: 1, completed_today: 1 });
    }

    #[test]
    fn test_monthly_revenue_only_counts_this_month() {
        let mut march = seed::sales();
        march.truncate(1);
        let mut february = march[0].clone();
        february.date = Utc.with_ymd_and_hms(2024, 2, 28, 12, 0, 0).unwrap();
        march[0].date = Utc.with_ymd_and_hms(2024, 3, 2, 12, 0, 0).unwrap();
        let sales = vec![march[0].clone(), february];

        let stats = dashboard(&[], &[], &[], &[], &sales, day("2024-03-15"));
        assert_eq!(stats.monthly_revenue, money::to_decimal(march[0].total));
    }

    #[test]
    fn test_dashboard_counts() {
        let stats = dashboard(
            &seed::clients(),
            &seed::simulators(),
            &seed::services(),
            &seed::training_assignments(),
            &[],
            day("2024-02-21"),
        );
        assert_eq!(stats.active_clients, 2);
        assert_eq!(
            (
                stats.available_simulators,
                stats.simulators_in_use,
                stats.simulators_in_maintenance,
                stats.simulators_total
            ),
            (1, 1, 1, 3)
        );
        assert_eq!(stats.pending_services, 1);
        assert_eq!((stats.active_assignments, stats.frozen_assignments), (1, 1));
        // (7 + 15) of (15 + 25) sessions
        assert_eq!(stats.completion_rate, 55);
        assert_eq!(stats.monthly_revenue, Decimal::ZERO);
    }

    #[test]
    fn test_completion_rate_edges() {
        let empty = dashboard(&[], &[], &[], &[], &[], day("2024-02-21"));
        assert_eq!(empty.completion_rate, 0);

        let mut assignments = seed::training_assignments();
        for a in assignments.iter_mut() {
            a.total_sessions = u32::MAX;
            a.completed_sessions = u32::MAX;
        }
        let full = dashboard(&[], &[], &[], &assignments, &[], day("2024-02-21"));
        assert_eq!(full.completion_rate, 100);

        assert_eq!(percent(u64::from(u32::MAX) / 2 + 1, u64::from(u32::MAX)), 50);
    }

    #[test]
    fn test_training_figures() {
        let mut plans = seed::training_plans();
        assert_eq!(training(&plans), TrainingStats { active_plans: 2, active_users: 23 });

        plans[1].status = PlanStatus::Frozen;
        let stats = training(&plans);
        assert_eq!(stats.active_plans, 1);
        assert_eq!(stats.active_users, 23);
        assert_eq!(training(&[]), TrainingStats::default());
    }

    #[test]
    fn test_alerts() {
        let today = day("2024-03-01");
        let mut assignments = seed::training_assignments();
        assignments[0].end_date = day("2024-03-05");

        let alerts = alerts(&seed::inventory(), &seed::simulators(), &assignments, today);
        assert!(alerts.iter().any(|a| matches!(a, Alert::LowStock { stock: 8, .. })));
        assert!(alerts.iter().any(|a| matches!(a, Alert::SimulatorMaintenance { .. })));
        assert!(alerts.iter().any(|a| matches!(a, Alert::AssignmentEnding { days_left: 4, .. })));
    }
}
