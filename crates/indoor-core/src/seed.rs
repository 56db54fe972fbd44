//! Demo records
//!
//! Loaded into in-memory repositories when the app is built with
//! `INDOOR_DATA_SOURCE=demo`, and reused by tests as realistic fixtures.

use chrono::{NaiveDate, TimeZone, Utc};

use crate::domain::{
    AssignmentStatus, Attendance, Bike, CartItem, Category, Client, Difficulty, Employee, EmployeeStatus,
    InventoryItem, MaintenanceRecord, MembershipStatus, PlanStatus, RecordId, Sale, Service, ServiceStatus,
    Simulator, SimulatorStatus, TrainingAssignment, TrainingPlan, PLAN_DURATION_DAYS,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

fn id(value: &str) -> RecordId {
    RecordId::from(value)
}

pub fn clients() -> Vec<Client> {
    let client = |i: &str, name: &str, email: &str, phone: &str, status, bikes| Client {
        id: id(i),
        name: name.into(),
        email: email.into(),
        phone: phone.into(),
        membership_status: status,
        bikes,
    };
    vec![
        client("1", "John Doe", "john@example.com", "+1234567890", MembershipStatus::Active, 2),
        client("2", "Jane Smith", "jane@example.com", "+1234567891", MembershipStatus::Active, 1),
        client("3", "Mike Johnson", "mike@example.com", "+1234567892", MembershipStatus::Inactive, 3),
    ]
}

pub fn simulators() -> Vec<Simulator> {
    let sim = |i: &str, model: &str, status, last: NaiveDate| Simulator {
        id: id(i),
        model: model.into(),
        status,
        last_maintenance: Some(last),
    };
    vec![
        sim("1", "Pro-X 2000", SimulatorStatus::Available, date(2024, 2, 15)),
        sim("2", "Elite-V 3000", SimulatorStatus::InUse, date(2024, 2, 10)),
        sim("3", "Training-S 1500", SimulatorStatus::Maintenance, date(2024, 2, 1)),
    ]
}

pub fn training_plans() -> Vec<TrainingPlan> {
    vec![
        TrainingPlan {
            id: id("1"),
            name: "Resistencia para Principiantes".into(),
            description: "Perfecto para aquellos que comienzan su viaje en ciclismo".into(),
            duration_days: PLAN_DURATION_DAYS,
            difficulty: Difficulty::Beginner,
            active_users: 15,
            status: PlanStatus::Active,
            price: 99.99,
            sessions_per_week: 3,
        },
        TrainingPlan {
            id: id("2"),
            name: "HIIT Avanzado".into(),
            description: "Entrenamiento de alta intensidad para ciclistas experimentados".into(),
            duration_days: PLAN_DURATION_DAYS,
            difficulty: Difficulty::Advanced,
            active_users: 8,
            status: PlanStatus::Active,
            price: 149.99,
            sessions_per_week: 5,
        },
    ]
}

pub fn training_assignments() -> Vec<TrainingAssignment> {
    let attended = |d: NaiveDate, attended: bool| Attendance { date: d, attended };
    vec![
        TrainingAssignment {
            id: id("1"),
            client_name: "John Doe".into(),
            plan_name: "Resistencia para Principiantes".into(),
            start_date: date(2024, 2, 1),
            end_date: date(2024, 3, 7),
            status: AssignmentStatus::Active,
            total_sessions: 15,
            completed_sessions: 7,
            attendance: vec![
                attended(date(2024, 2, 1), true),
                attended(date(2024, 2, 3), true),
                attended(date(2024, 2, 5), false),
                attended(date(2024, 2, 7), true),
            ],
        },
        TrainingAssignment {
            id: id("2"),
            client_name: "Jane Smith".into(),
            plan_name: "HIIT Avanzado".into(),
            start_date: date(2024, 1, 15),
            end_date: date(2024, 2, 19),
            status: AssignmentStatus::Frozen,
            total_sessions: 25,
            completed_sessions: 15,
            attendance: vec![
                attended(date(2024, 1, 15), true),
                attended(date(2024, 1, 17), true),
                attended(date(2024, 1, 19), true),
                attended(date(2024, 1, 21), false),
            ],
        },
    ]
}

pub fn services() -> Vec<Service> {
    let service = |i: &str, client: &str, name: &str, bike: &str, kind: &str, description: &str, status, start, eta| {
        Service {
            id: id(i),
            client_id: id(client),
            bike_id: id(bike),
            client_name: Some(name.to_string()),
            kind: kind.into(),
            description: description.into(),
            status,
            start_date: Some(start),
            estimated_completion: Some(eta),
        }
    };
    vec![
        service(
            "1",
            "1",
            "John Doe",
            "BIKE001",
            "Mantenimiento",
            "Mantenimiento regular y calibración",
            ServiceStatus::InProgress,
            date(2024, 2, 20),
            date(2024, 2, 22),
        ),
        service(
            "2",
            "2",
            "Jane Smith",
            "BIKE002",
            "Reparación",
            "Cambio de cadena y ajuste de engranajes",
            ServiceStatus::Pending,
            date(2024, 2, 21),
            date(2024, 2, 23),
        ),
        service(
            "3",
            "3",
            "Mike Johnson",
            "BIKE003",
            "Mejora",
            "Instalación de nuevos componentes",
            ServiceStatus::Completed,
            date(2024, 2, 19),
            date(2024, 2, 21),
        ),
    ]
}

pub fn categories() -> Vec<Category> {
    ["Piezas", "Ropa", "Accesorios"]
        .iter()
        .enumerate()
        .map(|(i, name)| Category { id: RecordId::from(format!("{}", i + 1)), name: name.to_string() })
        .collect()
}

pub fn inventory() -> Vec<InventoryItem> {
    let item = |i: &str, name: &str, category: &str, stock, min_stock, price, supplier: &str| InventoryItem {
        id: id(i),
        name: name.into(),
        category: category.into(),
        stock,
        min_stock,
        price,
        supplier: supplier.into(),
    };
    vec![
        item("1", "Cadena Pro", "Piezas", 25, 10, 89.99, "BikePartsInc"),
        item("2", "Jersey Premium", "Ropa", 15, 5, 59.99, "SportWear Co"),
        item("3", "Kit de Herramientas Multifunción", "Accesorios", 8, 12, 45.99, "ToolMaster"),
    ]
}

pub fn employees() -> Vec<Employee> {
    let employee = |i: &str, name: &str, role: &str, email: &str, phone: &str, department: &str| Employee {
        id: id(i),
        name: name.into(),
        role: role.into(),
        email: email.into(),
        phone: phone.into(),
        status: EmployeeStatus::Active,
        department: department.into(),
    };
    vec![
        employee("1", "Manuela Hernandez", "Gerente", "manuela@example.com", "+1234567890", "Gestión"),
        employee("2", "Maria Garcia", "Representante de Ventas", "maria@example.com", "+1234567891", "Ventas"),
        employee("3", "David Wilson", "Instructor", "david@example.com", "+1234567892", "Entrenamiento"),
    ]
}

pub fn bikes() -> Vec<Bike> {
    let bike = |i: &str, brand: &str, model: &str, owner: &str| Bike {
        id: id(i),
        brand: brand.into(),
        model: model.into(),
        owner_id: id(owner),
    };
    vec![
        bike("BIKE001", "Marca A", "Modelo X", "1"),
        bike("BIKE002", "Marca B", "Modelo Y", "1"),
        bike("BIKE003", "Marca C", "Modelo Z", "2"),
    ]
}

pub fn maintenance() -> Vec<MaintenanceRecord> {
    let record = |i: &str, bike: &str, d: NaiveDate, details: &str| MaintenanceRecord {
        id: id(i),
        bike_id: id(bike),
        service_date: d,
        details: details.into(),
    };
    vec![
        record("1", "BIKE001", date(2023, 1, 1), "Cambio de llantas"),
        record("2", "BIKE001", date(2023, 2, 15), "Ajuste de frenos"),
        record("3", "BIKE002", date(2023, 3, 10), "Cambio de cadena"),
    ]
}

pub fn sales() -> Vec<Sale> {
    let sold_at = Utc.with_ymd_and_hms(2024, 2, 20, 16, 30, 0).single().unwrap_or_else(Utc::now);
    vec![Sale {
        id: id("1"),
        customer_name: "John Doe".into(),
        customer_email: "john@example.com".into(),
        employee_id: id("2"),
        items: vec![CartItem {
            item_id: id("2"),
            name: "Jersey Premium".into(),
            unit_price: 59.99,
            quantity: 2,
            stock: 15,
        }],
        total: 119.98,
        date: sold_at,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::bikes_of;

    #[test]
    fn test_references_resolve() {
        let clients = clients();
        let bikes = bikes();
        for service in services() {
            assert!(service.client(&clients).is_some(), "service {} has no client", service.id);
        }
        assert_eq!(bikes_of(&bikes, &RecordId::from("1")).count(), 2);
        assert!(maintenance().iter().all(|r| bikes.iter().any(|b| b.id == r.bike_id)));
    }

    #[test]
    fn test_plan_sessions_match_assignments() {
        let plans = training_plans();
        assert_eq!(plans[0].total_sessions(), training_assignments()[0].total_sessions);
    }
}
