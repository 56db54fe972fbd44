//! Per-entity modal forms

use chrono::Duration;
use validator::Validate;

use super::{amount, number_in_range, optional_date, required, required_date, FormErrors, RecordForm};
use crate::domain::dates::format_date;
use crate::domain::{
    AssignmentStatus, Attendance, Bike, Client, Difficulty, Employee, EmployeeStatus, InventoryItem, MembershipStatus,
    PlanStatus, RecordId, Service, ServiceStatus, Simulator, SimulatorStatus, TrainingAssignment, TrainingPlan,
    PLAN_DURATION_DAYS,
};

const INVALID_OPTION: &str = "Opción inválida";

#[derive(Validate)]
struct EmailField {
    #[validate(email(message = "Correo electrónico inválido"))]
    email: String,
}

#[derive(Validate)]
struct DescriptionField {
    #[validate(length(max = 500, message = "Máximo 500 caracteres"))]
    description: String,
}

/// Run the derive checks of a helper struct
fn check<F: Validate>(fields: &F, errors: &mut FormErrors) {
    if let Err(e) = fields.validate() {
        errors.extend_from(e);
    }
}

// ========================
// Client
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientForm {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub membership_status: String,
    /// Not editable in the modal; carried through on update
    pub bikes: u32,
}

impl RecordForm for ClientForm {
    type Record = Client;

    fn from_record(client: &Client) -> Self {
        Self {
            id: client.id.clone(),
            name: client.name.clone(),
            email: client.email.clone(),
            phone: client.phone.clone(),
            membership_status: client.membership_status.as_str().to_string(),
            bikes: client.bikes,
        }
    }

    fn validate(&self) -> Result<Client, FormErrors> {
        let mut errors = FormErrors::new();
        let name = required(&mut errors, "name", &self.name);
        let email = required(&mut errors, "email", &self.email);
        if !email.is_empty() {
            check(&EmailField { email: email.clone() }, &mut errors);
        }
        let membership_status = if self.membership_status.trim().is_empty() {
            MembershipStatus::Active
        } else {
            MembershipStatus::from_str(&self.membership_status).unwrap_or_else(|| {
                errors.add("membership_status", INVALID_OPTION);
                MembershipStatus::Active
            })
        };

        errors.into_result(Client {
            id: self.id.clone(),
            name,
            email,
            phone: self.phone.trim().to_string(),
            membership_status,
            bikes: self.bikes,
        })
    }
}

// ========================
// Simulator
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimulatorForm {
    pub id: RecordId,
    pub model: String,
    pub status: String,
    pub last_maintenance: String,
}

impl RecordForm for SimulatorForm {
    type Record = Simulator;

    fn from_record(sim: &Simulator) -> Self {
        Self {
            id: sim.id.clone(),
            model: sim.model.clone(),
            status: sim.status.as_str().to_string(),
            last_maintenance: sim.last_maintenance.as_ref().map(format_date).unwrap_or_default(),
        }
    }

    fn validate(&self) -> Result<Simulator, FormErrors> {
        let mut errors = FormErrors::new();
        let model = required(&mut errors, "model", &self.model);
        let status = if self.status.trim().is_empty() {
            SimulatorStatus::Available
        } else {
            SimulatorStatus::from_str(&self.status).unwrap_or_else(|| {
                errors.add("status", INVALID_OPTION);
                SimulatorStatus::Available
            })
        };
        let last_maintenance = optional_date(&mut errors, "last_maintenance", &self.last_maintenance);

        errors.into_result(Simulator { id: self.id.clone(), model, status, last_maintenance })
    }
}

// ========================
// Training plan
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct TrainingPlanForm {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    pub difficulty: String,
    pub price: String,
    pub sessions_per_week: String,
    /// Carried through on update; new plans get the fixed defaults
    pub duration_days: u32,
    pub active_users: u32,
    pub status: PlanStatus,
}

impl Default for TrainingPlanForm {
    fn default() -> Self {
        Self {
            id: RecordId::default(),
            name: String::new(),
            description: String::new(),
            difficulty: Difficulty::Beginner.as_str().to_string(),
            price: String::new(),
            sessions_per_week: String::new(),
            duration_days: PLAN_DURATION_DAYS,
            active_users: 0,
            status: PlanStatus::Active,
        }
    }
}

impl RecordForm for TrainingPlanForm {
    type Record = TrainingPlan;

    fn from_record(plan: &TrainingPlan) -> Self {
        Self {
            id: plan.id.clone(),
            name: plan.name.clone(),
            description: plan.description.clone(),
            difficulty: plan.difficulty.as_str().to_string(),
            price: plan.price.to_string(),
            sessions_per_week: plan.sessions_per_week.to_string(),
            duration_days: plan.duration_days,
            active_users: plan.active_users,
            status: plan.status,
        }
    }

    fn validate(&self) -> Result<TrainingPlan, FormErrors> {
        let mut errors = FormErrors::new();
        let name = required(&mut errors, "name", &self.name);
        let description = required(&mut errors, "description", &self.description);
        check(&DescriptionField { description: description.clone() }, &mut errors);
        let difficulty = Difficulty::from_str(&self.difficulty).unwrap_or_else(|| {
            errors.add("difficulty", INVALID_OPTION);
            Difficulty::Beginner
        });
        let price = amount(&mut errors, "price", &self.price);
        let sessions = number_in_range(&mut errors, "sessions_per_week", &self.sessions_per_week, 1u8, Some(7));

        errors.into_result(TrainingPlan {
            id: self.id.clone(),
            name,
            description,
            duration_days: self.duration_days,
            difficulty,
            active_users: self.active_users,
            status: self.status,
            price: price.unwrap_or_default(),
            sessions_per_week: sessions.unwrap_or(1),
        })
    }
}

// ========================
// Training assignment
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingAssignmentForm {
    pub id: RecordId,
    pub client_name: String,
    pub plan_name: String,
    pub start_date: String,
    pub total_sessions: String,
    /// Carried through on update
    pub status: AssignmentStatus,
    pub completed_sessions: u32,
    pub attendance: Vec<Attendance>,
}

impl RecordForm for TrainingAssignmentForm {
    type Record = TrainingAssignment;

    fn from_record(a: &TrainingAssignment) -> Self {
        Self {
            id: a.id.clone(),
            client_name: a.client_name.clone(),
            plan_name: a.plan_name.clone(),
            start_date: format_date(&a.start_date),
            total_sessions: a.total_sessions.to_string(),
            status: a.status,
            completed_sessions: a.completed_sessions,
            attendance: a.attendance.clone(),
        }
    }

    fn validate(&self) -> Result<TrainingAssignment, FormErrors> {
        let mut errors = FormErrors::new();
        let client_name = required(&mut errors, "client_name", &self.client_name);
        let plan_name = required(&mut errors, "plan_name", &self.plan_name);
        let start_date = required_date(&mut errors, "start_date", &self.start_date);
        let total_sessions = number_in_range(&mut errors, "total_sessions", &self.total_sessions, 1u32, None);

        let Some(start_date) = start_date else {
            return Err(errors);
        };
        errors.into_result(TrainingAssignment {
            id: self.id.clone(),
            client_name,
            plan_name,
            start_date,
            end_date: start_date + Duration::days(i64::from(PLAN_DURATION_DAYS)),
            status: self.status,
            total_sessions: total_sessions.unwrap_or(1),
            completed_sessions: self.completed_sessions,
            attendance: self.attendance.clone(),
        })
    }
}

// ========================
// Service ticket
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceForm {
    pub id: RecordId,
    pub client_id: String,
    pub bike_id: String,
    pub kind: String,
    pub description: String,
    pub status: String,
    pub start_date: String,
    pub estimated_completion: String,
    /// Denormalized client name; not editable, carried through on update
    pub client_name: Option<String>,
}

impl RecordForm for ServiceForm {
    type Record = Service;

    fn from_record(s: &Service) -> Self {
        Self {
            id: s.id.clone(),
            client_id: s.client_id.to_string(),
            bike_id: s.bike_id.to_string(),
            kind: s.kind.clone(),
            description: s.description.clone(),
            status: s.status.as_str().to_string(),
            start_date: s.start_date.as_ref().map(format_date).unwrap_or_default(),
            estimated_completion: s.estimated_completion.as_ref().map(format_date).unwrap_or_default(),
            client_name: s.client_name.clone(),
        }
    }

    fn validate(&self) -> Result<Service, FormErrors> {
        let mut errors = FormErrors::new();
        let client_id = required(&mut errors, "client_id", &self.client_id);
        let bike_id = required(&mut errors, "bike_id", &self.bike_id);
        let kind = required(&mut errors, "kind", &self.kind);
        let status = if self.status.trim().is_empty() {
            ServiceStatus::Pending
        } else {
            ServiceStatus::from_str(&self.status).unwrap_or_else(|| {
                errors.add("status", INVALID_OPTION);
                ServiceStatus::Pending
            })
        };
        let start_date = optional_date(&mut errors, "start_date", &self.start_date);
        let estimated_completion = optional_date(&mut errors, "estimated_completion", &self.estimated_completion);
        if let (Some(start), Some(end)) = (start_date, estimated_completion) {
            if end < start {
                errors.add("estimated_completion", "Debe ser posterior a la fecha de inicio");
            }
        }

        errors.into_result(Service {
            id: self.id.clone(),
            client_id: client_id.into(),
            bike_id: bike_id.into(),
            client_name: self.client_name.clone(),
            kind,
            description: self.description.trim().to_string(),
            status,
            start_date,
            estimated_completion,
        })
    }
}

// ========================
// Inventory item
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryItemForm {
    pub id: RecordId,
    pub name: String,
    pub category: String,
    pub stock: String,
    pub min_stock: String,
    pub price: String,
    pub supplier: String,
}

impl RecordForm for InventoryItemForm {
    type Record = InventoryItem;

    fn from_record(item: &InventoryItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            category: item.category.clone(),
            stock: item.stock.to_string(),
            min_stock: item.min_stock.to_string(),
            price: item.price.to_string(),
            supplier: item.supplier.clone(),
        }
    }

    fn validate(&self) -> Result<InventoryItem, FormErrors> {
        let mut errors = FormErrors::new();
        let name = required(&mut errors, "name", &self.name);
        let category = required(&mut errors, "category", &self.category);
        let stock = number_in_range(&mut errors, "stock", &self.stock, 0u32, None);
        let min_stock = number_in_range(&mut errors, "min_stock", &self.min_stock, 0u32, None);
        let price = amount(&mut errors, "price", &self.price);
        let supplier = required(&mut errors, "supplier", &self.supplier);

        errors.into_result(InventoryItem {
            id: self.id.clone(),
            name,
            category,
            stock: stock.unwrap_or_default(),
            min_stock: min_stock.unwrap_or_default(),
            price: price.unwrap_or_default(),
            supplier,
        })
    }
}

// ========================
// Employee
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeForm {
    pub id: RecordId,
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub active: bool,
}

impl Default for EmployeeForm {
    fn default() -> Self {
        Self {
            id: RecordId::default(),
            name: String::new(),
            role: String::new(),
            email: String::new(),
            phone: String::new(),
            department: String::new(),
            active: true,
        }
    }
}

impl RecordForm for EmployeeForm {
    type Record = Employee;

    fn from_record(e: &Employee) -> Self {
        Self {
            id: e.id.clone(),
            name: e.name.clone(),
            role: e.role.clone(),
            email: e.email.clone(),
            phone: e.phone.clone(),
            department: e.department.clone(),
            active: e.is_active(),
        }
    }

    fn validate(&self) -> Result<Employee, FormErrors> {
        let mut errors = FormErrors::new();
        let name = required(&mut errors, "name", &self.name);
        let role = required(&mut errors, "role", &self.role);
        let email = required(&mut errors, "email", &self.email);
        if !email.is_empty() {
            check(&EmailField { email: email.clone() }, &mut errors);
        }

        errors.into_result(Employee {
            id: self.id.clone(),
            name,
            role,
            email,
            phone: self.phone.trim().to_string(),
            status: if self.active { EmployeeStatus::Active } else { EmployeeStatus::Inactive },
            department: self.department.trim().to_string(),
        })
    }
}

// ========================
// Bike
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BikeForm {
    pub id: RecordId,
    pub brand: String,
    pub model: String,
    pub owner_id: String,
}

impl RecordForm for BikeForm {
    type Record = Bike;

    fn from_record(bike: &Bike) -> Self {
        Self {
            id: bike.id.clone(),
            brand: bike.brand.clone(),
            model: bike.model.clone(),
            owner_id: bike.owner_id.to_string(),
        }
    }

    fn validate(&self) -> Result<Bike, FormErrors> {
        let mut errors = FormErrors::new();
        let brand = required(&mut errors, "brand", &self.brand);
        let model = required(&mut errors, "model", &self.model);
        let owner_id = required(&mut errors, "owner_id", &self.owner_id);

        errors.into_result(Bike { id: self.id.clone(), brand, model, owner_id: owner_id.into() })
    }
}

// ========================
// Login
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// Both fields present and the email well-formed; returns the trimmed email
    pub fn validate_fields(&self) -> Result<(String, String), FormErrors> {
        let mut errors = FormErrors::new();
        let email = required(&mut errors, "email", &self.email);
        if self.password.is_empty() {
            errors.add("password", super::REQUIRED);
        }
        if !email.is_empty() {
            check(&EmailField { email: email.clone() }, &mut errors);
        }
        errors.into_result((email, self.password.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::REQUIRED;

    const INVALID_EMAIL: &str = "Correo electrónico inválido";

    #[test]
    fn test_client_required_fields_block_submission() {
        let errors = ClientForm::default().validate().unwrap_err();
        assert_eq!(errors.get("name"), Some(REQUIRED));
        assert_eq!(errors.get("email"), Some(REQUIRED));
        assert!(!errors.has("phone"));
    }

    #[test]
    fn test_client_email_format() {
        let form = ClientForm {
            name: "John Doe".into(),
            email: "not-an-email".into(),
            ..Default::default()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("email"), Some(INVALID_EMAIL));
    }

    #[test]
    fn test_client_edit_keeps_bike_count() {
        let client = Client {
            id: "1".into(),
            name: "John Doe".into(),
            email: "john@example.com".into(),
            phone: "+1234567890".into(),
            membership_status: MembershipStatus::Active,
            bikes: 2,
        };
        let mut form = ClientForm::from_record(&client);
        form.membership_status = "inactive".into();
        form.name = "  John D.  ".into();
        let updated = form.validate().unwrap();
        assert_eq!(updated.id, client.id);
        assert_eq!(updated.name, "John D.");
        assert_eq!(updated.bikes, 2);
        assert_eq!(updated.membership_status, MembershipStatus::Inactive);
    }

    #[test]
    fn test_new_plan_fixed_defaults() {
        let form = TrainingPlanForm {
            name: "Resistencia".into(),
            description: "Para principiantes".into(),
            price: "99.99".into(),
            sessions_per_week: "3".into(),
            ..Default::default()
        };
        let plan = form.validate().unwrap();
        assert_eq!(plan.duration_days, PLAN_DURATION_DAYS);
        assert_eq!(plan.status, PlanStatus::Active);
        assert_eq!(plan.active_users, 0);
        assert_eq!(plan.difficulty, Difficulty::Beginner);
        assert_eq!(plan.price, 99.99);
    }

    #[test]
    fn test_plan_sessions_per_week_bounds() {
        let form = TrainingPlanForm {
            name: "HIIT".into(),
            description: "Alta intensidad".into(),
            price: "-1".into(),
            sessions_per_week: "9".into(),
            ..Default::default()
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.has("price"));
        assert!(errors.has("sessions_per_week"));
    }

    #[test]
    fn test_inventory_numeric_parsing() {
        let form = InventoryItemForm {
            name: "Cadena Pro".into(),
            category: "Piezas".into(),
            stock: "2.5".into(),
            min_stock: "10".into(),
            price: "89.99".into(),
            supplier: "BikePartsInc".into(),
            ..Default::default()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.has("stock"));

        let item = InventoryItemForm { stock: "25".into(), ..form }.validate().unwrap();
        assert_eq!(item.stock, 25);
        assert!(!item.is_low_stock());
    }

    #[test]
    fn test_service_dates_ordered() {
        let form = ServiceForm {
            client_id: "1".into(),
            bike_id: "BIKE001".into(),
            kind: "Mantenimiento".into(),
            start_date: "2024-02-22".into(),
            estimated_completion: "2024-02-20".into(),
            ..Default::default()
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.has("estimated_completion"));
    }

    #[test]
    fn test_service_edit_keeps_client_name() {
        let service = crate::seed::services().remove(1);
        let mut form = ServiceForm::from_record(&service);
        form.status = "in-progress".into();

        let updated = form.validate().unwrap();
        assert_eq!(updated.client_name.as_deref(), Some("Jane Smith"));
        assert_eq!(updated.status, ServiceStatus::InProgress);
    }

    #[test]
    fn test_assignment_end_date_from_plan_length() {
        let form = TrainingAssignmentForm {
            client_name: "John Doe".into(),
            plan_name: "HIIT Avanzado".into(),
            start_date: "2024-02-01".into(),
            total_sessions: "15".into(),
            ..Default::default()
        };
        let a = form.validate().unwrap();
        assert_eq!(format_date(&a.end_date), "2024-03-07");
        assert_eq!(a.status, AssignmentStatus::Active);
    }

    #[test]
    fn test_bike_requires_owner() {
        let form = BikeForm { brand: "Trek".into(), model: "Domane".into(), ..Default::default() };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.first(), Some(("owner_id", REQUIRED)));
    }

    #[test]
    fn test_employee_deactivate_round_trip() {
        let form = EmployeeForm {
            name: "Maria Garcia".into(),
            role: "Ventas".into(),
            email: "maria@example.com".into(),
            active: false,
            ..Default::default()
        };
        let employee = form.validate().unwrap();
        assert!(!employee.is_active());
    }

    #[test]
    fn test_login_fields() {
        let form = LoginForm { email: " admin@example.com ".into(), password: "password".into() };
        assert_eq!(form.validate_fields().unwrap().0, "admin@example.com");

        let errors = LoginForm::default().validate_fields().unwrap_err();
        assert!(errors.has("email"));
        assert!(errors.has("password"));
    }
}
