//! Text search over list rows
//!
//! Every list page has one search box; a row matches when any of its
//! searchable fields contains the term, ignoring case.

use crate::domain::{
    Bike, Category, Client, Employee, InventoryItem, MaintenanceRecord, Sale, Service, Simulator, TrainingAssignment,
    TrainingPlan,
};

pub trait Searchable {
    /// Fields the search box looks at
    fn search_fields(&self) -> Vec<&str>;

    /// Case-insensitive substring match; a blank term matches everything
    fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        self.search_fields().iter().any(|field| field.to_lowercase().contains(&term))
    }
}

impl Searchable for Client {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.phone.as_str()]
    }
}

impl Searchable for Simulator {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.model.as_str(), self.status.label()]
    }
}

impl Searchable for TrainingPlan {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str(), self.difficulty.label()]
    }
}

impl Searchable for TrainingAssignment {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.client_name.as_str(), self.plan_name.as_str()]
    }
}

impl Searchable for Service {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.client_id.as_str(),
            self.bike_id.as_str(),
            self.kind.as_str(),
            self.description.as_str(),
            self.status.label(),
        ];
        if let Some(name) = &self.client_name {
            fields.push(name.as_str());
        }
        fields
    }
}

/// Workshop search: the ticket's own fields plus the client name and bike
/// the table shows in place of the raw ids
pub fn service_matches(service: &Service, term: &str, clients: &[Client], bikes: &[Bike]) -> bool {
    if service.matches(term) {
        return true;
    }
    let term = term.trim().to_lowercase();
    let client = service.client_display(clients).to_lowercase();
    let bike = service.bike(bikes).map(|b| b.display_name().to_lowercase()).unwrap_or_default();
    client.contains(&term) || bike.contains(&term)
}

impl Searchable for InventoryItem {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.category.as_str(), self.supplier.as_str()]
    }
}

impl Searchable for Category {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}

impl Searchable for Employee {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.role.as_str(), self.email.as_str(), self.department.as_str()]
    }
}

impl Searchable for Bike {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.brand.as_str(), self.model.as_str(), self.owner_id.as_str()]
    }
}

impl Searchable for MaintenanceRecord {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.details.as_str()]
    }
}

impl Searchable for Sale {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.customer_name.as_str(), self.customer_email.as_str()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EmployeeStatus, RecordId};

    #[test]
    fn test_matches_any_field_ignoring_case() {
        let employee = Employee {
            id: RecordId::from("2"),
            name: "Sofia Calvo".into(),
            role: "Recepcionista".into(),
            email: "sofia@indoor.com".into(),
            phone: String::new(),
            status: EmployeeStatus::Active,
            department: "Atención".into(),
        };
        assert!(employee.matches("CALVO"));
        assert!(employee.matches("atención"));
        assert!(employee.matches("   "));
        assert!(!employee.matches("mecánico"));
    }

    #[test]
    fn test_service_matches_resolved_client_and_bike() {
        let clients = vec![Client {
            id: RecordId::from("3"),
            name: "Mike Johnson".into(),
            email: "mike@example.com".into(),
            phone: String::new(),
            membership_status: crate::domain::MembershipStatus::Active,
            bikes: 1,
        }];
        let bikes = vec![Bike {
            id: RecordId::from("1"),
            brand: "Trek".into(),
            model: "Domane".into(),
            owner_id: RecordId::from("3"),
        }];
        let service: Service =
            serde_json::from_str(r#"{"id":"5","cliente_id":"3","bike_id":"1","type":"Mejora","status":"pending"}"#)
                .unwrap();

        assert!(!service.matches("mike"));
        assert!(service_matches(&service, "mike", &clients, &bikes));
        assert!(service_matches(&service, "DOMANE", &clients, &bikes));
        assert!(service_matches(&service, "mejora", &clients, &bikes));
        assert!(!service_matches(&service, "sofia", &clients, &bikes));
    }
}
