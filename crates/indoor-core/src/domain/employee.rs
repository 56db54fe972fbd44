//! Employee Entity

use serde::{Deserialize, Serialize};

use super::entity::{impl_entity, RecordId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EmployeeStatus {
    #[default]
    #[serde(rename = "active", alias = "activo")]
    Active,
    #[serde(rename = "inactive", alias = "inactivo")]
    Inactive,
}

impl EmployeeStatus {
    pub fn label(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "activo",
            EmployeeStatus::Inactive => "inactivo",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default, alias = "_id", skip_serializing_if = "RecordId::is_empty")]
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub status: EmployeeStatus,
    #[serde(default)]
    pub department: String,
}

impl Employee {
    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }
}

impl_entity!(Employee);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spanish_status_is_active() {
        let employee: Employee = serde_json::from_str(
            r#"{"id":"1","name":"Manuela Hernandez","role":"Gerente","status":"activo","department":"Gestión"}"#,
        )
        .unwrap();
        assert!(employee.is_active());
        assert_eq!(serde_json::to_value(employee.status).unwrap(), "active");
    }
}
