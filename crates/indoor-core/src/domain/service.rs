//! Service Entity
//!
//! A workshop ticket tracking repair or maintenance work on a client's bike.
//! Client and bike are referenced by id and resolved against the loaded lists.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::bike::Bike;
use super::client::Client;
use super::entity::{impl_entity, RecordId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ServiceStatus {
    #[default]
    #[serde(rename = "pending", alias = "pendiente")]
    Pending,
    #[serde(rename = "in-progress", alias = "en curso", alias = "in_progress")]
    InProgress,
    #[serde(rename = "completed", alias = "completado")]
    Completed,
}

impl ServiceStatus {
    pub const ALL: [ServiceStatus; 3] = [ServiceStatus::Pending, ServiceStatus::InProgress, ServiceStatus::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceStatus::Pending => "pending",
            ServiceStatus::InProgress => "in-progress",
            ServiceStatus::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceStatus::Pending => "Pendiente",
            ServiceStatus::InProgress => "En curso",
            ServiceStatus::Completed => "Completado",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s.trim())
    }

    /// Next step in the ticket workflow ("Actualizar Estado")
    pub fn next(&self) -> Self {
        match self {
            ServiceStatus::Pending => ServiceStatus::InProgress,
            ServiceStatus::InProgress | ServiceStatus::Completed => ServiceStatus::Completed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    #[serde(default, alias = "_id", skip_serializing_if = "RecordId::is_empty")]
    pub id: RecordId,
    #[serde(rename = "cliente_id", alias = "clientId", alias = "client_id", default)]
    pub client_id: RecordId,
    #[serde(alias = "bikeId", default)]
    pub bike_id: RecordId,
    /// Denormalized name some records carry instead of a client id
    #[serde(rename = "clientName", alias = "client_name", default, skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    /// Maintenance, repair, upgrade, ...
    #[serde(rename = "type", alias = "tipo")]
    pub kind: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: ServiceStatus,
    #[serde(rename = "startDate", alias = "start_date", with = "super::dates::option", default)]
    pub start_date: Option<NaiveDate>,
    #[serde(
        rename = "estimatedCompletion",
        alias = "estimated_completion",
        with = "super::dates::option",
        default
    )]
    pub estimated_completion: Option<NaiveDate>,
}

impl Service {
    /// Linear lookup of the ticket's client
    pub fn client<'a>(&self, clients: &'a [Client]) -> Option<&'a Client> {
        clients.iter().find(|c| c.id == self.client_id)
    }

    /// Linear lookup of the ticket's bike
    pub fn bike<'a>(&self, bikes: &'a [Bike]) -> Option<&'a Bike> {
        bikes.iter().find(|b| b.id == self.bike_id)
    }

    /// Client name for display, falling back to the denormalized name or the raw id
    pub fn client_display(&self, clients: &[Client]) -> String {
        self.client(clients)
            .map(|c| c.name.clone())
            .or_else(|| self.client_name.clone())
            .unwrap_or_else(|| self.client_id.to_string())
    }
}

impl_entity!(Service);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MembershipStatus;

    #[test]
    fn test_spanish_status_and_foreign_keys() {
        let service: Service = serde_json::from_str(
            r#"{"id":1,"cliente_id":3,"bike_id":"BIKE002","type":"Reparación","description":"Cambio de cadena","status":"en curso","startDate":"2024-02-21"}"#,
        )
        .unwrap();
        assert_eq!(service.status, ServiceStatus::InProgress);
        assert_eq!(service.client_id.as_str(), "3");
        assert_eq!(service.bike_id.as_str(), "BIKE002");
        assert!(service.estimated_completion.is_none());
    }

    #[test]
    fn test_client_lookup() {
        let clients = vec![Client {
            id: "3".into(),
            name: "Mike Johnson".into(),
            email: "mike@example.com".into(),
            phone: String::new(),
            membership_status: MembershipStatus::Inactive,
            bikes: 3,
        }];
        let mut service: Service =
            serde_json::from_str(r#"{"cliente_id":"3","bike_id":"1","type":"Mejora"}"#).unwrap();
        assert_eq!(service.client_display(&clients), "Mike Johnson");

        service.client_id = "99".into();
        assert_eq!(service.client_display(&clients), "99");
        service.client_name = Some("Walk-in".into());
        assert_eq!(service.client_display(&clients), "Walk-in");
    }

    #[test]
    fn test_status_workflow() {
        assert_eq!(ServiceStatus::Pending.next(), ServiceStatus::InProgress);
        assert_eq!(ServiceStatus::InProgress.next(), ServiceStatus::Completed);
        assert_eq!(ServiceStatus::Completed.next(), ServiceStatus::Completed);
    }
}
