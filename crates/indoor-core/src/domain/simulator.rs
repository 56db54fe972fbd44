//! Simulator Entity
//!
//! Indoor bike simulators on the studio floor.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entity::{impl_entity, RecordId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SimulatorStatus {
    #[default]
    #[serde(rename = "available", alias = "disponible")]
    Available,
    #[serde(rename = "in-use", alias = "in_use", alias = "en uso")]
    InUse,
    #[serde(rename = "maintenance", alias = "mantenimiento")]
    Maintenance,
}

impl SimulatorStatus {
    pub const ALL: [SimulatorStatus; 3] = [
        SimulatorStatus::Available,
        SimulatorStatus::InUse,
        SimulatorStatus::Maintenance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SimulatorStatus::Available => "available",
            SimulatorStatus::InUse => "in-use",
            SimulatorStatus::Maintenance => "maintenance",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SimulatorStatus::Available => "Disponible",
            SimulatorStatus::InUse => "En uso",
            SimulatorStatus::Maintenance => "Mantenimiento",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s.trim())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Simulator {
    #[serde(default, alias = "_id", skip_serializing_if = "RecordId::is_empty")]
    pub id: RecordId,
    pub model: String,
    #[serde(default)]
    pub status: SimulatorStatus,
    #[serde(
        rename = "lastMaintenance",
        alias = "lastService",
        alias = "last_maintenance",
        with = "super::dates::option",
        default
    )]
    pub last_maintenance: Option<NaiveDate>,
}

impl_entity!(Simulator);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        let sim: Simulator =
            serde_json::from_str(r#"{"id":"2","model":"Elite-V 3000","status":"in-use","lastService":"2024-02-10"}"#)
                .unwrap();
        assert_eq!(sim.status, SimulatorStatus::InUse);
        assert_eq!(sim.last_maintenance, NaiveDate::from_ymd_opt(2024, 2, 10));

        let json = serde_json::to_value(&sim).unwrap();
        assert_eq!(json["status"], "in-use");
        assert_eq!(json["lastMaintenance"], "2024-02-10");
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!(SimulatorStatus::from_str("maintenance"), Some(SimulatorStatus::Maintenance));
        assert_eq!(SimulatorStatus::from_str("broken"), None);
    }
}
