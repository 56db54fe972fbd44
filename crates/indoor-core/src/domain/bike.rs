//! Bike and Maintenance Entities
//!
//! Client-owned bikes and their workshop maintenance history.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entity::{impl_entity, RecordId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bike {
    #[serde(default, alias = "_id", skip_serializing_if = "RecordId::is_empty")]
    pub id: RecordId,
    #[serde(alias = "marca")]
    pub brand: String,
    #[serde(alias = "modelo")]
    pub model: String,
    #[serde(alias = "clientId", alias = "cliente_id", default)]
    pub owner_id: RecordId,
}

impl Bike {
    pub fn display_name(&self) -> String {
        format!("{} - {}", self.brand, self.model)
    }
}

impl_entity!(Bike);

/// Bikes owned by `client_id`
pub fn bikes_of<'a>(bikes: &'a [Bike], client_id: &'a RecordId) -> impl Iterator<Item = &'a Bike> + 'a {
    bikes.iter().filter(move |b| &b.owner_id == client_id)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceRecord {
    #[serde(default, alias = "_id", skip_serializing_if = "RecordId::is_empty")]
    pub id: RecordId,
    #[serde(alias = "bikeId", default)]
    pub bike_id: RecordId,
    #[serde(alias = "serviceDate", with = "super::dates")]
    pub service_date: NaiveDate,
    #[serde(alias = "detalles")]
    pub details: String,
}

impl_entity!(MaintenanceRecord);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_aliases() {
        let bikes: Vec<Bike> = serde_json::from_str(
            r#"[{"id":1,"brand":"Marca A","model":"Modelo X","owner_id":"1"},
                {"id":2,"brand":"Marca B","model":"Modelo Y","clientId":2},
                {"id":3,"brand":"Marca C","model":"Modelo Z","cliente_id":"1"}]"#,
        )
        .unwrap();
        let owner = RecordId::from("1");
        let owned: Vec<_> = bikes_of(&bikes, &owner).map(|b| b.id.as_str()).collect();
        assert_eq!(owned, vec!["1", "3"]);
        assert_eq!(bikes[1].display_name(), "Marca B - Modelo Y");
    }
}
