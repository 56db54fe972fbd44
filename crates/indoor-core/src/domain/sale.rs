//! Sale Entities
//!
//! Point-of-sale cart lines and the completed sale sent to the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::{impl_entity, RecordId};
use super::inventory::InventoryItem;

/// One inventory item in the cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub item_id: RecordId,
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
    /// Stock at the time the item was added; caps `quantity`
    #[serde(skip)]
    pub stock: u32,
}

impl CartItem {
    pub fn from_item(item: &InventoryItem) -> Self {
        Self {
            item_id: item.id.clone(),
            name: item.name.clone(),
            unit_price: item.price,
            quantity: 1,
            stock: item.stock,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    #[serde(default, alias = "_id", skip_serializing_if = "RecordId::is_empty")]
    pub id: RecordId,
    pub customer_name: String,
    pub customer_email: String,
    pub employee_id: RecordId,
    pub items: Vec<CartItem>,
    pub total: f64,
    pub date: DateTime<Utc>,
}

impl_entity!(Sale);
