//! Inventory Entities
//!
//! Stock items sold in the shop or used by the workshop, grouped by category.

use serde::{Deserialize, Serialize};

use super::entity::{impl_entity, RecordId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    #[serde(default, alias = "_id", skip_serializing_if = "RecordId::is_empty")]
    pub id: RecordId,
    #[serde(alias = "nombre")]
    pub name: String,
    /// Category id or name, depending on the API version
    #[serde(default, alias = "categoria")]
    pub category: String,
    #[serde(default)]
    pub stock: u32,
    #[serde(rename = "minStock", alias = "min_stock", default)]
    pub min_stock: u32,
    #[serde(default, alias = "precio")]
    pub price: f64,
    #[serde(default, alias = "proveedor")]
    pub supplier: String,
}

impl InventoryItem {
    pub fn is_low_stock(&self) -> bool {
        self.stock < self.min_stock
    }

    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Display name of the item's category, resolving ids against `categories`
    pub fn category_name<'a>(&'a self, categories: &'a [Category]) -> &'a str {
        categories
            .iter()
            .find(|c| c.id.as_str() == self.category)
            .map(|c| c.name.as_str())
            .unwrap_or(&self.category)
    }
}

impl_entity!(InventoryItem);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default, alias = "_id", skip_serializing_if = "RecordId::is_empty")]
    pub id: RecordId,
    #[serde(rename = "nombre", alias = "name")]
    pub name: String,
}

impl_entity!(Category);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_stock() {
        let item: InventoryItem = serde_json::from_str(
            r#"{"id":"3","name":"Kit de Herramientas","category":"Accesorios","stock":8,"minStock":12,"price":45.99,"supplier":"ToolMaster"}"#,
        )
        .unwrap();
        assert!(item.is_low_stock());
        assert!(item.is_in_stock());
    }

    #[test]
    fn test_category_resolution() {
        let categories: Vec<Category> = serde_json::from_str(r#"[{"id":1,"nombre":"Piezas"}]"#).unwrap();
        let mut item: InventoryItem =
            serde_json::from_str(r#"{"name":"Cadena Pro","category":"1","stock":25,"minStock":10}"#).unwrap();
        assert_eq!(item.category_name(&categories), "Piezas");

        item.category = "Ropa".into();
        assert_eq!(item.category_name(&categories), "Ropa");
    }
}
