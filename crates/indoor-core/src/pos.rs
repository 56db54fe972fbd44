//! Point of sale
//!
//! Cart arithmetic, checkout validation and the catalogue filter. Totals are
//! summed in `Decimal`; a cart line never exceeds the stock it was added with.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use validator::ValidateEmail;

use crate::domain::{CartItem, Category, InventoryItem, RecordId, Sale};
use crate::forms::{FormErrors, REQUIRED};
use crate::money;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit; ignored when the item is out of stock or already at its stock
    pub fn add(&mut self, item: &InventoryItem) -> bool {
        if !item.is_in_stock() {
            return false;
        }
        match self.items.iter_mut().find(|line| line.item_id == item.id) {
            Some(line) if line.quantity < line.stock => {
                line.quantity += 1;
                true
            }
            Some(_) => false,
            None => {
                self.items.push(CartItem::from_item(item));
                true
            }
        }
    }

    /// Set a line's quantity; accepted only for `1..=stock`
    pub fn set_quantity(&mut self, item_id: &RecordId, quantity: u32) -> bool {
        match self.items.iter_mut().find(|line| &line.item_id == item_id) {
            Some(line) if (1..=line.stock).contains(&quantity) => {
                line.quantity = quantity;
                true
            }
            _ => false,
        }
    }

    pub fn remove(&mut self, item_id: &RecordId) {
        self.items.retain(|line| &line.item_id != item_id);
    }

    pub fn total(&self) -> Decimal {
        let sum: Decimal = self.items.iter().map(|line| money::line_total(line.unit_price, line.quantity)).sum();
        money::round(sum)
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// Customer and seller fields beside the cart
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckoutForm {
    pub customer_name: String,
    pub customer_email: String,
    pub employee_id: String,
}

/// Build the sale for the current cart. Nothing is cleared here; the page
/// resets the cart and form once the API has accepted the sale.
pub fn checkout(cart: &Cart, form: &CheckoutForm, now: DateTime<Utc>) -> Result<Sale, FormErrors> {
    let mut errors = FormErrors::new();

    let customer_name = form.customer_name.trim();
    if customer_name.is_empty() {
        errors.add("customer_name", REQUIRED);
    }
    let customer_email = form.customer_email.trim();
    if customer_email.is_empty() {
        errors.add("customer_email", REQUIRED);
    } else if !customer_email.validate_email() {
        errors.add("customer_email", "Correo electrónico inválido");
    }
    let employee_id = form.employee_id.trim();
    if employee_id.is_empty() {
        errors.add("employee_id", REQUIRED);
    }
    if cart.is_empty() {
        errors.add("cart", "El carrito está vacío");
    }

    errors.into_result(Sale {
        id: RecordId::default(),
        customer_name: customer_name.to_string(),
        customer_email: customer_email.to_string(),
        employee_id: RecordId::from(employee_id),
        items: cart.items.clone(),
        total: money::to_f64(cart.total()),
        date: now,
    })
}

/// Inventory records with the sold quantities taken out of stock
pub fn stock_after_sale(sale: &Sale, inventory: &[InventoryItem]) -> Vec<InventoryItem> {
    sale.items
        .iter()
        .filter_map(|line| {
            let item = inventory.iter().find(|i| i.id == line.item_id)?;
            let mut updated = item.clone();
            updated.stock = item.stock.saturating_sub(line.quantity);
            Some(updated)
        })
        .collect()
}

/// Catalogue items whose name or category contains `term`
pub fn catalogue<'a>(items: &'a [InventoryItem], categories: &[Category], term: &str) -> Vec<&'a InventoryItem> {
    let term = term.trim().to_lowercase();
    items
        .iter()
        .filter(|item| {
            term.is_empty()
                || item.name.to_lowercase().contains(&term)
                || item.category_name(categories).to_lowercase().contains(&term)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn item(id: &str, name: &str, category: &str, price: f64, stock: u32) -> InventoryItem {
        InventoryItem {
            id: RecordId::from(id),
            name: name.into(),
            category: category.into(),
            stock,
            min_stock: 0,
            price,
            supplier: String::new(),
        }
    }

    fn filled_form() -> CheckoutForm {
        CheckoutForm {
            customer_name: "Laura Díaz".into(),
            customer_email: "laura@example.com".into(),
            employee_id: "2".into(),
        }
    }

    #[test]
    fn test_add_caps_at_stock() {
        let tools = item("3", "Kit de Herramientas Multifunción", "Accesorios", 45.99, 2);
        let mut cart = Cart::new();
        assert!(cart.add(&tools));
        assert!(cart.add(&tools));
        assert!(!cart.add(&tools));
        assert_eq!(cart.items()[0].quantity, 2);

        assert!(!cart.add(&item("9", "Agotado", "Piezas", 1.0, 0)));
        assert_eq!(cart.items().len(), 1);
    }

    #[test]
    fn test_set_quantity_bounds() {
        let chain = item("1", "Cadena Pro", "Piezas", 89.99, 25);
        let mut cart = Cart::new();
        cart.add(&chain);
        assert!(!cart.set_quantity(&chain.id, 0));
        assert!(!cart.set_quantity(&chain.id, 26));
        assert!(cart.set_quantity(&chain.id, 25));
        assert_eq!(cart.items()[0].quantity, 25);

        cart.remove(&chain.id);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_total_exact_to_the_cent() {
        let mut cart = Cart::new();
        let chain = item("1", "Cadena Pro", "Piezas", 89.99, 25);
        let jersey = item("2", "Jersey Premium", "Ropa", 59.99, 15);
        cart.add(&chain);
        cart.set_quantity(&chain.id, 3);
        cart.add(&jersey);
        assert_eq!(cart.total(), Decimal::new(32996, 2));
    }

    #[test]
    fn test_checkout_requires_every_field_and_items() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap();
        let errors = checkout(&Cart::new(), &CheckoutForm::default(), now).unwrap_err();
        for field in ["customer_name", "customer_email", "employee_id", "cart"] {
            assert!(errors.has(field), "missing error for {field}");
        }

        let mut cart = Cart::new();
        cart.add(&item("2", "Jersey Premium", "Ropa", 59.99, 15));
        let sale = checkout(&cart, &filled_form(), now).unwrap();
        assert_eq!(sale.total, 59.99);
        assert_eq!(sale.employee_id.as_str(), "2");
        assert_eq!(sale.items.len(), 1);
        assert_eq!(sale.date, now);
    }

    #[test]
    fn test_stock_after_sale() {
        let inventory = vec![item("1", "Cadena Pro", "Piezas", 89.99, 25), item("2", "Jersey Premium", "Ropa", 59.99, 15)];
        let mut cart = Cart::new();
        cart.add(&inventory[0]);
        cart.set_quantity(&inventory[0].id, 4);
        let sale = checkout(&cart, &filled_form(), Utc::now()).unwrap();

        let updated = stock_after_sale(&sale, &inventory);
        assert_eq!(updated.len(), 1);
        assert_eq!(updated[0].stock, 21);
    }

    #[test]
    fn test_catalogue_filters_name_or_category() {
        let inventory = vec![item("1", "Cadena Pro", "Piezas", 89.99, 25), item("2", "Jersey Premium", "Ropa", 59.99, 15)];
        let names = |term: &str| -> Vec<String> {
            catalogue(&inventory, &[], term).iter().map(|i| i.name.clone()).collect()
        };
        assert_eq!(names("ROPA"), vec!["Jersey Premium"]);
        assert_eq!(names("cadena"), vec!["Cadena Pro"]);
        assert_eq!(names("").len(), 2);
    }
}
