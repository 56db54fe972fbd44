//! CSV export of list pages

use crate::domain::{Category, InventoryItem};

const INVENTORY_HEADER: [&str; 6] = ["Nombre", "Categoría", "Stock", "Stock mínimo", "Precio", "Proveedor"];

/// Quote a field when it holds a delimiter, quote or line break
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn push_row<S: AsRef<str>>(out: &mut String, fields: &[S]) {
    let row: Vec<String> = fields.iter().map(|f| escape(f.as_ref())).collect();
    out.push_str(&row.join(","));
    out.push_str("\r\n");
}

/// Inventory as CSV with resolved category names
pub fn inventory_csv(items: &[InventoryItem], categories: &[Category]) -> String {
    let mut out = String::new();
    push_row(&mut out, &INVENTORY_HEADER);
    for item in items {
        push_row(
            &mut out,
            &[
                item.name.clone(),
                item.category_name(categories).to_string(),
                item.stock.to_string(),
                item.min_stock.to_string(),
                format!("{:.2}", item.price),
                item.supplier.clone(),
            ],
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn test_inventory_csv() {
        let csv = inventory_csv(&seed::inventory(), &seed::categories());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Nombre,Categoría,Stock,Stock mínimo,Precio,Proveedor");
    }

    #[test]
    fn test_escapes_delimiters() {
        assert_eq!(escape("plain"), "plain");
        assert_eq!(escape("Cadena, 11v"), "\"Cadena, 11v\"");
        assert_eq!(escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
