//! Inventory Page
//!
//! Stock list with low-stock highlighting, restocking and CSV export.

use indoor_core::domain::InventoryItem;
use indoor_core::export::inventory_csv;
use indoor_core::forms::InventoryItemForm;
use indoor_core::{metrics, money};
use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};

use crate::components::{DeleteConfirmButton, Modal, SearchBox, SelectField, StatCard, StatusBadge, TextField};
use crate::context::use_backend;
use crate::hooks::{use_crud, FieldBinding, FormModal};
use crate::pages::empty_row;
use crate::store::{store_error, use_app_store};

const EXPORT_FILE: &str = "inventario.csv";

/// Hand `contents` to the browser as a file download
fn download_csv(filename: &str, contents: &str) -> Result<(), JsValue> {
    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/csv;charset=utf-8");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let anchor: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    web_sys::Url::revoke_object_url(&url)
}

#[component]
pub fn InventoryPage() -> impl IntoView {
    let store = use_app_store();
    let backend = use_backend();
    let inventory = use_crud(backend.inventory);
    let categories = use_crud(backend.categories);
    let term = RwSignal::new(String::new());
    let modal = FormModal::<InventoryItemForm>::new();

    let stats = Memo::new(move |_| metrics::inventory(&inventory.rows()));

    // Restock dialog
    let restock_open = RwSignal::new(false);
    let restock_item = RwSignal::new(None::<InventoryItem>);
    let restock_qty = RwSignal::new(String::new());
    let restock_error = RwSignal::new(None::<String>);

    let open_restock = move |item: InventoryItem| {
        restock_item.set(Some(item));
        restock_qty.set(String::new());
        restock_error.set(None);
        restock_open.set(true);
    };
    let submit_restock = move |_: ()| {
        let Some(item) = restock_item.get_untracked() else {
            return;
        };
        match restock_qty.get_untracked().trim().parse::<u32>() {
            Ok(qty) if qty > 0 => {
                let mut updated = item;
                updated.stock = updated.stock.saturating_add(qty);
                restock_open.set(false);
                inventory.save(updated, "Stock actualizado");
            }
            _ => restock_error.set(Some("Ingrese una cantidad mayor a cero".to_string())),
        }
    };
    let restock_title = Signal::derive(move || {
        restock_item.with(|item| item.as_ref().map(|i| format!("Reabastecer {}", i.name)).unwrap_or_default())
    });

    let export = move |_| {
        let csv = inventory.records.with_untracked(|items| {
            categories.records.with_untracked(|cats| inventory_csv(items.as_slice(), cats.as_slice()))
        });
        if let Err(e) = download_csv(EXPORT_FILE, &csv) {
            log::error!("CSV export failed: {:?}", e);
            store_error(&store, "No se pudo exportar el inventario");
        }
    };

    let category_options = Signal::derive(move || {
        categories.records.with(|c| c.iter().map(|cat| (cat.name.clone(), cat.name.clone())).collect::<Vec<_>>())
    });

    view! {
        <div class="page">
            <div class="stat-grid">
                <StatCard
                    title="Unidades en Stock"
                    value=Signal::derive(move || stats.with(|s| s.total_units.to_string()))
                />
                <StatCard
                    title="Stock Bajo"
                    value=Signal::derive(move || stats.with(|s| s.low_stock.to_string()))
                    tone="danger"
                />
                <StatCard
                    title="Valor del Inventario"
                    value=Signal::derive(move || stats.with(|s| money::format(s.total_value)))
                    tone="success"
                />
            </div>

            <div class="page-toolbar">
                <SearchBox term=term placeholder="Buscar productos..." />
                <button class="btn btn-secondary" on:click=export>"Exportar CSV"</button>
                <button class="btn btn-primary" on:click=move |_| modal.open_new()>"Agregar Producto"</button>
            </div>

            <div class="table-card">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Producto"</th>
                            <th>"Categoría"</th>
                            <th>"Stock"</th>
                            <th>"Precio"</th>
                            <th>"Proveedor"</th>
                            <th>"Acciones"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = inventory.search(&term.get());
                            if rows.is_empty() {
                                return empty_row(6, inventory.is_loading()).into_any();
                            }
                            let category_list = categories.rows();
                            rows.into_iter()
                                .map(|item| {
                                    let low = item.is_low_stock();
                                    let category = item.category_name(&category_list).to_string();
                                    let id = item.id.clone();
                                    let editing = item.clone();
                                    let to_restock = item.clone();
                                    view! {
                                        <tr class={if low { "row-warning" } else { "" }}>
                                            <td class="cell-strong">{item.name.clone()}</td>
                                            <td>{category}</td>
                                            <td>
                                                {format!("{} (mín. {})", item.stock, item.min_stock)}
                                                {low.then(|| view! { <StatusBadge label="Stock bajo" tone="danger" /> })}
                                            </td>
                                            <td>{money::format_f64(item.price)}</td>
                                            <td class="text-muted">{item.supplier.clone()}</td>
                                            <td class="cell-actions">
                                                <button class="btn btn-small" on:click=move |_| open_restock(to_restock.clone())>
                                                    "Reabastecer"
                                                </button>
                                                <button class="btn btn-small" on:click=move |_| modal.open_edit(&editing)>
                                                    "Editar"
                                                </button>
                                                <DeleteConfirmButton on_confirm=move |_| inventory.delete(id.clone()) />
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </tbody>
                </table>
            </div>

            <Modal
                title=modal.title("Producto")
                open=modal.open
                on_submit=move |_| modal.submit(inventory, "Producto guardado")
            >
                <TextField label="Nombre" field=modal.bind(|f| &f.name, |f, v| f.name = v) error=modal.error("name") />
                <SelectField
                    label="Categoría"
                    placeholder="Seleccionar categoría"
                    options=category_options
                    field=modal.bind(|f| &f.category, |f, v| f.category = v)
                    error=modal.error("category")
                />
                <TextField
                    label="Stock"
                    input_type="number"
                    field=modal.bind(|f| &f.stock, |f, v| f.stock = v)
                    error=modal.error("stock")
                />
                <TextField
                    label="Stock mínimo"
                    input_type="number"
                    field=modal.bind(|f| &f.min_stock, |f, v| f.min_stock = v)
                    error=modal.error("min_stock")
                />
                <TextField
                    label="Precio"
                    input_type="number"
                    field=modal.bind(|f| &f.price, |f, v| f.price = v)
                    error=modal.error("price")
                />
                <TextField
                    label="Proveedor"
                    field=modal.bind(|f| &f.supplier, |f, v| f.supplier = v)
                    error=modal.error("supplier")
                />
            </Modal>

            <Modal title=restock_title open=restock_open on_submit=submit_restock submit_label="Reabastecer">
                <TextField
                    label="Cantidad a agregar"
                    input_type="number"
                    field=FieldBinding {
                        value: restock_qty.into(),
                        on_input: Callback::new(move |v: String| restock_qty.set(v)),
                    }
                    error=restock_error
                />
            </Modal>
        </div>
    }
}
