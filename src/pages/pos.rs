//! Point of Sale Page
//!
//! Catalogue on the left, cart and checkout on the right. A sale is posted
//! first; stock is taken out of inventory once the API has accepted it.

use chrono::Utc;
use indoor_core::crud;
use indoor_core::domain::{InventoryItem, RecordId};
use indoor_core::forms::FormErrors;
use indoor_core::money;
use indoor_core::pos::{self, Cart, CheckoutForm};
use indoor_core::repository::Repository;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{SearchBox, SelectField, TextField};
use crate::context::use_backend;
use crate::hooks::{use_crud, FieldBinding, SignalCell};
use crate::store::{store_error, store_success, use_app_store};

#[component]
pub fn PosPage() -> impl IntoView {
    let store = use_app_store();
    let backend = use_backend();
    let sales = StoredValue::new(backend.sales);
    let inventory = use_crud(backend.inventory);
    let categories = use_crud(backend.categories);
    let employees = use_crud(backend.employees);

    let term = RwSignal::new(String::new());
    let cart = RwSignal::new(Cart::new());
    let form = RwSignal::new(CheckoutForm::default());
    let errors = RwSignal::new(FormErrors::new());
    let submitting = RwSignal::new(false);

    let field = move |get: fn(&CheckoutForm) -> &String, set: fn(&mut CheckoutForm, String)| FieldBinding {
        value: Signal::derive(move || form.with(|f| get(f).clone())),
        on_input: Callback::new(move |v: String| form.update(|f| set(f, v))),
    };
    let error = move |key: &'static str| Signal::derive(move || errors.with(|e| e.get(key).map(str::to_string)));

    let add_to_cart = move |item: &InventoryItem| {
        if !cart.try_update(|c| c.add(item)).unwrap_or(false) {
            store_error(&store, format!("No hay más stock de {}", item.name));
        }
    };
    let change_quantity = move |item_id: &RecordId, quantity: u32| {
        if quantity == 0 {
            cart.update(|c| c.remove(item_id));
        } else if !cart.try_update(|c| c.set_quantity(item_id, quantity)).unwrap_or(false) {
            store_error(&store, "Cantidad no disponible en stock");
        }
    };

    let employee_options = Signal::derive(move || {
        employees.records.with(|e| {
            e.iter()
                .filter(|employee| employee.is_active())
                .map(|employee| (employee.id.to_string(), employee.name.clone()))
                .collect::<Vec<_>>()
        })
    });

    let on_checkout = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let sale = match cart.with_untracked(|c| form.with_untracked(|f| pos::checkout(c, f, Utc::now()))) {
            Ok(sale) => sale,
            Err(e) => {
                if let Some(message) = e.get("cart") {
                    store_error(&store, message);
                }
                errors.set(e);
                return;
            }
        };
        errors.set(FormErrors::new());
        submitting.set(true);

        let (repo, stock_repo) = (sales.get_value(), inventory.repo());
        spawn_local(async move {
            match repo.create(&sale).await {
                Ok(saved) => {
                    log::info!("Sale {} recorded: {}", saved.id, money::format_f64(saved.total));
                    let updated = inventory.records.with_untracked(|c| pos::stock_after_sale(&saved, c.as_slice()));
                    for item in updated {
                        if let Err(e) = crud::update(&stock_repo, &SignalCell(inventory.records), item).await {
                            store_error(&store, format!("Venta registrada, pero el stock no se actualizó: {}", e));
                        }
                    }
                    cart.set(Cart::new());
                    form.set(CheckoutForm::default());
                    store_success(&store, "Venta registrada");
                }
                Err(e) => {
                    log::error!("Sale failed: {}", e);
                    store_error(&store, format!("Error al registrar la venta: {}", e));
                }
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="page pos-layout">
            <section class="pos-catalogue">
                <div class="page-toolbar">
                    <SearchBox term=term placeholder="Buscar productos..." />
                </div>
                <div class="card-grid">
                    {move || {
                        let term = term.get();
                        inventory.records.with(|items| {
                            categories.records.with(|cats| {
                                pos::catalogue(items.as_slice(), cats.as_slice(), &term)
                                    .into_iter()
                                    .map(|item| {
                                        let in_stock = item.is_in_stock();
                                        let to_add = item.clone();
                                        view! {
                                            <div class="card product-card">
                                                <h3 class="card-title">{item.name.clone()}</h3>
                                                <p class="text-muted">{item.category_name(cats.as_slice()).to_string()}</p>
                                                <p class="product-price">{money::format_f64(item.price)}</p>
                                                <p class="text-muted">{format!("Stock: {}", item.stock)}</p>
                                                <button
                                                    class="btn btn-primary btn-small"
                                                    disabled={!in_stock}
                                                    on:click=move |_| add_to_cart(&to_add)
                                                >
                                                    {if in_stock { "Agregar" } else { "Sin stock" }}
                                                </button>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                            })
                        })
                    }}
                </div>
            </section>

            <form class="pos-cart panel" on:submit=on_checkout>
                <h3 class="panel-title">"Carrito"</h3>
                <ul class="cart-lines">
                    {move || {
                        let lines = cart.with(|c| c.items().to_vec());
                        if lines.is_empty() {
                            return view! { <li class="text-muted">"El carrito está vacío"</li> }.into_any();
                        }
                        lines
                            .into_iter()
                            .map(|line| {
                                let (minus_id, plus_id, remove_id) =
                                    (line.item_id.clone(), line.item_id.clone(), line.item_id.clone());
                                let quantity = line.quantity;
                                let subtotal = money::line_total(line.unit_price, line.quantity);
                                view! {
                                    <li class="cart-line">
                                        <div>
                                            <p class="cell-strong">{line.name.clone()}</p>
                                            <p class="text-muted">{money::format_f64(line.unit_price)}</p>
                                        </div>
                                        <div class="cart-qty">
                                            <button
                                                type="button"
                                                class="btn btn-small"
                                                on:click=move |_| change_quantity(&minus_id, quantity - 1)
                                            >
                                                "-"
                                            </button>
                                            <span>{quantity}</span>
                                            <button
                                                type="button"
                                                class="btn btn-small"
                                                on:click=move |_| change_quantity(&plus_id, quantity + 1)
                                            >
                                                "+"
                                            </button>
                                        </div>
                                        <span class="cart-subtotal">{money::format(subtotal)}</span>
                                        <button
                                            type="button"
                                            class="btn btn-small btn-danger"
                                            on:click=move |_| cart.update(|c| c.remove(&remove_id))
                                        >
                                            "✗"
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </ul>
                <p class="cart-total">
                    "Total: " <strong>{move || cart.with(|c| money::format(c.total()))}</strong>
                </p>

                <TextField
                    label="Nombre del cliente"
                    field=field(|f| &f.customer_name, |f, v| f.customer_name = v)
                    error=error("customer_name")
                />
                <TextField
                    label="Correo del cliente"
                    input_type="email"
                    field=field(|f| &f.customer_email, |f, v| f.customer_email = v)
                    error=error("customer_email")
                />
                <SelectField
                    label="Vendedor"
                    placeholder="Seleccionar empleado"
                    options=employee_options
                    field=field(|f| &f.employee_id, |f, v| f.employee_id = v)
                    error=error("employee_id")
                />

                <button type="submit" class="btn btn-primary btn-block" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Procesando..." } else { "Finalizar Venta" }}
                </button>
            </form>
        </div>
    }
}
