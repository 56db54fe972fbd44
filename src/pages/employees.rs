//! Employees Page

use indoor_core::domain::{Employee, EmployeeStatus};
use indoor_core::forms::EmployeeForm;
use leptos::prelude::*;

use crate::components::{DeleteConfirmButton, Modal, SearchBox, StatusBadge, TextField};
use crate::context::use_backend;
use crate::hooks::{use_crud, FormModal};
use crate::pages::empty_row;

#[component]
pub fn EmployeesPage() -> impl IntoView {
    let employees = use_crud(use_backend().employees);
    let term = RwSignal::new(String::new());
    let modal = FormModal::<EmployeeForm>::new();

    let toggle_active = move |employee: &Employee| {
        let mut updated = employee.clone();
        let (status, done) = if employee.is_active() {
            (EmployeeStatus::Inactive, "Empleado desactivado")
        } else {
            (EmployeeStatus::Active, "Empleado activado")
        };
        updated.status = status;
        employees.save(updated, done);
    };

    view! {
        <div class="page">
            <div class="page-toolbar">
                <SearchBox term=term placeholder="Buscar empleados..." />
                <button class="btn btn-primary" on:click=move |_| modal.open_new()>"Agregar Empleado"</button>
            </div>

            <div class="table-card">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Nombre"</th>
                            <th>"Cargo"</th>
                            <th>"Departamento"</th>
                            <th>"Contacto"</th>
                            <th>"Estado"</th>
                            <th>"Acciones"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = employees.search(&term.get());
                            if rows.is_empty() {
                                return empty_row(6, employees.is_loading()).into_any();
                            }
                            rows.into_iter()
                                .map(|employee| {
                                    let active = employee.is_active();
                                    let id = employee.id.clone();
                                    let editing = employee.clone();
                                    let current = employee.clone();
                                    view! {
                                        <tr class={if active { "" } else { "row-muted" }}>
                                            <td class="cell-strong">{employee.name.clone()}</td>
                                            <td>{employee.role.clone()}</td>
                                            <td>{employee.department.clone()}</td>
                                            <td>
                                                <div>{employee.email.clone()}</div>
                                                <div class="text-muted">{employee.phone.clone()}</div>
                                            </td>
                                            <td>
                                                <StatusBadge
                                                    label=employee.status.label()
                                                    tone={if active { "success" } else { "muted" }}
                                                />
                                            </td>
                                            <td class="cell-actions">
                                                <button class="btn btn-small" on:click=move |_| modal.open_edit(&editing)>
                                                    "Editar"
                                                </button>
                                                <button class="btn btn-small" on:click=move |_| toggle_active(&current)>
                                                    {if active { "Desactivar" } else { "Activar" }}
                                                </button>
                                                <DeleteConfirmButton on_confirm=move |_| employees.delete(id.clone()) />
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
                title=modal.title("Empleado")
                open=modal.open
                on_submit=move |_| modal.submit(employees, "Empleado guardado")
            >
                <TextField label="Nombre" field=modal.bind(|f| &f.name, |f, v| f.name = v) error=modal.error("name") />
                <TextField label="Cargo" field=modal.bind(|f| &f.role, |f, v| f.role = v) error=modal.error("role") />
                <TextField
                    label="Correo electrónico"
                    input_type="email"
                    field=modal.bind(|f| &f.email, |f, v| f.email = v)
                    error=modal.error("email")
                />
                <TextField label="Teléfono" field=modal.bind(|f| &f.phone, |f, v| f.phone = v) />
                <TextField label="Departamento" field=modal.bind(|f| &f.department, |f, v| f.department = v) />
                <label class="form-check">
                    <input
                        type="checkbox"
                        prop:checked=move || modal.form.with(|f| f.active)
                        on:change=move |ev| modal.form.update(|f| f.active = event_target_checked(&ev))
                    />
                    " Activo"
                </label>
            </Modal>
        </div>
    }
}
