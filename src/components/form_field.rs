//! Form Field Components
//!
//! Labelled inputs bound to a form field, with the validation message below.

use leptos::prelude::*;

use crate::hooks::FieldBinding;

#[component]
fn FieldError(error: Signal<Option<String>>) -> impl IntoView {
    move || error.get().map(|message| view! { <p class="field-error">{message}</p> })
}

#[component]
pub fn TextField(
    #[prop(into)] label: String,
    field: FieldBinding,
    #[prop(optional, into)] error: Signal<Option<String>>,
    #[prop(optional, into)] input_type: Option<&'static str>,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    let input_type = input_type.unwrap_or("text");
    view! {
        <label class="form-field">
            <span class="form-label">{label}</span>
            <input
                type=input_type
                class=move || if error.get().is_some() { "form-input invalid" } else { "form-input" }
                placeholder=placeholder.unwrap_or_default()
                prop:value=move || field.value.get()
                on:input=move |ev| field.on_input.run(event_target_value(&ev))
            />
            <FieldError error=error />
        </label>
    }
}

#[component]
pub fn TextAreaField(
    #[prop(into)] label: String,
    field: FieldBinding,
    #[prop(optional, into)] error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-label">{label}</span>
            <textarea
                class="form-input"
                rows="3"
                prop:value=move || field.value.get()
                on:input=move |ev| field.on_input.run(event_target_value(&ev))
            ></textarea>
            <FieldError error=error />
        </label>
    }
}

/// Select over `(value, label)` options
#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    field: FieldBinding,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(optional, into)] error: Signal<Option<String>>,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-label">{label}</span>
            <select
                class="form-input"
                prop:value=move || field.value.get()
                on:change=move |ev| field.on_input.run(event_target_value(&ev))
            >
                {placeholder.map(|text| view! { <option value="">{text}</option> })}
                {move || {
                    let selected = field.value.get();
                    options
                        .get()
                        .into_iter()
                        .map(|(value, text)| {
                            let is_selected = value == selected;
                            view! { <option value=value selected=is_selected>{text}</option> }
                        })
                        .collect_view()
                }}
            </select>
            <FieldError error=error />
        </label>
    }
}
