//! Status Badge Component

use leptos::prelude::*;

/// Coloured pill; `tone` is one of success, warning, danger, info, muted
#[component]
pub fn StatusBadge(#[prop(into)] label: String, tone: &'static str) -> impl IntoView {
    view! { <span class=format!("badge badge-{tone}")>{label}</span> }
}
