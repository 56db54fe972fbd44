//! Stat Card Component

use leptos::prelude::*;

#[component]
pub fn StatCard(
    #[prop(into)] title: String,
    #[prop(into)] value: Signal<String>,
    #[prop(optional, into)] tone: Option<&'static str>,
) -> impl IntoView {
    let class = match tone {
        Some(tone) => format!("stat-card stat-{tone}"),
        None => "stat-card".to_string(),
    };
    view! {
        <div class=class>
            <p class="stat-title">{title}</p>
            <p class="stat-value">{move || value.get()}</p>
        </div>
    }
}
