use leptos::prelude::*;

use crate::shared::icons::icon;

/// KPI card for the dashboard header row: label, icon, one big value and a
/// spinner while the value is loading.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Formatted value (None = loading)
    #[prop(into)]
    value: Signal<Option<String>>,
    /// Extra marker under the label, e.g. "(filtré)"
    #[prop(into, optional)]
    marker: Signal<Option<String>>,
    /// Card accent class
    #[prop(optional, into)]
    accent: String,
) -> impl IntoView {
    let card_class = if accent.is_empty() {
        "stat-card".to_string()
    } else {
        format!("stat-card stat-card--{}", accent)
    };

    view! {
        <div class=card_class>
            <div class="stat-card__header">
                <h6 class="stat-card__label">
                    {label}
                    {move || {
                        marker
                            .get()
                            .map(|m| view! { <small class="stat-card__marker">{m}</small> })
                    }}
                </h6>
                {icon(icon_name)}
            </div>
            {move || match value.get() {
                Some(v) => view! { <h2 class="stat-card__value">{v}</h2> }.into_any(),
                None => view! { <div class="spinner-border spinner-border-sm"></div> }.into_any(),
            }}
        </div>
    }
}
