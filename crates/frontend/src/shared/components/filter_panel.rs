use leptos::prelude::*;

use crate::shared::icons::icon;

/// FilterPanel - collapsible panel with an active-filter badge in the
/// header. The filter form (and any active-filter chips) are the children.
#[component]
pub fn FilterPanel(
    /// Whether the filter panel is expanded
    #[prop(into)]
    is_expanded: RwSignal<bool>,

    /// Number of active filters (for badge display)
    #[prop(into)]
    active_filters_count: Signal<usize>,

    /// Panel title
    #[prop(into)]
    title: String,

    children: ChildrenFn,
) -> impl IntoView {
    let toggle_expanded = move |_| {
        is_expanded.update(|e| *e = !*e);
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header" on:click=toggle_expanded>
                <svg
                    width="16"
                    height="16"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    class=move || {
                        if is_expanded.get() {
                            "filter-panel__chevron filter-panel__chevron--expanded"
                        } else {
                            "filter-panel__chevron"
                        }
                    }
                >
                    <polyline points="6 9 12 15 18 9"></polyline>
                </svg>
                {icon("filter")}
                <span class="filter-panel__title">{title}</span>
                {move || {
                    let count = active_filters_count.get();
                    if count > 0 {
                        view! { <span class="badge badge--primary">{count}</span> }.into_any()
                    } else {
                        view! { <></> }.into_any()
                    }
                }}
            </div>

            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">{children()}</div>
            </div>
        </div>
    }
}

/// FilterTag - individual active-filter chip with a remove cross.
#[component]
pub fn FilterTag(
    /// Tag label
    #[prop(into)]
    label: String,

    /// Callback when remove is clicked
    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <span
                class="filter-tag__remove"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                {icon("x")}
            </span>
        </div>
    }
}
