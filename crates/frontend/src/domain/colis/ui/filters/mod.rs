//! Filter form for the shipments table and statistics dashboard.

use contracts::domain::colis::ColisStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::str::FromStr;

use crate::domain::colis::api;
use crate::domain::colis::filters::FilterState;
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::icons::icon;

fn status_label(wire: &str) -> String {
    ColisStatus::from_str(wire)
        .map(|s| s.display_name().to_string())
        .unwrap_or_else(|_| wire.to_string())
}

/// A text filter bound to one `FilterState` field.
#[component]
fn TextFilter(
    filters: RwSignal<FilterState>,
    field: &'static str,
    label: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="filter-field">
            <label>{label}</label>
            <input
                type="text"
                class="form-control form-control-sm"
                placeholder=placeholder
                prop:value=move || filters.with(|f| f.get(field))
                on:input=move |ev| {
                    filters.update(|f| f.set(field, event_target_value(&ev)));
                }
            />
        </div>
    }
}

/// A start/end date-range filter pair.
#[component]
fn DateRangeFilter(
    filters: RwSignal<FilterState>,
    start_field: &'static str,
    end_field: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <div class="filter-field filter-field--range">
            <label>{label}</label>
            <div class="filter-field__range">
                <input
                    type="date"
                    class="form-control form-control-sm"
                    prop:value=move || filters.with(|f| f.get(start_field))
                    on:input=move |ev| {
                        filters.update(|f| f.set(start_field, event_target_value(&ev)));
                    }
                />
                <span>"—"</span>
                <input
                    type="date"
                    class="form-control form-control-sm"
                    prop:value=move || filters.with(|f| f.get(end_field))
                    on:input=move |ev| {
                        filters.update(|f| f.set(end_field, event_target_value(&ev)));
                    }
                />
            </div>
        </div>
    }
}

/// Collapsible filter form over all recognized filter fields, with active
/// filter chips and apply/reset actions.
///
/// Status options come from `/colis/status-values`; the static enumeration
/// is the fallback when that call fails.
#[component]
pub fn FiltersPanel(
    filters: RwSignal<FilterState>,
    #[prop(into)] title: String,
    on_apply: Callback<()>,
    on_reset: Callback<()>,
) -> impl IntoView {
    let is_expanded = RwSignal::new(filters.with_untracked(|f| f.show_panel));
    // Keep the open/closed flag in the filter store in sync with the panel.
    Effect::new(move |_| {
        let expanded = is_expanded.get();
        filters.update(|f| f.show_panel = expanded);
    });

    let (status_values, set_status_values) = signal::<Vec<String>>(
        ColisStatus::ALL
            .iter()
            .map(|s| s.as_wire().to_string())
            .collect(),
    );

    spawn_local(async move {
        match api::fetch_status_values().await {
            Ok(values) if !values.is_empty() => set_status_values.set(values),
            Ok(_) => {}
            Err(e) => log::warn!("Failed to load status values: {}", e),
        }
    });

    let active_count = Signal::derive(move || filters.with(|f| f.active_count()));

    let chip = move |field: &'static str, label: String| {
        view! {
            <FilterTag
                label=label
                on_remove=Callback::new(move |_| {
                    filters.update(|f| f.set(field, String::new()));
                    on_apply.run(());
                })
            />
        }
        .into_any()
    };

    let tags = move || {
        let f = filters.get();
        let mut chips: Vec<AnyView> = Vec::new();
        if !f.code_envoi.is_empty() {
            chips.push(chip("codeEnvoi", format!("Code: {}", f.code_envoi)));
        }
        if !f.tel_destinataire.is_empty() {
            chips.push(chip("telDestinataire", format!("Tél: {}", f.tel_destinataire)));
        }
        if !f.status.is_empty() {
            chips.push(chip("status", format!("Statut: {}", status_label(&f.status))));
        }
        if !f.destination.is_empty() {
            chips.push(chip("destination", format!("Destination: {}", f.destination)));
        }
        if !f.is_payed.is_empty() {
            let label = if f.is_payed == "true" { "Payé" } else { "Impayé" };
            chips.push(chip("isPayed", format!("Paiement: {}", label)));
        }
        chips
    };

    view! {
        <FilterPanel is_expanded=is_expanded active_filters_count=active_count title=title>
            <div class="filter-grid">
                <TextFilter
                    filters=filters
                    field="codeEnvoi"
                    label="Code envoi"
                    placeholder="Rechercher..."
                />
                <TextFilter
                    filters=filters
                    field="telDestinataire"
                    label="Tél destinataire"
                    placeholder="06xxxxxxxx"
                />
                <div class="filter-field">
                    <label>"Statut"</label>
                    <select
                        class="form-select form-select-sm"
                        prop:value=move || filters.with(|f| f.status.clone())
                        on:change=move |ev| {
                            filters.update(|f| f.set("status", event_target_value(&ev)));
                        }
                    >
                        <option value="">"Tous les statuts"</option>
                        {move || {
                            status_values
                                .get()
                                .into_iter()
                                .map(|wire| {
                                    let label = status_label(&wire);
                                    view! { <option value=wire.clone()>{label}</option> }
                                })
                                .collect_view()
                        }}
                    </select>
                </div>
                <TextFilter
                    filters=filters
                    field="destination"
                    label="Destination"
                    placeholder="Ville..."
                />
                <div class="filter-field">
                    <label>"Paiement"</label>
                    <select
                        class="form-select form-select-sm"
                        prop:value=move || filters.with(|f| f.is_payed.clone())
                        on:change=move |ev| {
                            filters.update(|f| f.set("isPayed", event_target_value(&ev)));
                        }
                    >
                        <option value="">"Tous"</option>
                        <option value="true">"Payé"</option>
                        <option value="false">"Impayé"</option>
                    </select>
                </div>

                <DateRangeFilter
                    filters=filters
                    start_field="dateDepotStart"
                    end_field="dateDepotEnd"
                    label="Date dépôt"
                />
                <DateRangeFilter
                    filters=filters
                    start_field="dateStatutStart"
                    end_field="dateStatutEnd"
                    label="Date statut"
                />
                <DateRangeFilter
                    filters=filters
                    start_field="datePaiementStart"
                    end_field="datePaiementEnd"
                    label="Date paiement"
                />

                <div class="filter-actions">
                    <button
                        type="button"
                        class="btn btn-primary btn-sm"
                        title="Appliquer les filtres"
                        on:click=move |_| on_apply.run(())
                    >
                        {icon("search")}
                        " Rechercher"
                    </button>
                    <button
                        type="button"
                        class="btn btn-outline-secondary btn-sm"
                        title="Réinitialiser"
                        on:click=move |_| on_reset.run(())
                    >
                        {icon("refresh")}
                        " Réinitialiser"
                    </button>
                </div>
            </div>

            <div class="filter-tags">{move || tags()}</div>
        </FilterPanel>
    }
}
