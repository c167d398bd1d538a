pub mod controller;
pub mod state;

use contracts::domain::colis::Colis;
use leptos::prelude::*;

use self::controller::ColisListController;
use crate::domain::colis::query::SortColumn;
use crate::domain::colis::ui::filters::FiltersPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::{format_currency, format_date};
use crate::system::auth::session::use_session;

/// Server-paginated shipments table with sortable headers and the filter
/// panel.
#[component]
pub fn ColisTable() -> impl IntoView {
    let session = use_session();
    let Some(client_id) = session.client_id() else {
        // The auth gate keeps this unreachable; render nothing if not.
        return view! { <></> }.into_any();
    };

    let controller = ColisListController::new(client_id);
    let state = controller.state;

    controller.load(false);

    let toggle_sort = move |column: SortColumn| {
        move |_| controller.toggle_sort(column)
    };

    let sort = controller.sort;
    let header = move |column: SortColumn, label: &'static str| {
        view! {
            <th
                class="sortable"
                on:click=toggle_sort(column)
                title="Trier"
            >
                {move || format!("{}{}", label, sort.get().indicator(column))}
            </th>
        }
    };

    view! {
        <div class="table-container">
            <div class="table-header">
                <div>
                    <h5>"Mes Envois"</h5>
                    <small class="text-muted">
                        {move || format!("{} colis au total", state.with(|s| s.total_elements))}
                    </small>
                </div>
            </div>

            <FiltersPanel
                filters=controller.filters
                title="Filtres"
                on_apply=Callback::new(move |_| controller.apply_filters())
                on_reset=Callback::new(move |_| controller.reset_filters())
            />

            {move || {
                state
                    .with(|s| s.error.clone())
                    .map(|e| view! { <div class="alert alert-danger">{e}</div> })
            }}

            {move || {
                if state.with(|s| s.loading) {
                    view! {
                        <div class="loading-block">
                            <div class="spinner-border text-primary"></div>
                        </div>
                    }
                    .into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}

            <div class="table-responsive">
                <table class="table table-hover">
                    <thead class="table-light">
                        <tr>
                            {header(SortColumn::CodeEnvoi, "Code envoi")}
                            {header(SortColumn::DateDepot, "Date dépôt")}
                            {header(SortColumn::Destination, "Destination")}
                            {header(SortColumn::Status, "Statut")}
                            {header(SortColumn::DateStatut, "Date statut")}
                            {header(SortColumn::Crbt, "CRBT")}
                            {header(SortColumn::Poids, "Poids")}
                            {header(SortColumn::Destinataire, "Destinataire")}
                            {header(SortColumn::TelDestinataire, "Tél destinataire")}
                            {header(SortColumn::DatePaiement, "Date paiement")}
                            {header(SortColumn::IsPayed, "Payé")}
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let items = state.with(|s| s.items.clone());
                            if items.is_empty() {
                                view! {
                                    <tr>
                                        <td colspan="11" class="text-center text-muted">
                                            "Aucun colis trouvé"
                                        </td>
                                    </tr>
                                }
                                .into_any()
                            } else {
                                items.into_iter().map(colis_row).collect_view().into_any()
                            }
                        }}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || state.with(|s| s.page))
                total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                total_count=Signal::derive(move || state.with(|s| s.total_elements))
                page_size=Signal::derive(move || state.with(|s| s.size))
                on_page_change=Callback::new(move |page| controller.change_page(page))
                on_page_size_change=Callback::new(move |size| controller.change_size(size))
            />
        </div>
    }
    .into_any()
}

fn colis_row(colis: Colis) -> impl IntoView {
    let poids = colis
        .poids
        .map(|p| format!("{} kg", p))
        .unwrap_or_else(|| "-".to_string());
    let payed_badge = if colis.is_payed {
        view! { <span class="badge bg-success">"Payé"</span> }.into_any()
    } else {
        view! { <span class="badge bg-warning">"Impayé"</span> }.into_any()
    };

    view! {
        <tr>
            <td>
                <code class="text-primary">{colis.code_envoi.clone()}</code>
            </td>
            <td>{format_date(colis.date_depot.as_deref())}</td>
            <td>
                <span class="badge bg-secondary">{colis.destination.clone()}</span>
            </td>
            <td>
                <span class=colis.status.badge_class()>{colis.status.display_name()}</span>
            </td>
            <td>{format_date(colis.date_statut.as_deref())}</td>
            <td class="text-end">{format_currency(colis.crbt)}</td>
            <td class="text-end">{poids}</td>
            <td>{colis.destinataire.clone()}</td>
            <td>{colis.tel_destinataire.clone()}</td>
            <td>{format_date(colis.date_paiement.as_deref())}</td>
            <td>{payed_badge}</td>
        </tr>
    }
}
