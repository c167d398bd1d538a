use chrono::{Datelike, Utc};
use contracts::dashboards::statistics::StatisticsResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::charts::{
    french_month_label, payment_color, status_color, ChartCard, CityChart, DonutChart, TrendsChart,
};
use crate::dashboards::statistics::api;
use crate::domain::colis::filters::FilterState;
use crate::domain::colis::ui::filters::FiltersPanel;
use crate::shared::cities::normalize_city_counts;
use crate::shared::components::stat_card::StatCard;
use crate::shared::date_utils::format_thousands;
use crate::system::auth::session::use_session;

/// Statistics dashboard: KPI cards, status/payment breakdowns, monthly
/// trends and geographic distribution, all filterable with the same filter
/// set as the table.
#[component]
pub fn StatisticsDashboard() -> impl IntoView {
    let session = use_session();
    let Some(client_id) = session.client_id() else {
        return view! { <></> }.into_any();
    };

    let stats = RwSignal::new(StatisticsResponse::default());
    let filters = RwSignal::new(FilterState::default());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let request_seq = StoredValue::new(0_u64);

    let load_stats = move |use_filters: bool| {
        let seq = request_seq.get_value() + 1;
        request_seq.set_value(seq);

        let current_filters = filters.get_untracked();
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            let result = if use_filters && current_filters.has_active() {
                api::fetch_filtered_statistics(client_id, &current_filters).await
            } else {
                let (start, end) = current_filters.date_range();
                api::fetch_statistics(client_id, start, end).await
            };

            if request_seq.get_value() != seq {
                log::debug!("Discarding stale statistics response (seq {})", seq);
                return;
            }

            match result {
                Ok(response) => {
                    stats.set(response);
                    set_loading.set(false);
                }
                Err(e) => {
                    log::error!("Failed to load statistics: {}", e);
                    set_error.set(Some("Erreur lors du chargement des statistiques".to_string()));
                    set_loading.set(false);
                }
            }
        });
    };

    load_stats(false);

    let has_active = Signal::derive(move || filters.with(|f| f.has_active()));
    let filtered_marker =
        Signal::derive(move || has_active.get().then(|| "(filtré)".to_string()));

    let value_or_loading = move |f: fn(&StatisticsResponse) -> String| {
        Signal::derive(move || {
            if loading.get() {
                None
            } else {
                Some(stats.with(f))
            }
        })
    };

    let total_colis = value_or_loading(|s| format_thousands(s.total_colis));
    let total_crbt = value_or_loading(|s| format!("{} MAD", format_thousands(s.total_crbt as u64)));
    let delivery_rate = value_or_loading(|s| format!("{}%", s.delivery_rate()));
    let envois_periode = value_or_loading(|s| format_thousands(s.total_envois_periode));

    let now = Utc::now().date_naive();
    let periode_label = format!("Envois ({})", french_month_label(now.year(), now.month()));

    let status_data = Signal::derive(move || {
        let mut data: Vec<(String, u64)> =
            stats.with(|s| s.status_stats.clone().into_iter().collect());
        data.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        data
    });
    let payment_data = Signal::derive(move || {
        let mut data: Vec<(String, u64)> =
            stats.with(|s| s.payment_stats.clone().into_iter().collect());
        data.sort_by(|a, b| a.0.cmp(&b.0));
        data
    });
    let monthly_data = Signal::derive(move || stats.with(|s| s.monthly_stats.clone()));
    let city_data =
        Signal::derive(move || stats.with(|s| normalize_city_counts(&s.city_stats)));

    view! {
        <div class="statistics-dashboard">
            <div class="stat-card-row">
                <StatCard
                    label="Total Colis"
                    icon_name="package"
                    value=total_colis
                    marker=filtered_marker
                    accent="primary"
                />
                <StatCard
                    label="Total CRBT"
                    icon_name="money"
                    value=total_crbt
                    marker=filtered_marker
                    accent="success"
                />
                <StatCard
                    label=periode_label
                    icon_name="table"
                    value=envois_periode
                    marker=filtered_marker
                    accent="warning"
                />
                <StatCard
                    label="Taux de Livraison"
                    icon_name="chart"
                    value=delivery_rate
                    marker=filtered_marker
                    accent="info"
                />
            </div>

            <FiltersPanel
                filters=filters
                title="Filtres pour les statistiques"
                on_apply=Callback::new(move |_| load_stats(true))
                on_reset=Callback::new(move |_| {
                    filters.update(|f| f.reset());
                    load_stats(false);
                })
            />

            {move || {
                error
                    .get()
                    .map(|e| view! { <div class="alert alert-danger">{e}</div> })
            }}

            <div class="chart-grid">
                <ChartCard title="Détail des statuts">
                    <DonutChart data=status_data color_of=status_color />
                </ChartCard>
                <ChartCard title="Statut des Paiements">
                    <DonutChart data=payment_data color_of=payment_color />
                </ChartCard>
                <ChartCard title="Évolution mensuelle">
                    <TrendsChart data=monthly_data />
                </ChartCard>
                <ChartCard title="Répartition par ville">
                    <CityChart data=city_data />
                </ChartCard>
            </div>
        </div>
    }
    .into_any()
}
