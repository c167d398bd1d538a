//! Root components: the auth gate and the main tabbed layout.

use leptos::prelude::*;

use crate::dashboards::statistics::ui::StatisticsDashboard;
use crate::domain::colis::ui::list::ColisTable;
use crate::layout::header::Header;
use crate::shared::icons::icon;
use crate::system::auth::session::use_session;
use crate::system::pages::login::LoginPage;

#[derive(Clone, Copy, PartialEq, Eq)]
enum MainTab {
    Envois,
    Statistiques,
}

/// Main layout: header plus the Envois / Statistiques tabs.
#[component]
fn MainLayout() -> impl IntoView {
    let (active_tab, set_active_tab) = signal(MainTab::Envois);

    let tab_class = move |tab: MainTab| {
        if active_tab.get() == tab {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    view! {
        <div class="min-vh-100">
            <Header />
            <main class="container-fluid">
                <ul class="nav nav-tabs nav-justified">
                    <li class="nav-item">
                        <button
                            class=move || tab_class(MainTab::Envois)
                            on:click=move |_| set_active_tab.set(MainTab::Envois)
                        >
                            {icon("table")}
                            " Mes Envois"
                        </button>
                    </li>
                    <li class="nav-item">
                        <button
                            class=move || tab_class(MainTab::Statistiques)
                            on:click=move |_| set_active_tab.set(MainTab::Statistiques)
                        >
                            {icon("chart")}
                            " Statistiques"
                        </button>
                    </li>
                </ul>

                <div class="tab-content">
                    {move || match active_tab.get() {
                        MainTab::Envois => view! { <ColisTable /> }.into_any(),
                        MainTab::Statistiques => view! { <StatisticsDashboard /> }.into_any(),
                    }}
                </div>
            </main>
        </div>
    }
}

/// Application shell - auth gate component.
///
/// Shows `LoginPage` until a client account is present in the session.
#[component]
pub fn AppShell() -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.account.get().is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
