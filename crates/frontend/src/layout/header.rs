use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::system::auth::session::use_session;

/// Top bar: brand in the middle, user identity and logout on the right.
#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();

    let full_name = move || {
        session
            .account
            .with(|a| a.as_ref().map(|c| c.full_name()).unwrap_or_default())
    };
    let email = move || {
        session
            .account
            .with(|a| a.as_ref().map(|c| c.email.clone()).unwrap_or_default())
    };
    let profile_type = move || {
        session
            .account
            .with(|a| a.as_ref().map(|c| c.profile_type.clone()).unwrap_or_default())
    };

    view! {
        <header class="dashboard-header">
            <div class="header-brand">
                <h3>"AMANA"</h3>
            </div>
            <div class="user-info">
                <div class="text-end">
                    <div class="fw-bold">{full_name}</div>
                    <small class="text-muted">{email}</small>
                </div>
                <span class="badge bg-light text-dark">{profile_type}</span>
                <button
                    class="btn btn-outline-secondary"
                    title="Se déconnecter"
                    on:click=move |_| session.logout()
                >
                    {icon("logout")}
                    " Se déconnecter"
                </button>
            </div>
        </header>
    }
}
