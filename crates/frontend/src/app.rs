use leptos::prelude::*;

use crate::app_shell::AppShell;
use crate::system::auth::session::Session;

#[component]
pub fn App() -> impl IntoView {
    // One session object for the whole app, restored from localStorage
    // before the first render so the auth gate sees the persisted user.
    let session = Session::new();
    session.restore();
    provide_context(session);

    view! {
        <AppShell />
    }
}
