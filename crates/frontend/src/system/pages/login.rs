use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::{api, session::use_session};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let session = use_session();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get();
        let password_val = password.get();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::login(email_val, password_val).await {
                Ok(account) => {
                    session.login(account);
                    set_is_loading.set(false);
                }
                Err(e) => {
                    set_error_message.set(Some(e));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-card">
                <div class="logo">
                    <h2>"AMANA"</h2>
                    <p class="text-muted">"Gestion des Colis"</p>
                </div>

                <Show when=move || error_message.get().is_some()>
                    <div class="alert alert-danger">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="mb-3">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            class="form-control"
                            id="email"
                            placeholder="name@email.com"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="mb-3">
                        <label for="password">"Mot de passe"</label>
                        <input
                            type="password"
                            class="form-control"
                            id="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Connexion..." } else { "Se connecter" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
