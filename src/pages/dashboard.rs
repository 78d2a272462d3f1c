//! Home page: session summary and entry points to the credit workflows.

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::state::session::SessionState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let api = expect_context::<ApiClient>();

    // A failed session check (server unreachable, not "signed out") gets a
    // visible retry instead of silently presenting the login screen.
    let on_retry = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let outcome = api.fetch_current_user().await;
                session.update(|s| s.apply_fetch(outcome));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &api;
        }
    });

    view! {
        <div class="dashboard-page">
            <Show when=move || session.get().last_error.is_some()>
                <div class="dashboard-page__notice">
                    <p>
                        {move || {
                            session
                                .get()
                                .last_error
                                .map(|e| format!("No pudimos verificar tu sesión: {e}"))
                                .unwrap_or_default()
                        }}
                    </p>
                    <button class="btn" on:click=move |_| on_retry.run(())>
                        "Reintentar"
                    </button>
                </div>
            </Show>

            <Show when=move || session.get().is_logged_in()>
                <header class="dashboard-page__header">
                    <h1>
                        {move || {
                            session
                                .get()
                                .user
                                .map(|u| format!("Hola, {}", u.name))
                                .unwrap_or_default()
                        }}
                    </h1>
                    <p class="dashboard-page__branch">
                        {move || {
                            session
                                .get()
                                .user
                                .and_then(|u| u.branch)
                                .map(|b| format!("Sucursal: {}", b.name))
                                .unwrap_or_default()
                        }}
                    </p>
                </header>

                <div class="dashboard-page__actions">
                    <a class="dashboard-card" href="/credit-applications">
                        <h2>"Solicitudes de crédito"</h2>
                        <p>"Consulta y gestiona las solicitudes registradas."</p>
                    </a>
                    <a class="dashboard-card" href="/credit-applications/new">
                        <h2>"Nueva solicitud"</h2>
                        <p>"Registra un deudor y radica una solicitud."</p>
                    </a>
                </div>
            </Show>
        </div>
    }
}
