//! Top navigation: permission-aware links, sign-out, color scheme.

use leptos::prelude::*;

use crate::env::Environment;
use crate::net::api::ApiClient;
use crate::state::session::SessionState;
use crate::util::dark_mode;
use crate::util::permissions::PermissionEvaluator;

#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let api = expect_context::<ApiClient>();

    let dark = RwSignal::new(false);
    Effect::new(move || {
        let initial = dark_mode::read_preference();
        dark_mode::apply(initial);
        dark.set(initial);
    });

    let can_list_users = move || {
        let state = session.get();
        let evaluator = PermissionEvaluator::new(Environment::current(), state.user.as_ref());
        evaluator.is_admin() || evaluator.has_permission("users.view")
    };

    let on_logout = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                if let Err(e) = api.logout().await {
                    log::warn!("logout failed: {e}");
                }
                session.update(SessionState::sign_out);
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/login");
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &api;
        }
    });

    view! {
        <header class="nav-bar">
            <a class="nav-bar__brand" href="/">
                "Credisol"
            </a>
            <Show when=move || session.get().is_logged_in()>
                <nav class="nav-bar__links">
                    <a href="/credit-applications">"Solicitudes"</a>
                    <Show when=can_list_users>
                        <a href="/users">"Usuarios"</a>
                    </Show>
                </nav>
                <div class="nav-bar__session">
                    <span class="nav-bar__user">
                        {move || session.get().user.map(|u| u.name).unwrap_or_default()}
                    </span>
                    <button class="btn" on:click=move |_| on_logout.run(())>
                        "Cerrar sesión"
                    </button>
                </div>
            </Show>
            <button
                class="nav-bar__scheme"
                title="Cambiar tema"
                on:click=move |_| {
                    let next = dark_mode::toggle(dark.get_untracked());
                    dark.set(next);
                }
            >
                {move || if dark.get() { "☀" } else { "☾" }}
            </button>
        </header>
    }
}
