//! Password-reset completion page.
//!
//! The reset email links here with `?token=...&email=...`; the form posts
//! the new password together with both values.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::net::api::ApiClient;

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let query = use_query_map();
    let password = RwSignal::new(String::new());
    let confirmation = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let token = query.get().get("token").unwrap_or_default();
        let email = query.get().get("email").unwrap_or_default();
        if token.is_empty() || email.is_empty() {
            info.set("El enlace de recuperación no es válido.".to_owned());
            return;
        }
        let password_value = password.get();
        let confirmation_value = confirmation.get();
        if password_value.is_empty() {
            info.set("Ingresa la nueva contraseña.".to_owned());
            return;
        }
        if password_value != confirmation_value {
            info.set("Las contraseñas no coinciden.".to_owned());
            return;
        }
        busy.set(true);
        info.set("Actualizando contraseña...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api
                    .reset_password(&token, &email, &password_value, &confirmation_value)
                    .await
                {
                    Ok(()) => {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href("/login");
                        }
                    }
                    Err(e) => {
                        info.set(format!("No se pudo actualizar la contraseña: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, token, email, password_value, confirmation_value);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Nueva contraseña"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Nueva contraseña"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Confirmar contraseña"
                        prop:value=move || confirmation.get()
                        on:input=move |ev| confirmation.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Guardar"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
