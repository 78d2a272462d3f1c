//! Login page for the email + password cookie session.

use leptos::prelude::*;

use crate::net::api::ApiClient;

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if email_value.is_empty() || password_value.is_empty() {
            info.set("Ingresa correo y contraseña.".to_owned());
            return;
        }
        busy.set(true);
        info.set("Iniciando sesión...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.login(&email_value, &password_value).await {
                    Ok(()) => {
                        // Full reload so the new session is checked from scratch.
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href("/");
                        }
                    }
                    Err(crate::net::api::ApiError::Status(422)) => {
                        info.set("Credenciales inválidas.".to_owned());
                        busy.set(false);
                    }
                    Err(e) => {
                        info.set(format!("No se pudo iniciar sesión: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, email_value, password_value);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Credisol"</h1>
                <p class="auth-card__subtitle">"Gestión de solicitudes de crédito"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="correo@ejemplo.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Contraseña"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Iniciar sesión"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <div class="auth-links">
                    <a href="/forgot-password">"¿Olvidaste tu contraseña?"</a>
                    <a href="/register">"Crear cuenta"</a>
                </div>
            </div>
        </div>
    }
}
