//! Password-reset request page.

use leptos::prelude::*;

use crate::net::api::ApiClient;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let email = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        if email_value.is_empty() {
            info.set("Ingresa tu correo.".to_owned());
            return;
        }
        busy.set(true);
        info.set("Enviando enlace...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.forgot_password(&email_value).await {
                    Ok(()) => {
                        info.set("Revisa tu correo: te enviamos el enlace de recuperación.".to_owned());
                    }
                    Err(e) => info.set(format!("No se pudo enviar el enlace: {e}")),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, email_value);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Recuperar contraseña"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="correo@ejemplo.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Enviar enlace"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <div class="auth-links">
                    <a href="/login">"Volver a iniciar sesión"</a>
                </div>
            </div>
        </div>
    }
}
