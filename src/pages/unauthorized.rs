//! Page shown when a navigation lacks the required permissions.

use leptos::prelude::*;

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Acceso restringido"</h1>
                <p>"No tienes permisos para ver esta sección."</p>
                <a class="auth-button" href="/">
                    "Volver al inicio"
                </a>
            </div>
        </div>
    }
}
