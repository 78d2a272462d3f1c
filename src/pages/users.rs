//! Admin user listing, gated by the `users.view` permission.

use leptos::prelude::*;

use crate::net::api::ApiClient;

#[component]
pub fn UsersPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let page = RwSignal::new(1_i64);

    let users = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            let page = page.get();
            async move { api.fetch_users(page).await.ok() }
        }
    });

    view! {
        <div class="users-page">
            <h1>"Usuarios"</h1>
            <Suspense fallback=move || view! { <p>"Cargando usuarios..."</p> }>
                {move || {
                    users.get().map(|result| match result {
                        None => view! {
                            <p class="users-page__error">"No se pudieron cargar los usuarios."</p>
                        }
                            .into_any(),
                        Some(listing) => {
                            let rows = listing
                                .data
                                .iter()
                                .map(|user| {
                                    view! {
                                        <tr>
                                            <td>{user.name.clone()}</td>
                                            <td>{user.email.clone()}</td>
                                            <td>{user.roles.join(", ")}</td>
                                            <td>
                                                {if user.email_verified_at.is_some() {
                                                    "Verificado"
                                                } else {
                                                    "Pendiente"
                                                }}
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>();
                            let current = listing.meta.current_page;
                            let last = listing.meta.last_page;
                            view! {
                                <div>
                                    <table class="users-page__table">
                                        <thead>
                                            <tr>
                                                <th>"Nombre"</th>
                                                <th>"Correo"</th>
                                                <th>"Roles"</th>
                                                <th>"Estado"</th>
                                            </tr>
                                        </thead>
                                        <tbody>{rows}</tbody>
                                    </table>
                                    <div class="users-page__pager">
                                        <button
                                            class="btn"
                                            disabled=move || current <= 1
                                            on:click=move |_| page.set(current - 1)
                                        >
                                            "Anterior"
                                        </button>
                                        <span>{format!("Página {current} de {last}")}</span>
                                        <button
                                            class="btn"
                                            disabled=move || current >= last
                                            on:click=move |_| page.set(current + 1)
                                        >
                                            "Siguiente"
                                        </button>
                                    </div>
                                </div>
                            }
                                .into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}
