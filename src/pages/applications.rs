//! Credit-application listing page.

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::types::{ApplicationStatus, CreditApplicationSummary, Paginated};
use crate::util::pesos::format_pesos;

fn status_label(status: ApplicationStatus) -> &'static str {
    match status {
        ApplicationStatus::Draft => "Borrador",
        ApplicationStatus::Submitted => "Radicada",
    }
}

#[component]
pub fn ApplicationsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let page = RwSignal::new(1_i64);

    let applications = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            let page = page.get();
            async move { api.fetch_credit_applications(page).await.ok() }
        }
    });

    view! {
        <div class="applications-page">
            <header class="applications-page__header">
                <h1>"Solicitudes de crédito"</h1>
                <a class="btn btn--primary" href="/credit-applications/new">
                    "+ Nueva solicitud"
                </a>
            </header>

            <Suspense fallback=move || view! { <p>"Cargando solicitudes..."</p> }>
                {move || {
                    applications.get().map(|result| match result {
                        None => view! {
                            <p class="applications-page__error">
                                "No se pudieron cargar las solicitudes."
                            </p>
                        }
                            .into_any(),
                        Some(listing) => applications_table(&listing, page).into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}

fn applications_table(
    listing: &Paginated<CreditApplicationSummary>,
    page: RwSignal<i64>,
) -> impl IntoView {
    let rows = listing
        .data
        .iter()
        .map(|row| {
            view! {
                <tr>
                    <td>{row.id}</td>
                    <td>{row.debtor_name.clone()}</td>
                    <td class="applications-page__amount">
                        {format!("$ {}", format_pesos(Some(row.amount_requested)))}
                    </td>
                    <td>{format!("{} meses", row.term_months)}</td>
                    <td>{status_label(row.status)}</td>
                    <td>{row.created_at.clone()}</td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    let meta = listing.meta.clone();
    let current = meta.current_page;
    let last = meta.last_page;

    view! {
        <div>
            <table class="applications-page__table">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"Deudor"</th>
                        <th>"Monto"</th>
                        <th>"Plazo"</th>
                        <th>"Estado"</th>
                        <th>"Creada"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
            <div class="applications-page__pager">
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
}
