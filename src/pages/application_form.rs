//! New credit-application form: debtor data, amount, and documents.
//!
//! The draft mirrors the server schema (`CreditApplicationForm`); saving as
//! a draft keeps the page open so documents can be attached, while
//! submitting returns to the listing.

use leptos::prelude::*;

use crate::components::document_list::DocumentList;
use crate::components::money_input::MoneyInput;
use crate::components::municipality_select::MunicipalitySelect;
use crate::net::api::ApiClient;
use crate::net::types::{ApplicantForm, ApplicationStatus, CreditApplicationForm};
use crate::state::session::SessionState;

const DOCUMENT_TYPES: [(&str, &str); 4] = [
    ("CC", "Cédula de ciudadanía"),
    ("CE", "Cédula de extranjería"),
    ("TI", "Tarjeta de identidad"),
    ("PA", "Pasaporte"),
];

const DESTINATIONS: [&str; 5] = [
    "Libre inversión",
    "Vivienda",
    "Vehículo",
    "Educación",
    "Capital de trabajo",
];

#[component]
pub fn ApplicationFormPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<RwSignal<SessionState>>();

    // Debtor identity.
    let document_type = RwSignal::new("CC".to_owned());
    let document_number = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let second_name = RwSignal::new(String::new());
    let first_last_name = RwSignal::new(String::new());
    let second_last_name = RwSignal::new(String::new());
    let birth_date = RwSignal::new(String::new());
    let mobile_phone = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());

    // Residence.
    let residence_address = RwSignal::new(String::new());
    let residence_city = RwSignal::new(None::<i64>);

    // Requested credit.
    let amount = RwSignal::new(None::<f64>);
    let term_months = RwSignal::new("12".to_owned());
    let destination = RwSignal::new(DESTINATIONS[0].to_owned());

    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let created_id = RwSignal::new(None::<i64>);

    let build_form = move |status: ApplicationStatus| -> Result<CreditApplicationForm, String> {
        let document_number_value = document_number.get().trim().to_owned();
        let first_name_value = first_name.get().trim().to_owned();
        let first_last_name_value = first_last_name.get().trim().to_owned();
        if document_number_value.is_empty()
            || first_name_value.is_empty()
            || first_last_name_value.is_empty()
        {
            return Err("Documento, nombre y primer apellido son obligatorios.".to_owned());
        }
        let Some(amount_value) = amount.get() else {
            return Err("Ingresa el monto solicitado.".to_owned());
        };
        if amount_value <= 0.0 {
            return Err("El monto debe ser mayor que cero.".to_owned());
        }
        let Ok(term_value) = term_months.get().trim().parse::<i64>() else {
            return Err("El plazo debe ser un número de meses.".to_owned());
        };
        if term_value <= 0 {
            return Err("El plazo debe ser mayor que cero.".to_owned());
        }

        let optional = |signal: RwSignal<String>| {
            let value = signal.get().trim().to_owned();
            if value.is_empty() { None } else { Some(value) }
        };

        let debtor = ApplicantForm {
            document_type: document_type.get(),
            document_number: document_number_value,
            first_name: first_name_value,
            second_name: optional(second_name),
            first_last_name: first_last_name_value,
            second_last_name: optional(second_last_name),
            birth_date: optional(birth_date),
            mobile_phone: optional(mobile_phone),
            email: optional(email),
            residence_address: optional(residence_address),
            residence_city_id: residence_city.get(),
            ..ApplicantForm::default()
        };

        let agency_id = session
            .get_untracked()
            .user
            .and_then(|u| u.branch_id)
            .unwrap_or(0);

        Ok(CreditApplicationForm {
            debtor,
            amount_requested: amount_value,
            term_months: term_value,
            destination: Some(destination.get()),
            destination_description: None,
            agency_id,
            status,
            co_debtors: Vec::new(),
        })
    };

    let save = Callback::new(move |status: ApplicationStatus| {
        if busy.get() {
            return;
        }
        let form = match build_form(status) {
            Ok(form) => form,
            Err(message) => {
                info.set(message);
                return;
            }
        };
        busy.set(true);
        info.set("Guardando solicitud...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.submit_credit_application(&form).await {
                    Ok(created) => {
                        if status == ApplicationStatus::Submitted {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().set_href("/credit-applications");
                            }
                        } else {
                            created_id.set(Some(created.id));
                            info.set("Borrador guardado. Puedes adjuntar documentos.".to_owned());
                        }
                        busy.set(false);
                    }
                    Err(e) => {
                        info.set(format!("No se pudo guardar la solicitud: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, form);
        }
    });

    let text_field = |label: &'static str, signal: RwSignal<String>, kind: &'static str| {
        view! {
            <label class="form-field">
                {label}
                <input
                    type=kind
                    prop:value=move || signal.get()
                    on:input=move |ev| signal.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <div class="application-form">
            <h1>"Nueva solicitud de crédito"</h1>

            <section class="application-form__section">
                <h2>"Deudor"</h2>
                <div class="application-form__grid">
                    <label class="form-field">
                        "Tipo de documento"
                        <select on:change=move |ev| document_type.set(event_target_value(&ev))>
                            {DOCUMENT_TYPES
                                .into_iter()
                                .map(|(value, label)| {
                                    view! {
                                        <option value=value selected=move || document_type.get() == value>
                                            {label}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    {text_field("Número de documento", document_number, "text")}
                    {text_field("Primer nombre", first_name, "text")}
                    {text_field("Segundo nombre", second_name, "text")}
                    {text_field("Primer apellido", first_last_name, "text")}
                    {text_field("Segundo apellido", second_last_name, "text")}
                    {text_field("Fecha de nacimiento", birth_date, "date")}
                    {text_field("Celular", mobile_phone, "tel")}
                    {text_field("Correo", email, "email")}
                </div>
            </section>

            <section class="application-form__section">
                <h2>"Residencia"</h2>
                <div class="application-form__grid">
                    {text_field("Dirección", residence_address, "text")}
                    <label class="form-field">
                        "Ciudad de residencia"
                        <MunicipalitySelect selected=residence_city/>
                    </label>
                </div>
            </section>

            <section class="application-form__section">
                <h2>"Crédito solicitado"</h2>
                <div class="application-form__grid">
                    <label class="form-field">
                        "Monto"
                        <MoneyInput value=amount placeholder="0"/>
                    </label>
                    {text_field("Plazo (meses)", term_months, "number")}
                    <label class="form-field">
                        "Destino"
                        <select on:change=move |ev| destination.set(event_target_value(&ev))>
                            {DESTINATIONS
                                .into_iter()
                                .map(|value| {
                                    view! {
                                        <option value=value selected=move || destination.get() == value>
                                            {value}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                </div>
            </section>

            <Show when=move || !info.get().is_empty()>
                <p class="application-form__message">{move || info.get()}</p>
            </Show>

            <div class="application-form__actions">
                <button
                    class="btn"
                    disabled=move || busy.get()
                    on:click=move |_| save.run(ApplicationStatus::Draft)
                >
                    "Guardar borrador"
                </button>
                <button
                    class="btn btn--primary"
                    disabled=move || busy.get()
                    on:click=move |_| save.run(ApplicationStatus::Submitted)
                >
                    "Radicar solicitud"
                </button>
            </div>

            {move || {
                created_id
                    .get()
                    .map(|id| view! { <DocumentList application_id=id/> })
            }}
        </div>
    }
}
