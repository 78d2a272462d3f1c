//! Stored documents of an application: listing, upload, and credentialed
//! download.

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::types::CreditDocument;
#[cfg(feature = "hydrate")]
use crate::net::download;

#[component]
pub fn DocumentList(
    /// Application whose documents are listed.
    application_id: i64,
) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let error = RwSignal::new(String::new());
    let title = RwSignal::new(String::new());
    let file_input = NodeRef::<leptos::html::Input>::new();

    let documents = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move {
                api.fetch_application_documents(application_id)
                    .await
                    .unwrap_or_default()
            }
        }
    });

    let on_upload = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let title_value = title.get().trim().to_owned();
            if title_value.is_empty() {
                error.set("Ingresa un título para el documento.".to_owned());
                return;
            }
            let Some(file) = file_input.get().and_then(|input| input.files()).and_then(|f| f.get(0))
            else {
                error.set("Selecciona un archivo.".to_owned());
                return;
            };
            let Ok(form_data) = web_sys::FormData::new() else {
                error.set("No se pudo preparar el archivo.".to_owned());
                return;
            };
            let _ = form_data.append_with_str("title", &title_value);
            let _ = form_data.append_with_blob("file", &file);

            error.set(String::new());
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.upload_document(application_id, &form_data).await {
                    Ok(_) => {
                        title.set(String::new());
                        documents.refetch();
                    }
                    Err(e) => error.set(format!("No se pudo adjuntar el documento: {e}")),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &api;
        }
    };

    view! {
        <div class="document-list">
            <h3>"Documentos"</h3>
            <Show when=move || !error.get().is_empty()>
                <p class="document-list__error">{move || error.get()}</p>
            </Show>

            <div class="document-list__upload">
                <input
                    class="document-list__title"
                    type="text"
                    placeholder="Título (ej: Cédula)"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <input class="document-list__file" type="file" node_ref=file_input/>
                <button class="btn" on:click=on_upload>
                    "Adjuntar"
                </button>
            </div>

            <Suspense fallback=move || view! { <p>"Cargando documentos..."</p> }>
                {move || {
                    documents.get().map(|list| {
                        if list.is_empty() {
                            view! { <p class="document-list__empty">"Sin documentos adjuntos."</p> }
                                .into_any()
                        } else {
                            view! {
                                <ul>
                                    {list
                                        .into_iter()
                                        .map(|doc| {
                                            view! {
                                                <DocumentRow
                                                    doc=doc
                                                    application_id=application_id
                                                    error=error
                                                />
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            }
                                .into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

/// One stored document with its download action.
#[component]
fn DocumentRow(doc: CreditDocument, application_id: i64, error: RwSignal<String>) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let config = expect_context::<ApiClient>().config().clone();

    let title = doc.title.clone();
    let document_id = doc.id;
    #[cfg(feature = "hydrate")]
    let filename = doc.filename.clone();

    let on_download = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            let filename = filename.clone();
            error.set(String::new());
            leptos::task::spawn_local(async move {
                if let Err(e) = download::download_document(
                    &config,
                    application_id,
                    document_id,
                    filename.as_deref(),
                )
                .await
                {
                    error.set(e.to_string());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (application_id, document_id, error);
        }
    };

    view! {
        <li class="document-list__row">
            <span>{title}</span>
            <button class="btn" on:click=on_download>
                "Descargar"
            </button>
        </li>
    }
}
