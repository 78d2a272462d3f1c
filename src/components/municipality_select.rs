//! Searchable municipality picker for address fields.
//!
//! Options come from the bundled catalog, filtered as the user types and
//! capped so a broad search never renders the whole dataset.

use leptos::prelude::*;

use crate::util::municipalities::{self, DEFAULT_OPTION_LIMIT};

#[component]
pub fn MunicipalitySelect(
    /// Selected municipality id from the catalog.
    selected: RwSignal<Option<i64>>,
) -> impl IntoView {
    let initial = municipalities::get_by_id(selected.get_untracked())
        .map(municipalities::label)
        .unwrap_or_default();
    let search = RwSignal::new(initial);
    let open = RwSignal::new(false);

    let options = Memo::new(move |_| {
        municipalities::filtered_options(&search.get(), DEFAULT_OPTION_LIMIT)
    });

    view! {
        <div class="municipality-select">
            <input
                class="municipality-select__input"
                type="text"
                placeholder="Municipio o departamento"
                prop:value=move || search.get()
                on:input=move |ev| {
                    search.set(event_target_value(&ev));
                    selected.set(None);
                    open.set(true);
                }
                on:focus=move |_| open.set(true)
            />
            <Show when=move || open.get()>
                <ul class="municipality-select__options">
                    {move || {
                        options
                            .get()
                            .into_iter()
                            .map(|option| {
                                let label = option.label.clone();
                                let id = option.id;
                                view! {
                                    <li
                                        class="municipality-select__option"
                                        on:click=move |_| {
                                            selected.set(Some(id));
                                            search.set(label.clone());
                                            open.set(false);
                                        }
                                    >
                                        {option.label}
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </Show>
        </div>
    }
}
