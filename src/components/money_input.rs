//! Text input for peso amounts.
//!
//! Shows the formatted display string (`1.234.567,50`), keeps the numeric
//! value in the caller's signal, and reformats on blur. Keystrokes outside
//! digits and separators are rejected before they reach the input.

use leptos::prelude::*;

use crate::util::pesos::{filter_pesos_chars, format_pesos, parse_pesos_input, pesos_key_allowed};

#[component]
pub fn MoneyInput(
    /// Parsed amount; `None` while the field is empty or invalid.
    value: RwSignal<Option<f64>>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let text = RwSignal::new(format_pesos(value.get_untracked()));

    let on_input = move |ev| {
        let raw = event_target_value(&ev);
        text.set(filter_pesos_chars(&raw));
        value.set(parse_pesos_input(&raw));
    };

    let on_blur = move |_| {
        text.set(format_pesos(value.get_untracked()));
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if !pesos_key_allowed(&ev.key(), ev.ctrl_key() || ev.meta_key()) {
            ev.prevent_default();
        }
    };

    view! {
        <input
            class="money-input"
            type="text"
            inputmode="decimal"
            placeholder=placeholder
            prop:value=move || text.get()
            on:input=on_input
            on:blur=on_blur
            on:keydown=on_keydown
        />
    }
}
