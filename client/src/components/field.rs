//! Labelled form controls bound to an `RwSignal<String>`.

use leptos::prelude::*;

/// `<label>` wrapping a required `<input>`. Every keystroke writes the signal.
#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(into)] input_type: String,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <label>
            {label}
            <input
                type=input_type
                name=name
                required=true
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

/// Inline error paragraph, rendered only while `message` holds a value.
#[component]
pub fn FormError(message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <p class="error">{move || message.get().unwrap_or_default()}</p>
        </Show>
    }
}
