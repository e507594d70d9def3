//! Transient notification banner.

use leptos::prelude::*;

#[component]
pub fn Toast(message: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.read().is_some()>
            <div class="toast">{move || message.get().unwrap_or_default()}</div>
        </Show>
    }
}
