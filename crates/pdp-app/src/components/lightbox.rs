//! Lightbox overlay for the selected image.
//!
//! Navigation here moves the same `selected_image` field the inline
//! gallery reads, so the two can never drift apart.

use leptos::prelude::*;
use pdp_core::{StepDirection, ViewState};

#[component]
pub fn Lightbox(images: StoredValue<Vec<String>>, view: RwSignal<ViewState>) -> impl IntoView {
    let count = images.with_value(|imgs| imgs.len());
    let current = move || {
        images.with_value(|imgs| {
            imgs.get(view.read().selected_image)
                .cloned()
                .unwrap_or_default()
        })
    };

    view! {
        <Show when=move || view.read().lightbox_open>
            <div class="lightbox" on:click=move |_| view.update(|s| s.close_lightbox())>
                <div class="lightbox-content" on:click=|ev| ev.stop_propagation()>
                    <button
                        class="lightbox-close"
                        on:click=move |_| view.update(|s| s.close_lightbox())
                    >
                        "x"
                    </button>
                    <button
                        class="lightbox-nav lightbox-prev"
                        on:click=move |_| view.update(|s| s.step_image(StepDirection::Prev, count))
                    >
                        "<"
                    </button>
                    <img class="lightbox-image" src=current alt="Product image"/>
                    <button
                        class="lightbox-nav lightbox-next"
                        on:click=move |_| view.update(|s| s.step_image(StepDirection::Next, count))
                    >
                        ">"
                    </button>
                </div>
            </div>
        </Show>
    }
}
