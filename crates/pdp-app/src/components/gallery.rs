//! Image gallery: main image, prev/next controls, thumbnail strip.

use leptos::prelude::*;
use pdp_core::{StepDirection, ViewState};

#[component]
pub fn Gallery(images: StoredValue<Vec<String>>, view: RwSignal<ViewState>) -> impl IntoView {
    let count = images.with_value(|imgs| imgs.len());
    let current = move || {
        images.with_value(|imgs| {
            imgs.get(view.read().selected_image)
                .cloned()
                .unwrap_or_default()
        })
    };

    view! {
        <div class="gallery">
            <div class="gallery-main">
                <button
                    class="gallery-nav gallery-prev"
                    on:click=move |_| view.update(|s| s.step_image(StepDirection::Prev, count))
                >
                    "<"
                </button>
                <img
                    class="gallery-image"
                    src=current
                    alt="Product image"
                    on:click=move |_| view.update(|s| s.open_lightbox())
                />
                <button
                    class="gallery-nav gallery-next"
                    on:click=move |_| view.update(|s| s.step_image(StepDirection::Next, count))
                >
                    ">"
                </button>
            </div>
            <div class="gallery-thumbnails">
                {(0..count)
                    .map(|idx| {
                        let src = images.with_value(|imgs| imgs[idx].clone());
                        view! {
                            <img
                                class="thumbnail"
                                class:selected=move || view.read().selected_image == idx
                                src=src
                                alt=format!("Thumbnail {}", idx + 1)
                                on:click=move |_| view.update(|s| s.select_image(idx))
                            />
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
