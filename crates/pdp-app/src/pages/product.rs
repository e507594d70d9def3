//! The product detail page.
//!
//! Owns the fetch lifecycle and the view state; everything below it is a
//! stateless projection. The effect re-runs whenever the `:id` route
//! parameter changes, restarting the lifecycle from `Loading` and letting
//! the generation ticket drop any response from a superseded request.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use pdp_client::ProductClient;
use pdp_core::{derive_images, FetchPhase, Product, ProductFetch, ProductId, ViewState};

use crate::components::{
    FeatureBadges, Gallery, Lightbox, Pricing, ProductSkeleton, QuantityStepper, SpecTable, Toast,
};
use crate::config::AppConfig;
use crate::share;

#[component]
pub fn ProductPage() -> impl IntoView {
    let params = use_params_map();
    let config = use_context::<AppConfig>().unwrap_or_default();
    let client = ProductClient::new(config.api_base);

    let fetch = RwSignal::new(ProductFetch::new());
    let view_state = RwSignal::new(ViewState::new());
    let toast = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        let id = ProductId::new(params.get().get("id").unwrap_or_default());
        let ticket = fetch.write().begin();
        let client = client.clone();
        spawn_local(async move {
            let result = client.fetch_product(&id).await;
            if result.is_err() {
                leptos::logging::warn!("product fetch failed: {id}");
            }
            let applied = fetch
                .try_update(|f| f.resolve(ticket, result))
                .unwrap_or(false);
            if applied {
                let _ = view_state.try_set(ViewState::new());
            }
        });
    });

    view! {
        <div class="product-page">
            {move || match fetch.with(|f| f.phase().clone()) {
                FetchPhase::Loading => view! { <ProductSkeleton/> }.into_any(),
                FetchPhase::NotFound => view! { <ProductNotFound/> }.into_any(),
                FetchPhase::Loaded(product) => view! {
                    <ProductDetail product view=view_state toast/>
                }
                .into_any(),
            }}
            <Toast message=toast/>
        </div>
    }
}

/// The full detail view for a loaded product.
#[component]
fn ProductDetail(
    product: Product,
    view: RwSignal<ViewState>,
    toast: RwSignal<Option<String>>,
) -> impl IntoView {
    let images = StoredValue::new(derive_images(&product));
    let share_product = product.clone();

    view! {
        <div class="product-detail">
            <Gallery images view/>
            <div class="product-info">
                <p class="product-brand">{product.brand().to_string()}</p>
                <h1 class="product-name">{product.name.clone()}</h1>
                <p class="product-rating">{format!("{:.1} / 5", product.rating())}</p>
                <Pricing product=product.clone()/>
                <div class="product-actions">
                    <QuantityStepper view/>
                    <button
                        class="btn btn-favorite"
                        on:click=move |_| view.update(|s| s.toggle_favorite())
                    >
                        {move || if view.read().favorite { "Saved" } else { "Save" }}
                    </button>
                    <button
                        class="btn btn-share"
                        on:click=move |_| share::share_product(&share_product, toast)
                    >
                        "Share"
                    </button>
                </div>
                <FeatureBadges/>
                <p class="product-description">{product.description().to_string()}</p>
                <SpecTable product=product.clone()/>
            </div>
            <Lightbox images view/>
        </div>
    }
}

/// Fallback when the product could not be loaded, with a recovery action.
#[component]
fn ProductNotFound() -> impl IntoView {
    view! {
        <div class="product-not-found">
            <h1>"Product not found"</h1>
            <p>"The product you are looking for is unavailable."</p>
            <button class="btn" on:click=|_| go_back()>"Go back"</button>
        </div>
    }
}

/// Delegate to the host navigation history.
fn go_back() {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.back();
        }
    }
}
