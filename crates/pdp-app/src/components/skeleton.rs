//! Loading skeleton for the detail view.

use leptos::prelude::*;

#[component]
pub fn ProductSkeleton() -> impl IntoView {
    view! {
        <div class="product-detail product-detail--loading">
            <div class="skeleton" style="height: 400px; border-radius: 8px;"></div>
            <div>
                <div class="skeleton" style="width: 60%; height: 2rem; margin-bottom: 1rem;"></div>
                <div class="skeleton" style="width: 30%; height: 2rem; margin-bottom: 2rem;"></div>
                <div class="skeleton" style="width: 100%; height: 4rem; margin-bottom: 1rem;"></div>
                <div class="skeleton" style="width: 150px; height: 3rem;"></div>
            </div>
        </div>
    }
}
