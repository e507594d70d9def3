//! Quantity stepper.

use leptos::prelude::*;
use pdp_core::{QuantityChange, ViewState};

#[component]
pub fn QuantityStepper(view: RwSignal<ViewState>) -> impl IntoView {
    view! {
        <div class="quantity-stepper">
            <button
                class="quantity-decrease"
                disabled=move || view.read().at_minimum_quantity()
                on:click=move |_| view.update(|s| s.change_quantity(QuantityChange::Decrease))
            >
                "-"
            </button>
            <span class="quantity-value">{move || view.read().quantity}</span>
            <button
                class="quantity-increase"
                on:click=move |_| view.update(|s| s.change_quantity(QuantityChange::Increase))
            >
                "+"
            </button>
        </div>
    }
}
