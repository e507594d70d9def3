//! Price, discount badge and savings display.

use leptos::prelude::*;
use pdp_core::{format_price, Product};

#[component]
pub fn Pricing(product: Product) -> impl IntoView {
    let current = format_price(product.price);
    let sale = product.old_price.map(|old| {
        (
            format_price(old),
            product.discount_percent().unwrap_or(0),
            format_price(product.savings().unwrap_or(0.0)),
        )
    });

    view! {
        <div class="pricing">
            <span class="price-current">{current}</span>
            {sale.map(|(original, percent, saved)| {
                view! {
                    <span class="price-original">
                        <s>{original}</s>
                    </span>
                    <span class="price-discount">{format!("{percent}% OFF")}</span>
                    <span class="price-savings">{format!("Save {saved}")}</span>
                }
            })}
        </div>
    }
}
