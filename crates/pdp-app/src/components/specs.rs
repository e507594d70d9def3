//! Specifications table.

use leptos::prelude::*;
use pdp_core::Product;

#[component]
pub fn SpecTable(product: Product) -> impl IntoView {
    view! {
        <table class="spec-table">
            <tbody>
                {product
                    .specifications()
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <tr>
                                <th>{label}</th>
                                <td>{value}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}
