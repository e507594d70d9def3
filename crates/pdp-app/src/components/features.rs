//! Static feature badges.

use leptos::prelude::*;

/// Badges shown on every product, independent of the fetched record.
const FEATURES: [&str; 3] = [
    "Free shipping over $50",
    "2-year warranty",
    "30-day returns",
];

#[component]
pub fn FeatureBadges() -> impl IntoView {
    view! {
        <ul class="feature-badges">
            {FEATURES
                .iter()
                .map(|feature| view! { <li class="feature-badge">{*feature}</li> })
                .collect::<Vec<_>>()}
        </ul>
    }
}
